use crate::error::RosterError;
use crate::model::{Day, Employee, TimePeriod};
use crate::report;
use crate::roster::{Role, Roster, Shift};

/// Façade textuelle du planning : encapsule le [`Roster`] courant et
/// traduit des arguments bruts (chaînes saisies) en appels typés.
///
/// Elle détient au plus un planning à la fois ; en recréer un remplace
/// l'ancien en bloc. Toute opération avant la première création échoue
/// avec [`RosterError::NoRoster`].
#[derive(Debug, Default)]
pub struct Planner {
    roster: Option<Roster>,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roster(&self) -> Option<&Roster> {
        self.roster.as_ref()
    }

    /// Crée un planning pour la boutique, en remplaçant l'éventuel ancien.
    pub fn new_roster(&mut self, shop_name: &str) -> Result<(), RosterError> {
        if shop_name.trim().is_empty() {
            return Err(RosterError::InvalidShopName);
        }
        self.roster = Some(Roster::new(shop_name));
        Ok(())
    }

    pub fn set_working_hours(
        &mut self,
        day: &str,
        start: &str,
        end: &str,
    ) -> Result<(), RosterError> {
        let roster = self.current_mut()?;
        let period = TimePeriod::parse(day, start, end)?;
        roster.set_working_hours(period)
    }

    pub fn add_shift(
        &mut self,
        day: &str,
        start: &str,
        end: &str,
        min_workers: &str,
    ) -> Result<(), RosterError> {
        let roster = self.current_mut()?;
        let shift = Shift::parse(day, start, end, min_workers)?;
        roster.add_shift(shift)
    }

    /// Enregistre un employé. Les deux noms doivent être non vides ;
    /// le contrôle se fait ici, avant toute construction.
    pub fn register_staff(
        &mut self,
        given_name: &str,
        family_name: &str,
    ) -> Result<(), RosterError> {
        let roster = self.current_mut()?;
        if given_name.trim().is_empty() || family_name.trim().is_empty() {
            return Err(RosterError::InvalidName);
        }
        roster.register_employee(Employee::new(given_name, family_name))
    }

    /// Affecte un employé au créneau donné, responsable si `as_manager`.
    pub fn assign_staff(
        &mut self,
        day: &str,
        start: &str,
        end: &str,
        given_name: &str,
        family_name: &str,
        as_manager: bool,
    ) -> Result<(), RosterError> {
        let roster = self.current_mut()?;
        let period = TimePeriod::parse(day, start, end)?;
        let employee = Employee::new(given_name, family_name);
        let role = if as_manager { Role::Manager } else { Role::Worker };
        roster.assign_staff(&period, &employee, role)
    }

    /// Personnel enregistré ; une liste vide est une réponse valable.
    pub fn registered_staff(&self) -> Result<Vec<String>, RosterError> {
        Ok(report::registered_staff(self.current()?))
    }

    pub fn unassigned_staff(&self) -> Result<Vec<String>, RosterError> {
        Ok(report::unassigned_staff(self.current()?))
    }

    pub fn shifts_without_manager(&self) -> Result<Vec<String>, RosterError> {
        Ok(report::shifts_without_manager(self.current()?))
    }

    pub fn understaffed_shifts(&self) -> Result<Vec<String>, RosterError> {
        Ok(report::understaffed_shifts(self.current()?))
    }

    pub fn overstaffed_shifts(&self) -> Result<Vec<String>, RosterError> {
        Ok(report::overstaffed_shifts(self.current()?))
    }

    /// Planning du jour ; vide sans heures d'ouverture comme sans créneaux.
    pub fn roster_for_day(&self, day: &str) -> Result<Vec<String>, RosterError> {
        let roster = self.current()?;
        let day = Day::parse(day)?;
        Ok(report::roster_for_day(roster, day))
    }

    /// Créneaux où l'employé est équipier ; erreur si le nom complet ne
    /// correspond à personne d'enregistré.
    pub fn shifts_for_worker(&self, full_name: &str) -> Result<Vec<String>, RosterError> {
        let roster = self.current()?;
        let employee = roster
            .find_staff(full_name)
            .ok_or_else(|| RosterError::NotRegistered(full_name.to_string()))?;
        Ok(report::shifts_for_worker(roster, employee))
    }

    pub fn shifts_managed_by(&self, full_name: &str) -> Result<Vec<String>, RosterError> {
        let roster = self.current()?;
        let employee = roster
            .find_staff(full_name)
            .ok_or_else(|| RosterError::NotRegistered(full_name.to_string()))?;
        Ok(report::shifts_managed_by(roster, employee))
    }

    pub fn full_week(&self) -> Result<Vec<String>, RosterError> {
        Ok(report::full_week(self.current()?))
    }

    fn current(&self) -> Result<&Roster, RosterError> {
        self.roster.as_ref().ok_or(RosterError::NoRoster)
    }

    fn current_mut(&mut self) -> Result<&mut Roster, RosterError> {
        self.roster.as_mut().ok_or(RosterError::NoRoster)
    }
}
