use super::{Role, Roster, Shift};
use crate::error::RosterError;
use crate::model::{Employee, TimePeriod};

impl Roster {
    /// Déclare les heures d'ouverture d'un jour. Une seule plage par jour :
    /// la première déclaration gagne, les suivantes sont refusées.
    pub fn set_working_hours(&mut self, period: TimePeriod) -> Result<(), RosterError> {
        let day = period.day();
        if self.working_hours.contains_key(&day) {
            return Err(RosterError::DuplicateWorkingHours(day));
        }
        self.working_hours.insert(day, period);
        Ok(())
    }

    /// Enregistre un employé ; l'identité (prénom + nom, casse ignorée)
    /// doit être nouvelle.
    pub fn register_employee(&mut self, employee: Employee) -> Result<(), RosterError> {
        let key = employee.key();
        if self.staff.contains_key(&key) {
            return Err(RosterError::DuplicateEmployee(employee.to_string()));
        }
        self.staff.insert(key, employee);
        Ok(())
    }

    /// Ajoute un créneau au planning.
    ///
    /// Refus, dans cet ordre : intervalle déjà pris tel quel, chevauchement
    /// avec un créneau du même jour, sortie des heures d'ouverture (un jour
    /// sans heures déclarées refuse tout créneau).
    pub fn add_shift(&mut self, shift: Shift) -> Result<(), RosterError> {
        let period = shift.period();
        if self.shifts.contains_key(&period) {
            return Err(RosterError::DuplicateShift(period));
        }
        if self.shifts.keys().any(|existing| existing.overlaps(&period)) {
            return Err(RosterError::OverlappingShift(period));
        }
        let within = self
            .working_hours
            .get(&period.day())
            .map_or(false, |hours| period.is_within(hours));
        if !within {
            return Err(RosterError::OutsideWorkingHours(period));
        }
        self.shifts.insert(period, shift);
        Ok(())
    }

    /// Affecte un employé à un créneau, comme responsable ou équipier.
    ///
    /// Refus, dans cet ordre : créneau inconnu, employé non enregistré,
    /// rôle déjà tenu par lui sur ce créneau, responsable déjà en poste.
    pub fn assign_staff(
        &mut self,
        period: &TimePeriod,
        employee: &Employee,
        role: Role,
    ) -> Result<(), RosterError> {
        let key = employee.key();
        let registered = self.staff.contains_key(&key);

        let Some(shift) = self.shifts.get_mut(period) else {
            return Err(RosterError::UnknownShift(*period));
        };
        if !registered {
            return Err(RosterError::NotRegistered(employee.to_string()));
        }
        if shift.holds(&key) {
            return Err(RosterError::AlreadyAssigned {
                name: employee.to_string(),
                period: *period,
            });
        }

        match role {
            Role::Manager => {
                if shift.manager().is_some() {
                    return Err(RosterError::ManagerAlreadyAssigned(*period));
                }
                shift.set_manager(key.clone());
            }
            Role::Worker => shift.add_worker(key.clone()),
        }
        self.assigned.insert(key);
        Ok(())
    }
}
