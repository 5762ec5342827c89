use super::{Role, Roster, Shift, ShiftFilter, StaffFilter, Staffing};
use crate::model::{Day, Employee, EmployeeKey, TimePeriod};

impl Roster {
    pub fn working_hours(&self, day: Day) -> Option<&TimePeriod> {
        self.working_hours.get(&day)
    }

    /// Créneau exactement à cet intervalle. L'effectif minimum ne faisant
    /// pas partie de l'identité, il n'entre pas dans la recherche.
    pub fn shift(&self, period: &TimePeriod) -> Option<&Shift> {
        self.shifts.get(period)
    }

    /// Employé enregistré portant ce nom complet « Given Family »,
    /// casse ignorée.
    pub fn find_staff(&self, full_name: &str) -> Option<&Employee> {
        let wanted = full_name.to_lowercase();
        self.staff
            .values()
            .find(|employee| employee.to_string().to_lowercase() == wanted)
    }

    pub fn staff_member(&self, key: &EmployeeKey) -> Option<&Employee> {
        self.staff.get(key)
    }

    /// L'employé tient-il au moins un rôle quelque part sur la semaine ?
    pub fn is_assigned(&self, employee: &Employee) -> bool {
        self.assigned.contains(&employee.key())
    }

    /// Personnel trié par nom de famille (prénom en départage).
    pub fn list_staff(&self, filter: StaffFilter) -> Vec<&Employee> {
        self.staff
            .iter()
            .filter(|(key, _)| match filter {
                StaffFilter::All => true,
                StaffFilter::Unassigned => !self.assigned.contains(*key),
            })
            .map(|(_, employee)| employee)
            .collect()
    }

    /// Créneaux à surveiller, en ordre chronologique sur la semaine.
    pub fn list_shifts(&self, filter: ShiftFilter) -> Vec<&Shift> {
        self.shifts
            .values()
            .filter(|shift| match filter {
                ShiftFilter::NoManager => shift.manager().is_none(),
                ShiftFilter::Understaffed => shift.staffing() == Staffing::Understaffed,
                ShiftFilter::Overstaffed => shift.staffing() == Staffing::Overstaffed,
            })
            .collect()
    }

    /// Créneaux où l'employé tient exactement ce rôle, en ordre
    /// chronologique. Les rôles étant exclusifs par créneau, les deux
    /// listes d'un même employé ne se recoupent jamais.
    pub fn shifts_for(&self, employee: &Employee, role: Role) -> Vec<&Shift> {
        let key = employee.key();
        self.shifts
            .values()
            .filter(|shift| match role {
                Role::Manager => shift.manager() == Some(&key),
                Role::Worker => shift.workers().contains(&key),
            })
            .collect()
    }

    pub fn shifts_on(&self, day: Day) -> Vec<&Shift> {
        self.shifts
            .values()
            .filter(|shift| shift.period().day() == day)
            .collect()
    }
}
