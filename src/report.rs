//! Rendu texte du planning : des listes de lignes prêtes à afficher.
//!
//! Fonctions pures sur un [`Roster`] emprunté. Une liste vide est une
//! réponse valable (« rien à signaler »), jamais une erreur.

use strum::IntoEnumIterator;

use crate::model::{Day, Employee};
use crate::roster::{Role, Roster, Shift, ShiftFilter, StaffFilter};

/// Personnel enregistré, « Given Family », trié par nom de famille.
pub fn registered_staff(roster: &Roster) -> Vec<String> {
    staff_lines(roster, StaffFilter::All)
}

/// Personnel sans aucune affectation, même forme et même tri.
pub fn unassigned_staff(roster: &Roster) -> Vec<String> {
    staff_lines(roster, StaffFilter::Unassigned)
}

/// Créneaux sans responsable, un intervalle par ligne, en ordre
/// chronologique.
pub fn shifts_without_manager(roster: &Roster) -> Vec<String> {
    shift_lines(roster, ShiftFilter::NoManager)
}

/// Créneaux en sous-effectif.
pub fn understaffed_shifts(roster: &Roster) -> Vec<String> {
    shift_lines(roster, ShiftFilter::Understaffed)
}

/// Créneaux en sur-effectif.
pub fn overstaffed_shifts(roster: &Roster) -> Vec<String> {
    shift_lines(roster, ShiftFilter::Overstaffed)
}

/// Planning du jour : nom de la boutique, en-tête du jour, une ligne par
/// créneau.
///
/// Vide si le jour n'a pas d'heures d'ouverture, vide aussi s'il n'a
/// aucun créneau ; les deux chemins se confondent volontairement.
pub fn roster_for_day(roster: &Roster, day: Day) -> Vec<String> {
    let Some(hours) = roster.working_hours(day) else {
        return Vec::new();
    };
    let shifts = roster.shifts_on(day);
    if shifts.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(shifts.len() + 2);
    out.push(roster.shop_name().to_string());
    out.push(format!("{} {}", day, hours.hours()));
    for shift in shifts {
        out.push(shift_line(roster, shift));
    }
    out
}

/// Créneaux où l'employé est équipier : en-tête « Family, Given » puis un
/// intervalle par ligne. Vide s'il n'en tient aucun.
pub fn shifts_for_worker(roster: &Roster, employee: &Employee) -> Vec<String> {
    employee_shift_lines(roster, employee, Role::Worker)
}

/// Créneaux dont l'employé est responsable, même forme.
pub fn shifts_managed_by(roster: &Roster, employee: &Employee) -> Vec<String> {
    employee_shift_lines(roster, employee, Role::Manager)
}

/// Semaine complète : concaténation des plannings du jour, lundi en tête.
pub fn full_week(roster: &Roster) -> Vec<String> {
    Day::iter()
        .flat_map(|day| roster_for_day(roster, day))
        .collect()
}

fn staff_lines(roster: &Roster, filter: StaffFilter) -> Vec<String> {
    roster
        .list_staff(filter)
        .iter()
        .map(|employee| employee.to_string())
        .collect()
}

fn shift_lines(roster: &Roster, filter: ShiftFilter) -> Vec<String> {
    roster
        .list_shifts(filter)
        .iter()
        .map(|shift| shift.period().to_string())
        .collect()
}

fn employee_shift_lines(roster: &Roster, employee: &Employee, role: Role) -> Vec<String> {
    let shifts = roster.shifts_for(employee, role);
    if shifts.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(shifts.len() + 1);
    out.push(employee.sort_name());
    for shift in shifts {
        out.push(shift.period().to_string());
    }
    out
}

/// Une ligne de créneau : intervalle, responsable (« Family, Given » ou
/// marqueur d'absence), équipiers (« Given Family » triés par famille, ou
/// marqueur d'absence).
fn shift_line(roster: &Roster, shift: &Shift) -> String {
    let manager = shift
        .manager()
        .and_then(|key| roster.staff_member(key))
        .map(|employee| employee.sort_name())
        .unwrap_or_else(|| "(no manager)".to_string());

    let workers = if shift.has_workers() {
        let names: Vec<String> = shift
            .workers()
            .iter()
            .filter_map(|key| roster.staff_member(key))
            .map(|employee| employee.to_string())
            .collect();
        format!("[{}]", names.join(", "))
    } else {
        "(no workers)".to_string()
    };

    format!("{} Manager: {} Workers: {}", shift.period(), manager, workers)
}
