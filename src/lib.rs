#![forbid(unsafe_code)]
//! Planning — bibliothèque de planning hebdomadaire d'une boutique (sans BD).
//!
//! - Heures d'ouverture par jour, créneaux avec effectif minimum.
//! - Affectation du personnel (responsable ou équipier) sous règles :
//!   pas de chevauchement, pas de créneau hors heures, pas de double rôle.
//! - Requêtes d'affichage : planning du jour, créneaux à surveiller,
//!   affectations d'un employé, semaine complète.
//! - Tout en mémoire, un planning à la fois ; parsing strict (« HH:MM »,
//!   jours en toutes lettres) ; l'interactif vit en dehors de la lib.

pub mod error;
pub mod model;
pub mod planner;
pub mod report;
pub mod roster;

pub use error::{ErrorKind, RosterError};
pub use model::{Day, Employee, EmployeeKey, Time, TimePeriod};
pub use planner::Planner;
pub use report::{
    full_week, overstaffed_shifts, registered_staff, roster_for_day, shifts_for_worker,
    shifts_managed_by, shifts_without_manager, unassigned_staff, understaffed_shifts,
};
pub use roster::{Role, Roster, Shift, ShiftFilter, StaffFilter, Staffing};
