use crate::model::{Day, Time, TimePeriod};
use thiserror::Error;

/// Famille d'une erreur, indépendante du détail porté par la variante.
///
/// Permet à l'appelant de trier les refus sans inspecter chaque cas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Entrée textuelle mal formée (jour, heure, nom, effectif).
    InvalidInput,
    /// L'entité existe déjà (heures d'ouverture, employé, créneau).
    DuplicateEntity,
    /// La mutation violerait une règle du planning.
    ConstraintViolation,
    /// Créneau ou employé référencé introuvable.
    NotFound,
    /// Opération tentée avant la création d'un planning.
    PreconditionFailed,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("invalid day name: {0}")]
    InvalidDay(String),
    #[error("invalid time format: {0} (expected HH:MM)")]
    InvalidTimeFormat(String),
    #[error("time out of range: {0}")]
    InvalidTime(String),
    #[error("invalid period: start {start} is not before end {end}")]
    InvalidRange { start: Time, end: Time },
    #[error("given and family names must not be empty")]
    InvalidName,
    #[error("shop name must not be empty")]
    InvalidShopName,
    #[error("invalid minimum worker count: {0}")]
    InvalidStaffingCount(String),
    #[error("working hours already set for {0}")]
    DuplicateWorkingHours(Day),
    #[error("\"{0}\" is already registered")]
    DuplicateEmployee(String),
    #[error("shift {0} already exists")]
    DuplicateShift(TimePeriod),
    #[error("shift {0} overlaps an existing shift")]
    OverlappingShift(TimePeriod),
    #[error("shift {0} is not within the working hours")]
    OutsideWorkingHours(TimePeriod),
    #[error("\"{0}\" is not registered")]
    NotRegistered(String),
    #[error("shift {0} does not exist")]
    UnknownShift(TimePeriod),
    #[error("{name} is already assigned to shift {period}")]
    AlreadyAssigned { name: String, period: TimePeriod },
    #[error("a manager is already assigned to shift {0}")]
    ManagerAlreadyAssigned(TimePeriod),
    #[error("no roster has been created")]
    NoRoster,
}

impl RosterError {
    /// Famille de l'erreur, pour un tri grossier côté appelant.
    pub fn kind(&self) -> ErrorKind {
        use RosterError::*;
        match self {
            InvalidDay(_) | InvalidTimeFormat(_) | InvalidTime(_) | InvalidRange { .. }
            | InvalidName | InvalidShopName | InvalidStaffingCount(_) => ErrorKind::InvalidInput,
            DuplicateWorkingHours(_) | DuplicateEmployee(_) | DuplicateShift(_) => {
                ErrorKind::DuplicateEntity
            }
            OverlappingShift(_) | OutsideWorkingHours(_) | AlreadyAssigned { .. }
            | ManagerAlreadyAssigned(_) => ErrorKind::ConstraintViolation,
            NotRegistered(_) | UnknownShift(_) => ErrorKind::NotFound,
            NoRoster => ErrorKind::PreconditionFailed,
        }
    }
}
