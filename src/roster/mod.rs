mod mutate;
mod queries;
mod shift;
mod types;

pub use shift::Shift;
pub use types::{Role, ShiftFilter, StaffFilter, Staffing};

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Day, Employee, EmployeeKey, TimePeriod};

/// Planning d'une boutique : heures d'ouverture, créneaux, personnel.
///
/// Toute mutation valide avant d'écrire ; un appel refusé laisse l'état
/// strictement inchangé. Les collections ordonnées portent les ordres de
/// parcours attendus : créneaux en ordre chronologique, personnel trié par
/// nom de famille.
#[derive(Debug, Clone)]
pub struct Roster {
    shop_name: String,
    working_hours: BTreeMap<Day, TimePeriod>,
    shifts: BTreeMap<TimePeriod, Shift>,
    staff: BTreeMap<EmployeeKey, Employee>,
    assigned: BTreeSet<EmployeeKey>,
}

impl Roster {
    pub fn new<S: Into<String>>(shop_name: S) -> Self {
        Self {
            shop_name: shop_name.into(),
            working_hours: BTreeMap::new(),
            shifts: BTreeMap::new(),
            staff: BTreeMap::new(),
            assigned: BTreeSet::new(),
        }
    }

    pub fn shop_name(&self) -> &str {
        &self.shop_name
    }
}
