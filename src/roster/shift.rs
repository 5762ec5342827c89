use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::Staffing;
use crate::error::RosterError;
use crate::model::{EmployeeKey, TimePeriod};

/// Créneau de travail : un intervalle, un responsable éventuel, une équipe.
///
/// L'identité d'un créneau est son intervalle seul ; l'effectif minimum
/// n'en fait pas partie. Les rôles sont exclusifs : le responsable ne
/// figure jamais dans l'équipe du même créneau.
#[derive(Debug, Clone)]
pub struct Shift {
    period: TimePeriod,
    min_workers: u32,
    manager: Option<EmployeeKey>,
    workers: BTreeSet<EmployeeKey>,
}

impl Shift {
    pub fn new(period: TimePeriod, min_workers: u32) -> Self {
        Self {
            period,
            min_workers,
            manager: None,
            workers: BTreeSet::new(),
        }
    }

    /// Construit depuis les formes textuelles, effectif minimum compris.
    /// Un effectif négatif ou non numérique est refusé d'un bloc.
    pub fn parse(
        day: &str,
        start: &str,
        end: &str,
        min_workers: &str,
    ) -> Result<Self, RosterError> {
        let period = TimePeriod::parse(day, start, end)?;
        let min = min_workers
            .parse::<u32>()
            .map_err(|_| RosterError::InvalidStaffingCount(min_workers.to_string()))?;
        Ok(Self::new(period, min))
    }

    pub fn period(&self) -> TimePeriod {
        self.period
    }

    pub fn min_workers(&self) -> u32 {
        self.min_workers
    }

    pub fn manager(&self) -> Option<&EmployeeKey> {
        self.manager.as_ref()
    }

    pub fn workers(&self) -> &BTreeSet<EmployeeKey> {
        &self.workers
    }

    /// L'employé tient-il un rôle quelconque sur ce créneau ?
    pub fn holds(&self, key: &EmployeeKey) -> bool {
        self.manager.as_ref() == Some(key) || self.workers.contains(key)
    }

    pub fn has_workers(&self) -> bool {
        !self.workers.is_empty()
    }

    /// Verdict d'effectif : signe de (équipe − minimum).
    pub fn staffing(&self) -> Staffing {
        match self.workers.len().cmp(&(self.min_workers as usize)) {
            Ordering::Less => Staffing::Understaffed,
            Ordering::Equal => Staffing::Exact,
            Ordering::Greater => Staffing::Overstaffed,
        }
    }

    /// Pose le responsable ; l'agrégat garantit qu'il n'y en a pas déjà un.
    pub(super) fn set_manager(&mut self, key: EmployeeKey) {
        self.manager = Some(key);
    }

    /// Ajoute un équipier ; l'agrégat garantit l'absence de double rôle.
    pub(super) fn add_worker(&mut self, key: EmployeeKey) {
        self.workers.insert(key);
    }
}
