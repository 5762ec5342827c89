/// Rôle tenu sur un créneau.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Manager,
    Worker,
}

/// Verdict d'effectif d'un créneau, relatif à son minimum requis.
///
/// Seuls les équipiers comptent ; le responsable n'entre pas dans
/// l'effectif.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staffing {
    Understaffed,
    Exact,
    Overstaffed,
}

/// Filtre des listes de personnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffFilter {
    All,
    /// Aucune affectation, ni responsable ni équipier, sur aucun créneau.
    Unassigned,
}

/// Filtre des créneaux à surveiller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftFilter {
    NoManager,
    Understaffed,
    Overstaffed,
}
