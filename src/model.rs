use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use strum::{Display, EnumIter, EnumString};

use crate::error::RosterError;

/// Jour de la semaine, borné aux sept noms anglais en toutes lettres.
///
/// L'ordre dérivé (lundi en premier) est l'ordre canonique d'affichage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// Parse strict : seul le nom exact (« Monday », « Tuesday », …) est admis.
    pub fn parse(text: &str) -> Result<Self, RosterError> {
        Self::from_str(text).map_err(|_| RosterError::InvalidDay(text.to_string()))
    }
}

/// Heure de la journée, à la minute près.
///
/// La forme textuelle est strictement « HH:MM » : deux chiffres, deux-points,
/// deux chiffres, sans blanc autour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(NaiveTime);

impl Time {
    /// Parse la forme stricte. Une forme correcte mais hors cadran
    /// (« 24:00 », « 09:60 ») est signalée séparément.
    pub fn parse(text: &str) -> Result<Self, RosterError> {
        let bytes = text.as_bytes();
        let shaped = bytes.len() == 5
            && bytes[0].is_ascii_digit()
            && bytes[1].is_ascii_digit()
            && bytes[2] == b':'
            && bytes[3].is_ascii_digit()
            && bytes[4].is_ascii_digit();
        if !shaped {
            return Err(RosterError::InvalidTimeFormat(text.to_string()));
        }
        let hour = u32::from(bytes[0] - b'0') * 10 + u32::from(bytes[1] - b'0');
        let minute = u32::from(bytes[3] - b'0') * 10 + u32::from(bytes[4] - b'0');
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| RosterError::InvalidTime(text.to_string()))
    }

    /// Strictement avant `other`.
    pub fn is_before(self, other: Time) -> bool {
        self.0 < other.0
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// Intervalle horaire d'un jour donné, `start < end` strictement.
///
/// L'ordre dérivé (jour, début, fin) est l'ordre chronologique canonique
/// des créneaux sur la semaine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimePeriod {
    day: Day,
    start: Time,
    end: Time,
}

impl TimePeriod {
    /// Construit l'intervalle en refusant `end <= start`.
    pub fn new(day: Day, start: Time, end: Time) -> Result<Self, RosterError> {
        if !start.is_before(end) {
            return Err(RosterError::InvalidRange { start, end });
        }
        Ok(Self { day, start, end })
    }

    /// Construit depuis les formes textuelles, jour d'abord puis heures.
    pub fn parse(day: &str, start: &str, end: &str) -> Result<Self, RosterError> {
        let day = Day::parse(day)?;
        let start = Time::parse(start)?;
        let end = Time::parse(end)?;
        Self::new(day, start, end)
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn start(&self) -> Time {
        self.start
    }

    pub fn end(&self) -> Time {
        self.end
    }

    /// Chevauchement au sens ouvert : deux intervalles qui ne font que se
    /// toucher (fin de l'un = début de l'autre) ne se chevauchent pas.
    /// Toujours faux entre jours différents.
    pub fn overlaps(&self, other: &TimePeriod) -> bool {
        self.day == other.day && self.start.is_before(other.end) && other.start.is_before(self.end)
    }

    /// Inclusion au sens fermé dans `other` : bornes égales admises.
    /// Toujours faux entre jours différents.
    pub fn is_within(&self, other: &TimePeriod) -> bool {
        self.day == other.day && other.start <= self.start && self.end <= other.end
    }

    /// Forme heures seules, « 09:00-17:00 ».
    pub fn hours(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

impl fmt::Display for TimePeriod {
    /// « Monday[09:00-12:00] »
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}-{}]", self.day, self.start, self.end)
    }
}

/// Clé d'identité d'un employé : nom de famille et prénom en minuscules.
///
/// C'est à la fois la clé d'unicité (la casse ne distingue pas deux
/// personnes) et la clé de tri « nom de famille d'abord » des listes.
/// L'ordre dérivé compare les deux champs séparément : un nom de famille
/// préfixe d'un autre (« Smith », « Smithson ») passe en premier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmployeeKey {
    family: String,
    given: String,
}

impl fmt::Display for EmployeeKey {
    /// Forme canonique « famille|prénom ».
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.family, self.given)
    }
}

/// Employé de la boutique. L'identité (prénom + nom) ne change jamais
/// après l'enregistrement ; la casse saisie est conservée pour l'affichage.
#[derive(Debug, Clone)]
pub struct Employee {
    given_name: String,
    family_name: String,
}

impl Employee {
    pub fn new<G: Into<String>, F: Into<String>>(given_name: G, family_name: F) -> Self {
        Self {
            given_name: given_name.into(),
            family_name: family_name.into(),
        }
    }

    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// « Family, Given », la forme des lignes d'en-tête.
    pub fn sort_name(&self) -> String {
        format!("{}, {}", self.family_name, self.given_name)
    }

    /// Clé normalisée, insensible à la casse.
    pub fn key(&self) -> EmployeeKey {
        EmployeeKey {
            family: self.family_name.to_lowercase(),
            given: self.given_name.to_lowercase(),
        }
    }
}

impl PartialEq for Employee {
    /// Égalité d'identité : même clé normalisée.
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Employee {}

impl fmt::Display for Employee {
    /// « Given Family », la forme d'affichage courante.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.given_name, self.family_name)
    }
}
