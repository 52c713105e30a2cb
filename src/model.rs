use crate::engine::BookError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifiant fort pour Shift
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftId(String);

impl ShiftId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Créneau réservable dans une zone de service (intervalle UTC `[start, end)`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub id: ShiftId,
    pub area: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub booked: bool,
}

impl Shift {
    /// Crée un shift non réservé en validant que `end > start`.
    pub fn new<A: Into<String>>(
        area: A,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Self, BookError> {
        if end <= start {
            return Err(BookError::InvalidTimeRange);
        }
        Ok(Self {
            id: ShiftId::random(),
            area: area.into(),
            start,
            end,
            booked: false,
        })
    }

    /// Durée en minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Collection complète des shifts : ordonnée, unique par id.
///
/// Source de vérité dont dérivent les vues disponible, groupée et réservée ;
/// le flag `booked` n'est modifié que via `Engine::toggle`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ShiftBoard {
    pub shifts: Vec<Shift>,
}

impl ShiftBoard {
    /// Ajoute un shift en refusant un id dupliqué.
    pub fn add(&mut self, shift: Shift) -> Result<(), BookError> {
        if self.shifts.iter().any(|s| s.id == shift.id) {
            return Err(BookError::DuplicateId(shift.id.as_str().to_string()));
        }
        self.shifts.push(shift);
        Ok(())
    }

    pub fn find_shift<'a>(&'a self, id: &ShiftId) -> Option<&'a Shift> {
        self.shifts.iter().find(|s| &s.id == id)
    }
    pub fn find_shift_mut(&mut self, id: &ShiftId) -> Option<&mut Shift> {
        self.shifts.iter_mut().find(|s| &s.id == id)
    }
}
