mod booking;
mod classify;
mod grouping;
mod types;
mod util;

pub use types::{BookError, DayGroup};

use crate::model::{Shift, ShiftBoard, ShiftId};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Engine : encapsule le board de shifts et en dérive toutes les vues
#[derive(Debug, Default)]
pub struct Engine {
    board: ShiftBoard,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            board: ShiftBoard::default(),
        }
    }

    pub fn board(&self) -> &ShiftBoard {
        &self.board
    }
    pub fn board_mut(&mut self) -> &mut ShiftBoard {
        &mut self.board
    }

    /// Crée un shift à partir de timestamps UTC et l'ajoute au board
    pub fn create_shift(
        &mut self,
        area: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ShiftId, BookError> {
        let s = Shift::new(area, start, end)?;
        let id = s.id.clone();
        self.board.add(s)?;
        Ok(id)
    }

    /// Ingestion de shifts externes, validés un à un contre le board.
    pub fn add_shifts(&mut self, shifts: Vec<Shift>) -> Result<(), BookError> {
        for s in shifts {
            self.board.add(s)?;
        }
        Ok(())
    }

    /// Shifts réservables : le board moins les conflits de zone, filtré par
    /// zone (`None` ou `""` = toutes). Pur, sans effet de bord.
    pub fn available(&self, area: Option<&str>) -> Vec<Shift> {
        classify::available(&self.board, area)
    }

    /// Vue groupée par jour, groupes dans l'ordre de première apparition.
    pub fn group_by_day(&self, shifts: &[Shift]) -> Vec<DayGroup> {
        grouping::group_by_day(shifts)
    }

    /// Réserve ou annule le shift `id` ; `None` si id inconnu (no-op).
    pub fn toggle(&mut self, id: &ShiftId) -> Option<bool> {
        booking::toggle(&mut self.board, id)
    }

    /// Les shifts réservés du travailleur, projetés depuis le board.
    pub fn booked_shifts(&self) -> Vec<Shift> {
        booking::booked_shifts(&self.board)
    }

    /// Compte des shifts par zone sur le board COMPLET (pas la vue filtrée).
    /// Une zone sans shift est simplement absente de la map.
    pub fn count_by_area(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for s in &self.board.shifts {
            *counts.entry(s.area.clone()).or_insert(0) += 1;
        }
        counts
    }
}
