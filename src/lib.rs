#![forbid(unsafe_code)]
//! Shiftbook — moteur local de disponibilité et de réservation de shifts.
//!
//! - Vue "disponible" : exclusion des chevauchements par zone, filtre par zone.
//! - Vue groupée par jour calendaire, ordre de première apparition.
//! - Réservation/annulation par bascule, vue réservée projetée du board.
//! - Tout en UTC ; parsing RFC3339 ; affichage local en dehors de la lib.

pub mod directory;
pub mod engine;
pub mod io;
pub mod model;
pub mod storage;

pub use directory::{fetch_or_empty, JsonDirectory, ShiftDirectory};
pub use engine::{BookError, DayGroup, Engine};
pub use model::{Shift, ShiftBoard, ShiftId};
pub use storage::{JsonStorage, Storage};
