use crate::model::Shift;
use thiserror::Error;

/// Un groupe de la vue par jour : libellé calendaire (ex. "November 3") et
/// les shifts de ce jour, dans l'ordre d'entrée.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    pub label: String,
    pub shifts: Vec<Shift>,
}

#[derive(Error, Debug)]
pub enum BookError {
    #[error("invalid time range: end must be after start")]
    InvalidTimeRange,
    #[error("duplicate shift id: {0}")]
    DuplicateId(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
