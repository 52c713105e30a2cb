use crate::model::{Shift, ShiftId};
use chrono::{DateTime, Utc};

/// Intersection d'intervalles semi-ouverts `[a_start, a_end)` / `[b_start, b_end)`.
/// Deux créneaux exactement adjacents (fin de l'un == début de l'autre) ne se
/// chevauchent pas.
pub(super) fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}

pub(super) fn find_shift_index(shifts: &[Shift], shift_id: &ShiftId) -> Option<usize> {
    shifts.iter().position(|s| &s.id == shift_id)
}

/// Libellé calendaire pour le groupage : nom du mois + jour, en UTC.
/// Pas d'année : un même jour de deux années différentes partage son libellé.
pub(super) fn day_label(at: DateTime<Utc>) -> String {
    at.format("%B %-d").to_string()
}
