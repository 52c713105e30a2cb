use super::util;
use crate::model::{Shift, ShiftBoard, ShiftId};

/// Inverse le flag `booked` du shift `id`.
///
/// Retourne le nouvel état, ou `None` si l'id est absent — le board reste
/// alors intact. Une UI peut déclencher deux fois un cancel sur un shift déjà
/// retiré : l'absence est tolérée, jamais levée en erreur.
pub(super) fn toggle(board: &mut ShiftBoard, id: &ShiftId) -> Option<bool> {
    let pos = util::find_shift_index(&board.shifts, id)?;
    let shift = &mut board.shifts[pos];
    shift.booked = !shift.booked;
    Some(shift.booked)
}

/// Sous-ensemble réservé, dans l'ordre du board. Projection recalculée à
/// chaque appel : jamais une collection parallèle mutée à part, donc aucune
/// dérive possible vis-à-vis de la source de vérité.
pub(super) fn booked_shifts(board: &ShiftBoard) -> Vec<Shift> {
    board.shifts.iter().filter(|s| s.booked).cloned().collect()
}
