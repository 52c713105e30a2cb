use super::util;
use crate::model::{Shift, ShiftBoard};

/// Vue "disponible" : le board moins les exclusions par chevauchement, puis
/// filtré par zone. L'ordre d'entrée est préservé, aucun tri.
///
/// Un shift est exclu dès qu'un autre shift de la même zone l'intersecte dans
/// le temps, en balayant le board ENTIER et non le sous-ensemble filtré. Le
/// flag `booked` est ignoré : un candidat adjacent à un shift réservé est
/// aussi indisponible qu'à côté d'un shift libre.
pub(super) fn available(board: &ShiftBoard, area: Option<&str>) -> Vec<Shift> {
    board
        .shifts
        .iter()
        .filter(|s| !has_conflict(board, s))
        .filter(|s| match area {
            Some(a) if !a.is_empty() => s.area == a,
            _ => true,
        })
        .cloned()
        .collect()
}

fn has_conflict(board: &ShiftBoard, shift: &Shift) -> bool {
    board.shifts.iter().any(|other| {
        other.id != shift.id
            && other.area == shift.area
            && util::overlaps(shift.start, shift.end, other.start, other.end)
    })
}
