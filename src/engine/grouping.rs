use super::{util, DayGroup};
use crate::model::Shift;

/// Regroupe les shifts par jour calendaire de leur `start`.
///
/// Un groupe est créé à la première rencontre d'un nouveau libellé en balayant
/// l'entrée de haut en bas, et les groupes gardent cet ordre d'apparition ;
/// au sein d'un groupe les shifts gardent l'ordre d'entrée. Aucun tri
/// chronologique.
pub(super) fn group_by_day(shifts: &[Shift]) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    for shift in shifts {
        let label = util::day_label(shift.start);
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.shifts.push(shift.clone()),
            None => groups.push(DayGroup {
                label,
                shifts: vec![shift.clone()],
            }),
        }
    }
    groups
}
