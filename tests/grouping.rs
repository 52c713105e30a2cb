#![forbid(unsafe_code)]
use chrono::{TimeZone, Utc};
use shiftbook::Engine;

#[test]
fn groups_follow_first_encounter_order() {
    let mut e = Engine::new();
    // A le 3 nov, B le 5 nov, C le 3 nov — volontairement non triés
    let a = e
        .create_shift(
            "NYC",
            Utc.with_ymd_and_hms(2023, 11, 3, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2023, 11, 3, 10, 0, 0).unwrap(),
        )
        .unwrap();
    let b = e
        .create_shift(
            "NYC",
            Utc.with_ymd_and_hms(2023, 11, 5, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2023, 11, 5, 10, 0, 0).unwrap(),
        )
        .unwrap();
    let c = e
        .create_shift(
            "NYC",
            Utc.with_ymd_and_hms(2023, 11, 3, 12, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2023, 11, 3, 14, 0, 0).unwrap(),
        )
        .unwrap();

    let available = e.available(None);
    let groups = e.group_by_day(&available);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].label, "November 3");
    assert_eq!(groups[1].label, "November 5");

    let first: Vec<_> = groups[0].shifts.iter().map(|s| s.id.clone()).collect();
    assert_eq!(first, vec![a, c]);
    assert_eq!(groups[1].shifts[0].id, b);
}

#[test]
fn day_label_uses_month_name_without_padding() {
    let mut e = Engine::new();
    e.create_shift(
        "LA",
        Utc.with_ymd_and_hms(2024, 1, 7, 23, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 1, 8, 2, 0, 0).unwrap(),
    )
    .unwrap();

    // la borne de jour vient du start, en UTC
    let groups = e.group_by_day(&e.available(None));
    assert_eq!(groups[0].label, "January 7");
}

#[test]
fn grouped_view_snapshot() {
    let mut e = Engine::new();
    e.create_shift(
        "Helsinki",
        Utc.with_ymd_and_hms(2023, 11, 3, 9, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2023, 11, 3, 12, 0, 0).unwrap(),
    )
    .unwrap();
    e.create_shift(
        "Tampere",
        Utc.with_ymd_and_hms(2023, 11, 4, 10, 30, 0).unwrap(),
        Utc.with_ymd_and_hms(2023, 11, 4, 15, 0, 0).unwrap(),
    )
    .unwrap();
    e.create_shift(
        "Helsinki",
        Utc.with_ymd_and_hms(2023, 11, 3, 14, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2023, 11, 3, 16, 0, 0).unwrap(),
    )
    .unwrap();

    let mut rendered = String::new();
    for group in e.group_by_day(&e.available(None)) {
        rendered.push_str(&group.label);
        rendered.push('\n');
        for s in &group.shifts {
            rendered.push_str(&format!(
                "  {} → {} | {}\n",
                s.start.format("%H:%M"),
                s.end.format("%H:%M"),
                s.area
            ));
        }
    }

    insta::assert_snapshot!(rendered, @r"
    November 3
      09:00 → 12:00 | Helsinki
      14:00 → 16:00 | Helsinki
    November 4
      10:30 → 15:00 | Tampere
    ");
}
