// tests/finder_and_calendar.rs
use campus_portal::{
    application::queries::finder::FindFreeRoomsQuery,
    domain::{
        audit::{AuditAction, AuditEntityType},
        schedule::{DaySelector, SlotTime},
    },
};
use chrono::NaiveDate;
use serde_json::json;

mod support;
use support::*;

#[tokio::test]
async fn no_room_has_both_slots_so_each_is_a_partial_match() {
    let portal = PortalBuilder::default()
        .rooms(json!({
            "A": { "Monday": { "9AM-10AM": false, "10AM-11AM": true } },
            "B": { "Monday": { "9AM-10AM": true, "10AM-11AM": false } }
        }))
        .build();

    let result = portal
        .services
        .finder
        .find_free(
            &student(STUDENT),
            FindFreeRoomsQuery {
                day: DaySelector::Label("Monday".into()),
                slots: vec!["9AM-10AM".into(), "10AM-11AM".into()],
            },
        )
        .await
        .unwrap();

    assert!(result.matches.is_empty());
    assert_eq!(result.partial.len(), 2);
    let a = result.partial.iter().find(|p| p.room == "A").unwrap();
    assert_eq!(a.available, vec!["9AM-10AM"]);
    assert_eq!(a.unavailable, vec!["10AM-11AM"]);
    let b = result.partial.iter().find(|p| p.room == "B").unwrap();
    assert_eq!(b.available, vec!["10AM-11AM"]);

    let events = portal.repos.audit.list().await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].action, AuditAction::Search);
    assert_eq!(events[0].entity_type, AuditEntityType::FreeRooms);
    assert_eq!(events[0].actor, STUDENT);
}

#[tokio::test]
async fn full_matches_list_every_requested_slot() {
    let portal = make_test_portal();
    let result = portal
        .services
        .finder
        .find_free(
            &teacher(TEACHER_A),
            FindFreeRoomsQuery {
                day: DaySelector::Label("Monday".into()),
                slots: vec!["10AM-11AM".into()],
            },
        )
        .await
        .unwrap();
    let rooms: Vec<&str> = result.matches.iter().map(|m| m.room.as_str()).collect();
    assert_eq!(rooms, vec!["Room1", "Room2"]);
}

#[tokio::test]
async fn empty_slot_selection_is_rejected() {
    let portal = make_test_portal();
    let err = portal
        .services
        .finder
        .find_free(
            &teacher(TEACHER_A),
            FindFreeRoomsQuery {
                day: DaySelector::Label("Monday".into()),
                slots: vec![],
            },
        )
        .await
        .unwrap_err();
    assert!(err.to_string().contains("select at least one slot"));
}

#[tokio::test]
async fn month_starting_on_saturday_skips_only_the_third() {
    let portal = make_test_portal();
    let month = portal.services.calendar.month_saturdays(2025, 3).unwrap();

    let days: Vec<(u32, bool)> = month
        .saturdays
        .iter()
        .map(|s| (chrono::Datelike::day(&s.date), s.is_working))
        .collect();
    assert_eq!(
        days,
        vec![(1, true), (8, true), (15, false), (22, true), (29, true)]
    );
    assert!(portal.services.calendar.month_saturdays(2025, 13).is_err());
}

#[test]
fn slot_labels_parse_to_24_hour_ranges() {
    let cases = [("9AM-10AM", 9, 10), ("12PM-1PM", 12, 13), ("12AM-1AM", 0, 1)];
    for (label, start, end) in cases {
        let t = SlotTime::parse(label).unwrap();
        assert_eq!((t.start_hour, t.end_hour), (start, end), "{label}");
    }
    assert!(SlotTime::parse("Lunch").is_none());
}

#[tokio::test]
async fn faculty_day_splits_free_and_busy() {
    let portal = make_test_portal();
    let day = portal
        .services
        .faculty_queries
        .faculty_day(
            &student(STUDENT),
            "Dr. Alice Smith",
            DaySelector::Date(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()),
        )
        .await
        .unwrap();
    assert_eq!(day.day, "Monday");
    assert_eq!(day.busy, vec!["9AM-10AM"]);
    assert_eq!(day.free, vec!["10AM-11AM"]);
}
