// tests/booking_engine.rs
use campus_portal::{
    application::{
        commands::{
            bookings::{BookSlotCommand, CancelBookingCommand, RoomDayQuery},
            waitlist::JoinWaitlistCommand,
        },
        error::ApplicationError,
    },
    domain::{
        audit::{AuditAction, AuditEntityType, SYSTEM_ACTOR},
        booking::BookingDetails,
        errors::DomainError,
        schedule::DaySelector,
    },
};
use chrono::NaiveDate;
use serde_json::json;
use std::sync::Arc;

mod support;
use support::*;

fn monday() -> DaySelector {
    DaySelector::Label("Monday".into())
}

fn book_cmd(room: &str, slot: &str, title: &str) -> BookSlotCommand {
    BookSlotCommand {
        room: room.into(),
        day: monday(),
        slot: slot.into(),
        details: BookingDetails {
            title: title.into(),
            ..BookingDetails::default()
        },
    }
}

fn cancel_cmd(room: &str, slot: &str, reason: Option<&str>) -> CancelBookingCommand {
    CancelBookingCommand {
        room: room.into(),
        day: monday(),
        slot: slot.into(),
        reason: reason.map(str::to_string),
    }
}

#[tokio::test]
async fn booking_occupies_slot_and_second_booking_is_stale() {
    let portal = make_test_portal();
    let bookings = &portal.services.bookings;

    bookings
        .book(&teacher(TEACHER_A), book_cmd("Room1", "10AM-11AM", "Seminar"))
        .await
        .unwrap();
    assert!(!portal.is_free("Room1", "Monday", "10AM-11AM").await);

    let err = bookings
        .book(&teacher(TEACHER_B), book_cmd("Room1", "10AM-11AM", "Lab"))
        .await
        .unwrap_err();
    assert!(err.is_stale(), "expected stale state, got {err:?}");
}

#[tokio::test]
async fn cancel_frees_the_slot() {
    let portal = make_test_portal();
    let bookings = &portal.services.bookings;
    let alice = teacher(TEACHER_A);

    bookings
        .book(&alice, book_cmd("Room2", "10AM-11AM", "Office hours"))
        .await
        .unwrap();
    bookings
        .cancel(&alice, cancel_cmd("Room2", "10AM-11AM", None))
        .await
        .unwrap();
    assert!(portal.is_free("Room2", "Monday", "10AM-11AM").await);
}

#[tokio::test]
async fn cancelling_a_free_slot_is_rejected() {
    let portal = make_test_portal();
    let err = portal
        .services
        .bookings
        .cancel(&teacher(TEACHER_A), cancel_cmd("Room1", "9AM-10AM", None))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn unknown_slot_is_not_found_and_students_cannot_book() {
    let portal = make_test_portal();
    let bookings = &portal.services.bookings;

    let err = bookings
        .book(&teacher(TEACHER_A), book_cmd("Room9", "9AM-10AM", "x"))
        .await
        .unwrap_err();
    assert!(
        matches!(
            err,
            ApplicationError::NotFound(_)
                | ApplicationError::Domain(DomainError::NotFound(_))
        ),
        "got {err:?}"
    );

    let err = bookings
        .book(&student(STUDENT), book_cmd("Room1", "9AM-10AM", "x"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
    assert!(portal.is_free("Room1", "Monday", "9AM-10AM").await);
}

#[tokio::test]
async fn faculty_conflict_warns_but_books() {
    let portal = make_test_portal();
    let outcome = portal
        .services
        .bookings
        .book(&teacher(TEACHER_A), book_cmd("Room1", "9AM-10AM", ""))
        .await
        .unwrap();

    assert_eq!(outcome.title, "Untitled Booking");
    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].contains("Dr. Alice Smith"));
    assert!(!portal.is_free("Room1", "Monday", "9AM-10AM").await);
}

#[tokio::test]
async fn auto_expire_releases_elapsed_slots_once() {
    let portal = make_test_portal();
    let bookings = &portal.services.bookings;
    bookings
        .book(&teacher(TEACHER_A), book_cmd("Room1", "9AM-10AM", "Early class"))
        .await
        .unwrap();

    let now = NaiveDate::from_ymd_opt(2025, 3, 3)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap();
    let mut released = bookings.auto_expire(now).await.unwrap();
    released.sort_by(|a, b| a.room.cmp(&b.room));
    let ids: Vec<String> = released.iter().map(|k| k.entity_id()).collect();
    assert_eq!(ids, vec!["Room1|Monday|9AM-10AM", "Room2|Monday|9AM-10AM"]);
    assert!(portal.is_free("Room1", "Monday", "9AM-10AM").await);
    // Not yet ended.
    assert!(!portal.is_free("Room1", "Monday", "11AM-12PM").await);

    let again = bookings.auto_expire(now).await.unwrap();
    assert!(again.is_empty());

    let events = portal.repos.audit.list().await.unwrap();
    let expiries: Vec<_> = events
        .iter()
        .filter(|e| e.action == AuditAction::AutoExpire)
        .collect();
    assert_eq!(expiries.len(), 2);
    assert!(expiries.iter().all(|e| e.actor == SYSTEM_ACTOR));
}

#[tokio::test]
async fn day_view_sweeps_and_reports_phases_for_today() {
    let portal = make_test_portal();
    portal.clock.set(*MONDAY_HALF_TEN);

    let view = portal
        .services
        .bookings
        .day_view(
            &teacher(TEACHER_A),
            RoomDayQuery {
                room: "Room2".into(),
                day: DaySelector::Date(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()),
            },
        )
        .await
        .unwrap();

    assert_eq!(view.day, "Monday");
    assert_eq!(view.expired.len(), 1);
    assert_eq!(view.free, 3);
    let labels: Vec<&str> = view.slots.iter().map(|s| s.slot.as_str()).collect();
    assert_eq!(labels, vec!["9AM-10AM", "10AM-11AM", "11AM-12PM"]);
    assert_eq!(view.slots[0].phase.as_deref(), Some("elapsed"));
    assert_eq!(view.slots[1].phase.as_deref(), Some("in_progress"));
    assert_eq!(view.slots[2].phase.as_deref(), Some("upcoming"));
}

#[tokio::test]
async fn holiday_saturday_has_no_timetable() {
    let portal = make_test_portal();
    let err = portal
        .services
        .bookings
        .book(
            &teacher(TEACHER_A),
            BookSlotCommand {
                room: "Room1".into(),
                day: DaySelector::Date(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()),
                slot: "9AM-10AM".into(),
                details: BookingDetails::default(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::NotFound(_))
    ));

    portal
        .services
        .bookings
        .book(
            &teacher(TEACHER_A),
            BookSlotCommand {
                room: "Room1".into(),
                day: DaySelector::Date(NaiveDate::from_ymd_opt(2025, 3, 8).unwrap()),
                slot: "9AM-10AM".into(),
                details: BookingDetails::default(),
            },
        )
        .await
        .unwrap();
    assert!(!portal.is_free("Room1", "Saturday", "9AM-10AM").await);
}

#[tokio::test]
async fn concurrent_bookings_of_one_slot_have_one_winner() {
    let portal = make_test_portal();
    let tasks: Vec<_> = [TEACHER_A, TEACHER_B, TEACHER_C]
        .into_iter()
        .map(|email| {
            let services = Arc::clone(&portal.services);
            tokio::spawn(async move {
                services
                    .bookings
                    .book(&teacher(email), book_cmd("Room2", "11AM-12PM", "Race"))
                    .await
            })
        })
        .collect();

    let mut wins = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => wins += 1,
            Err(err) => assert!(err.is_stale(), "unexpected error {err:?}"),
        }
    }
    assert_eq!(wins, 1);

    let events = portal.repos.audit.list().await.unwrap();
    assert_eq!(count_action(&events, AuditAction::Book), 1);
}

/// Room1 Monday 9AM-10AM: A books, B is refused, A cancels, the waitlisted
/// user is promoted.
#[tokio::test]
async fn end_to_end_book_refuse_cancel_promote() {
    let portal = make_test_portal();
    let services = &portal.services;
    let alice = teacher(TEACHER_A);
    let bob = teacher(TEACHER_B);

    services
        .bookings
        .book(&alice, book_cmd("Room1", "9AM-10AM", "CS101"))
        .await
        .unwrap();
    assert!(!portal.is_free("Room1", "Monday", "9AM-10AM").await);

    let events = portal.repos.audit.list().await.unwrap();
    let books: Vec<_> = events.iter().filter(|e| e.action == AuditAction::Book).collect();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].entity_type, AuditEntityType::RoomBooking);
    assert_eq!(books[0].entity_id, "Room1|Monday|9AM-10AM");
    assert_eq!(books[0].details["title"], "CS101");

    let err = services
        .bookings
        .book(&bob, book_cmd("Room1", "9AM-10AM", "Other"))
        .await
        .unwrap_err();
    assert!(err.is_stale());

    services
        .waitlist
        .join(
            &bob,
            JoinWaitlistCommand {
                room: "Room1".into(),
                day: monday(),
                slot: "9AM-10AM".into(),
            },
        )
        .await
        .unwrap();

    let cancelled = services
        .bookings
        .cancel(&alice, cancel_cmd("Room1", "9AM-10AM", Some("room change")))
        .await
        .unwrap();
    assert!(portal.is_free("Room1", "Monday", "9AM-10AM").await);
    assert_eq!(cancelled.promoted.unwrap().user_email, TEACHER_B);

    let events = portal.repos.audit.list().await.unwrap();
    let cancels: Vec<_> = events
        .iter()
        .filter(|e| e.action == AuditAction::Cancel)
        .collect();
    assert_eq!(cancels.len(), 1);
    assert_eq!(cancels[0].details["reason"], "room change");

    let history = services.booking_queries.my_history(&alice, None).await.unwrap();
    assert_eq!(history.len(), 2);
}

#[tokio::test]
async fn existing_records_with_naive_timestamps_stay_readable_and_appendable() {
    let portal = PortalBuilder::default()
        .file(
            "audit_log.json",
            json!([{
                "id": "3f2a9c1e-8d4b-4f6a-9b1c-2e7d5a0c4b11",
                "timestamp": "2025-03-03T09:15:00.123456",
                "actor": TEACHER_A,
                "action": "BOOK",
                "entity_type": "ROOM_BOOKING",
                "entity_id": "Room1|Monday|9AM-10AM",
                "details": {}
            }]),
        )
        .file(
            "booking_history.json",
            json!([{
                "user_email": TEACHER_A,
                "room": "Room1",
                "day": "Monday",
                "slot": "9AM-10AM",
                "action": "BOOKED",
                "timestamp": "2025-03-03T09:15:00.123456"
            }]),
        )
        .file(
            "waitlist.json",
            json!([{
                "id": "waitlist_1741000000.123",
                "room": "Room1",
                "day": "Monday",
                "slot": "11AM-12PM",
                "user_email": TEACHER_B,
                "user_role": "teacher",
                "timestamp": "2025-03-03T08:00:00",
                "status": "waiting"
            }]),
        )
        .build();

    portal
        .services
        .bookings
        .book(&teacher(TEACHER_A), book_cmd("Room1", "10AM-11AM", "Seminar"))
        .await
        .unwrap();

    let events = portal.repos.audit.list().await.unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].entity_id, "Room1|Monday|9AM-10AM");
    assert_eq!(events[1].action, AuditAction::Book);
    assert_eq!(events[1].entity_id, "Room1|Monday|10AM-11AM");
    assert_eq!(portal.repos.history.list().await.unwrap().len(), 2);

    // The legacy entry is still first in line for the booked 11AM slot.
    portal
        .services
        .bookings
        .cancel(&teacher(TEACHER_A), cancel_cmd("Room1", "11AM-12PM", None))
        .await
        .unwrap();
    let waitlist = portal.repos.waitlist.list().await.unwrap();
    assert_eq!(waitlist[0].id.as_str(), "waitlist_1741000000.123");
    assert!(waitlist[0].notified_at.is_some());
}

#[tokio::test]
async fn unreadable_schedule_fails_without_side_effects() {
    let portal = make_test_portal();
    portal.corrupt("rooms.json", "{ not json");
    let alice = teacher(TEACHER_A);

    let err = portal
        .services
        .bookings
        .book(&alice, book_cmd("Room1", "10AM-11AM", "Seminar"))
        .await
        .unwrap_err();
    assert!(
        matches!(err, ApplicationError::Domain(DomainError::Persistence(_))),
        "got {err:?}"
    );
    let err = portal
        .services
        .bookings
        .cancel(&alice, cancel_cmd("Room1", "11AM-12PM", None))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::Persistence(_))));

    assert!(portal.repos.audit.list().await.unwrap().is_empty());
    assert!(portal.repos.history.list().await.unwrap().is_empty());
    assert!(portal.notifier.sent().is_empty());
}

#[tokio::test]
async fn audit_failure_does_not_undo_the_booking() {
    let portal = make_test_portal();
    portal.corrupt("audit_log.json", "[{ truncated");

    portal
        .services
        .bookings
        .book(&teacher(TEACHER_A), book_cmd("Room1", "10AM-11AM", "Seminar"))
        .await
        .unwrap();

    assert!(!portal.is_free("Room1", "Monday", "10AM-11AM").await);
    assert!(matches!(
        portal.repos.audit.list().await,
        Err(DomainError::Persistence(_))
    ));
    assert_eq!(portal.repos.history.list().await.unwrap().len(), 1);
}
