// tests/waitlist_flow.rs
use campus_portal::{
    application::{
        commands::{
            bookings::{BookSlotCommand, CancelBookingCommand},
            waitlist::{CancelWaitlistEntryCommand, JoinWaitlistCommand},
        },
        dto::AuthenticatedUser,
    },
    domain::{
        audit::{AuditAction, AuditEntityType},
        booking::BookingDetails,
        notification::NotificationKind,
        schedule::DaySelector,
    },
};

mod support;
use support::*;

fn monday() -> DaySelector {
    DaySelector::Label("Monday".into())
}

fn join_cmd() -> JoinWaitlistCommand {
    JoinWaitlistCommand {
        room: "Room1".into(),
        day: monday(),
        slot: "10AM-11AM".into(),
    }
}

async fn book_and_release(portal: &TestPortal, holder: &AuthenticatedUser) -> Option<String> {
    portal
        .services
        .bookings
        .book(
            holder,
            BookSlotCommand {
                room: "Room1".into(),
                day: monday(),
                slot: "10AM-11AM".into(),
                details: BookingDetails::default(),
            },
        )
        .await
        .unwrap();
    portal
        .services
        .bookings
        .cancel(
            holder,
            CancelBookingCommand {
                room: "Room1".into(),
                day: monday(),
                slot: "10AM-11AM".into(),
                reason: None,
            },
        )
        .await
        .unwrap()
        .promoted
        .map(|entry| entry.user_email)
}

#[tokio::test]
async fn releases_promote_waiters_in_join_order() {
    let portal = make_test_portal();
    let waitlist = &portal.services.waitlist;
    waitlist.join(&teacher(TEACHER_B), join_cmd()).await.unwrap();
    waitlist.join(&teacher(TEACHER_C), join_cmd()).await.unwrap();

    let alice = teacher(TEACHER_A);
    assert_eq!(
        book_and_release(&portal, &alice).await.as_deref(),
        Some(TEACHER_B)
    );
    assert_eq!(
        book_and_release(&portal, &alice).await.as_deref(),
        Some(TEACHER_C)
    );
    assert_eq!(book_and_release(&portal, &alice).await, None);

    let promotions: Vec<String> = portal
        .notifier
        .sent()
        .into_iter()
        .filter(|n| n.kind == NotificationKind::WaitlistPromotion)
        .map(|n| n.recipient)
        .collect();
    assert_eq!(promotions, vec![TEACHER_B, TEACHER_C]);

    // Promoted entries are no longer waiting.
    let waiting = portal
        .services
        .waitlist_queries
        .waiting_for(&teacher(TEACHER_B))
        .await
        .unwrap();
    assert!(waiting.iter().all(|e| e.status != "waiting"));
}

#[tokio::test]
async fn joining_is_audited_and_can_be_withdrawn() {
    let portal = make_test_portal();
    let bob = teacher(TEACHER_B);
    let entry = portal.services.waitlist.join(&bob, join_cmd()).await.unwrap();
    assert_eq!(entry.status, "waiting");

    let events = portal.repos.audit.list().await.unwrap();
    assert!(events.iter().any(|e| e.action == AuditAction::Create
        && e.entity_type == AuditEntityType::Waitlist
        && e.details["booking"] == "Room1|Monday|10AM-11AM"));

    portal
        .services
        .waitlist
        .cancel_entry(&bob, CancelWaitlistEntryCommand { id: entry.id.clone() })
        .await
        .unwrap();
    assert_eq!(book_and_release(&portal, &teacher(TEACHER_A)).await, None);
}

#[tokio::test]
async fn students_cannot_join() {
    let portal = make_test_portal();
    assert!(
        portal
            .services
            .waitlist
            .join(&student(STUDENT), join_cmd())
            .await
            .is_err()
    );
}
