// src/application/commands/bookings/book.rs
use super::{BookingCommandService, service::date_text};
use crate::{
    application::{
        audit_trail,
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, BookingOutcomeDto},
        error::ApplicationResult,
    },
    domain::{
        audit::{AuditAction, AuditEntityType, AuditEvent},
        booking::{BookingDetails, BookingHistoryRecord, HistoryAction},
        notification::{Notification, NotificationKind},
        schedule::DaySelector,
    },
};
use tracing::info;

pub struct BookSlotCommand {
    pub room: String,
    pub day: DaySelector,
    pub slot: String,
    pub details: BookingDetails,
}

impl BookingCommandService {
    /// Books a free slot. The free check and the flip happen in one store
    /// transaction, so of two racing bookers exactly one succeeds and the
    /// other gets `StaleState`.
    pub async fn book(
        &self,
        actor: &AuthenticatedUser,
        command: BookSlotCommand,
    ) -> ApplicationResult<BookingOutcomeDto> {
        ensure_capability(actor, "bookings", "create")?;

        let key = self
            .resolve_key(command.room, &command.day, command.slot)
            .await?;
        let details = command.details.normalized();
        let warnings = self.check_conflicts(&actor.email, &key.day, &key.slot).await;

        self.rooms.compare_and_set(&key, false, true).await?;
        let now = self.clock.utc();
        info!(user = %actor.email, slot = %key, title = %details.title, "slot booked");

        audit_trail::append_event(
            self.audit.as_ref(),
            AuditEvent::new(
                now,
                actor.email.clone(),
                AuditAction::Book,
                AuditEntityType::RoomBooking,
                key.entity_id(),
                details.audit_details(),
            ),
        )
        .await;
        audit_trail::append_history(
            self.history.as_ref(),
            vec![BookingHistoryRecord::new(
                actor.email.clone(),
                &key,
                HistoryAction::Booked,
                now,
            )],
        )
        .await;

        if details.notify {
            self.notifier.notify(Notification {
                kind: NotificationKind::BookingConfirmation,
                recipient: actor.email.clone(),
                room: key.room.clone(),
                date: date_text(&command.day, &key),
                slot: key.slot.clone(),
                reason: None,
            });
        }

        Ok(BookingOutcomeDto {
            room: key.room,
            day: key.day,
            slot: key.slot,
            title: details.title,
            warnings,
        })
    }
}
