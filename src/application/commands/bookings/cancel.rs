// src/application/commands/bookings/cancel.rs
use super::{BookingCommandService, service::date_text};
use crate::{
    application::{
        audit_trail,
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, CancellationDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        audit::{AuditAction, AuditEntityType, AuditEvent},
        booking::{BookingHistoryRecord, HistoryAction},
        errors::DomainError,
        notification::{Notification, NotificationKind},
        schedule::DaySelector,
    },
};
use serde_json::json;
use tracing::{info, warn};

const NOT_BOOKED: &str = "slot is not currently booked";

pub struct CancelBookingCommand {
    pub room: String,
    pub day: DaySelector,
    pub slot: String,
    pub reason: Option<String>,
}

impl BookingCommandService {
    /// Frees an occupied slot and offers it to the head of its waitlist.
    pub async fn cancel(
        &self,
        actor: &AuthenticatedUser,
        command: CancelBookingCommand,
    ) -> ApplicationResult<CancellationDto> {
        ensure_capability(actor, "bookings", "cancel")?;

        let key = self
            .resolve_key(command.room, &command.day, command.slot)
            .await?;
        match self.rooms.compare_and_set(&key, true, false).await {
            Ok(()) => {}
            Err(DomainError::StaleState(_)) => {
                return Err(ApplicationError::validation(NOT_BOOKED));
            }
            Err(err) => return Err(err.into()),
        }

        let now = self.clock.utc();
        let reason = command
            .reason
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());
        info!(user = %actor.email, slot = %key, reason = ?reason, "booking cancelled");

        audit_trail::append_event(
            self.audit.as_ref(),
            AuditEvent::new(
                now,
                actor.email.clone(),
                AuditAction::Cancel,
                AuditEntityType::RoomBooking,
                key.entity_id(),
                json!({ "reason": reason, "cancelled_at": now.to_rfc3339() }),
            ),
        )
        .await;
        audit_trail::append_history(
            self.history.as_ref(),
            vec![BookingHistoryRecord::new(
                actor.email.clone(),
                &key,
                HistoryAction::Cancelled,
                now,
            )],
        )
        .await;

        let date = date_text(&command.day, &key);
        self.notifier.notify(Notification {
            kind: NotificationKind::BookingCancellation,
            recipient: actor.email.clone(),
            room: key.room.clone(),
            date: date.clone(),
            slot: key.slot.clone(),
            reason,
        });

        let promoted = match self.waitlist.promote(&key, &date).await {
            Ok(entry) => entry,
            Err(err) => {
                warn!(slot = %key, error = %err, "waitlist promotion failed");
                None
            }
        };

        Ok(CancellationDto {
            room: key.room,
            day: key.day,
            slot: key.slot,
            promoted: promoted.map(Into::into),
        })
    }
}
