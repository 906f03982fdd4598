// src/application/commands/bookings/expire.rs
use super::BookingCommandService;
use crate::{
    application::{audit_trail, error::ApplicationResult},
    domain::{
        audit::{AuditAction, AuditEntityType, AuditEvent, SYSTEM_ACTOR},
        booking::{BookingHistoryRecord, HistoryAction, HistoryLedger},
        schedule::{BookingKey, calendar},
    },
};
use chrono::NaiveDateTime;
use serde_json::json;
use tracing::{info, warn};

impl BookingCommandService {
    /// Frees every booking on today's schedule whose slot has ended by
    /// `now` (local wall-clock time). Running it again with the same `now`
    /// releases nothing and records nothing.
    pub async fn auto_expire(&self, now: NaiveDateTime) -> ApplicationResult<Vec<BookingKey>> {
        let today = now.date();
        let policy = self.saturday_policy().await?;
        let Some(day) = calendar::day_label(today, &policy) else {
            return Ok(Vec::new());
        };

        let released = self.rooms.release_elapsed(&day, today, now).await?;
        if released.is_empty() {
            return Ok(released);
        }
        info!(count = released.len(), %day, "expired bookings released");

        let utc_now = self.clock.utc();
        let expired_at = now.format("%Y-%m-%dT%H:%M:%S").to_string();
        let ledger = match self.history.list().await {
            Ok(records) => HistoryLedger::new(records),
            Err(err) => {
                warn!(error = %err, "booking history unavailable; expiries stay unattributed");
                HistoryLedger::default()
            }
        };

        let mut records = Vec::new();
        for key in &released {
            audit_trail::append_event(
                self.audit.as_ref(),
                AuditEvent::new(
                    utc_now,
                    SYSTEM_ACTOR,
                    AuditAction::AutoExpire,
                    AuditEntityType::RoomBooking,
                    key.entity_id(),
                    json!({ "expired_at": expired_at }),
                ),
            )
            .await;
            if let Some(booker) = ledger.last_booker(key) {
                records.push(BookingHistoryRecord::new(
                    booker,
                    key,
                    HistoryAction::Expired,
                    utc_now,
                ));
            }
        }
        audit_trail::append_history(self.history.as_ref(), records).await;

        let date = today.format("%Y-%m-%d").to_string();
        for key in &released {
            if let Err(err) = self.waitlist.promote(key, &date).await {
                warn!(slot = %key, error = %err, "waitlist promotion failed");
            }
        }
        Ok(released)
    }
}
