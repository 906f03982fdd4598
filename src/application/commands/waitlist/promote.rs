// src/application/commands/waitlist/promote.rs
use super::WaitlistCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{
        notification::{Notification, NotificationKind},
        schedule::BookingKey,
        waitlist::WaitlistEntry,
    },
};
use tracing::info;

impl WaitlistCommandService {
    /// Hands a released slot to the earliest waiting user. At most one entry
    /// is promoted per call and the slot is not reserved for them.
    pub async fn promote(
        &self,
        key: &BookingKey,
        date: &str,
    ) -> ApplicationResult<Option<WaitlistEntry>> {
        let Some(entry) = self.repo.promote(key, self.clock.utc()).await? else {
            return Ok(None);
        };
        info!(user = %entry.user_email, slot = %key, "waitlist entry promoted");

        self.notifier.notify(Notification {
            kind: NotificationKind::WaitlistPromotion,
            recipient: entry.user_email.clone(),
            room: key.room.clone(),
            date: date.to_string(),
            slot: key.slot.clone(),
            reason: None,
        });
        Ok(Some(entry))
    }
}
