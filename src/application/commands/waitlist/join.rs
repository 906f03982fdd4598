// src/application/commands/waitlist/join.rs
use super::WaitlistCommandService;
use crate::{
    application::{
        audit_trail,
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, WaitlistEntryDto},
        error::ApplicationResult,
    },
    domain::{
        audit::{AuditAction, AuditEntityType, AuditEvent},
        schedule::{BookingKey, DaySelector},
        waitlist::WaitlistEntry,
    },
};
use serde_json::json;
use tracing::info;

pub struct JoinWaitlistCommand {
    pub room: String,
    pub day: DaySelector,
    pub slot: String,
}

impl WaitlistCommandService {
    /// Queues the caller for a slot. Joining never fails on the slot's
    /// current state; the entry waits until the slot is released.
    pub async fn join(
        &self,
        actor: &AuthenticatedUser,
        command: JoinWaitlistCommand,
    ) -> ApplicationResult<WaitlistEntryDto> {
        ensure_capability(actor, "waitlist", "join")?;

        let policy = self.settings.load().await?.saturday_policy();
        let day = command.day.resolve(&policy)?;
        let key = BookingKey::new(command.room, day, command.slot)?;

        let entry = WaitlistEntry::new(&key, actor.email.clone(), actor.role, self.clock.utc());
        self.repo.join(entry.clone()).await?;
        info!(user = %actor.email, slot = %key, "joined waitlist");

        audit_trail::append_event(
            self.audit.as_ref(),
            AuditEvent::new(
                entry.timestamp,
                actor.email.clone(),
                AuditAction::Create,
                AuditEntityType::Waitlist,
                entry.id.to_string(),
                json!({ "booking": key.entity_id() }),
            ),
        )
        .await;

        Ok(entry.into())
    }
}
