// src/application/commands/waitlist/cancel.rs
use super::WaitlistCommandService;
use crate::application::{
    dto::{AuthenticatedUser, WaitlistEntryDto},
    error::ApplicationResult,
};
use crate::domain::waitlist::WaitlistId;

pub struct CancelWaitlistEntryCommand {
    pub id: String,
}

impl WaitlistCommandService {
    /// Withdraws one of the caller's own entries.
    pub async fn cancel_entry(
        &self,
        actor: &AuthenticatedUser,
        command: CancelWaitlistEntryCommand,
    ) -> ApplicationResult<WaitlistEntryDto> {
        let id = WaitlistId::from(command.id);
        let removed = self.repo.remove(&id, &actor.email).await?;
        Ok(removed.into())
    }
}
