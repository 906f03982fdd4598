// src/application/commands/notifications/manage.rs
use super::NotificationCommandService;
use crate::application::{
    commands::capability::ensure_capability,
    dto::{AuthenticatedUser, PreferencesDto},
    error::ApplicationResult,
};
use uuid::Uuid;

impl NotificationCommandService {
    pub async fn mark_read(&self, actor: &AuthenticatedUser, id: Uuid) -> ApplicationResult<()> {
        ensure_capability(actor, "notifications", "read:own")?;
        self.repo.mark_read(id, &actor.email).await?;
        Ok(())
    }

    /// Drops every notification addressed to the caller.
    pub async fn clear(&self, actor: &AuthenticatedUser) -> ApplicationResult<usize> {
        ensure_capability(actor, "notifications", "read:own")?;
        Ok(self.repo.clear(&actor.email).await?)
    }

    pub async fn save_preferences(
        &self,
        actor: &AuthenticatedUser,
        prefs: PreferencesDto,
    ) -> ApplicationResult<PreferencesDto> {
        ensure_capability(actor, "notifications", "read:own")?;
        self.settings
            .save_preferences(&actor.email, prefs.clone().into())
            .await?;
        Ok(prefs)
    }
}
