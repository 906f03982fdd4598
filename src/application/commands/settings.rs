// src/application/commands/settings.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, SettingsTogglesDto},
        error::ApplicationResult,
    },
    domain::settings::{Settings, SettingsRepository},
};
use tracing::info;

/// Partial update of the portal switches. `None` leaves a switch alone.
#[derive(Debug, Clone, Default)]
pub struct UpdateSettingsCommand {
    pub email_notifications: Option<bool>,
    pub telegram_notifications: Option<bool>,
    pub thumbnails: Option<bool>,
    pub media_approval: Option<bool>,
    pub saturdays: Option<bool>,
    pub exclude_third_saturday: Option<bool>,
}

impl UpdateSettingsCommand {
    fn apply(self, settings: &mut Settings) {
        let switches = [
            (self.email_notifications, &mut settings.notifications.email.enabled),
            (self.telegram_notifications, &mut settings.notifications.telegram.enabled),
            (self.thumbnails, &mut settings.thumbnails.enabled),
            (self.media_approval, &mut settings.media_approval.enabled),
            (self.saturdays, &mut settings.saturday.enabled),
            (self.exclude_third_saturday, &mut settings.saturday.exclude_third_saturday),
        ];
        for (value, target) in switches {
            if let Some(value) = value {
                *target = value;
            }
        }
    }
}

pub struct SettingsCommandService {
    settings: Arc<dyn SettingsRepository>,
}

impl SettingsCommandService {
    pub fn new(settings: Arc<dyn SettingsRepository>) -> Self {
        Self { settings }
    }

    pub async fn current(&self, actor: &AuthenticatedUser) -> ApplicationResult<SettingsTogglesDto> {
        ensure_capability(actor, "settings", "manage")?;
        Ok(SettingsTogglesDto::from(&self.settings.load().await?))
    }

    /// Flips the requested switches and writes the whole document back.
    /// Sections and keys not covered by the command are preserved.
    pub async fn update(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateSettingsCommand,
    ) -> ApplicationResult<SettingsTogglesDto> {
        ensure_capability(actor, "settings", "manage")?;
        let mut settings = self.settings.load().await?;
        command.apply(&mut settings);
        self.settings.save(settings.clone()).await?;
        let toggles = SettingsTogglesDto::from(&settings);
        info!(user = %actor.email, toggles = ?toggles, "settings updated");
        Ok(toggles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_requested_switches_change() {
        let mut settings = Settings::default();
        settings.notifications.telegram.enabled = true;
        UpdateSettingsCommand {
            email_notifications: Some(true),
            media_approval: Some(false),
            ..UpdateSettingsCommand::default()
        }
        .apply(&mut settings);

        assert!(settings.notifications.email.enabled);
        assert!(settings.notifications.telegram.enabled);
        assert!(!settings.media_approval.enabled);
        assert!(settings.thumbnails.enabled);
    }
}
