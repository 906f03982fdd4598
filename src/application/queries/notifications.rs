use std::sync::Arc;

use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, NotificationDto, NotificationListDto, PreferencesDto},
        error::ApplicationResult,
    },
    domain::{notification::InAppNotificationRepository, settings::SettingsRepository},
};

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 200;

pub struct NotificationQueryService {
    repo: Arc<dyn InAppNotificationRepository>,
    settings: Arc<dyn SettingsRepository>,
}

impl NotificationQueryService {
    pub fn new(
        repo: Arc<dyn InAppNotificationRepository>,
        settings: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self { repo, settings }
    }

    /// The caller's notifications, newest first. `unread` and `total` count
    /// everything addressed to the caller, not just the returned page.
    pub async fn list_for(
        &self,
        actor: &AuthenticatedUser,
        limit: Option<usize>,
    ) -> ApplicationResult<NotificationListDto> {
        ensure_capability(actor, "notifications", "read:own")?;
        let limit = match limit {
            None | Some(0) => DEFAULT_LIMIT,
            Some(limit) => limit.min(MAX_LIMIT),
        };

        let mut mine: Vec<_> = self
            .repo
            .list()
            .await?
            .into_iter()
            .rev()
            .filter(|n| n.is_for(&actor.email))
            .collect();
        mine.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let total = mine.len();
        let unread = mine.iter().filter(|n| !n.read).count();
        let items: Vec<NotificationDto> = mine.into_iter().take(limit).map(Into::into).collect();
        Ok(NotificationListDto {
            items,
            unread,
            total,
        })
    }

    pub async fn preferences(&self, actor: &AuthenticatedUser) -> ApplicationResult<PreferencesDto> {
        ensure_capability(actor, "notifications", "read:own")?;
        Ok(self
            .settings
            .load()
            .await?
            .preferences_for(&actor.email)
            .into())
    }
}
