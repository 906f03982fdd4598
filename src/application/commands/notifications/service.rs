// src/application/commands/notifications/service.rs
use std::sync::Arc;

use crate::domain::{notification::InAppNotificationRepository, settings::SettingsRepository};

pub struct NotificationCommandService {
    pub(super) repo: Arc<dyn InAppNotificationRepository>,
    pub(super) settings: Arc<dyn SettingsRepository>,
}

impl NotificationCommandService {
    pub fn new(
        repo: Arc<dyn InAppNotificationRepository>,
        settings: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self { repo, settings }
    }
}
