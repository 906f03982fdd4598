// src/application/dto/admin.rs
use super::audit::AuditEventDto;
use crate::domain::settings::Settings;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminOverviewDto {
    pub rooms: usize,
    pub faculty: usize,
    pub users: usize,
    pub audit_events: usize,
    pub pending_media: usize,
    pub recent_events: Vec<AuditEventDto>,
}

/// The on/off switches of `settings.json`. Secrets are never echoed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SettingsTogglesDto {
    pub email_notifications: bool,
    pub telegram_notifications: bool,
    pub thumbnails: bool,
    pub media_approval: bool,
    pub saturdays: bool,
    pub exclude_third_saturday: bool,
}

impl From<&Settings> for SettingsTogglesDto {
    fn from(s: &Settings) -> Self {
        Self {
            email_notifications: s.notifications.email.enabled,
            telegram_notifications: s.notifications.telegram.enabled,
            thumbnails: s.thumbnails.enabled,
            media_approval: s.media_approval.enabled,
            saturdays: s.saturday.enabled,
            exclude_third_saturday: s.saturday.exclude_third_saturday,
        }
    }
}
