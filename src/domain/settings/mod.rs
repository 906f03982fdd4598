// src/domain/settings/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{
    EmailSettings, MediaApprovalSettings, NotificationSettings, SaturdaySettings, Settings,
    ShareLinkSettings, TelegramSettings, ThumbnailSettings, UserPreferences,
};
pub use repository::SettingsRepository;
