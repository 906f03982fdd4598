// src/domain/notification/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{InAppNotification, Notification, NotificationKind};
pub use repository::InAppNotificationRepository;
