// src/infrastructure/repositories/mod.rs
mod json_audit_log;
mod json_booking_history;
mod json_faculty;
mod json_media;
mod json_notifications;
mod json_schedule;
mod json_settings;
mod json_user;
mod json_waitlist;

pub use json_audit_log::JsonAuditLogRepository;
pub use json_booking_history::JsonBookingHistoryRepository;
pub use json_faculty::JsonFacultyIdentityRepository;
pub use json_media::JsonMediaRepository;
pub use json_notifications::JsonNotificationRepository;
pub use json_schedule::JsonScheduleRepository;
pub use json_settings::JsonSettingsRepository;
pub use json_user::JsonUserRepository;
pub use json_waitlist::JsonWaitlistRepository;

pub const ROOMS_FILE: &str = "rooms.json";
pub const FACULTY_FILE: &str = "faculty.json";
pub const FACULTY_IDENTITIES_FILE: &str = "faculty_identities.json";
pub const USERS_FILE: &str = "users.json";
pub const AUDIT_LOG_FILE: &str = "audit_log.json";
pub const BOOKING_HISTORY_FILE: &str = "booking_history.json";
pub const WAITLIST_FILE: &str = "waitlist.json";
pub const SETTINGS_FILE: &str = "settings.json";
pub const MEDIA_INDEX_FILE: &str = "media_index.json";
pub const NOTIFICATIONS_FILE: &str = "notifications.json";
