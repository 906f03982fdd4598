// src/application/dto/mod.rs
pub mod admin;
pub mod audit;
pub mod auth;
pub mod bookings;
pub mod calendar;
pub mod faculty;
pub mod finder;
pub mod media;
pub mod notifications;
pub mod waitlist;

pub use admin::{AdminOverviewDto, SettingsTogglesDto};
pub use audit::{AuditEventDto, BookingHistoryDto};
pub use auth::{AuthenticatedUser, UserDto};
pub use bookings::{
    BookingOutcomeDto, CancellationDto, ExpiredSlotDto, RoomDayDto, RoomSummaryDto, SlotDto,
};
pub use calendar::{MonthSaturdaysDto, SaturdayDto};
pub use faculty::FacultyDayDto;
pub use finder::{FinderResultDto, PartialMatchDto, RoomMatchDto};
pub use media::{AlbumDto, MediaItemDto, ShareLinkDto, SharedFileDto};
pub use notifications::{NotificationDto, NotificationListDto, PreferencesDto};
pub use waitlist::WaitlistEntryDto;
