mod common;
mod history;
mod service;

pub use history::{AuditHistoryQuery, RoomDayHistoryQuery};
pub use service::AuditQueryService;
