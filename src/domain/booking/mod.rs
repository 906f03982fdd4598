// src/domain/booking/mod.rs
pub mod details;
pub mod history;
pub mod repository;

pub use details::{BookingDetails, DEFAULT_BOOKING_TITLE};
pub use history::{BookingHistoryRecord, HistoryAction, HistoryLedger};
pub use repository::BookingHistoryRepository;
