// src/application/commands/bookings/mod.rs
mod book;
mod cancel;
mod conflicts;
mod day_view;
mod expire;
mod service;

pub use book::BookSlotCommand;
pub use cancel::CancelBookingCommand;
pub use day_view::RoomDayQuery;
pub use service::BookingCommandService;
