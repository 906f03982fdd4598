mod history;
mod rooms;
mod service;

pub use service::BookingQueryService;
