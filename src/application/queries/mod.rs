pub mod admin;
pub mod audit;
pub mod bookings;
pub mod calendar;
pub mod faculty;
pub mod finder;
pub mod media;
pub mod notifications;
pub mod waitlist;
