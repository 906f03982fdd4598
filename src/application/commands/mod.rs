// src/application/commands/mod.rs
pub mod auth;
pub mod bookings;
pub(crate) mod capability;
pub mod media;
pub mod notifications;
pub mod settings;
pub mod waitlist;
