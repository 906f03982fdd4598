// src/domain/mod.rs
pub mod audit;
pub mod booking;
pub mod errors;
pub mod faculty;
pub mod media;
pub mod notification;
pub mod schedule;
pub mod settings;
pub mod timestamp;
pub mod user;
pub mod waitlist;
