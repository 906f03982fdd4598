// src/domain/waitlist/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{Waitlist, WaitlistEntry, WaitlistId, WaitlistStatus};
pub use repository::WaitlistRepository;
