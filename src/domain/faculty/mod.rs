// src/domain/faculty/mod.rs
pub mod identity;
pub mod repository;

pub use identity::{FacultyIdentities, derived_display_name};
pub use repository::FacultyIdentityRepository;
