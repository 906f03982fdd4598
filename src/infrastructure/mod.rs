// src/infrastructure/mod.rs
pub mod json_store;
pub mod media_files;
pub mod notifications;
pub mod repositories;
pub mod security;
pub mod time;
