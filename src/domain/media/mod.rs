// src/domain/media/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Album, MediaIndex, MediaItem, MediaSearch, ShareRecord};
pub use repository::MediaRepository;
pub use value_objects::{MediaKind, StoredName};
