// src/domain/audit/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{AuditAction, AuditEntityType, AuditEvent, AuditFilter, SYSTEM_ACTOR};
pub use repository::AuditLogRepository;
