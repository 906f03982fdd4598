// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// The slot changed between the caller's read and the commit.
    #[error("stale state: {0}")]
    StaleState(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn persistence(context: impl std::fmt::Display, err: impl std::fmt::Display) -> Self {
        Self::Persistence(format!("{context}: {err}"))
    }
}
