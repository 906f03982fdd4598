// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

/// A verified share token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedFile {
    pub file_path: String,
    pub expires_at: DateTime<Utc>,
}

/// Issues and checks signed, expiring links to uploaded files.
pub trait ShareLinkSigner: Send + Sync {
    fn sign(
        &self,
        secret: &str,
        file_path: &str,
        expires_at: DateTime<Utc>,
    ) -> ApplicationResult<String>;

    /// `None` for a forged, malformed or expired token.
    fn verify(&self, secret: &str, token: &str, now: DateTime<Utc>) -> Option<SharedFile>;
}
