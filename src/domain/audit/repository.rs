// src/domain/audit/repository.rs
use crate::domain::audit::entity::AuditEvent;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Append-only event ledger. Events are never updated or deleted.
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    async fn append(&self, event: AuditEvent) -> DomainResult<()>;

    /// Every event in append order.
    async fn list(&self) -> DomainResult<Vec<AuditEvent>>;

    async fn count(&self) -> DomainResult<usize> {
        Ok(self.list().await?.len())
    }
}
