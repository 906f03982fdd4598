// src/infrastructure/repositories/json_audit_log.rs
use super::AUDIT_LOG_FILE;
use crate::domain::audit::{AuditEvent, AuditLogRepository};
use crate::domain::errors::DomainResult;
use crate::infrastructure::json_store::JsonStore;
use async_trait::async_trait;
use std::sync::Arc;

pub struct JsonAuditLogRepository {
    store: Arc<JsonStore>,
}

impl JsonAuditLogRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AuditLogRepository for JsonAuditLogRepository {
    async fn append(&self, event: AuditEvent) -> DomainResult<()> {
        self.store.append(AUDIT_LOG_FILE, event).await
    }

    async fn list(&self) -> DomainResult<Vec<AuditEvent>> {
        self.store.read(AUDIT_LOG_FILE).await
    }
}
