// src/application/audit_trail.rs
//! Side records written after a committed state change. The change itself
//! already happened, so a failed append is logged instead of undoing it.

use crate::domain::audit::{AuditEvent, AuditLogRepository};
use crate::domain::booking::{BookingHistoryRecord, BookingHistoryRepository};
use tracing::error;

pub(crate) async fn append_event(repo: &dyn AuditLogRepository, event: AuditEvent) {
    let (action, entity_id) = (event.action, event.entity_id.clone());
    if let Err(err) = repo.append(event).await {
        error!(%action, %entity_id, error = %err, "failed to append audit event");
    }
}

pub(crate) async fn append_history(
    repo: &dyn BookingHistoryRepository,
    records: Vec<BookingHistoryRecord>,
) {
    if let Err(err) = repo.append_all(records).await {
        error!(error = %err, "failed to append booking history");
    }
}
