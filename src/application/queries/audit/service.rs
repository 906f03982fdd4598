use std::sync::Arc;

use crate::domain::{audit::AuditLogRepository, schedule::ScheduleRepository};

pub struct AuditQueryService {
    pub(super) repo: Arc<dyn AuditLogRepository>,
    pub(super) rooms: Arc<dyn ScheduleRepository>,
}

impl AuditQueryService {
    pub fn new(repo: Arc<dyn AuditLogRepository>, rooms: Arc<dyn ScheduleRepository>) -> Self {
        Self { repo, rooms }
    }
}
