use std::sync::Arc;

use crate::{
    application::{error::ApplicationResult, ports::time::LocalClock},
    domain::{
        audit::AuditLogRepository,
        schedule::{DaySelector, ScheduleRepository},
        settings::SettingsRepository,
    },
};

pub struct FinderQueryService {
    pub(super) rooms: Arc<dyn ScheduleRepository>,
    pub(super) settings: Arc<dyn SettingsRepository>,
    pub(super) audit: Arc<dyn AuditLogRepository>,
    pub(super) clock: LocalClock,
}

impl FinderQueryService {
    pub fn new(
        rooms: Arc<dyn ScheduleRepository>,
        settings: Arc<dyn SettingsRepository>,
        audit: Arc<dyn AuditLogRepository>,
        clock: LocalClock,
    ) -> Self {
        Self {
            rooms,
            settings,
            audit,
            clock,
        }
    }

    pub(super) async fn resolve_day(&self, day: &DaySelector) -> ApplicationResult<String> {
        let policy = self.settings.load().await?.saturday_policy();
        Ok(day.resolve(&policy)?)
    }
}
