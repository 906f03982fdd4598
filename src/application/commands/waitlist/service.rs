// src/application/commands/waitlist/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{notifier::Notifier, time::LocalClock},
    domain::{audit::AuditLogRepository, settings::SettingsRepository, waitlist::WaitlistRepository},
};

pub struct WaitlistCommandService {
    pub(super) repo: Arc<dyn WaitlistRepository>,
    pub(super) audit: Arc<dyn AuditLogRepository>,
    pub(super) settings: Arc<dyn SettingsRepository>,
    pub(super) notifier: Arc<dyn Notifier>,
    pub(super) clock: LocalClock,
}

impl WaitlistCommandService {
    pub fn new(
        repo: Arc<dyn WaitlistRepository>,
        audit: Arc<dyn AuditLogRepository>,
        settings: Arc<dyn SettingsRepository>,
        notifier: Arc<dyn Notifier>,
        clock: LocalClock,
    ) -> Self {
        Self {
            repo,
            audit,
            settings,
            notifier,
            clock,
        }
    }
}
