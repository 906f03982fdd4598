// src/application/commands/media/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{
        media_files::MediaFileStore, security::ShareLinkSigner, time::LocalClock,
    },
    domain::{audit::AuditLogRepository, media::MediaRepository, settings::SettingsRepository},
};

pub struct MediaCommandService {
    pub(super) repo: Arc<dyn MediaRepository>,
    pub(super) files: Arc<dyn MediaFileStore>,
    pub(super) signer: Arc<dyn ShareLinkSigner>,
    pub(super) settings: Arc<dyn SettingsRepository>,
    pub(super) audit: Arc<dyn AuditLogRepository>,
    pub(super) clock: LocalClock,
}

impl MediaCommandService {
    pub fn new(
        repo: Arc<dyn MediaRepository>,
        files: Arc<dyn MediaFileStore>,
        signer: Arc<dyn ShareLinkSigner>,
        settings: Arc<dyn SettingsRepository>,
        audit: Arc<dyn AuditLogRepository>,
        clock: LocalClock,
    ) -> Self {
        Self {
            repo,
            files,
            signer,
            settings,
            audit,
            clock,
        }
    }
}
