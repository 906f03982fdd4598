use std::sync::Arc;

use crate::{
    application::ports::{security::ShareLinkSigner, time::LocalClock},
    domain::{media::MediaRepository, settings::SettingsRepository},
};

pub struct MediaQueryService {
    pub(super) repo: Arc<dyn MediaRepository>,
    pub(super) signer: Arc<dyn ShareLinkSigner>,
    pub(super) settings: Arc<dyn SettingsRepository>,
    pub(super) clock: LocalClock,
}

impl MediaQueryService {
    pub fn new(
        repo: Arc<dyn MediaRepository>,
        signer: Arc<dyn ShareLinkSigner>,
        settings: Arc<dyn SettingsRepository>,
        clock: LocalClock,
    ) -> Self {
        Self {
            repo,
            signer,
            settings,
            clock,
        }
    }
}
