// src/domain/settings/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::settings::entity::{Settings, UserPreferences};
use async_trait::async_trait;

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn load(&self) -> DomainResult<Settings>;

    async fn save(&self, settings: Settings) -> DomainResult<()>;

    async fn save_preferences(&self, email: &str, prefs: UserPreferences) -> DomainResult<()>;
}
