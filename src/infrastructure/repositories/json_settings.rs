// src/infrastructure/repositories/json_settings.rs
use super::SETTINGS_FILE;
use crate::domain::errors::DomainResult;
use crate::domain::settings::{Settings, SettingsRepository, UserPreferences};
use crate::infrastructure::json_store::JsonStore;
use async_trait::async_trait;
use std::sync::Arc;

pub struct JsonSettingsRepository {
    store: Arc<JsonStore>,
}

impl JsonSettingsRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SettingsRepository for JsonSettingsRepository {
    async fn load(&self) -> DomainResult<Settings> {
        self.store.read(SETTINGS_FILE).await
    }

    async fn save(&self, settings: Settings) -> DomainResult<()> {
        self.store.write(SETTINGS_FILE, &settings).await
    }

    async fn save_preferences(&self, email: &str, prefs: UserPreferences) -> DomainResult<()> {
        let email = email.trim().to_lowercase();
        self.store
            .update(SETTINGS_FILE, move |settings: &mut Settings| {
                settings
                    .user_preferences
                    .retain(|k, _| !k.eq_ignore_ascii_case(&email));
                settings.user_preferences.insert(email, prefs);
                Ok(())
            })
            .await
    }
}
