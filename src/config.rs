// src/config.rs
use crate::infrastructure::time::parse_utc_offset;
use chrono::FixedOffset;
use std::{env, path::PathBuf, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    data_dir: PathBuf,
    uploads_dir: PathBuf,
    listen_addr: String,
    utc_offset: FixedOffset,
    notify_queue_capacity: usize,
    notify_max_attempts: u32,
    notify_initial_backoff: Duration,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

/// Reads `key`, falling back to `default` when unset. A set but
/// unparsable value is an error naming the key.
fn parse_var<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("{key}: cannot parse '{raw}'"))),
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    /// Build configuration from environment variables, loading `.env` first
    /// when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let data_dir = env::var("PORTAL_DATA_DIR").unwrap_or_else(|_| "data".into());
        let uploads_dir = env::var("PORTAL_UPLOADS_DIR").unwrap_or_else(|_| "uploads".into());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let raw_offset = env::var("PORTAL_UTC_OFFSET").unwrap_or_else(|_| "+00:00".into());
        let utc_offset = parse_utc_offset(&raw_offset).ok_or_else(|| {
            ConfigError::Invalid(format!("PORTAL_UTC_OFFSET: cannot parse '{raw_offset}'"))
        })?;

        let notify_queue_capacity: usize = parse_var("NOTIFY_QUEUE_CAPACITY", 256)?;
        if notify_queue_capacity == 0 {
            return Err(ConfigError::Invalid(
                "NOTIFY_QUEUE_CAPACITY must be at least 1".into(),
            ));
        }
        let notify_max_attempts: u32 = parse_var("NOTIFY_MAX_ATTEMPTS", 3)?;
        if notify_max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "NOTIFY_MAX_ATTEMPTS must be at least 1".into(),
            ));
        }
        let backoff_ms: u64 = parse_var("NOTIFY_INITIAL_BACKOFF_MS", 500)?;

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            data_dir: data_dir.into(),
            uploads_dir: uploads_dir.into(),
            listen_addr,
            utc_offset,
            notify_queue_capacity,
            notify_max_attempts,
            notify_initial_backoff: Duration::from_millis(backoff_ms),
            allowed_origins,
        })
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn uploads_dir(&self) -> &PathBuf {
        &self.uploads_dir
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Offset of the campus wall clock that slot labels are written in.
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    pub fn notify_queue_capacity(&self) -> usize {
        self.notify_queue_capacity
    }

    pub fn notify_max_attempts(&self) -> u32 {
        self.notify_max_attempts
    }

    pub fn notify_initial_backoff(&self) -> Duration {
        self.notify_initial_backoff
    }

    /// Empty means any origin.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
