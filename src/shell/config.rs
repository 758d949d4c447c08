// Runtime configuration read from the environment.
//
// - WORK_ENTRIES_TOPIC: topic stamped on every outbox row (default work-entries.v1).
// - RUST_LOG: tracing filter directive (default info).

use thiserror::Error;

pub const TOPIC_VAR: &str = "WORK_ENTRIES_TOPIC";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";
pub const DEFAULT_TOPIC: &str = "work-entries.v1";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must not be empty")]
    Empty { name: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub topic: String,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            topic: DEFAULT_TOPIC.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let topic = lookup(TOPIC_VAR).unwrap_or_else(|| DEFAULT_TOPIC.to_string());
        if topic.trim().is_empty() {
            return Err(ConfigError::Empty { name: TOPIC_VAR });
        }

        let log_filter = lookup(LOG_FILTER_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self { topic, log_filter })
    }
}
