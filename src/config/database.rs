//! Database configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL
    #[serde(default = "default_url")]
    pub url: String,

    /// Maximum connections allowed
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Create the database file on startup if absent
    #[serde(default = "default_create_if_missing")]
    pub create_if_missing: bool,
}

impl DatabaseConfig {
    /// Get acquire timeout as Duration
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE_URL"));
        }
        if !self.url.starts_with("sqlite:") {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.max_connections == 0 || self.max_connections > 100 {
            return Err(ValidationError::InvalidPoolSize);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            create_if_missing: default_create_if_missing(),
        }
    }
}

fn default_url() -> String {
    "sqlite://players.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout() -> u64 {
    30
}

fn default_create_if_missing() -> bool {
    true
}
