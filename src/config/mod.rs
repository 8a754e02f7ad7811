//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `SCOUTBOOK` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use scoutbook::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod auth;
mod database;
mod error;
mod features;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, public base URL)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (SQLite connection)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Authentication configuration (dashboard password)
    #[serde(default)]
    pub auth: AuthConfig,

    /// Feature flags (owner check variant)
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present, then reads environment variables
    /// with the `SCOUTBOOK` prefix using `__` to separate nested values:
    ///
    /// - `SCOUTBOOK__SERVER__PORT=8000` -> `server.port = 8000`
    /// - `SCOUTBOOK__DATABASE__URL=sqlite://players.db` -> `database.url`
    /// - `SCOUTBOOK__FEATURES__OWNER_CHECK=true` -> `features.owner_check`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SCOUTBOOK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("SCOUTBOOK__SERVER__PORT");
        env::remove_var("SCOUTBOOK__SERVER__ENVIRONMENT");
        env::remove_var("SCOUTBOOK__DATABASE__URL");
        env::remove_var("SCOUTBOOK__FEATURES__OWNER_CHECK");
        env::remove_var("SCOUTBOOK__AUTH__DASHBOARD_PASSWORD");
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.database.url, "sqlite://players.db");
        assert!(!config.features.owner_check);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SCOUTBOOK__SERVER__PORT", "3000");
        env::set_var("SCOUTBOOK__DATABASE__URL", "sqlite://test.db");
        env::set_var("SCOUTBOOK__FEATURES__OWNER_CHECK", "true");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.url, "sqlite://test.db");
        assert!(config.features.owner_check);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SCOUTBOOK__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }
}
