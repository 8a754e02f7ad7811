//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid database URL format (expected sqlite:)")]
    InvalidDatabaseUrl,

    #[error("Pool size must be between 1 and 100")]
    InvalidPoolSize,

    #[error("Public base URL must start with http:// or https://")]
    InvalidPublicBaseUrl,

    #[error("Dashboard password must not be empty when set")]
    EmptyDashboardPassword,
}
