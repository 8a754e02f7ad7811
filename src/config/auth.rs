//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Authentication configuration (dashboard password gate)
///
/// The password is optional: when unset, the `/auth` endpoint rejects
/// every attempt, which effectively disables the dashboard gate.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AuthConfig {
    /// Password accepted by `POST /auth`
    #[serde(default)]
    pub dashboard_password: Option<String>,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(password) = &self.dashboard_password {
            if password.is_empty() {
                return Err(ValidationError::EmptyDashboardPassword);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_password_is_valid() {
        assert!(AuthConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_password_is_rejected() {
        let config = AuthConfig {
            dashboard_password: Some(String::new()),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_set_password_is_valid() {
        let config = AuthConfig {
            dashboard_password: Some("hunter2".to_string()),
        };
        assert!(config.validate().is_ok());
    }
}
