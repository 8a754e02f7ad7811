//! HTTP DTOs for profile endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Form body of `POST /create-profile/`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfileForm {
    pub name: String,
    pub age: i64,
    pub position: String,
    pub force: i64,
    pub agility: i64,
    pub vision: i64,
}

/// Query parameters of `GET /profile/{private_url}`.
///
/// `player_id` is only consulted under the owner-check variant.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileQueryParams {
    pub player_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response of a successful profile creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfileResponse {
    pub player_id: String,
    pub profile_url: String,
}

/// Error payload for JSON endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
