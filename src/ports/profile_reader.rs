//! ProfileReader port for profile query operations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{foundation::DomainError, player::Slug};

/// Lightweight (name, slug) pair for the listing pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileListing {
    pub name: String,
    pub slug: Slug,
}

/// Query operations for player profiles.
#[async_trait]
pub trait ProfileReader: Send + Sync {
    /// All stored profiles as (name, slug) pairs, unspecified order.
    async fn list_all(&self) -> Result<Vec<ProfileListing>, DomainError>;
}
