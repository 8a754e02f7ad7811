//! GetProfile - Query handler for fetching a profile by slug.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::player::{authorize_owner, PlayerProfile, Slug};
use crate::ports::ProfileRepository;

/// Query for a single profile.
///
/// `caller_id` is the identifier supplied by the caller (the `player_id`
/// query parameter); it is only consulted when the owner check is enabled.
#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub slug: Slug,
    pub caller_id: Option<String>,
}

/// Handler for profile reads.
///
/// With `owner_check` disabled (public-sharing variant) any holder of the
/// URL may view the profile. With it enabled, the caller-supplied
/// identifier must match the stored owner identifier exactly.
pub struct GetProfileHandler {
    repository: Arc<dyn ProfileRepository>,
    owner_check: bool,
}

impl GetProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>, owner_check: bool) -> Self {
        Self {
            repository,
            owner_check,
        }
    }

    pub async fn handle(&self, query: GetProfileQuery) -> Result<PlayerProfile, DomainError> {
        let profile = self
            .repository
            .find_by_slug(&query.slug)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::NotFound, "Profile not found"))?;

        if self.owner_check {
            authorize_owner(profile.owner_id(), query.caller_id.as_deref())?;
        }

        Ok(profile)
    }
}
