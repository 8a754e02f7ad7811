//! CreateProfile - Command handler for creating player profiles.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::player::{PlayerProfile, Slug};
use crate::ports::ProfileRepository;

/// Command to create a new player profile.
#[derive(Debug, Clone)]
pub struct CreateProfileCommand {
    pub name: String,
    pub age: i64,
    pub position: String,
    pub force: i64,
    pub agility: i64,
    pub vision: i64,
}

/// Result of successful profile creation.
#[derive(Debug, Clone)]
pub struct CreateProfileResult {
    pub player_id: Slug,
}

/// Handler for creating profiles.
pub struct CreateProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl CreateProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    /// Derives the slug from the name and persists the profile.
    ///
    /// Creation is a single atomic insert: the repository's uniqueness
    /// constraint decides collisions, so there is no separate existence
    /// check to race against. Names that share a slug (same name, or names
    /// equal in the first 15 characters of their slugified form) fail with
    /// `DuplicateSlug`.
    pub async fn handle(
        &self,
        cmd: CreateProfileCommand,
    ) -> Result<CreateProfileResult, DomainError> {
        let profile = PlayerProfile::new(
            cmd.name,
            cmd.age,
            cmd.position,
            cmd.force,
            cmd.agility,
            cmd.vision,
        );
        let player_id = profile.slug.clone();

        self.repository.insert(&profile).await?;

        Ok(CreateProfileResult { player_id })
    }
}
