//! ProfileRepository port for profile persistence operations.

use async_trait::async_trait;

use crate::domain::{
    foundation::DomainError,
    player::{PlayerProfile, Slug},
};

/// Repository for managing player profiles.
///
/// The store exclusively owns all profile records; nothing else mutates
/// them. There is no update or delete: profiles live until out-of-band
/// administrative deletion.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Persist a new profile as a single atomic insert.
    ///
    /// Implementations must not pre-check existence: the uniqueness
    /// constraint on the slug is the arbiter, and a constraint violation
    /// surfaces as `ErrorCode::DuplicateSlug` with no write performed.
    /// Concurrent creations racing on the same slug therefore resolve to
    /// exactly one winner.
    async fn insert(&self, profile: &PlayerProfile) -> Result<(), DomainError>;

    /// Point lookup by unique slug.
    ///
    /// Absence returns `Ok(None)`, never a partial record.
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<PlayerProfile>, DomainError>;
}
