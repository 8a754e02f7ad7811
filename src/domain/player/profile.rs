//! PlayerProfile entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Slug;

/// A stored player record with numeric attributes and a position label.
///
/// The slug doubles as the primary key, the public URL segment, and the
/// owner identifier consulted by the access guard. Profiles are created
/// once and never updated or deleted by this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub slug: Slug,
    pub name: String,
    pub age: i64,
    pub position: String,
    pub force: i64,
    pub agility: i64,
    pub vision: i64,
    pub created_at: DateTime<Utc>,
}

impl PlayerProfile {
    /// Builds a new profile, deriving the slug from the display name.
    pub fn new(
        name: impl Into<String>,
        age: i64,
        position: impl Into<String>,
        force: i64,
        agility: i64,
        vision: i64,
    ) -> Self {
        let name = name.into();
        Self {
            slug: Slug::derive(&name),
            name,
            age,
            position: position.into(),
            force,
            agility,
            vision,
            created_at: Utc::now(),
        }
    }

    /// The identifier a caller must supply to pass the owner check.
    ///
    /// Equal to the slug itself. This makes the "secret" guessable from
    /// the public URL; the behavior is kept deliberately rather than
    /// silently strengthened.
    pub fn owner_id(&self) -> &str {
        self.slug.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_derives_slug_from_name() {
        let profile = PlayerProfile::new("Jane Doe", 27, "Striker", 80, 75, 90);
        assert_eq!(profile.slug.as_str(), "jane-doe");
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.age, 27);
        assert_eq!(profile.position, "Striker");
    }

    #[test]
    fn owner_id_equals_slug() {
        let profile = PlayerProfile::new("Jane Doe", 27, "Striker", 80, 75, 90);
        assert_eq!(profile.owner_id(), "jane-doe");
    }

    #[test]
    fn same_name_same_slug() {
        let a = PlayerProfile::new("Jane Doe", 27, "Striker", 80, 75, 90);
        let b = PlayerProfile::new("Jane Doe", 31, "Keeper", 60, 50, 70);
        assert_eq!(a.slug, b.slug);
    }
}
