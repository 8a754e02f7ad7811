//! Slug value object - the name-derived identifier.
//!
//! A slug is both the primary key of a profile and its public URL segment.
//! It is derived deterministically from the display name, which is the
//! source of the service's uniqueness policy: two players whose names
//! slugify to the same first 15 characters cannot both be stored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum slug length in characters.
const MAX_SLUG_CHARS: usize = 15;

/// Short, human-readable identifier derived from a player name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Derives a slug from a display name.
    ///
    /// Lowercases the name, splits on whitespace, rejoins the tokens with
    /// hyphens, and truncates to the first 15 characters. Deterministic:
    /// the same name always yields the same slug. An empty (or
    /// all-whitespace) name yields an empty slug; that edge case is
    /// accepted, not rejected.
    pub fn derive(name: &str) -> Self {
        let joined = name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        Self(joined.chars().take(MAX_SLUG_CHARS).collect())
    }

    /// Wraps a raw string, e.g. a URL path segment, without re-deriving.
    ///
    /// Lookups take caller-supplied slugs verbatim; an unknown slug is a
    /// not-found at the store, not a validation failure here.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Slug {
    fn from(raw: String) -> Self {
        Self::from_raw(raw)
    }
}
