//! SQLite adapter for ProfileRepository

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use crate::domain::{
    foundation::{DomainError, ErrorCode},
    player::{PlayerProfile, Slug},
};
use crate::ports::ProfileRepository;

/// SQLite implementation of ProfileRepository
///
/// Holds a shared pool injected at construction; each call acquires a
/// connection from the pool for a single statement.
pub struct SqliteProfileRepository {
    pool: SqlitePool,
}

impl SqliteProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Build a profile from a database row
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> PlayerProfile {
        PlayerProfile {
            slug: Slug::from_raw(row.get::<String, _>("private_url")),
            name: row.get("name"),
            age: row.get("age"),
            position: row.get("position"),
            force: row.get("force"),
            agility: row.get("agility"),
            vision: row.get("vision"),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl ProfileRepository for SqliteProfileRepository {
    async fn insert(&self, profile: &PlayerProfile) -> Result<(), DomainError> {
        // `id` and `private_url` are both the slug; the UNIQUE constraint
        // turns a colliding insert into a rejected statement with no write.
        let result = sqlx::query(
            r#"
            INSERT INTO players (id, name, age, position, force, agility, vision, private_url, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(profile.slug.as_str())
        .bind(&profile.name)
        .bind(profile.age)
        .bind(&profile.position)
        .bind(profile.force)
        .bind(profile.agility)
        .bind(profile.vision)
        .bind(profile.slug.as_str())
        .bind(profile.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Err(DomainError::new(
                ErrorCode::DuplicateSlug,
                "A profile with this name already exists. Please use a different name.",
            )),
            Err(e) => Err(DomainError::database(format!(
                "Failed to insert profile: {}",
                e
            ))),
        }
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<PlayerProfile>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT name, age, position, force, agility, vision, private_url, created_at
            FROM players
            WHERE private_url = ?1
            "#,
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch profile: {}", e)))?;

        Ok(row.as_ref().map(Self::from_row))
    }
}
