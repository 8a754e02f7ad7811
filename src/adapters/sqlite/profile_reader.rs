//! SQLite adapter for ProfileReader

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use crate::domain::{foundation::DomainError, player::Slug};
use crate::ports::{ProfileListing, ProfileReader};

/// SQLite implementation of ProfileReader
pub struct SqliteProfileReader {
    pool: SqlitePool,
}

impl SqliteProfileReader {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileReader for SqliteProfileReader {
    async fn list_all(&self) -> Result<Vec<ProfileListing>, DomainError> {
        let rows = sqlx::query("SELECT name, private_url FROM players")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to list profiles: {}", e)))?;

        Ok(rows
            .into_iter()
            .map(|row| ProfileListing {
                name: row.get("name"),
                slug: Slug::from_raw(row.get::<String, _>("private_url")),
            })
            .collect())
    }
}
