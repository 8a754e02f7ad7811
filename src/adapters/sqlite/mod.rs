//! SQLite adapters for the profile store ports.

mod profile_reader;
mod profile_repository;

pub use profile_reader::SqliteProfileReader;
pub use profile_repository::SqliteProfileRepository;

use sqlx::SqlitePool;

use crate::domain::foundation::DomainError;

/// Creates the `players` table if it does not exist yet.
///
/// Ran once on startup. The UNIQUE constraint on `private_url` is what
/// makes profile creation an atomic insert-if-absent: concurrent
/// creations racing on the same slug resolve to exactly one winner.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), DomainError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS players (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            age INTEGER NOT NULL,
            position TEXT NOT NULL,
            force INTEGER NOT NULL,
            agility INTEGER NOT NULL,
            vision INTEGER NOT NULL,
            private_url TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| DomainError::database(format!("Failed to create players table: {}", e)))?;

    Ok(())
}
