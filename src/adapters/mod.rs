//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `sqlite` - Profile store backed by SQLite via sqlx
//! - `http` - axum HTTP surface

pub mod http;
pub mod sqlite;
