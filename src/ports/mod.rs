//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProfileRepository` - Profile persistence (atomic insert, point lookup)
//! - `ProfileReader` - Profile query operations (listing)

mod profile_reader;
mod profile_repository;

pub use profile_reader::{ProfileListing, ProfileReader};
pub use profile_repository::ProfileRepository;
