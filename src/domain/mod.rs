//! Domain layer - the logical core of the service.

pub mod foundation;
pub mod player;
