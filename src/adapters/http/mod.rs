//! HTTP adapters - the axum surface of the service.
//!
//! `profile` exposes the profile endpoints (JSON create + HTML reads),
//! `auth` the password gate for the dashboard, and `pages` the inline
//! HTML rendering shared by the HTML endpoints.

pub mod auth;
pub mod pages;
pub mod profile;

use axum::Router;

pub use auth::AuthHandlers;
pub use profile::ProfileHandlers;

/// Assembles the full application router.
pub fn app_router(profile_handlers: ProfileHandlers, auth_handlers: AuthHandlers) -> Router {
    Router::new()
        .merge(profile::profile_routes(profile_handlers))
        .merge(auth::auth_routes(auth_handlers))
}
