//! HTTP routes for the password gate.

use axum::{routing::post, Router};

use super::handlers::{authenticate, AuthHandlers};

/// Creates the auth router.
pub fn auth_routes(handlers: AuthHandlers) -> Router {
    Router::new()
        .route("/auth", post(authenticate))
        .with_state(handlers)
}
