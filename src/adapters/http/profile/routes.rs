//! HTTP routes for profile endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_profile, create_profile_form, dashboard, get_profile, landing, list_profiles,
    ProfileHandlers,
};

/// Creates the profile router with all endpoints.
pub fn profile_routes(handlers: ProfileHandlers) -> Router {
    Router::new()
        .route("/", get(landing))
        .route("/create-profile-form", get(create_profile_form))
        .route("/create-profile/", post(create_profile))
        .route("/profiles", get(list_profiles))
        .route("/profile/:private_url", get(get_profile))
        .route("/dashboard", get(dashboard))
        .with_state(handlers)
}
