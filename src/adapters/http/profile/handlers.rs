//! HTTP handlers for profile endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};

use crate::application::handlers::player::{
    CreateProfileCommand, CreateProfileHandler, GetProfileHandler, GetProfileQuery,
    ListProfilesHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::player::Slug;

use super::super::pages;
use super::dto::{CreateProfileForm, CreateProfileResponse, ErrorResponse, ProfileQueryParams};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ProfileHandlers {
    create_handler: Arc<CreateProfileHandler>,
    get_handler: Arc<GetProfileHandler>,
    list_handler: Arc<ListProfilesHandler>,
    public_base_url: Arc<str>,
}

impl ProfileHandlers {
    pub fn new(
        create_handler: Arc<CreateProfileHandler>,
        get_handler: Arc<GetProfileHandler>,
        list_handler: Arc<ListProfilesHandler>,
        public_base_url: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            list_handler,
            public_base_url: public_base_url.into(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Static landing page
pub async fn landing() -> Html<String> {
    Html(pages::landing_page())
}

/// GET /create-profile-form - Profile creation form
pub async fn create_profile_form() -> Html<String> {
    Html(pages::create_form_page())
}

/// POST /create-profile/ - Create a new profile
pub async fn create_profile(
    State(handlers): State<ProfileHandlers>,
    Form(form): Form<CreateProfileForm>,
) -> Response {
    let cmd = CreateProfileCommand {
        name: form.name,
        age: form.age,
        position: form.position,
        force: form.force,
        agility: form.agility,
        vision: form.vision,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(result) => {
            let response = CreateProfileResponse {
                player_id: result.player_id.to_string(),
                profile_url: format!(
                    "{}/profile/{}",
                    handlers.public_base_url, result.player_id
                ),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => json_error(e),
    }
}

/// GET /profiles - HTML list of all profiles
pub async fn list_profiles(State(handlers): State<ProfileHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(listings) => {
            Html(pages::listing_page(&listings, &handlers.public_base_url)).into_response()
        }
        Err(e) => html_error(e),
    }
}

/// GET /dashboard - Listing page behind the password gate's redirect
pub async fn dashboard(State(handlers): State<ProfileHandlers>) -> Response {
    list_profiles(State(handlers)).await
}

/// GET /profile/{private_url} - HTML profile page
pub async fn get_profile(
    State(handlers): State<ProfileHandlers>,
    Path(private_url): Path<String>,
    Query(params): Query<ProfileQueryParams>,
) -> Response {
    let query = GetProfileQuery {
        slug: Slug::from_raw(private_url),
        caller_id: params.player_id,
    };

    match handlers.get_handler.handle(query).await {
        Ok(profile) => {
            Html(pages::profile_page(&profile, &handlers.public_base_url)).into_response()
        }
        Err(e) => html_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::DuplicateSlug | ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Unauthorized => StatusCode::FORBIDDEN,
        ErrorCode::IncorrectPassword => StatusCode::UNAUTHORIZED,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn json_error(error: DomainError) -> Response {
    let status = status_for(error.code());
    let body = ErrorResponse::new(error.code().to_string(), error.message());
    (status, Json(body)).into_response()
}

fn html_error(error: DomainError) -> Response {
    let status = status_for(error.code());
    let title = status
        .canonical_reason()
        .unwrap_or("Error");
    (status, Html(pages::error_page(title, error.message()))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_slug_maps_to_400() {
        let error = DomainError::new(ErrorCode::DuplicateSlug, "already exists");
        assert_eq!(json_error(error).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let error = DomainError::new(ErrorCode::NotFound, "Profile not found");
        assert_eq!(html_error(error).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unauthorized_maps_to_403() {
        let error = DomainError::new(ErrorCode::Unauthorized, "player_id mismatch");
        assert_eq!(html_error(error).status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn incorrect_password_maps_to_401() {
        let error = DomainError::new(ErrorCode::IncorrectPassword, "wrong password");
        assert_eq!(json_error(error).status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn database_error_maps_to_500() {
        let error = DomainError::database("connection lost");
        assert_eq!(json_error(error).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
