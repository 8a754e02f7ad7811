//! HTTP handlers for the password gate.
//!
//! Single-shot check: no sessions and no tokens. A correct password
//! redirects to the dashboard; an incorrect one is a 401 surfaced
//! directly to the caller.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Deserialize;
use subtle::ConstantTimeEq;

use crate::domain::foundation::ErrorCode;

use super::super::profile::ErrorResponse;

#[derive(Clone)]
pub struct AuthHandlers {
    dashboard_password: Option<Arc<str>>,
}

impl AuthHandlers {
    pub fn new(dashboard_password: Option<String>) -> Self {
        Self {
            dashboard_password: dashboard_password.map(Arc::from),
        }
    }

    /// Compares the supplied password in constant time.
    ///
    /// An unset password rejects everything rather than accepting
    /// everything.
    fn password_matches(&self, supplied: &str) -> bool {
        match &self.dashboard_password {
            Some(expected) => expected
                .as_bytes()
                .ct_eq(supplied.as_bytes())
                .into(),
            None => false,
        }
    }
}

/// Form body of `POST /auth`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthForm {
    pub password: String,
}

/// POST /auth - Password gate for the dashboard
pub async fn authenticate(
    State(handlers): State<AuthHandlers>,
    Form(form): Form<AuthForm>,
) -> Response {
    if handlers.password_matches(&form.password) {
        Redirect::to("/dashboard").into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new(
                ErrorCode::IncorrectPassword.to_string(),
                "Incorrect password",
            )),
        )
            .into_response()
    }
}
