//! HTTP adapter for the dashboard password gate.

mod handlers;
mod routes;

pub use handlers::{AuthForm, AuthHandlers};
pub use routes::auth_routes;
