//! Scoutbook server binary.
//!
//! Loads configuration, opens the SQLite pool, creates the players table
//! if absent, and serves the HTTP surface.

use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use scoutbook::adapters::http::{app_router, AuthHandlers, ProfileHandlers};
use scoutbook::adapters::sqlite::{init_schema, SqliteProfileReader, SqliteProfileRepository};
use scoutbook::application::handlers::player::{
    CreateProfileHandler, GetProfileHandler, ListProfilesHandler,
};
use scoutbook::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let connect_options: SqliteConnectOptions = config
        .database
        .url
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(config.database.create_if_missing);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect_with(connect_options)
        .await?;

    init_schema(&pool).await?;
    tracing::info!(url = %config.database.url, "database ready");

    let repository = Arc::new(SqliteProfileRepository::new(pool.clone()));
    let reader = Arc::new(SqliteProfileReader::new(pool));

    let profile_handlers = ProfileHandlers::new(
        Arc::new(CreateProfileHandler::new(repository.clone())),
        Arc::new(GetProfileHandler::new(
            repository,
            config.features.owner_check,
        )),
        Arc::new(ListProfilesHandler::new(reader)),
        config.server.public_base_url.as_str(),
    );
    let auth_handlers = AuthHandlers::new(config.auth.dashboard_password.clone());

    let app = app_router(profile_handlers, auth_handlers).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(std::time::Duration::from_secs(
                config.server.request_timeout_secs,
            ))),
    );

    let addr = config.server.socket_addr();
    tracing::info!(%addr, owner_check = config.features.owner_check, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
