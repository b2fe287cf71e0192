//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, service wiring, and the Axum
//! server lifecycle.

use crate::application::rewrite::RouteRegistrar;
use crate::application::services::{ConfigService, MinisiteService, ReviewService, VersionService};
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgConfigRepository, PgMinisiteRepository, PgReviewRepository, PgVersionRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Migrations
/// - Repositories, services, and the rewrite-rule table
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let pool = Arc::new(pool);
    let minisite_repository = Arc::new(PgMinisiteRepository::new(pool.clone()));
    let version_repository = Arc::new(PgVersionRepository::new(pool.clone()));
    let review_repository = Arc::new(PgReviewRepository::new(pool.clone()));
    let config_repository = Arc::new(PgConfigRepository::new(pool.clone()));

    let state = AppState {
        minisite_service: Arc::new(MinisiteService::new(minisite_repository.clone())),
        version_service: Arc::new(VersionService::new(
            minisite_repository.clone(),
            version_repository,
        )),
        review_service: Arc::new(ReviewService::new(minisite_repository, review_repository)),
        config_service: Arc::new(ConfigService::new(config_repository)),
        registrar: Arc::new(RouteRegistrar::new()),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .await?;

    Ok(())
}
