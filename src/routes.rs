//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /b/{business}/{location}` - public minisite view, resolved through
//!   the rewrite-rule table (fallback, evaluated before default 404)
//! - `GET /health`                  - health check
//! - `/api/*`                       - management API
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Path normalization** - trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, minisite_view_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The rewrite fallback gives the minisite rule "top" priority: it claims
/// `b/{business}/{location}` paths before the default not-found handling,
/// while explicitly routed paths (`/health`, `/api/*`) are never run
/// through the rule table.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .fallback(minisite_view_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
