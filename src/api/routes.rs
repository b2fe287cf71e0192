//! API route configuration.

use crate::api::handlers::{
    create_draft_handler, create_minisite_handler, create_review_handler, delete_config_handler,
    delete_minisite_handler, get_config_handler, list_minisites_handler, list_reviews_handler,
    list_versions_handler, publish_version_handler, set_config_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All management API routes.
///
/// # Endpoints
///
/// - `GET    /minisites`                                  - List the acting user's minisites
/// - `POST   /minisites`                                  - Create a minisite (+ initial version)
/// - `DELETE /minisites/{id}`                             - Soft-delete a minisite
/// - `GET    /minisites/{id}/versions`                    - Version history
/// - `POST   /minisites/{id}/versions`                    - Create a draft version
/// - `POST   /minisites/{id}/versions/{version_id}/publish` - Publish a draft
/// - `GET    /minisites/{id}/reviews`                     - Approved reviews
/// - `POST   /minisites/{id}/reviews`                     - Add a review
/// - `GET    /config/{key}`                               - Fetch a config entry
/// - `PUT    /config/{key}`                               - Set a config entry
/// - `DELETE /config/{key}`                               - Delete a config entry
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/minisites",
            get(list_minisites_handler).post(create_minisite_handler),
        )
        .route(
            "/minisites/{id}",
            axum::routing::delete(delete_minisite_handler),
        )
        .route(
            "/minisites/{id}/versions",
            get(list_versions_handler).post(create_draft_handler),
        )
        .route(
            "/minisites/{id}/versions/{version_id}/publish",
            post(publish_version_handler),
        )
        .route(
            "/minisites/{id}/reviews",
            get(list_reviews_handler).post(create_review_handler),
        )
        .route(
            "/config/{key}",
            get(get_config_handler)
                .put(set_config_handler)
                .delete(delete_config_handler),
        )
}
