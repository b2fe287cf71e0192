//! Public minisite view served from the rewrite fallback.

use axum::{Json, extract::State, http::Uri};
use serde_json::json;

use crate::api::dto::minisite::MinisiteViewResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Serves `GET /b/{business}/{location}[/]`.
///
/// Installed as the router's fallback: any path no explicit route claimed
/// is run through the rewrite-rule table first, so the minisite rule is
/// evaluated ahead of default not-found handling. A path the registrar
/// does not resolve is an ordinary 404, not an error of this layer.
///
/// # Errors
///
/// Returns 404 if no rule matches or no published minisite exists at the
/// resolved route key.
pub async fn minisite_view_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<MinisiteViewResponse>, AppError> {
    let Some(key) = state.registrar.resolve_minisite(uri.path()) else {
        return Err(AppError::not_found(
            "No route matched",
            json!({ "path": uri.path() }),
        ));
    };

    let minisite = state.minisite_service.get_by_route(&key).await?;

    // A published minisite always has a current version; a missing one is
    // an integrity fault, not a user-facing 404.
    let version_id = minisite.current_version_id.ok_or_else(|| {
        AppError::internal(
            "Published minisite has no current version",
            json!({ "id": minisite.id }),
        )
    })?;

    let version = state
        .version_service
        .find_public(&minisite.id, version_id)
        .await?;

    Ok(Json(MinisiteViewResponse {
        business: minisite.business_slug,
        location: minisite.location_slug,
        title: minisite.title,
        content: version.site_json,
    }))
}
