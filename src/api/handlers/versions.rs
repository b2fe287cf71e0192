//! Handlers for version history endpoints (list, draft, publish).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
};
use validator::Validate;

use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::version::{CreateDraftRequest, ListVersionsResponse, VersionResponse};
use crate::api::extract_user::user_id_from_headers;
use crate::application::commands::{CreateDraftCommand, PublishVersionCommand};
use crate::error::AppError;
use crate::state::AppState;

/// Lists a minisite's version history, newest first.
///
/// # Endpoint
///
/// `GET /api/minisites/{id}/versions?limit=50&offset=0`
pub async fn list_versions_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ListVersionsResponse>, AppError> {
    let user_id = user_id_from_headers(&headers)?;
    let (limit, offset) = params.validate()?;

    let versions = state
        .version_service
        .list_versions(&id, user_id, limit, offset)
        .await?;

    Ok(Json(ListVersionsResponse {
        items: versions.into_iter().map(VersionResponse::from).collect(),
    }))
}

/// Creates a draft version with the next version number.
///
/// # Endpoint
///
/// `POST /api/minisites/{id}/versions`
pub async fn create_draft_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<CreateDraftRequest>,
) -> Result<(StatusCode, Json<VersionResponse>), AppError> {
    let user_id = user_id_from_headers(&headers)?;
    payload.validate()?;

    let command = CreateDraftCommand::new(
        id,
        user_id,
        payload.label,
        payload.comment,
        payload.site_json,
    )?;

    let version = state.version_service.create_draft(command).await?;

    Ok((StatusCode::CREATED, Json(version.into())))
}

/// Publishes a draft version, making it the content served on the
/// minisite's public URL.
///
/// # Endpoint
///
/// `POST /api/minisites/{id}/versions/{version_id}/publish`
///
/// # Errors
///
/// Returns 404 if the minisite or version is missing, 409 if the version
/// is not a draft.
pub async fn publish_version_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, version_id)): Path<(String, i64)>,
) -> Result<Json<VersionResponse>, AppError> {
    let user_id = user_id_from_headers(&headers)?;

    let command = PublishVersionCommand::new(id, version_id, user_id)?;
    let version = state.version_service.publish_version(command).await?;

    Ok(Json(version.into()))
}
