//! Handlers for minisite management endpoints (list, create, delete).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
};
use validator::Validate;

use crate::api::dto::minisite::{
    CreateMinisiteRequest, ListMinisitesResponse, MinisiteResponse,
};
use crate::api::dto::pagination::PaginationParams;
use crate::api::extract_user::user_id_from_headers;
use crate::application::commands::ListMinisitesCommand;
use crate::domain::entities::NewMinisite;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the acting user's minisites.
///
/// # Endpoint
///
/// `GET /api/minisites?limit=50&offset=0`
///
/// # Errors
///
/// Returns 400 Bad Request for a missing user header or out-of-range
/// paging parameters.
pub async fn list_minisites_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ListMinisitesResponse>, AppError> {
    let user_id = user_id_from_headers(&headers)?;

    let command = ListMinisitesCommand::new(user_id, params.limit, params.offset)?;
    let limit = command.limit();
    let offset = command.offset();

    let (items, total) = state.minisite_service.list_minisites(command).await?;

    Ok(Json(ListMinisitesResponse {
        items: items.into_iter().map(MinisiteResponse::from).collect(),
        total,
        limit,
        offset,
    }))
}

/// Creates a minisite with its initial draft version.
///
/// # Endpoint
///
/// `POST /api/minisites`
///
/// # Errors
///
/// Returns 400 Bad Request on validation failure, 409 Conflict if the slug
/// pair is already taken.
pub async fn create_minisite_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateMinisiteRequest>,
) -> Result<(StatusCode, Json<MinisiteResponse>), AppError> {
    let user_id = user_id_from_headers(&headers)?;
    payload.validate()?;

    let minisite = state
        .minisite_service
        .create_minisite(NewMinisite {
            business_slug: payload.business_slug,
            location_slug: payload.location_slug,
            title: payload.title,
            owner_user_id: user_id,
            site_json: payload.site_json,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(minisite.into())))
}

/// Soft-deletes a minisite owned by the acting user.
///
/// # Endpoint
///
/// `DELETE /api/minisites/{id}`
pub async fn delete_minisite_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let user_id = user_id_from_headers(&headers)?;

    state.minisite_service.delete_minisite(&id, user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
