//! Handlers for review endpoints (list, create).
//!
//! Reviews are submitted by visitors, so neither endpoint requires the
//! acting-user header; when present on create it records the submitter.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
};
use validator::Validate;

use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::review::{CreateReviewRequest, ListReviewsResponse, ReviewResponse};
use crate::api::extract_user::optional_user_id_from_headers;
use crate::application::commands::AddReviewCommand;
use crate::error::AppError;
use crate::state::AppState;

/// Lists approved reviews for a minisite, newest first.
///
/// # Endpoint
///
/// `GET /api/minisites/{id}/reviews?limit=50&offset=0`
pub async fn list_reviews_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ListReviewsResponse>, AppError> {
    let (limit, offset) = params.validate()?;

    let reviews = state.review_service.list_reviews(&id, limit, offset).await?;

    Ok(Json(ListReviewsResponse {
        items: reviews.into_iter().map(ReviewResponse::from).collect(),
    }))
}

/// Adds a review to a minisite.
///
/// # Endpoint
///
/// `POST /api/minisites/{id}/reviews`
///
/// # Errors
///
/// Returns 400 Bad Request on validation failure, 404 if the minisite does
/// not exist.
pub async fn create_review_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ReviewResponse>), AppError> {
    let created_by = optional_user_id_from_headers(&headers)?;
    payload.validate()?;

    let command = AddReviewCommand::new(
        id,
        payload.author_name,
        payload.rating,
        payload.body,
        created_by,
    )?;

    let review = state.review_service.add_review(command).await?;

    Ok((StatusCode::CREATED, Json(review.into())))
}
