//! Handlers for configuration endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::config::{ConfigResponse, SetConfigRequest};
use crate::application::commands::DeleteConfigCommand;
use crate::error::AppError;
use crate::state::AppState;

/// Fetches a configuration entry.
///
/// # Endpoint
///
/// `GET /api/config/{key}`
pub async fn get_config_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ConfigResponse>, AppError> {
    let entry = state.config_service.get(&key).await?;
    Ok(Json(entry.into()))
}

/// Creates or replaces a configuration entry.
///
/// # Endpoint
///
/// `PUT /api/config/{key}`
pub async fn set_config_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(payload): Json<SetConfigRequest>,
) -> Result<Json<ConfigResponse>, AppError> {
    payload.validate()?;

    let entry = state.config_service.set(&key, &payload.value).await?;
    Ok(Json(entry.into()))
}

/// Deletes a configuration entry.
///
/// # Endpoint
///
/// `DELETE /api/config/{key}`
///
/// # Errors
///
/// Returns 404 if the key does not exist, 400 if the key is empty after
/// trailing-slash normalization.
pub async fn delete_config_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode, AppError> {
    let command = DeleteConfigCommand::new(key)?;

    state.config_service.delete(command).await?;

    Ok(StatusCode::NO_CONTENT)
}
