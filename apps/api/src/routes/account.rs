//! Profile and settings endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::errors::AppError;
use crate::models::profile::{ProfilePatch, UserProfile};
use crate::models::settings::{SettingsPatch, UserSettings};
use crate::state::AppState;

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
) -> Result<Json<UserProfile>, AppError> {
    Ok(Json(state.repo.get_user_profile().await?))
}

/// PATCH /api/v1/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    payload: Result<Json<ProfilePatch>, JsonRejection>,
) -> Result<Json<UserProfile>, AppError> {
    let Json(patch) = payload?;
    Ok(Json(state.repo.update_user_profile(patch).await?))
}

/// GET /api/v1/settings
pub async fn handle_get_settings(
    State(state): State<AppState>,
) -> Result<Json<UserSettings>, AppError> {
    Ok(Json(state.repo.get_user_settings().await?))
}

/// PATCH /api/v1/settings
pub async fn handle_update_settings(
    State(state): State<AppState>,
    payload: Result<Json<SettingsPatch>, JsonRejection>,
) -> Result<Json<UserSettings>, AppError> {
    let Json(patch) = payload?;
    Ok(Json(state.repo.update_user_settings(patch).await?))
}
