use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::application::{Application, ApplicationStatus};
use crate::state::AppState;
use crate::tracker::ApplicationStats;

#[derive(Debug, Serialize)]
pub struct ApplicationListResponse {
    pub applications: Vec<Application>,
    pub stats: ApplicationStats,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: ApplicationStatus,
}

#[derive(Debug, Deserialize)]
pub struct NoteRequest {
    pub content: String,
}

/// GET /api/v1/applications
pub async fn handle_get_applications(
    State(state): State<AppState>,
) -> Result<Json<ApplicationListResponse>, AppError> {
    let applications = state.repo.get_applications().await?;
    let stats = ApplicationStats::from_applications(&applications);
    Ok(Json(ApplicationListResponse {
        applications,
        stats,
    }))
}

/// GET /api/v1/applications/stats
pub async fn handle_application_stats(
    State(state): State<AppState>,
) -> Result<Json<ApplicationStats>, AppError> {
    let applications = state.repo.get_applications().await?;
    Ok(Json(ApplicationStats::from_applications(&applications)))
}

/// PATCH /api/v1/applications/:id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<StatusUpdate>, JsonRejection>,
) -> Result<Json<Application>, AppError> {
    let Json(req) = payload?;
    let updated = state.repo.update_application_status(&id, req.status).await?;
    Ok(Json(updated))
}

/// POST /api/v1/applications/:id/notes
pub async fn handle_add_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NoteRequest>, JsonRejection>,
) -> Result<Json<Application>, AppError> {
    let Json(req) = payload?;
    let updated = state.repo.add_application_note(&id, &req.content).await?;
    Ok(Json(updated))
}
