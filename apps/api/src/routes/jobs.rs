use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::query::JobFilters;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobPosting>,
    pub active_filters: usize,
}

/// GET /api/v1/jobs
pub async fn handle_get_jobs(
    State(state): State<AppState>,
) -> Result<Json<JobListResponse>, AppError> {
    let jobs = state.repo.get_jobs().await?;
    Ok(Json(JobListResponse {
        jobs,
        active_filters: 0,
    }))
}

/// POST /api/v1/jobs/search
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    payload: Result<Json<JobFilters>, JsonRejection>,
) -> Result<Json<JobListResponse>, AppError> {
    let Json(filters) = payload?;
    let jobs = state.repo.search_jobs(&filters).await?;
    Ok(Json(JobListResponse {
        jobs,
        active_filters: filters.active_count(),
    }))
}

/// GET /api/v1/alerts/:id/matches
///
/// Re-runs a saved job alert against the current feed.
pub async fn handle_alert_matches(
    State(state): State<AppState>,
    Path(alert_id): Path<String>,
) -> Result<Json<JobListResponse>, AppError> {
    let settings = state.repo.get_user_settings().await?;
    let alert = settings
        .find_alert(&alert_id)
        .ok_or_else(|| AppError::NotFound(format!("Job alert {alert_id} not found")))?;

    let jobs = state.repo.get_jobs().await?;
    Ok(Json(JobListResponse {
        jobs: alert.run(&jobs),
        active_filters: alert.filters.active_count(),
    }))
}
