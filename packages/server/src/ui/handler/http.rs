//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    infrastructure::dto::{
        http::{CreateCommentRequest, CreateJobRequest, HealthDto},
        payload::{CommentDto, JobDto, WorkerDto},
    },
    ui::{error::ApiError, state::AppState},
};

/// Confirmation body of `DELETE /api/comments`
pub const CLEARED_MESSAGE: &str = "Dashboard Cleared";

/// `POST /api/comments`
pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CommentDto>), ApiError> {
    let Json(request) = payload?;
    let comment = state
        .submit_comment_usecase
        .execute(request.user_name, request.text, request.worker_id)
        .await?;
    Ok((StatusCode::CREATED, Json(CommentDto::from(&comment))))
}

/// `GET /api/comments`
pub async fn list_comments(State(state): State<Arc<AppState>>) -> Json<Vec<CommentDto>> {
    let comments = state.get_comments_usecase.execute().await;
    Json(comments.iter().map(CommentDto::from).collect())
}

/// `DELETE /api/comments`
pub async fn clear_comments(
    State(state): State<Arc<AppState>>,
) -> Result<&'static str, ApiError> {
    state.clear_comments_usecase.execute().await?;
    Ok(CLEARED_MESSAGE)
}

/// `POST /api/jobs`
pub async fn create_job(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateJobRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<JobDto>), ApiError> {
    let Json(request) = payload?;
    let job = state.submit_job_usecase.execute(request.url).await?;
    Ok((StatusCode::CREATED, Json(JobDto::from(&job))))
}

/// `GET /api/jobs`: pending jobs only
pub async fn list_pending_jobs(State(state): State<Arc<AppState>>) -> Json<Vec<JobDto>> {
    let jobs = state.get_pending_jobs_usecase.execute().await;
    Json(jobs.iter().map(JobDto::from).collect())
}

/// `GET /api/workers`
pub async fn list_workers(State(state): State<Arc<AppState>>) -> Json<Vec<WorkerDto>> {
    let workers = state.get_workers_usecase.execute().await;
    Json(workers.iter().map(WorkerDto::from).collect())
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}
