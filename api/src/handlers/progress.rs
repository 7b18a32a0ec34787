//! Progress handlers
//!
//! Read-only pages over the completed-sections log.

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};

use crate::app::StudentProgress;
use crate::error::AppError;
use crate::views::{render_progress_index, render_section_detail, render_student_progress};
use crate::AppState;

/// GET /progress
pub async fn get_progress(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let students = state.progress_service.overview().await?;
    Ok(Html(render_progress_index(&students)))
}

/// GET /progress/student/:name
pub async fn get_student_progress(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Html<String>, AppError> {
    let progress = state.progress_service.student_progress(&name).await?;
    Ok(Html(render_student_progress(&progress)))
}

/// GET /progress/student/:name/section/:index
pub async fn get_section_detail(
    State(state): State<AppState>,
    Path((name, index)): Path<(String, usize)>,
) -> Result<Html<String>, AppError> {
    let detail = state.progress_service.section_detail(&name, index).await?;
    Ok(Html(render_section_detail(&detail)))
}

/// GET /api/progress/:name
pub async fn get_student_progress_json(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StudentProgress>, AppError> {
    Ok(Json(state.progress_service.student_progress(&name).await?))
}
