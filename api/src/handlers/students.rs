//! Student handlers
//!
//! Add and delete endpoints used by the roster page.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Redirect,
    Form, Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::AppState;

/// Form body for adding a student
#[derive(Debug, Deserialize)]
pub struct AddStudentForm {
    pub name: String,
    pub team: String,
}

/// Request body for deleting a student
#[derive(Debug, Deserialize)]
pub struct DeleteStudentRequest {
    pub name: String,
}

/// Response body for a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteStudentResponse {
    pub success: bool,
    /// Rows removed; more than one when the name appeared on several rows
    pub removed: usize,
}

/// POST /add_student
///
/// Enrolls a student and sends the browser back to the roster.
pub async fn add_student(
    State(state): State<AppState>,
    Form(form): Form<AddStudentForm>,
) -> Result<Redirect, AppError> {
    state
        .roster_service
        .add_student(&form.name, &form.team)
        .await?;
    Ok(Redirect::to("/roster"))
}

/// POST /delete_student
///
/// Removes every student with the given name.
pub async fn delete_student(
    State(state): State<AppState>,
    payload: Result<Json<DeleteStudentRequest>, JsonRejection>,
) -> Result<Json<DeleteStudentResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let removed = state.roster_service.delete_student(&request.name).await?;

    Ok(Json(DeleteStudentResponse {
        success: true,
        removed,
    }))
}
