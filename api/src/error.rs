//! Unified error types for the Reading Teams API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `SheetsError`: Google Sheets API client errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)
//!
//! Sheets failures never reach the HTTP layer directly: the adapter folds them
//! into `DomainError::StoreUnavailable`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    /// A student references a team with no entry in the team color table
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Record store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Google Sheets API client errors
#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized - invalid or expired credentials")]
    Unauthorized,

    #[error("Rate limited")]
    RateLimited,

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Credentials error: {0}")]
    Credentials(String),

    #[error("Sheet '{sheet}' has no '{column}' column")]
    MissingColumn { sheet: String, column: String },

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),
}

impl From<SheetsError> for DomainError {
    fn from(e: SheetsError) -> Self {
        DomainError::StoreUnavailable(e.to_string())
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()))
            }
            AppError::Domain(DomainError::AlreadyExists(msg)) => {
                (StatusCode::CONFLICT, "Already exists", Some(msg.clone()))
            }
            AppError::Domain(DomainError::MissingConfiguration(msg)) => {
                tracing::error!("Missing configuration: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Missing configuration",
                    Some(msg.clone()),
                )
            }
            AppError::Domain(DomainError::StoreUnavailable(msg)) => {
                tracing::error!("Record store error: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Record store unavailable",
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
