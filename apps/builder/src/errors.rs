use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::editors::EditorError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<EditorError> for AppError {
    fn from(e: EditorError) -> Self {
        match e {
            EditorError::EntryNotFound(_) | EditorError::SkillOutOfRange { .. } => {
                AppError::NotFound(e.to_string())
            }
            EditorError::EmptySkill | EditorError::DuplicateSkill(_) => {
                AppError::Validation(e.to_string())
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::Generation(msg) => (StatusCode::BAD_GATEWAY, "GENERATION_FAILED", msg.clone()),
            AppError::Export(msg) => {
                tracing::error!("Export error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXPORT_FAILED",
                    "Failed to export resume. Please try again.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::EntryId;

    #[test]
    fn test_editor_errors_map_to_status_codes() {
        let not_found: AppError = EditorError::EntryNotFound(EntryId::from("x")).into();
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let out_of_range: AppError = EditorError::SkillOutOfRange { index: 3, len: 1 }.into();
        assert_eq!(out_of_range.into_response().status(), StatusCode::NOT_FOUND);

        let duplicate: AppError = EditorError::DuplicateSkill("Rust".to_string()).into();
        assert_eq!(duplicate.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_generation_and_conflict_statuses() {
        assert_eq!(
            AppError::Generation("down".to_string()).into_response().status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Conflict("busy".to_string()).into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Export("io".to_string()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
