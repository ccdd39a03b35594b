#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The decoding collaborator could not turn the upload into plain text.
    #[error("Unsupported document: {0}")]
    UnsupportedDocument(String),

    /// A text-understanding capability (tokenizer, recognizer, scorer) failed.
    /// Never retried or defaulted: a silently degraded score would corrupt
    /// the verdict.
    #[error("Capability failure: {0}")]
    Capability(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnsupportedDocument(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNSUPPORTED_DOCUMENT",
                msg.clone(),
            ),
            AppError::Capability(msg) => {
                tracing::error!("Capability failure: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CAPABILITY_FAILURE",
                    format!("Error processing CV: {msg}"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    format!("Error processing CV: {e}"),
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
