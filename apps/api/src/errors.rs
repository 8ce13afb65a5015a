use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::ingest::IngestError;
use crate::scoring::ScoringError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Upload error: {0}")]
    Ingest(#[from] IngestError),

    #[error("Score error: {0}")]
    Scoring(#[from] ScoringError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                msg.clone(),
            ),
            AppError::Ingest(e) => {
                tracing::warn!("Upload rejected: {e}");
                let code = match e {
                    IngestError::UnsupportedFile(_) => "UNSUPPORTED_FILE",
                    IngestError::Extraction(_) => "EXTRACTION_FAILED",
                };
                (StatusCode::BAD_REQUEST, code, e.to_string())
            }
            AppError::Scoring(e) => {
                tracing::warn!("Scoring failed: {e}");
                (
                    StatusCode::BAD_REQUEST,
                    "SCORING_FAILED",
                    format!("score error: {e}"),
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
