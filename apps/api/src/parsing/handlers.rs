//! Axum route handlers for upload preview and text parsing.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::ingest::decode_upload_blocking;
use crate::parsing::normalize::build_preview;
use crate::parsing::{parse_resume, ParsedResume};
use crate::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct UploadPreviewResponse {
    pub filename: String,
    pub chars: usize,
    pub preview: String,
    pub parsed: ParsedResume,
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("invalid multipart body: {}", e.body_text()))
    }
}

fn invalid_body(message: String) -> AppError {
    AppError::Validation(format!("invalid request body: {message}"))
}

/// POST /upload
///
/// Accepts a multipart `file` field (.pdf or .txt), decodes it to text and
/// returns a short preview plus the parsed résumé.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadPreviewResponse>, AppError> {
    let mut multipart = multipart.map_err(|e| invalid_body(e.body_text()))?;
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let raw = field.bytes().await.map_err(multipart_error)?;

        let content = decode_upload_blocking(filename.clone(), raw).await?;
        let parsed = parse_resume(&content);

        info!(
            filename = %filename,
            chars = content.chars().count(),
            skills = parsed.skills.len(),
            "Upload parsed"
        );

        return Ok(Json(UploadPreviewResponse {
            chars: content.chars().count(),
            preview: build_preview(&content, state.config.preview_chars),
            filename,
            parsed,
        }));
    }

    Err(AppError::Validation(format!(
        "multipart field '{FILE_FIELD}' is required"
    )))
}

/// POST /parse
///
/// Parses already-decoded résumé text.
pub async fn handle_parse(
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Result<Json<ParsedResume>, AppError> {
    let Json(request) = payload.map_err(|e| invalid_body(e.body_text()))?;
    Ok(Json(parse_resume(&request.text)))
}
