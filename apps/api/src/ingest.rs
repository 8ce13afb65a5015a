//! Upload decoding: turns `.pdf` / `.txt` bytes into plain text for the parser.
//!
//! Only the filename extension decides the decoder. PDF extraction is CPU-bound;
//! callers on the async runtime should go through `decode_upload_blocking`.

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Only .pdf or .txt files are accepted (got '{0}')")]
    UnsupportedFile(String),

    #[error("Could not extract text: {0}")]
    Extraction(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Pdf,
    Text,
}

impl UploadKind {
    pub fn from_filename(filename: &str) -> Result<Self, IngestError> {
        let lower = filename.trim().to_lowercase();
        if lower.ends_with(".pdf") {
            Ok(UploadKind::Pdf)
        } else if lower.ends_with(".txt") {
            Ok(UploadKind::Text)
        } else {
            Err(IngestError::UnsupportedFile(filename.to_string()))
        }
    }
}

/// Decodes UTF-8, silently dropping invalid byte sequences.
pub fn decode_utf8_ignoring_errors(raw: &[u8]) -> String {
    raw.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

fn extract_pdf_text(raw: &[u8]) -> Result<String, IngestError> {
    pdf_extract::extract_text_from_mem(raw).map_err(|e| IngestError::Extraction(e.to_string()))
}

/// Decodes an uploaded file into trimmed plain text.
pub fn decode_upload(filename: &str, raw: &[u8]) -> Result<String, IngestError> {
    let kind = UploadKind::from_filename(filename)?;
    let text = match kind {
        UploadKind::Pdf => extract_pdf_text(raw)?,
        UploadKind::Text => decode_utf8_ignoring_errors(raw),
    };
    debug!(filename, ?kind, bytes = raw.len(), chars = text.chars().count(), "Decoded upload");
    Ok(text.trim().to_string())
}

/// Runs `decode_upload` on the blocking pool. A panic inside the PDF decoder is
/// reported as an extraction error instead of tearing down the request task.
pub async fn decode_upload_blocking(filename: String, raw: Bytes) -> Result<String, IngestError> {
    // reject unsupported names before paying for a blocking task
    UploadKind::from_filename(&filename)?;

    tokio::task::spawn_blocking(move || decode_upload(&filename, &raw))
        .await
        .map_err(|e| {
            warn!("Upload decoder task failed: {e}");
            IngestError::Extraction("decoder aborted on malformed input".to_string())
        })?
}
