//! Axum route handlers for the scoring API.

use axum::{extract::rejection::JsonRejection, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::scoring::{
    ResumeScorer, RoleWeightedScorer, ScoreInput, ScoreResult, ScoreWeights, ScoringError,
    WhitelistBreakdown, WhitelistScorer,
};

/// Body of `POST /score`: optional title and weights plus either
/// `"facts": {...}` or `"cv": {...}`.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub weights: Option<ScoreWeights>,
    #[serde(flatten)]
    pub input: ScoreInput,
}

/// Malformed scoring payloads (non-numeric years, bad weights, missing
/// facts/cv) are scoring failures, not generic validation errors.
fn malformed(rejection: JsonRejection) -> AppError {
    AppError::Scoring(ScoringError::MalformedInput(rejection.body_text()))
}

/// POST /score
///
/// Role-weighted policy: 0–5 per dimension, 0–15 total, 0–100 weighted.
pub async fn handle_score(
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResult>, AppError> {
    let Json(request) = payload.map_err(malformed)?;

    let scorer = RoleWeightedScorer::new(request.job_title.unwrap_or_default(), request.weights);
    let result = scorer.score(request.input)?;

    Ok(Json(result))
}

/// POST /score/whitelist
///
/// Flat whitelist policy. Same `facts` / `cv` input, no title or weights.
pub async fn handle_score_whitelist(
    payload: Result<Json<ScoreInput>, JsonRejection>,
) -> Result<Json<WhitelistBreakdown>, AppError> {
    let Json(input) = payload.map_err(malformed)?;
    Ok(Json(WhitelistScorer.score(input)?))
}
