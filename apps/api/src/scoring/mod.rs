//! Scoring: converts structured candidate facts into explainable points.
//!
//! Two independent policies implement `ResumeScorer`:
//! - `RoleWeightedScorer`: role-aware, 0–5 per dimension, weighted 0–100 total.
//! - `WhitelistScorer`: flat technology whitelist, unbounded total.
//!
//! Callers pick a policy explicitly; the two are never blended.

pub mod education;
pub mod experience;
pub mod handlers;
pub mod profiles;
pub mod role_weighted;
pub mod whitelist;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parsing::ParsedResume;
use crate::scoring::education::{classify_education, EducationLevel};
use crate::scoring::experience::estimate_years;

pub use role_weighted::{RoleWeightedScorer, ScoreResult};
pub use whitelist::{WhitelistBreakdown, WhitelistScorer};

#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("invalid weights: {0}")]
    InvalidWeights(String),

    #[error("invalid experience years: {0}")]
    InvalidYears(String),

    #[error("malformed scoring input: {0}")]
    MalformedInput(String),
}

/// Per-dimension weights for the role-weighted policy. Not normalized; used as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            skills: 0.5,
            experience: 0.3,
            education: 0.2,
        }
    }
}

impl ScoreWeights {
    pub fn validate(&self) -> Result<(), ScoringError> {
        for (name, value) in [
            ("skills", self.skills),
            ("experience", self.experience),
            ("education", self.education),
        ] {
            if !value.is_finite() {
                return Err(ScoringError::InvalidWeights(format!(
                    "{name} weight must be a finite number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

fn default_education_label() -> String {
    EducationLevel::Unknown.as_str().to_string()
}

/// Pre-structured facts about a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateFacts {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: f64,
    #[serde(default = "default_education_label")]
    pub education_level: String,
}

impl CandidateFacts {
    /// Derives facts from a parsed résumé via the education classifier and
    /// the experience estimator.
    pub fn from_resume(resume: &ParsedResume) -> Self {
        Self {
            skills: resume.skills.clone(),
            experience_years: estimate_years(&resume.experience),
            education_level: classify_education(&resume.education).as_str().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        if !self.experience_years.is_finite() || self.experience_years < 0.0 {
            return Err(ScoringError::InvalidYears(format!(
                "expected a non-negative number, got {}",
                self.experience_years
            )));
        }
        Ok(())
    }
}

/// What a scorer is given: either ready-made facts or a raw parsed résumé.
/// Serialized as `{"facts": {...}}` or `{"cv": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreInput {
    Facts(CandidateFacts),
    Cv(ParsedResume),
}

impl ScoreInput {
    pub fn into_facts(self) -> CandidateFacts {
        match self {
            ScoreInput::Facts(facts) => facts,
            ScoreInput::Cv(resume) => CandidateFacts::from_resume(&resume),
        }
    }
}

/// A scoring policy. Scoring is all-or-nothing: an error means no partial report.
pub trait ResumeScorer: Send + Sync {
    type Report: Serialize;

    fn score(&self, input: ScoreInput) -> Result<Self::Report, ScoringError>;
}
