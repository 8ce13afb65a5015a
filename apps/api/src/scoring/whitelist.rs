//! Whitelist scoring: flat points for known technologies, years and degree tier.
//!
//! No role awareness and no weighting; the total is an unbounded sum.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scoring::education::{classify_education, EducationLevel};
use crate::scoring::experience::estimate_years;
use crate::scoring::{CandidateFacts, ResumeScorer, ScoreInput, ScoringError};

pub const SKILL_WHITELIST: &[&str] = &[
    "python",
    "sql",
    "pandas",
    "numpy",
    "scikit-learn",
    "pytorch",
    "tensorflow",
    "fastapi",
    "flask",
    "django",
    "docker",
    "kubernetes",
    "aws",
    "gcp",
    "azure",
];

const POINTS_PER_SKILL: u32 = 5;
const MAX_COUNTED_SKILLS: usize = 10;
const EXPERIENCE_POINTS_PER_YEAR: f64 = 3.0;
const MAX_EXPERIENCE_POINTS: u32 = 30;

const EDUCATION_TIERS: &[(&str, u32)] = &[
    ("phd", 20),
    ("msc", 16),
    ("bsc", 12),
    ("bootcamp", 8),
    ("other", 5),
];
const OTHER_TIER_POINTS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhitelistBreakdown {
    pub skills_points: u32,
    pub experience_points: u32,
    pub education_points: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WhitelistScorer;

impl ResumeScorer for WhitelistScorer {
    type Report = WhitelistBreakdown;

    fn score(&self, input: ScoreInput) -> Result<WhitelistBreakdown, ScoringError> {
        let facts = match input {
            ScoreInput::Facts(facts) => facts,
            ScoreInput::Cv(resume) => {
                let level = classify_education(&resume.education);
                CandidateFacts {
                    experience_years: estimate_years(&resume.experience),
                    education_level: education_tier(level).to_string(),
                    skills: resume.skills,
                }
            }
        };
        facts.validate()?;
        Ok(score_whitelist(&facts))
    }
}

/// Maps a classified education level onto this policy's degree tiers.
pub fn education_tier(level: EducationLevel) -> &'static str {
    match level {
        EducationLevel::Phd => "phd",
        EducationLevel::Master => "msc",
        EducationLevel::Bachelor => "bsc",
        EducationLevel::HighSchool | EducationLevel::Unknown => "other",
    }
}

fn score_whitelist(facts: &CandidateFacts) -> WhitelistBreakdown {
    let matched = facts
        .skills
        .iter()
        .filter(|s| SKILL_WHITELIST.contains(&s.trim().to_lowercase().as_str()))
        .count();
    let skills_points = matched.min(MAX_COUNTED_SKILLS) as u32 * POINTS_PER_SKILL;

    let scaled_years = (facts.experience_years * EXPERIENCE_POINTS_PER_YEAR).round_ties_even();
    let experience_points = (scaled_years as u32).min(MAX_EXPERIENCE_POINTS);

    let tier = facts.education_level.trim().to_lowercase();
    let education_points = EDUCATION_TIERS
        .iter()
        .find(|(name, _)| *name == tier)
        .map(|(_, points)| *points)
        .unwrap_or(OTHER_TIER_POINTS);

    let total = skills_points + experience_points + education_points;
    debug!(
        matched,
        skills_points, experience_points, education_points, total, "Computed whitelist score"
    );

    WhitelistBreakdown {
        skills_points,
        experience_points,
        education_points,
        total,
    }
}
