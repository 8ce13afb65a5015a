//! Role-weighted scoring: 0–5 points per dimension against a role profile.
//!
//! Algorithm:
//! 1. Resolve the role profile (unknown titles → data scientist).
//! 2. Skills: substring hits of must/nice keywords in the pipe-joined skill list,
//!    `round(min(5, 3*must_ratio + min(2, 0.4*nice_hits)))`.
//! 3. Experience: index of the first threshold strictly above the years, else 5.
//! 4. Education: fixed ordinal map, unknown labels → 2.
//! 5. total = sum (0–15); weighted = round(100 * Σ points/5 * weight) (0–100 at default weights).
//!
//! Rounding is half-to-even everywhere.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scoring::profiles::{resolve_profile, RoleProfile};
use crate::scoring::{CandidateFacts, ResumeScorer, ScoreInput, ScoreWeights, ScoringError};

pub const PER_DIMENSION_MAX: u8 = 5;
pub const TOTAL_MAX: u8 = 15;
pub const WEIGHTED_MAX: u8 = 100;

pub const EXPERIENCE_THRESHOLDS: [f64; 6] = [0.0, 0.5, 1.0, 2.0, 3.0, 4.0];

const EDUCATION_POINTS: &[(&str, u8)] = &[
    ("high_school", 1),
    ("bachelor", 3),
    ("master", 4),
    ("phd", 5),
    ("unknown", 2),
];
const UNRECOGNISED_EDUCATION_POINTS: u8 = 2;

const UNSPECIFIED_TITLE: &str = "(unspecified)";

// ────────────────────────────────────────────────────────────────────────────
// Report
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub per_dimension: u8,
    pub total: u8,
    pub weighted_total: u8,
    pub weights: ScoreWeights,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Points {
    pub skills_points: u8,
    pub experience_points: u8,
    pub education_points: u8,
    pub total: u8,
    pub weighted: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsReason {
    pub must_required: Vec<String>,
    pub must_hits: usize,
    pub nice_hits: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceReason {
    pub years_inferred: f64,
    pub thresholds: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationReason {
    pub level: String,
    pub map: BTreeMap<String, u8>,
}

/// Evidence for every point value, enough to recompute the score by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reasons {
    pub skills: SkillsReason,
    pub experience: ExperienceReason,
    pub education: EducationReason,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub job_title: String,
    pub scale: Scale,
    pub points: Points,
    pub reasons: Reasons,
}

// ────────────────────────────────────────────────────────────────────────────
// Scorer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct RoleWeightedScorer {
    pub job_title: String,
    pub weights: ScoreWeights,
}

impl RoleWeightedScorer {
    pub fn new(job_title: impl Into<String>, weights: Option<ScoreWeights>) -> Self {
        Self {
            job_title: job_title.into(),
            weights: weights.unwrap_or_default(),
        }
    }
}

impl ResumeScorer for RoleWeightedScorer {
    type Report = ScoreResult;

    fn score(&self, input: ScoreInput) -> Result<ScoreResult, ScoringError> {
        self.weights.validate()?;
        let facts = input.into_facts();
        facts.validate()?;
        Ok(score_facts(&facts, &self.job_title, &self.weights))
    }
}

/// Skill hits against a profile: `(points, must_hits, nice_hits)`.
pub fn skill_points(profile: &RoleProfile, skills: &[String]) -> (u8, usize, usize) {
    let skill_text = skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .collect::<Vec<_>>()
        .join(" | ");

    let must_hits = profile
        .must
        .iter()
        .filter(|k| skill_text.contains(*k))
        .count();
    let nice_hits = profile
        .nice
        .iter()
        .filter(|k| skill_text.contains(*k))
        .count();

    let must_ratio = must_hits as f64 / profile.must.len().max(1) as f64;
    let raw = (3.0 * must_ratio + (0.4 * nice_hits as f64).min(2.0)).min(5.0);
    let points = raw.round_ties_even() as u8;

    (points, must_hits, nice_hits)
}

/// Step function over `EXPERIENCE_THRESHOLDS`.
pub fn experience_points(years: f64) -> u8 {
    EXPERIENCE_THRESHOLDS
        .iter()
        .position(|t| years < *t)
        .unwrap_or(PER_DIMENSION_MAX as usize) as u8
}

pub fn education_points(level: &str) -> u8 {
    let level = level.trim().to_lowercase();
    EDUCATION_POINTS
        .iter()
        .find(|(label, _)| *label == level)
        .map(|(_, points)| *points)
        .unwrap_or(UNRECOGNISED_EDUCATION_POINTS)
}

fn weighted_total(sp: u8, xp: u8, ep: u8, weights: &ScoreWeights) -> i64 {
    let max = f64::from(PER_DIMENSION_MAX);
    let blended = f64::from(sp) / max * weights.skills
        + f64::from(xp) / max * weights.experience
        + f64::from(ep) / max * weights.education;
    (100.0 * blended).round_ties_even() as i64
}

fn score_facts(facts: &CandidateFacts, job_title: &str, weights: &ScoreWeights) -> ScoreResult {
    let profile = resolve_profile(job_title);

    let (sp, must_hits, nice_hits) = skill_points(profile, &facts.skills);
    let xp = experience_points(facts.experience_years);

    let level = if facts.education_level.trim().is_empty() {
        "unknown".to_string()
    } else {
        facts.education_level.trim().to_lowercase()
    };
    let ep = education_points(&level);

    let total = sp + xp + ep;
    let weighted = weighted_total(sp, xp, ep, weights);

    debug!(
        profile = profile.title,
        must_hits, nice_hits, sp, xp, ep, total, weighted, "Computed role-weighted score"
    );

    let job_title = if job_title.trim().is_empty() {
        UNSPECIFIED_TITLE.to_string()
    } else {
        job_title.to_string()
    };

    ScoreResult {
        job_title,
        scale: Scale {
            per_dimension: PER_DIMENSION_MAX,
            total: TOTAL_MAX,
            weighted_total: WEIGHTED_MAX,
            weights: *weights,
        },
        points: Points {
            skills_points: sp,
            experience_points: xp,
            education_points: ep,
            total,
            weighted,
        },
        reasons: Reasons {
            skills: SkillsReason {
                must_required: profile.must_sorted(),
                must_hits,
                nice_hits,
            },
            experience: ExperienceReason {
                years_inferred: facts.experience_years,
                thresholds: EXPERIENCE_THRESHOLDS.to_vec(),
            },
            education: EducationReason {
                level,
                map: EDUCATION_POINTS
                    .iter()
                    .map(|(label, points)| (label.to_string(), *points))
                    .collect(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::ParsedResume;

    fn facts(skills: &[&str], years: f64, level: &str) -> ScoreInput {
        ScoreInput::Facts(CandidateFacts {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience_years: years,
            education_level: level.to_string(),
        })
    }

    fn score(input: ScoreInput, title: &str) -> ScoreResult {
        RoleWeightedScorer::new(title, None).score(input).unwrap()
    }

    #[test]
    fn test_data_scientist_example() {
        let result = score(facts(&["Python", "SQL", "Pandas"], 0.0, "unknown"), "data scientist");
        assert_eq!(result.reasons.skills.must_hits, 3);
        assert_eq!(result.reasons.skills.nice_hits, 0);
        assert_eq!(result.points.skills_points, 2);
        assert_eq!(result.points.experience_points, 1);
        assert_eq!(result.points.education_points, 2);
        assert_eq!(result.points.total, 5);
        // 100 * (2/5*0.5 + 1/5*0.3 + 2/5*0.2) = 20 + 6 + 8
        assert_eq!(result.points.weighted, 34);
    }

    #[test]
    fn test_unknown_title_matches_default_profile() {
        let input = facts(&["python", "tableau", "statistics"], 2.5, "master");
        let explicit = score(input.clone(), "data scientist");
        let fallback = score(input, "underwater basket weaver");
        assert_eq!(explicit.points, fallback.points);
        assert_eq!(explicit.reasons, fallback.reasons);
        assert_eq!(fallback.job_title, "underwater basket weaver");
    }

    #[test]
    fn test_empty_title_is_reported_as_unspecified() {
        let result = score(facts(&[], 0.0, "unknown"), "");
        assert_eq!(result.job_title, "(unspecified)");
    }

    #[test]
    fn test_skill_points_monotonic_in_must_hits() {
        let profile = resolve_profile("backend engineer");
        let mut skills: Vec<String> = Vec::new();
        let mut previous = 0;
        for keyword in profile.must {
            skills.push(keyword.to_string());
            let (points, _, _) = skill_points(profile, &skills);
            assert!(points >= previous, "points dropped after adding {keyword}");
            previous = points;
        }
        assert_eq!(previous, 3);
    }

    #[test]
    fn test_skill_points_capped_at_five() {
        let profile = resolve_profile("data scientist");
        let skills: Vec<String> = profile
            .must
            .iter()
            .chain(profile.nice.iter())
            .map(|s| s.to_string())
            .collect();
        let (points, must_hits, nice_hits) = skill_points(profile, &skills);
        assert_eq!(must_hits, 4);
        assert_eq!(nice_hits, 9);
        assert_eq!(points, 5);
    }

    #[test]
    fn test_skill_matching_is_substring_based() {
        // "go" is found inside "django"; "api" inside "fastapi"
        let profile = resolve_profile("backend engineer");
        let skills = vec!["Django".to_string(), "FastAPI".to_string()];
        let (_, must_hits, nice_hits) = skill_points(profile, &skills);
        assert_eq!(must_hits, 2);
        assert_eq!(nice_hits, 2);
    }

    #[test]
    fn test_experience_thresholds() {
        assert_eq!(experience_points(0.0), 1);
        assert_eq!(experience_points(0.4), 1);
        assert_eq!(experience_points(0.5), 2);
        assert_eq!(experience_points(1.0), 3);
        assert_eq!(experience_points(2.9), 4);
        assert_eq!(experience_points(3.0), 5);
        assert_eq!(experience_points(4.0), 5);
        assert_eq!(experience_points(25.0), 5);
    }

    #[test]
    fn test_education_map() {
        assert_eq!(education_points("high_school"), 1);
        assert_eq!(education_points("bachelor"), 3);
        assert_eq!(education_points("MASTER"), 4);
        assert_eq!(education_points("phd"), 5);
        assert_eq!(education_points("unknown"), 2);
        assert_eq!(education_points("bootcamp"), 2);
    }

    #[test]
    fn test_total_is_sum_and_dimensions_bounded() {
        let cases = [
            facts(&[], 0.0, "unknown"),
            facts(&["python", "numpy", "pandas", "sql", "pytorch"], 10.0, "phd"),
            facts(&["excel"], 1.5, "bachelor"),
        ];
        for input in cases {
            let p = score(input, "business analyst").points;
            assert!(p.skills_points <= 5 && p.experience_points <= 5 && p.education_points <= 5);
            assert_eq!(p.total, p.skills_points + p.experience_points + p.education_points);
            assert!((0..=100).contains(&p.weighted));
        }
    }

    #[test]
    fn test_perfect_candidate_scores_full_marks() {
        let skills = [
            "Python",
            "Pandas",
            "NumPy",
            "SQL",
            "TensorFlow",
            "PyTorch",
            "Tableau",
            "Statistics",
            "ML",
        ];
        let result = score(facts(&skills, 6.0, "phd"), "Data Scientist");
        assert_eq!(result.points.total, 15);
        assert_eq!(result.points.weighted, 100);
    }

    #[test]
    fn test_custom_weights_applied_as_given() {
        let weights = ScoreWeights {
            skills: 0.0,
            experience: 0.0,
            education: 1.0,
        };
        let result = RoleWeightedScorer::new("data scientist", Some(weights))
            .score(facts(&[], 0.0, "phd"))
            .unwrap();
        assert_eq!(result.points.weighted, 100);
        assert_eq!(result.scale.weights, weights);
    }

    #[test]
    fn test_invalid_weights_fail_without_report() {
        let weights = ScoreWeights {
            skills: f64::INFINITY,
            ..ScoreWeights::default()
        };
        let err = RoleWeightedScorer::new("data scientist", Some(weights))
            .score(facts(&["python"], 1.0, "bachelor"))
            .unwrap_err();
        assert!(matches!(err, ScoringError::InvalidWeights(_)));
    }

    #[test]
    fn test_raw_cv_input_derives_facts() {
        let cv = ParsedResume {
            skills: vec!["Python".into(), "SQL".into()],
            education: vec!["MSc Statistics".into()],
            experience: vec!["Analyst Jan 2020 - Jan 2022".into()],
            ..ParsedResume::default()
        };
        let result = score(ScoreInput::Cv(cv), "data scientist");
        assert_eq!(result.reasons.experience.years_inferred, 2.0);
        assert_eq!(result.reasons.education.level, "master");
        assert_eq!(result.points.experience_points, 4);
        assert_eq!(result.points.education_points, 4);
    }

    #[test]
    fn test_reasons_carry_tables() {
        let result = score(facts(&[], 0.0, "unknown"), "data scientist");
        assert_eq!(
            result.reasons.skills.must_required,
            vec!["numpy", "pandas", "python", "sql"]
        );
        assert_eq!(result.reasons.experience.thresholds, EXPERIENCE_THRESHOLDS.to_vec());
        assert_eq!(result.reasons.education.map.get("phd"), Some(&5));
    }
}
