//! Education classifier: maps free-text education entries to one ordinal level.
//!
//! Keyword lists carry English and Turkish variants. Matching is plain
//! substring containment on the lower-cased text, so the short forms
//! ("ms ", "bs ") are intentionally loose.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    Phd,
    Master,
    Bachelor,
    HighSchool,
    Unknown,
}

impl EducationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::Phd => "phd",
            EducationLevel::Master => "master",
            EducationLevel::Bachelor => "bachelor",
            EducationLevel::HighSchool => "high_school",
            EducationLevel::Unknown => "unknown",
        }
    }
}

const DOCTORAL_KEYWORDS: &[&str] = &[
    "phd", "ph.d", "doctorate", "doctoral", "dphil", "doktor", "doktora",
];

const MASTER_KEYWORDS: &[&str] = &[
    "master",
    "msc",
    "m.sc",
    "m.s",
    "ms ",
    "yüksek lisans",
    "yuksek lisans",
    "tezli",
    "tezsiz",
];

const BACHELOR_KEYWORDS: &[&str] = &[
    "bachelor",
    "bsc",
    "b.sc",
    "b.s ",
    "bs ",
    "licence",
    "license",
    "lisans",
    "undergraduate",
];

const UNIVERSITY_KEYWORDS: &[&str] = &[
    "university",
    "üniversite",
    "universitesi",
    "faculty",
    "fakülte",
    "fakulte",
];

const HIGH_SCHOOL_KEYWORDS: &[&str] = &["high school", "lise"];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Returns the highest level any keyword set detects.
///
/// Precedence: doctoral → master → bachelor-or-university → high school → unknown.
pub fn classify_education(entries: &[String]) -> EducationLevel {
    let text = entries.join(" \n").to_lowercase();

    if contains_any(&text, DOCTORAL_KEYWORDS) {
        EducationLevel::Phd
    } else if contains_any(&text, MASTER_KEYWORDS) {
        EducationLevel::Master
    } else if contains_any(&text, BACHELOR_KEYWORDS) || contains_any(&text, UNIVERSITY_KEYWORDS) {
        // any university hint counts as bachelor at minimum
        EducationLevel::Bachelor
    } else if contains_any(&text, HIGH_SCHOOL_KEYWORDS) {
        EducationLevel::HighSchool
    } else {
        EducationLevel::Unknown
    }
}
