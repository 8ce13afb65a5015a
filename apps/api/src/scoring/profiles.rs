//! Role profile table: must-have and nice-to-have skill keywords per job title.
//!
//! Read-only static data. Unknown titles resolve to the data scientist profile.

/// Skill keywords for one target role. All keys are lower-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleProfile {
    pub title: &'static str,
    pub must: &'static [&'static str],
    pub nice: &'static [&'static str],
}

pub const DEFAULT_ROLE: &str = "data scientist";

pub const ROLE_PROFILES: &[RoleProfile] = &[
    RoleProfile {
        title: "data scientist",
        must: &["python", "pandas", "numpy", "sql"],
        nice: &[
            "scikit-learn",
            "ml",
            "machine learning",
            "statistics",
            "probability",
            "tensorflow",
            "pytorch",
            "power bi",
            "tableau",
        ],
    },
    RoleProfile {
        title: "backend engineer",
        must: &["python", "java", "go", "node", "sql", "rest", "api"],
        nice: &[
            "django",
            "fastapi",
            "spring",
            "microservices",
            "docker",
            "kubernetes",
            "redis",
            "rabbitmq",
        ],
    },
    RoleProfile {
        title: "business analyst",
        must: &["excel", "sql", "report", "analyst", "analysis"],
        nice: &[
            "power bi",
            "tableau",
            "requirements",
            "documentation",
            "stakeholder",
            "process",
        ],
    },
];

impl RoleProfile {
    /// Must-have keywords in sorted order, as reported in score reasons.
    pub fn must_sorted(&self) -> Vec<String> {
        let mut must: Vec<String> = self.must.iter().map(|k| k.to_string()).collect();
        must.sort();
        must
    }
}

/// Case-insensitive lookup that never fails: unknown or empty titles fall back
/// to the default profile.
pub fn resolve_profile(job_title: &str) -> &'static RoleProfile {
    let wanted = job_title.trim().to_lowercase();
    ROLE_PROFILES
        .iter()
        .find(|p| p.title == wanted)
        .unwrap_or_else(default_profile)
}

fn default_profile() -> &'static RoleProfile {
    ROLE_PROFILES
        .iter()
        .find(|p| p.title == DEFAULT_ROLE)
        .unwrap_or(&ROLE_PROFILES[0])
}
