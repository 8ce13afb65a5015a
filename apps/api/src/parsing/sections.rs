//! Section segmentation: groups body lines under the most recent recognised header.
//!
//! Header detection is whole-line: a line is a header only when, after trimming,
//! it consists of one vocabulary word (optionally followed by colons/whitespace).
//! "Skills in Python" is body text; "SKILLS:" is a header.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Normalized section keys. Synonyms collapse onto one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Skills,
    Education,
    Experience,
    Projects,
    Certificates,
    Languages,
    Summary,
}

static HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(skills?|education|experiences?|work\s+experiences?|projects?|certificates?|languages?|summary|objective)[\s:]*$",
    )
    .expect("header pattern is valid")
});

impl SectionKey {
    /// Classifies a trimmed line. Returns `None` for body text.
    pub fn from_header_line(line: &str) -> Option<Self> {
        let caps = HEADER_RE.captures(line.trim())?;
        let word = caps.get(1)?.as_str().to_lowercase();

        let key = if word.starts_with("skill") {
            SectionKey::Skills
        } else if word == "education" {
            SectionKey::Education
        } else if word.starts_with("experience") || word.starts_with("work") {
            SectionKey::Experience
        } else if word.starts_with("project") {
            SectionKey::Projects
        } else if word.starts_with("certificate") {
            SectionKey::Certificates
        } else if word.starts_with("language") {
            SectionKey::Languages
        } else {
            // summary | objective
            SectionKey::Summary
        };
        Some(key)
    }
}

/// Raw lines per section, in document order. Blank lines are retained.
#[derive(Debug, Clone, Default)]
pub struct Sections {
    lines: HashMap<SectionKey, Vec<String>>,
}

impl Sections {
    pub fn lines(&self, key: SectionKey) -> &[String] {
        self.lines.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Single forward pass over `lines`. Lines before the first header belong to no
/// section and are dropped here; a repeated header continues the same list.
pub fn segment(lines: &[String]) -> Sections {
    let mut sections = Sections::default();
    let mut current: Option<SectionKey> = None;

    for line in lines {
        if let Some(key) = SectionKey::from_header_line(line) {
            current = Some(key);
            sections.lines.entry(key).or_default();
            continue;
        }
        if let Some(key) = current {
            sections.lines.entry(key).or_default().push(line.clone());
        }
    }

    sections
}
