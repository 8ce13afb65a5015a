//! Résumé parser: composes the segmenter and field extractors into one record.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::parsing::fields::{extract_email, extract_name, extract_phone, extract_skills};
use crate::parsing::normalize::{compact_blocks, split_lines};
use crate::parsing::sections::{segment, SectionKey};

/// Structured résumé. Every field defaults to empty; absence is never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedResume {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    /// Compacted blocks, one per logical entry.
    pub education: Vec<String>,
    /// Compacted blocks, one per logical entry.
    pub experience: Vec<String>,
}

/// Parses decoded résumé text into a `ParsedResume`.
pub fn parse_resume(text: &str) -> ParsedResume {
    let lines = split_lines(text);

    let email = extract_email(text);
    let phone = extract_phone(text);
    let name = extract_name(&lines, &email, &phone);

    let sections = segment(&lines);
    let skills = extract_skills(sections.lines(SectionKey::Skills));
    let education = compact_blocks(sections.lines(SectionKey::Education));
    let experience = compact_blocks(sections.lines(SectionKey::Experience));

    debug!(
        lines = lines.len(),
        sectioned = !sections.is_empty(),
        skills = skills.len(),
        education = education.len(),
        experience = experience.len(),
        has_email = !email.is_empty(),
        has_phone = !phone.is_empty(),
        "Parsed resume text"
    );

    ParsedResume {
        name,
        email,
        phone,
        skills,
        education,
        experience,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CV: &str = "Ali Veli
Yazılım Mühendisi
ali.veli@example.com
+90 555 111 22 33

Summary
Backend developer with a data focus.

Skills:
Python, SQL, Pandas
Docker • Kubernetes

Education
İstanbul Teknik Üniversitesi
BSc Computer Engineering

Lise: Kadıköy Anadolu Lisesi

Work Experience
Software Developer at XYZ
Jan 2021 - Mar 2022

Intern at ABC
Summer internship work
";

    #[test]
    fn test_parse_full_resume() {
        let parsed = parse_resume(SAMPLE_CV);
        assert_eq!(parsed.name, "Ali Veli");
        assert_eq!(parsed.email, "ali.veli@example.com");
        assert_eq!(parsed.phone, "+90 555 111 22 33");
        assert_eq!(
            parsed.skills,
            vec!["Python", "SQL", "Pandas", "Docker", "Kubernetes"]
        );
        assert_eq!(
            parsed.education,
            vec![
                "İstanbul Teknik Üniversitesi BSc Computer Engineering",
                "Lise: Kadıköy Anadolu Lisesi"
            ]
        );
        assert_eq!(
            parsed.experience,
            vec![
                "Software Developer at XYZ Jan 2021 - Mar 2022",
                "Intern at ABC Summer internship work"
            ]
        );
    }

    #[test]
    fn test_no_headers_means_no_sections() {
        let parsed = parse_resume("Jane Doe\njane@example.com\nPython, SQL\nBSc Physics");
        assert_eq!(parsed.name, "Jane Doe");
        assert_eq!(parsed.email, "jane@example.com");
        assert!(parsed.skills.is_empty());
        assert!(parsed.education.is_empty());
        assert!(parsed.experience.is_empty());
    }

    #[test]
    fn test_empty_text_yields_empty_record() {
        assert_eq!(parse_resume(""), ParsedResume::default());
    }

    #[test]
    fn test_name_skips_leading_email_line() {
        let parsed = parse_resume("bob@example.org\n\nBob Builder\nSkills\nC++");
        assert_eq!(parsed.name, "Bob Builder");
        assert_eq!(parsed.skills, vec!["C++"]);
    }

    #[test]
    fn test_parsed_resume_deserializes_with_missing_fields() {
        let parsed: ParsedResume =
            serde_json::from_str(r#"{"skills": ["Python"], "experience": ["2019 - 2021"]}"#)
                .unwrap();
        assert_eq!(parsed.name, "");
        assert!(parsed.education.is_empty());
        assert_eq!(parsed.skills, vec!["Python"]);
    }
}
