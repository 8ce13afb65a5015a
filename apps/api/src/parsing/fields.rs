//! Field extractors: email, phone, display name and the flat skill list.
//!
//! Every extractor is best-effort. A missing field is an empty string or an
//! empty list, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parsing::sections::SectionKey;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[\w.\-]+@[\w.\-]+\.[A-Za-z]{2,}").expect("email pattern is valid")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\d[\d\s\-()]{7,}\d").expect("phone pattern is valid"));

/// Newline, comma, semicolon and the three bullet glyphs.
const SKILL_SEPARATORS: &[char] = &['\n', ',', ';', '•', '·', '●'];

/// First email-shaped substring anywhere in the document.
pub fn extract_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First phone-shaped substring: optional `+`, then digits mixed with
/// spaces, hyphens and parentheses.
pub fn extract_phone(text: &str) -> String {
    PHONE_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First line that is not the email line, not the phone line, not a section
/// header, and carries at least one letter.
pub fn extract_name(lines: &[String], email: &str, phone: &str) -> String {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .filter(|line| email.is_empty() || !line.contains(email))
        .filter(|line| phone.is_empty() || !line.contains(phone))
        .filter(|line| SectionKey::from_header_line(line).is_none())
        .find(|line| line.chars().any(char::is_alphabetic))
        .map(str::to_string)
        .unwrap_or_default()
}

/// Splits the raw skills-section lines into individual tokens.
/// Tokens of a single character are noise (stray bullets, initials) and are dropped.
pub fn extract_skills(section_lines: &[String]) -> Vec<String> {
    if section_lines.is_empty() {
        return Vec::new();
    }
    section_lines
        .join("\n")
        .split(SKILL_SEPARATORS)
        .map(str::trim)
        .filter(|token| token.chars().count() > 1)
        .map(str::to_string)
        .collect()
}
