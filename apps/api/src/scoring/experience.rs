//! Experience duration estimator: sums date ranges found in experience entries.
//!
//! Recognised ranges:
//! - `Jul 2019 - Sep 2021` (three-letter month on both sides)
//! - `2019 - 2021` (bare years)
//!
//! Every non-overlapping match of both shapes is summed. When no range parses
//! but entries exist, each entry counts as 2 months.

use std::str::FromStr;

use chrono::Month;
use once_cell::sync::Lazy;
use regex::Regex;

static MONTH_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"([A-Za-z]{3})\s*((?:19|20)[0-9]{2})\s*[-–]\s*([A-Za-z]{3})\s*((?:19|20)[0-9]{2})",
    )
    .expect("month range pattern is valid")
});

static YEAR_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"((?:19|20)[0-9]{2})\s*[-–]\s*((?:19|20)[0-9]{2})")
        .expect("year range pattern is valid")
});

const FALLBACK_MONTHS_PER_ENTRY: i64 = 2;

/// Month number for a three-letter abbreviation. Anything unrecognised counts as January.
fn month_index(abbrev: &str) -> i64 {
    Month::from_str(abbrev)
        .map(|m| i64::from(m.number_from_month()))
        .unwrap_or(1)
}

fn parse_year(raw: &str) -> i64 {
    // the patterns only capture four ASCII digits
    raw.parse().unwrap_or(0)
}

/// Months covered by `Mon YYYY - Mon YYYY` ranges. Non-positive spans are skipped.
fn month_range_months(text: &str) -> i64 {
    MONTH_RANGE_RE
        .captures_iter(text)
        .map(|caps| {
            let (m1, y1) = (month_index(&caps[1]), parse_year(&caps[2]));
            let (m2, y2) = (month_index(&caps[3]), parse_year(&caps[4]));
            (y2 - y1) * 12 + (m2 - m1)
        })
        .filter(|months| *months > 0)
        .sum()
}

/// Months covered by bare `YYYY - YYYY` ranges. Non-positive spans are skipped.
fn year_range_months(text: &str) -> i64 {
    YEAR_RANGE_RE
        .captures_iter(text)
        .map(|caps| (parse_year(&caps[2]) - parse_year(&caps[1])) * 12)
        .filter(|months| *months > 0)
        .sum()
}

/// Estimated years of experience, rounded to one decimal (ties to even).
pub fn estimate_years(entries: &[String]) -> f64 {
    let text = entries.join(" \n");

    let mut total_months = month_range_months(&text) + year_range_months(&text);

    if total_months == 0 {
        let non_blank = entries.iter().filter(|e| !e.trim().is_empty()).count() as i64;
        total_months = non_blank * FALLBACK_MONTHS_PER_ENTRY;
    }

    round_one_decimal(total_months as f64 / 12.0)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
