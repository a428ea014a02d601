//! Formatting utilities used for CLI outputs.

use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use chrono::{Datelike, NaiveDate};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

fn month(d: NaiveDate) -> String {
    d.format("%B").to_string()
}

/// Renders an inclusive date range the way the site displays it:
/// - same day               → "June 1, 2025"
/// - same month and year    → "June 1-5, 2025"
/// - same year only         → "June 28-July 2, 2025"
/// - different years        → "December 30, 2025 - January 2, 2026"
pub fn format_date_range(start_str: &str, end_str: &str) -> AppResult<String> {
    let start =
        parse_date(start_str).ok_or_else(|| AppError::InvalidDate(start_str.to_string()))?;
    let end = parse_date(end_str).ok_or_else(|| AppError::InvalidDate(end_str.to_string()))?;

    let out = if start_str == end_str {
        format!("{} {}, {}", month(start), start.day(), start.year())
    } else if start.month() == end.month() && start.year() == end.year() {
        format!(
            "{} {}-{}, {}",
            month(start),
            start.day(),
            end.day(),
            end.year()
        )
    } else if start.year() == end.year() {
        format!(
            "{} {}-{} {}, {}",
            month(start),
            start.day(),
            month(end),
            end.day(),
            end.year()
        )
    } else {
        format!(
            "{} {}, {} - {} {}, {}",
            month(start),
            start.day(),
            start.year(),
            month(end),
            end.day(),
            end.year()
        )
    };

    Ok(out)
}

/// Range for display in listings: falls back to the raw strings when either
/// date fails to parse, so malformed records stay visible.
pub fn display_date_range(start_str: &str, end_str: &str) -> String {
    format_date_range(start_str, end_str)
        .unwrap_or_else(|_| format!("{} - {}", start_str, end_str))
}
