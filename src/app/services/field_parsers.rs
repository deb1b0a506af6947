//! Field parsing utilities for Play Store CSV values
//!
//! Every parser takes one raw cell (or its absence) and returns a typed value or a
//! safe default. None of them fail: malformed input collapses to 0, `None`, or the
//! rating "missing" marker.

use crate::constants::{RATING_CLAMP_MAX, RATING_CLAMP_MIN};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static VERSION_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(\.\d+)?").expect("version pattern is valid"));

/// Date layouts seen in the "Last Updated" column
const DATE_FORMATS: &[&str] = &["%B %d, %Y", "%b %d, %Y", "%Y-%m-%d", "%m/%d/%Y", "%d-%b-%y"];

/// Trimmed, non-empty view of a raw cell
fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

/// Parse a float, rejecting NaN and infinities
fn parse_finite(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse an install count such as "1,000,000+"
///
/// `+` and `,` are stripped wherever they appear; anything that is not then a
/// plain non-negative integer yields 0.
pub fn parse_installs(raw: Option<&str>) -> u64 {
    let Some(value) = non_empty(raw) else {
        return 0;
    };
    let cleaned: String = value.chars().filter(|c| *c != '+' && *c != ',').collect();
    cleaned.parse::<u64>().unwrap_or(0)
}

/// Parse a price such as "$4.99"; unparseable or negative values yield 0
pub fn parse_price(raw: Option<&str>) -> f64 {
    let Some(value) = non_empty(raw) else {
        return 0.0;
    };
    let cleaned = value.replace('$', "");
    parse_finite(&cleaned).filter(|p| *p >= 0.0).unwrap_or(0.0)
}

/// Parse a review count; non-integers such as "3.0M" yield 0
pub fn parse_reviews(raw: Option<&str>) -> u64 {
    non_empty(raw)
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0)
}

/// Parse a rating and clamp it into `[0, 5]`
///
/// Returns `None` (the missing marker) when the cell is empty or not a number.
/// A clamped value may still be rejected later by the row cleaner.
pub fn parse_rating(raw: Option<&str>) -> Option<f64> {
    non_empty(raw)
        .and_then(parse_finite)
        .map(|r| r.clamp(RATING_CLAMP_MIN, RATING_CLAMP_MAX))
}

/// Parse an app size into megabytes
///
/// "19M" -> 19, "512k" -> 0.512, "Varies with device" -> None.
pub fn parse_size_mb(raw: Option<&str>) -> Option<f64> {
    let value = non_empty(raw)?;
    if value.to_lowercase().contains("varies") {
        return None;
    }

    let size = if let Some(prefix) = value.strip_suffix(['k', 'K']) {
        parse_finite(prefix).map(|kb| kb / 1000.0)
    } else if let Some(prefix) = value.strip_suffix(['M', 'm']) {
        parse_finite(prefix)
    } else {
        parse_finite(value)
    };

    size.filter(|mb| *mb > 0.0)
}

/// Extract the first "major" or "major.minor" number from free text like "4.1 and up"
pub fn parse_android_version(raw: Option<&str>) -> Option<f64> {
    let value = non_empty(raw)?;
    VERSION_NUMBER
        .find(value)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Parse the "Last Updated" column into a calendar date
pub fn parse_last_updated(raw: Option<&str>) -> Option<NaiveDate> {
    let value = non_empty(raw)?;
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Year component of the "Last Updated" column
pub fn parse_update_year(raw: Option<&str>) -> Option<i32> {
    parse_last_updated(raw).map(|date| date.year())
}

/// Trimmed text field, empty when absent
pub fn parse_text(raw: Option<&str>) -> String {
    raw.map(|s| s.trim().to_string()).unwrap_or_default()
}
