//! Validity filtering for cleaned record candidates
//!
//! Rules are applied in a fixed order and the first failing rule names the
//! rejection reason. The rating rule runs on the already clamped value, so a
//! source rating of 7 is kept as 5 while a source rating of 0.5 is dropped.

use crate::app::models::CleanRecord;
use crate::constants::{MIN_APP_NAME_CHARS, RATING_VALID_MAX, RATING_VALID_MIN};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::stats::CleaningStats;

/// Why a candidate was excluded from the cleaned collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// Name or category empty after trimming
    MissingIdentity,
    /// Category parses as a number, usually a row shifted one column left
    NumericCategory,
    /// Present rating below 1 or above 5
    RatingOutOfRange,
    /// Name shorter than the minimum length
    NameTooShort,
    /// Same lower-cased name and category as an earlier row
    Duplicate,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::MissingIdentity => "missing name or category",
            RejectReason::NumericCategory => "numeric category",
            RejectReason::RatingOutOfRange => "rating out of range",
            RejectReason::NameTooShort => "name too short",
            RejectReason::Duplicate => "duplicate",
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Basic filter: name and category must be present
pub fn has_identity(candidate: &CleanRecord) -> bool {
    !candidate.name.is_empty() && !candidate.category.is_empty()
}

/// True when the category is written as a number
///
/// Spelled-out values such as `NaN` or `inf` are ordinary text here, even
/// though `f64` parsing accepts them.
pub fn is_numeric_category(category: &str) -> bool {
    match category.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => true,
        // 1e400 overflows to infinity but is still written with digits
        Ok(_) => category.bytes().any(|b| b.is_ascii_digit()),
        Err(_) => false,
    }
}

/// A missing rating passes; a present one must lie in `[1, 5]`
pub fn rating_in_range(rating: Option<f64>) -> bool {
    match rating {
        Some(r) => (RATING_VALID_MIN..=RATING_VALID_MAX).contains(&r),
        None => true,
    }
}

pub fn name_long_enough(name: &str) -> bool {
    name.chars().count() >= MIN_APP_NAME_CHARS
}

/// Check the validity rules that follow the basic filter
///
/// Returns the first rule the candidate breaks, or `None` if it passes.
pub fn check_validity(candidate: &CleanRecord) -> Option<RejectReason> {
    if is_numeric_category(&candidate.category) {
        return Some(RejectReason::NumericCategory);
    }
    if !rating_in_range(candidate.rating) {
        return Some(RejectReason::RatingOutOfRange);
    }
    if !name_long_enough(&candidate.name) {
        return Some(RejectReason::NameTooShort);
    }
    None
}

/// Drop candidates without a name or category
pub fn apply_basic_filter(
    candidates: Vec<CleanRecord>,
    stats: &mut CleaningStats,
) -> Vec<CleanRecord> {
    let before = candidates.len();
    let kept: Vec<CleanRecord> = candidates.into_iter().filter(has_identity).collect();
    stats.record_rejections(RejectReason::MissingIdentity, before - kept.len());
    kept
}

/// Apply the validity rules, keeping input order
pub fn apply_validity_filters(
    candidates: Vec<CleanRecord>,
    stats: &mut CleaningStats,
) -> Vec<CleanRecord> {
    let before = candidates.len();
    let mut kept = Vec::with_capacity(before);

    for candidate in candidates {
        match check_validity(&candidate) {
            None => kept.push(candidate),
            Some(reason) => {
                debug!("Rejected '{}' ({}): {}", candidate.name, candidate.category, reason);
                stats.record_rejections(reason, 1);
            }
        }
    }

    info!(
        "Validity filtering complete: {} -> {} records ({} filtered out)",
        before,
        kept.len(),
        before - kept.len()
    );

    kept
}
