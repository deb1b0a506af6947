//! Cleaning statistics and result structures for the row cleaning pipeline
//!
//! The counts are diagnostics only. Nothing downstream depends on them.

use crate::app::models::CleanRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

use super::quality_filter::RejectReason;

/// Per-stage row counts for one cleaning pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleaningStats {
    /// Rows handed to the cleaner
    pub raw_rows: usize,
    /// Rows left after the name/category filter
    pub after_basic_filter: usize,
    /// Rows left after the validity rules
    pub after_validity_filters: usize,
    /// Rows left after deduplication
    pub after_deduplication: usize,
    /// Rejected rows by reason
    pub rejections: HashMap<RejectReason, usize>,
}

impl CleaningStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` rejections for `reason`; zero counts are not recorded
    pub fn record_rejections(&mut self, reason: RejectReason, count: usize) {
        if count > 0 {
            *self.rejections.entry(reason).or_insert(0) += count;
        }
    }

    pub fn rejected(&self, reason: RejectReason) -> usize {
        self.rejections.get(&reason).copied().unwrap_or(0)
    }

    pub fn total_rejected(&self) -> usize {
        self.rejections.values().sum()
    }

    /// Percentage of raw rows that survived cleaning
    pub fn retention_rate(&self) -> f64 {
        if self.raw_rows == 0 {
            0.0
        } else {
            (self.after_deduplication as f64 / self.raw_rows as f64) * 100.0
        }
    }

    /// One-line summary for logs and the CLI
    pub fn summary(&self) -> String {
        format!(
            "{} raw -> {} with identity -> {} valid -> {} unique ({:.1}% retained)",
            self.raw_rows,
            self.after_basic_filter,
            self.after_validity_filters,
            self.after_deduplication,
            self.retention_rate()
        )
    }

    pub fn log_summary(&self) {
        info!("Cleaning summary: {}", self.summary());
        for reason in [
            RejectReason::MissingIdentity,
            RejectReason::NumericCategory,
            RejectReason::RatingOutOfRange,
            RejectReason::NameTooShort,
            RejectReason::Duplicate,
        ] {
            let count = self.rejected(reason);
            if count > 0 {
                info!("  rejected ({}): {}", reason, count);
            }
        }
    }
}

/// Cleaned records and the statistics of the pass that produced them
#[derive(Debug, Clone)]
pub struct CleaningResult {
    pub records: Vec<CleanRecord>,
    pub stats: CleaningStats,
}

impl CleaningResult {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
