//! Record deduplication for cleaned app records
//!
//! Two records are duplicates when their lower-cased name and category match.
//! The first occurrence in input order is kept and later ones are discarded
//! silently; no attempt is made to pick a "better" duplicate.

use crate::app::models::CleanRecord;
use std::collections::HashSet;
use tracing::info;

use super::quality_filter::RejectReason;
use super::stats::CleaningStats;

/// Deduplicate records, preserving the order of first occurrences
pub fn deduplicate_records(
    records: Vec<CleanRecord>,
    stats: &mut CleaningStats,
) -> Vec<CleanRecord> {
    let before = records.len();
    let mut seen = HashSet::with_capacity(before);
    let mut deduplicated = Vec::with_capacity(before);

    for record in records {
        if seen.insert(record.dedup_key()) {
            deduplicated.push(record);
        }
    }

    let removed = before - deduplicated.len();
    stats.record_rejections(RejectReason::Duplicate, removed);

    info!(
        "Deduplication complete: removed {} duplicates, {} records remaining",
        removed,
        deduplicated.len()
    );

    deduplicated
}
