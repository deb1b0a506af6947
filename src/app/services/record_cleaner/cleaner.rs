//! Main row cleaner implementation and pipeline orchestration

use crate::app::models::{CleanRecord, RawRecord};
use crate::app::services::field_parsers::{
    parse_android_version, parse_installs, parse_last_updated, parse_price, parse_rating,
    parse_reviews, parse_size_mb, parse_text,
};
use crate::constants::PAID_TYPE;
use chrono::Datelike;
use tracing::debug;

use super::{
    deduplication::deduplicate_records,
    quality_filter::{apply_basic_filter, apply_validity_filters},
    stats::{CleaningResult, CleaningStats},
};

/// Row cleaner for Play Store records
///
/// Stateless; one instance can clean any number of datasets.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowCleaner;

impl RowCleaner {
    pub fn new() -> Self {
        Self
    }

    /// Run the full cleaning pipeline
    ///
    /// 1. Map every raw record through the field parsers
    /// 2. Drop rows without a name or category
    /// 3. Drop rows breaking a validity rule
    /// 4. Deduplicate on lower-cased name and category, keeping the first
    pub fn clean(&self, raw_records: Vec<RawRecord>) -> CleaningResult {
        let mut stats = CleaningStats::new();
        stats.raw_rows = raw_records.len();

        let candidates: Vec<CleanRecord> = raw_records.iter().map(to_candidate).collect();
        debug!("Mapped {} raw records to candidates", candidates.len());

        let identified = apply_basic_filter(candidates, &mut stats);
        stats.after_basic_filter = identified.len();

        let valid = apply_validity_filters(identified, &mut stats);
        stats.after_validity_filters = valid.len();

        let records = deduplicate_records(valid, &mut stats);
        stats.after_deduplication = records.len();

        stats.log_summary();

        CleaningResult { records, stats }
    }
}

/// Map one raw record to a candidate without applying any filter
///
/// The price is parsed for every row but only kept for paid apps.
pub fn to_candidate(raw: &RawRecord) -> CleanRecord {
    let app_type = parse_text(raw.app_type.as_deref());
    let price = if app_type == PAID_TYPE {
        parse_price(raw.price.as_deref())
    } else {
        0.0
    };
    let last_updated = parse_last_updated(raw.last_updated.as_deref());

    CleanRecord {
        name: parse_text(raw.app.as_deref()),
        category: parse_text(raw.category.as_deref()),
        rating: parse_rating(raw.rating.as_deref()),
        review_count: parse_reviews(raw.reviews.as_deref()),
        size_mb: parse_size_mb(raw.size.as_deref()),
        installs: parse_installs(raw.installs.as_deref()),
        app_type,
        price,
        content_rating: parse_text(raw.content_rating.as_deref()),
        genres: parse_text(raw.genres.as_deref()),
        last_updated,
        update_year: last_updated.map(|date| date.year()),
        android_version_min: parse_android_version(raw.android_ver.as_deref()),
        current_version: parse_text(raw.current_ver.as_deref()),
    }
}
