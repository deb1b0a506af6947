//! Data models for the Play Store dashboard
//!
//! The pipeline has an explicit two-stage type boundary: [`RawRecord`] holds the
//! untrusted strings produced by the CSV decoder, and [`CleanRecord`] holds the
//! validated, typed values. The row cleaner is the only conversion point.

use crate::constants::{PAID_TYPE, columns};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Raw Record
// =============================================================================

/// One CSV data row, keyed by the recognised column names
///
/// Every field is optional: an absent column and an empty cell are treated the
/// same way by the field parsers. Unrecognised columns are dropped by the loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub app: Option<String>,
    pub category: Option<String>,
    pub rating: Option<String>,
    pub reviews: Option<String>,
    pub size: Option<String>,
    pub installs: Option<String>,
    pub app_type: Option<String>,
    pub price: Option<String>,
    pub content_rating: Option<String>,
    pub genres: Option<String>,
    pub last_updated: Option<String>,
    pub current_ver: Option<String>,
    pub android_ver: Option<String>,
}

impl RawRecord {
    /// Assign a value by its CSV column name; returns false for unknown columns
    pub fn set_field(&mut self, column: &str, value: &str) -> bool {
        let slot = match column {
            columns::APP => &mut self.app,
            columns::CATEGORY => &mut self.category,
            columns::RATING => &mut self.rating,
            columns::REVIEWS => &mut self.reviews,
            columns::SIZE => &mut self.size,
            columns::INSTALLS => &mut self.installs,
            columns::TYPE => &mut self.app_type,
            columns::PRICE => &mut self.price,
            columns::CONTENT_RATING => &mut self.content_rating,
            columns::GENRES => &mut self.genres,
            columns::LAST_UPDATED => &mut self.last_updated,
            columns::CURRENT_VER => &mut self.current_ver,
            columns::ANDROID_VER => &mut self.android_ver,
            _ => return false,
        };
        *slot = Some(value.to_string());
        true
    }

    /// Builder used heavily by tests and fixtures
    pub fn with(mut self, column: &str, value: &str) -> Self {
        self.set_field(column, value);
        self
    }
}

/// Render a cleaned record back into source-style cells
///
/// Feeding the result through the row cleaner yields an equal record.
impl From<&CleanRecord> for RawRecord {
    fn from(record: &CleanRecord) -> Self {
        RawRecord {
            app: Some(record.name.clone()),
            category: Some(record.category.clone()),
            rating: record.rating.map(|r| r.to_string()),
            reviews: Some(record.review_count.to_string()),
            size: record.size_mb.map(|mb| format!("{}M", mb)),
            installs: Some(record.installs.to_string()),
            app_type: Some(record.app_type.clone()),
            price: Some(record.price.to_string()),
            content_rating: Some(record.content_rating.clone()),
            genres: Some(record.genres.clone()),
            last_updated: record
                .last_updated
                .map(|date| date.format("%Y-%m-%d").to_string()),
            current_ver: Some(record.current_version.clone()),
            android_ver: record.android_version_min.map(|v| v.to_string()),
        }
    }
}

// =============================================================================
// Clean Record
// =============================================================================

/// One verified application entry
///
/// Invariants for every record that leaves the row cleaner:
/// - `name` and `category` are trimmed and non-empty
/// - `rating`, when present, lies in `[1, 5]`
/// - no other record shares the lower-cased `(name, category)` pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub name: String,
    pub category: String,

    /// `None` is the "missing" marker, distinct from a rating of zero
    pub rating: Option<f64>,

    pub review_count: u64,

    /// `None` for "Varies with device" and unparseable sizes
    pub size_mb: Option<f64>,

    pub installs: u64,

    /// "Paid", "Free" or whatever the source carried
    pub app_type: String,

    /// Always 0 unless `app_type` is "Paid"
    pub price: f64,

    pub content_rating: String,
    pub genres: String,
    pub last_updated: Option<NaiveDate>,
    pub update_year: Option<i32>,

    /// Minimum Android version as major.minor
    pub android_version_min: Option<f64>,

    pub current_version: String,
}

impl CleanRecord {
    pub fn is_paid(&self) -> bool {
        self.app_type == PAID_TYPE
    }

    /// Rating projection for aggregation: the missing marker becomes NaN
    pub fn rating_or_nan(&self) -> f64 {
        self.rating.unwrap_or(f64::NAN)
    }

    /// Identity used for deduplication
    pub fn dedup_key(&self) -> String {
        format!(
            "{}||{}",
            self.name.to_lowercase(),
            self.category.to_lowercase()
        )
    }

    /// Case-insensitive substring match on name, category or type
    ///
    /// `needle` must already be lower-cased and trimmed.
    pub fn matches_query(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self.app_type.to_lowercase().contains(needle)
    }
}
