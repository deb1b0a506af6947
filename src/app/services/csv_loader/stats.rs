//! Decode statistics and result structures for CSV loading
//!
//! Counts are advisory: undecodable rows are skipped, never fatal.

use crate::app::models::RawRecord;

/// Decode result with raw records and basic statistics
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Decoded records in file order
    pub records: Vec<RawRecord>,

    /// Basic decode statistics
    pub stats: LoadStats,
}

/// Simple decode statistics
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LoadStats {
    /// Name of the decoded source (file path or upload name)
    pub source: String,

    /// Total number of data records encountered
    pub total_records: usize,

    /// Number of records successfully decoded
    pub records_decoded: usize,

    /// Number of records skipped due to decode errors
    pub records_skipped: usize,

    /// Header cells that were not recognised
    pub ignored_columns: Vec<String>,

    /// List of decode errors for debugging
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            total_records: 0,
            records_decoded: 0,
            records_skipped: 0,
            ignored_columns: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.records_decoded as f64 / self.total_records as f64) * 100.0
        }
    }
}
