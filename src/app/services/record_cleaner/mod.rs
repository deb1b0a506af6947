//! Row cleaning module for Play Store app records
//!
//! Turns decoded [`RawRecord`](crate::app::models::RawRecord)s into validated,
//! deduplicated [`CleanRecord`](crate::app::models::CleanRecord)s. This is the
//! only place where the raw-to-typed conversion happens.
//!
//! # Architecture
//!
//! - [`cleaner`] - Main RowCleaner struct and pipeline orchestration
//! - [`quality_filter`] - Row validity rules and rejection reasons
//! - [`deduplication`] - First-occurrence deduplication on name and category
//! - [`stats`] - Cleaning statistics and result structures
//!
//! # Cleaning Pipeline
//!
//! 1. **Mapping**: every raw record goes through the field parsers
//! 2. **Basic filter**: empty name or category is dropped
//! 3. **Validity filters**: numeric category, out-of-range rating, short name
//! 4. **Deduplication**: lower-cased `(name, category)`, first occurrence wins
//!
//! No row ever fails the load; rejected rows only change the counts.
//!
//! # Example Usage
//!
//! ```rust
//! use playstore_dashboard::app::models::RawRecord;
//! use playstore_dashboard::app::services::record_cleaner::RowCleaner;
//!
//! let raw = vec![RawRecord::default()
//!     .with("App", "Chess")
//!     .with("Category", "GAME")
//!     .with("Installs", "1,000+")];
//!
//! let result = RowCleaner::new().clean(raw);
//! assert_eq!(result.records.len(), 1);
//! assert_eq!(result.records[0].installs, 1000);
//! ```

pub mod cleaner;
pub mod deduplication;
pub mod quality_filter;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use cleaner::{RowCleaner, to_candidate};
pub use quality_filter::RejectReason;
pub use stats::{CleaningResult, CleaningStats};
