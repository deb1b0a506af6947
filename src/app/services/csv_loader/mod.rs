//! CSV loader for Play Store app metadata files
//!
//! This module is the only asynchronous boundary of the pipeline: it reads a whole
//! file, decodes it into [`RawRecord`](crate::app::models::RawRecord)s and hands
//! them to the row cleaner. There is no streaming; nothing is returned until the
//! full file has been decoded.
//!
//! ## Architecture
//!
//! - [`loader`] - File validation, async reading and decode orchestration
//! - [`column_mapping`] - Header analysis and recognised column lookup
//! - [`stats`] - Decode statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use playstore_dashboard::app::services::csv_loader::CsvLoader;
//! use playstore_dashboard::DashboardConfig;
//!
//! # async fn example() -> playstore_dashboard::Result<()> {
//! let loader = CsvLoader::from_config(&DashboardConfig::default());
//! let result = loader.load_path(std::path::Path::new("googleplaystore.csv")).await?;
//!
//! println!("Decoded {} of {} records",
//!          result.stats.records_decoded,
//!          result.stats.total_records);
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod loader;
pub mod stats;

pub use column_mapping::ColumnMapping;
pub use loader::CsvLoader;
pub use stats::{LoadResult, LoadStats};
