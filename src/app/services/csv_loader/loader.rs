//! Core CSV loader implementation
//!
//! Handles upload validation, async file reading and decoding of the data rows
//! into raw records.

use std::path::Path;
use tracing::{debug, info, warn};

use super::column_mapping::ColumnMapping;
use super::stats::{LoadResult, LoadStats};
use crate::app::models::RawRecord;
use crate::config::DashboardConfig;
use crate::{Error, Result};

/// Loader for Play Store CSV files
///
/// Validation mirrors what the dashboard accepts for uploads: a supported
/// extension and a bounded size.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    max_file_size_bytes: u64,
    supported_extensions: Vec<String>,
}

impl CsvLoader {
    pub fn new(max_file_size_bytes: u64, supported_extensions: Vec<String>) -> Self {
        Self {
            max_file_size_bytes,
            supported_extensions,
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(
            config.max_file_size_bytes,
            config.supported_extensions.clone(),
        )
    }

    /// Check extension and size before reading anything
    pub fn validate_file(&self, path: &Path, size_bytes: u64) -> Result<()> {
        let extension = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
            .unwrap_or_default();

        if !self
            .supported_extensions
            .iter()
            .any(|supported| supported.eq_ignore_ascii_case(&extension))
        {
            return Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
                expected: self.supported_extensions.join(", "),
            });
        }

        if size_bytes > self.max_file_size_bytes {
            return Err(Error::FileTooLarge {
                path: path.to_path_buf(),
                size_mb: size_bytes / (1024 * 1024),
                limit_mb: self.max_file_size_bytes / (1024 * 1024),
            });
        }

        Ok(())
    }

    /// Read and decode a whole CSV file
    ///
    /// Reading happens on the async runtime; decoding runs on the blocking pool.
    pub async fn load_path(&self, path: &Path) -> Result<LoadResult> {
        info!("Loading CSV file: {}", path.display());

        let metadata = tokio::fs::metadata(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::DatasetNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                Error::io(format!("Failed to stat {}", path.display()), e)
            }
        })?;
        self.validate_file(path, metadata.len())?;

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))?;

        let source = path.display().to_string();
        let task_source = source.clone();
        tokio::task::spawn_blocking(move || decode_bytes(&bytes, &task_source))
            .await
            .map_err(|e| Error::csv_decode(source, format!("decode task failed: {}", e), None))?
    }
}

/// Decode CSV text that is already in memory
pub fn decode_str(content: &str, source: &str) -> Result<LoadResult> {
    decode_bytes(content.as_bytes(), source)
}

/// Decode CSV bytes into raw records
///
/// Only a missing or unreadable header fails the load. Rows that cannot be
/// decoded are skipped and counted.
pub fn decode_bytes(bytes: &[u8], source: &str) -> Result<LoadResult> {
    let mut stats = LoadStats::new(source);
    let mut records = Vec::new();

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = csv_reader
        .headers()
        .map_err(|e| Error::csv_decode(source, "Failed to read CSV headers", Some(e)))?
        .clone();

    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(Error::csv_decode(source, "File has no header row", None));
    }

    let column_mapping = ColumnMapping::analyze(&headers, source)?;
    if !column_mapping.ignored_columns.is_empty() {
        debug!("Ignoring columns: {:?}", column_mapping.ignored_columns);
    }
    stats.ignored_columns = column_mapping.ignored_columns.clone();

    for result in csv_reader.records() {
        stats.total_records += 1;

        match result {
            Ok(record) => {
                let mut raw = RawRecord::default();
                for (column, index) in column_mapping.recognised() {
                    if let Some(value) = record.get(index) {
                        raw.set_field(column, value);
                    }
                }
                records.push(raw);
                stats.records_decoded += 1;
            }
            Err(e) => {
                stats.records_skipped += 1;
                stats.errors.push(format!(
                    "CSV decode error at record {}: {}",
                    stats.total_records, e
                ));
                debug!("Skipped record {}: {}", stats.total_records, e);
            }
        }
    }

    if stats.records_skipped > 0 {
        warn!(
            "Skipped {} undecodable records in {}",
            stats.records_skipped, source
        );
    }
    info!(
        "Decoded {} records from {} ({:.1}% success)",
        stats.records_decoded,
        source,
        stats.success_rate()
    );

    Ok(LoadResult { records, stats })
}
