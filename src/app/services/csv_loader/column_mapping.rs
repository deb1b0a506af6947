//! Column mapping for the Play Store CSV header
//!
//! Maps recognised column names to their position in each record. Unknown
//! columns are remembered for diagnostics and otherwise ignored.

use crate::Result;
use crate::constants::columns;
use crate::error::Error;
use csv::StringRecord;
use std::collections::HashMap;

const RECOGNISED_COLUMNS: &[&str] = &[
    columns::APP,
    columns::CATEGORY,
    columns::RATING,
    columns::REVIEWS,
    columns::SIZE,
    columns::INSTALLS,
    columns::TYPE,
    columns::PRICE,
    columns::CONTENT_RATING,
    columns::GENRES,
    columns::LAST_UPDATED,
    columns::CURRENT_VER,
    columns::ANDROID_VER,
];

/// Column mapping for one decoded file
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Recognised column name to index mapping
    pub name_to_index: HashMap<String, usize>,

    /// Header cells that are not part of the recognised schema
    pub ignored_columns: Vec<String>,
}

impl ColumnMapping {
    /// Analyze the header row
    ///
    /// Fails when a required column (`App`, `Category`) is absent, since no row
    /// of such a file could survive cleaning.
    pub fn analyze(headers: &StringRecord, source: &str) -> Result<Self> {
        let mut name_to_index = HashMap::new();
        let mut ignored_columns = Vec::new();

        for (index, header) in headers.iter().enumerate() {
            // Spreadsheet exports often prefix the first cell with a BOM
            let column_name = header.trim_start_matches('\u{feff}').trim();

            if RECOGNISED_COLUMNS.contains(&column_name) {
                // First occurrence wins for repeated headers
                name_to_index
                    .entry(column_name.to_string())
                    .or_insert(index);
            } else {
                ignored_columns.push(column_name.to_string());
            }
        }

        for required in columns::REQUIRED {
            if !name_to_index.contains_key(*required) {
                return Err(Error::missing_column(source, *required));
            }
        }

        Ok(ColumnMapping {
            name_to_index,
            ignored_columns,
        })
    }

    /// Iterate recognised columns with their indices
    pub fn recognised(&self) -> impl Iterator<Item = (&str, usize)> {
        self.name_to_index
            .iter()
            .map(|(name, index)| (name.as_str(), *index))
    }
}
