//! CSV export of the filtered table rows
//!
//! The export uses its own fixed header (`Size (MB)`, `Price (USD)`, ...) rather
//! than the source column names. The free-text columns (App, Category,
//! Content Rating, Genres, Current Version) are always quoted, even when a
//! value looks like a number. Every other cell, header included, is quoted
//! only when its content requires it.

use crate::app::models::CleanRecord;
use crate::constants::{EXPORT_FILE_PREFIX, EXPORT_HEADERS, messages};
use crate::{Error, Result};
use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Header positions of the columns that are quoted unconditionally
const ALWAYS_QUOTED: [usize; 5] = [0, 1, 8, 9, 11];

/// `googleplaystore_<count>_apps_<YYYY-MM-DD>.csv`
pub fn export_file_name(count: usize, date: NaiveDate) -> String {
    format!(
        "{}_{}_apps_{}.csv",
        EXPORT_FILE_PREFIX,
        count,
        date.format("%Y-%m-%d")
    )
}

/// Export row for one record, in header order
fn export_fields(record: &CleanRecord) -> [String; 13] {
    [
        record.name.clone(),
        record.category.clone(),
        record.rating.map(|r| r.to_string()).unwrap_or_default(),
        record.review_count.to_string(),
        record
            .size_mb
            .map(|mb| format!("{:.2}", mb))
            .unwrap_or_default(),
        record.installs.to_string(),
        record.app_type.clone(),
        if record.is_paid() {
            format!("{:.2}", record.price)
        } else {
            "0".to_string()
        },
        record.content_rating.clone(),
        record.genres.clone(),
        record
            .last_updated
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        record.current_version.clone(),
        record
            .android_version_min
            .map(|v| v.to_string())
            .unwrap_or_default(),
    ]
}

/// Write records as CSV to any writer; fails on an empty row set
pub fn write_csv<'a, W, I>(rows: I, mut writer: W) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a CleanRecord>,
{
    let rows: Vec<&CleanRecord> = rows.into_iter().collect();
    if rows.is_empty() {
        return Err(Error::export(messages::NO_EXPORT_ROWS));
    }

    {
        let mut header = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut writer);
        header.write_record(EXPORT_HEADERS)?;
        header
            .flush()
            .map_err(|e| Error::io("Failed to flush CSV export", e))?;
    }

    for record in &rows {
        write_row(&mut writer, &export_fields(record))
            .map_err(|e| Error::io("Failed to write CSV export", e))?;
    }
    writer
        .flush()
        .map_err(|e| Error::io("Failed to flush CSV export", e))?;

    Ok(rows.len())
}

/// One data line; forced columns are quoted regardless of content
fn write_row<W: Write>(out: &mut W, fields: &[String]) -> std::io::Result<()> {
    for (index, value) in fields.iter().enumerate() {
        if index > 0 {
            out.write_all(b",")?;
        }
        let needs_quotes = ALWAYS_QUOTED.contains(&index)
            || value.contains([',', '"', '\n', '\r']);
        if needs_quotes {
            write!(out, "\"{}\"", value.replace('"', "\"\""))?;
        } else {
            out.write_all(value.as_bytes())?;
        }
    }
    out.write_all(b"\n")
}

/// Render the export into memory
pub fn export_csv_string<'a, I>(rows: I) -> Result<String>
where
    I: IntoIterator<Item = &'a CleanRecord>,
{
    let mut buffer = Vec::new();
    write_csv(rows, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| Error::export(format!("export is not UTF-8: {}", e)))
}

/// Write the export into `dir` under the dated file name
pub fn export_to_dir<'a, I>(rows: I, dir: &Path, date: NaiveDate) -> Result<PathBuf>
where
    I: IntoIterator<Item = &'a CleanRecord>,
{
    let rows: Vec<&CleanRecord> = rows.into_iter().collect();
    if rows.is_empty() {
        return Err(Error::export(messages::NO_EXPORT_ROWS));
    }

    std::fs::create_dir_all(dir)
        .map_err(|e| Error::io(format!("Failed to create {}", dir.display()), e))?;

    let path = dir.join(export_file_name(rows.len(), date));
    let file = std::fs::File::create(&path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;
    let written = write_csv(rows, std::io::BufWriter::new(file))?;

    info!("Exported {} apps to {}", written, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record() -> CleanRecord {
        CleanRecord {
            name: "Photo \"Pro\" Editor".to_string(),
            category: "PHOTOGRAPHY".to_string(),
            rating: Some(4.5),
            review_count: 1200,
            size_mb: Some(19.0),
            installs: 100_000,
            app_type: "Paid".to_string(),
            price: 4.99,
            content_rating: "Everyone".to_string(),
            genres: "Photography".to_string(),
            last_updated: NaiveDate::from_ymd_opt(2018, 6, 8),
            update_year: Some(2018),
            android_version_min: Some(4.1),
            current_version: "2.0.1".to_string(),
        }
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            export_file_name(42, date),
            "googleplaystore_42_apps_2024-03-09.csv"
        );
    }

    #[test]
    fn test_export_csv_string() {
        let mut free = record();
        free.name = "Chess".to_string();
        free.app_type = "Free".to_string();
        free.price = 0.0;
        free.rating = None;
        free.size_mb = None;
        free.last_updated = None;

        let rows = vec![record(), free];
        let csv = export_csv_string(&rows).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], EXPORT_HEADERS.join(","));
        assert_eq!(
            lines[1],
            "\"Photo \"\"Pro\"\" Editor\",\"PHOTOGRAPHY\",4.5,1200,19.00,100000,Paid,4.99,\"Everyone\",\"Photography\",2018-06-08,\"2.0.1\",4.1"
        );
        assert_eq!(
            lines[2],
            "\"Chess\",\"PHOTOGRAPHY\",,1200,,100000,Free,0,\"Everyone\",\"Photography\",,\"2.0.1\",4.1"
        );

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let free_row = reader.records().nth(1).unwrap().unwrap();
        assert_eq!(&free_row[0], "Chess");
        assert_eq!(&free_row[2], "");
        assert_eq!(&free_row[4], "");
        assert_eq!(&free_row[7], "0");
        assert_eq!(&free_row[10], "");
    }

    #[test]
    fn test_export_quotes_numeric_looking_text() {
        let mut numeric = record();
        numeric.name = "2048".to_string();
        numeric.genres = "NaN".to_string();
        numeric.current_version = "1.0".to_string();
        numeric.app_type = "Free".to_string();
        numeric.price = 0.0;
        numeric.rating = None;
        numeric.android_version_min = None;

        let csv = export_csv_string(&[numeric]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[1],
            "\"2048\",\"PHOTOGRAPHY\",,1200,19.00,100000,Free,0,\"Everyone\",\"NaN\",2018-06-08,\"1.0\","
        );
    }

    #[test]
    fn test_export_quotes_unforced_cells_when_needed() {
        let mut odd = record();
        odd.app_type = "Free, sort of".to_string();
        odd.price = 0.0;

        let csv = export_csv_string(&[odd]).unwrap();
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let row = reader.records().next().unwrap().unwrap();

        assert_eq!(row.len(), EXPORT_HEADERS.len());
        assert_eq!(&row[6], "Free, sort of");
        assert!(csv.contains(",\"Free, sort of\","));
    }

    #[test]
    fn test_export_empty_rows_fails() {
        let rows: Vec<CleanRecord> = Vec::new();
        let err = export_csv_string(&rows).unwrap_err();
        assert!(matches!(err, Error::Export { .. }));
    }

    #[test]
    fn test_export_to_dir() {
        let dir = TempDir::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let rows = vec![record()];

        let path = export_to_dir(&rows, dir.path(), date).unwrap();

        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("googleplaystore_1_apps_2024-01-02.csv")
        );
        let mut reader = csv::Reader::from_path(&path).unwrap();
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][0], "Photo \"Pro\" Editor");
        assert_eq!(&records[0][7], "4.99");
    }
}
