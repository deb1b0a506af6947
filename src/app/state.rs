//! Application state: the current dataset snapshot and the table cursor
//!
//! Datasets are replaced wholesale, never edited in place. Every load attempt
//! takes a generation ticket; a finished load is applied only when its ticket is
//! newer than the dataset currently shown, so a slow stale load can never
//! overwrite a newer one. A failed load leaves the current dataset untouched.

use crate::app::models::CleanRecord;
use crate::app::services::charts::{self, ChartOutcome};
use crate::app::services::csv_loader::{CsvLoader, LoadStats, loader::decode_str};
use crate::app::services::export;
use crate::app::services::kpi::{self, DatasetOverview, Kpi};
use crate::app::services::record_cleaner::{CleaningStats, RowCleaner};
use crate::app::services::table_view::TableViewModel;
use crate::config::DashboardConfig;
use crate::{Error, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{info, warn};

/// Decoded and cleaned rows, ready to become the current dataset
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub source: String,
    pub rows: Vec<CleanRecord>,
    pub load_stats: LoadStats,
    pub cleaning_stats: CleaningStats,
}

/// The dataset currently shown
#[derive(Debug)]
pub struct Dataset {
    pub source: String,
    pub rows: Arc<[CleanRecord]>,
    pub load_stats: LoadStats,
    pub cleaning_stats: CleaningStats,
    pub generation: u64,
}

/// Proof that a load attempt was started; carries its generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The load replaced the current dataset
    Applied { generation: u64, rows: usize },
    /// A newer dataset was already in place; the result was discarded
    Stale { generation: u64, current: u64 },
}

/// Read, decode and clean a CSV file
///
/// Cleaning runs on the blocking pool, like decoding.
pub async fn prepare_dataset(loader: &CsvLoader, path: &Path) -> Result<LoadedDataset> {
    let loaded = loader.load_path(path).await?;
    let source = loaded.stats.source.clone();

    let task_source = source.clone();
    let (load_stats, cleaned) = tokio::task::spawn_blocking(move || {
        let cleaned = RowCleaner::new().clean(loaded.records);
        (loaded.stats, cleaned)
    })
    .await
    .map_err(|e| Error::processing_interrupted(format!("cleaning {} failed: {}", task_source, e)))?;

    Ok(LoadedDataset {
        source,
        rows: cleaned.records,
        load_stats,
        cleaning_stats: cleaned.stats,
    })
}

/// Decode and clean CSV text already in memory, such as an uploaded file
pub fn prepare_from_str(content: &str, source: &str) -> Result<LoadedDataset> {
    let loaded = decode_str(content, source)?;
    let cleaned = RowCleaner::new().clean(loaded.records);
    Ok(LoadedDataset {
        source: source.to_string(),
        rows: cleaned.records,
        load_stats: loaded.stats,
        cleaning_stats: cleaned.stats,
    })
}

/// Single owner of the dashboard's mutable state
#[derive(Debug)]
pub struct AppState {
    config: DashboardConfig,
    dataset: Option<Arc<Dataset>>,
    table: TableViewModel,
    issued_generation: AtomicU64,
    applied_generation: u64,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        let table = TableViewModel::empty(config.page_size);
        Self {
            config,
            dataset: None,
            table,
            issued_generation: AtomicU64::new(0),
            applied_generation: 0,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Start a load attempt; later tickets always carry larger generations
    pub fn begin_load(&self) -> LoadTicket {
        let generation = self.issued_generation.fetch_add(1, Ordering::SeqCst) + 1;
        LoadTicket { generation }
    }

    /// Finish a load attempt
    ///
    /// Errors are returned unchanged and leave the state as it was. A success is
    /// applied only if no newer load has been applied already.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<LoadedDataset>,
    ) -> Result<LoadOutcome> {
        let loaded = match result {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!(
                    "Load {} failed, keeping current dataset: {}",
                    ticket.generation, e
                );
                return Err(e);
            }
        };

        if ticket.generation <= self.applied_generation {
            info!(
                "Discarding stale load {} from {} (current generation {})",
                ticket.generation, loaded.source, self.applied_generation
            );
            return Ok(LoadOutcome::Stale {
                generation: ticket.generation,
                current: self.applied_generation,
            });
        }

        let rows: Arc<[CleanRecord]> = loaded.rows.into();
        let row_count = rows.len();
        self.table.replace_rows(Arc::clone(&rows));
        self.dataset = Some(Arc::new(Dataset {
            source: loaded.source,
            rows,
            load_stats: loaded.load_stats,
            cleaning_stats: loaded.cleaning_stats,
            generation: ticket.generation,
        }));
        self.applied_generation = ticket.generation;

        info!(
            "Applied dataset generation {} with {} apps",
            ticket.generation, row_count
        );
        Ok(LoadOutcome::Applied {
            generation: ticket.generation,
            rows: row_count,
        })
    }

    /// Load a file end to end
    pub async fn load_path(&mut self, path: &Path) -> Result<LoadOutcome> {
        let ticket = self.begin_load();
        let loader = CsvLoader::from_config(&self.config);
        let result = prepare_dataset(&loader, path).await;
        self.complete_load(ticket, result)
    }

    /// Load CSV text that is already in memory
    pub fn load_str(&mut self, content: &str, source: &str) -> Result<LoadOutcome> {
        let ticket = self.begin_load();
        let result = prepare_from_str(content, source);
        self.complete_load(ticket, result)
    }

    pub fn dataset(&self) -> Option<&Arc<Dataset>> {
        self.dataset.as_ref()
    }

    /// Current rows, empty before the first successful load
    pub fn rows(&self) -> &[CleanRecord] {
        self.dataset.as_deref().map(|d| &d.rows[..]).unwrap_or(&[])
    }

    pub fn applied_generation(&self) -> u64 {
        self.applied_generation
    }

    pub fn table(&self) -> &TableViewModel {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut TableViewModel {
        &mut self.table
    }

    pub fn kpis(&self, current_year: i32) -> Vec<Kpi> {
        kpi::build_kpis(self.rows(), current_year)
    }

    pub fn overview(&self) -> DatasetOverview {
        DatasetOverview::from_records(self.rows())
    }

    pub fn charts(&self) -> Vec<ChartOutcome> {
        charts::build_all(self.rows())
    }

    /// Export the rows matching the current table query
    pub fn export_filtered(&self, dir: &Path, date: NaiveDate) -> Result<PathBuf> {
        export::export_to_dir(self.table.filtered_rows(), dir, date)
    }
}
