//! Play Store Dashboard Library
//!
//! A Rust library for turning a Google Play Store app metadata CSV into the
//! numbers behind a dashboard: cleaned records, KPI cards, a paginated and
//! searchable table, and eight chart specifications.
//!
//! This library provides tools for:
//! - Decoding the CSV into loosely typed raw records
//! - Parsing lossy field formats ("1,000+", "$4.99", "19M", "4.1 and up")
//! - Filtering invalid rows and deduplicating on app name and category
//! - Generic group/sum/mean/median/count aggregation
//! - KPI and dataset overview summaries
//! - Chart specifications with a shared "no data" outcome
//! - CSV export of the filtered view

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod format;
    pub mod models;
    pub mod state;
    pub mod services {
        pub mod aggregation;
        pub mod charts;
        pub mod csv_loader;
        pub mod debounce;
        pub mod export;
        pub mod field_parsers;
        pub mod kpi;
        pub mod record_cleaner;
        pub mod table_view;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CleanRecord, RawRecord};
pub use app::state::AppState;
pub use config::DashboardConfig;
pub use error::{Error, Result};
