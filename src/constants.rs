//! Application constants for the Play Store dashboard
//!
//! This module contains column names, default configuration values,
//! display markers and chart identifiers used throughout the pipeline.

// =============================================================================
// Input File
// =============================================================================

/// Default dataset location, relative to the working directory
pub const DEFAULT_CSV_PATH: &str = "assets/data/googleplaystore.csv";

/// File extensions accepted for upload
pub const SUPPORTED_EXTENSIONS: &[&str] = &[".csv"];

/// Maximum accepted input size in bytes
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;

// =============================================================================
// Column Name Constants
// =============================================================================

/// Column names recognised in the Play Store CSV
pub mod columns {
    pub const APP: &str = "App";
    pub const CATEGORY: &str = "Category";
    pub const RATING: &str = "Rating";
    pub const REVIEWS: &str = "Reviews";
    pub const SIZE: &str = "Size";
    pub const INSTALLS: &str = "Installs";
    pub const TYPE: &str = "Type";
    pub const PRICE: &str = "Price";
    pub const CONTENT_RATING: &str = "Content Rating";
    pub const GENRES: &str = "Genres";
    pub const LAST_UPDATED: &str = "Last Updated";
    pub const CURRENT_VER: &str = "Current Ver";
    pub const ANDROID_VER: &str = "Android Ver";

    /// Columns without which no row can survive cleaning
    pub const REQUIRED: &[&str] = &[APP, CATEGORY];
}

/// Header used when exporting the filtered view
pub const EXPORT_HEADERS: &[&str] = &[
    "App",
    "Category",
    "Rating",
    "Reviews",
    "Size (MB)",
    "Installs",
    "Type",
    "Price (USD)",
    "Content Rating",
    "Genres",
    "Last Updated",
    "Current Version",
    "Android Version",
];

/// Prefix of exported file names
pub const EXPORT_FILE_PREFIX: &str = "googleplaystore";

// =============================================================================
// Record Semantics
// =============================================================================

/// App type value that marks a paid app
pub const PAID_TYPE: &str = "Paid";

/// Inclusive bounds ratings are clamped to by the parser
pub const RATING_CLAMP_MIN: f64 = 0.0;
pub const RATING_CLAMP_MAX: f64 = 5.0;

/// Inclusive bounds a present rating must satisfy to survive cleaning
pub const RATING_VALID_MIN: f64 = 1.0;
pub const RATING_VALID_MAX: f64 = 5.0;

/// Names shorter than this many characters are rejected
pub const MIN_APP_NAME_CHARS: usize = 2;

// =============================================================================
// Table, Search and Rendering Defaults
// =============================================================================

pub const DEFAULT_PAGE_SIZE: usize = 10;

pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Delay between consecutive chart renders
pub const DEFAULT_CHART_RENDER_STAGGER_MS: u64 = 200;

// =============================================================================
// Display Markers
// =============================================================================

/// Shown for a missing numeric value
pub const EMPTY_MARKER: &str = "—";

/// Shown for a missing label
pub const NOT_AVAILABLE: &str = "N/A";

/// Label used for blank content ratings
pub const UNKNOWN_CONTENT_RATING: &str = "Unknown";

/// KPI card labels are truncated past this many characters
pub const KPI_LABEL_MAX_CHARS: usize = 15;

/// Messages surfaced for degenerate chart inputs
pub mod messages {
    pub const NO_DATA: &str = "No valid data";
    pub const NO_PAID_APPS: &str = "No paid apps";
    pub const NO_VALID_DATES: &str = "No valid dates";
    pub const NO_EXPORT_ROWS: &str = "No data to export";
}

// =============================================================================
// Charts
// =============================================================================

/// Number of categories kept by the top-N chart builders
pub const TOP_N_CATEGORIES: usize = 10;

/// Price buckets for installs-by-price: (label, lower inclusive, upper exclusive)
pub const PRICE_BUCKETS: &[(&str, f64, f64)] = &[
    ("[0, 1)", 0.0, 1.0),
    ("[1, 5)", 1.0, 5.0),
    ("[5, 10)", 5.0, 10.0),
    ("10+", 10.0, f64::INFINITY),
];

/// Chart container identifiers, in render order
pub mod chart_ids {
    pub const TOP_CATEGORIES: &str = "chart-1";
    pub const CONTENT_RATING: &str = "chart-2";
    pub const PRICIEST_CATEGORIES: &str = "chart-3";
    pub const INSTALLS_VS_REVIEWS: &str = "chart-4";
    pub const APPS_BY_CATEGORY: &str = "chart-5";
    pub const UPDATES_BY_YEAR: &str = "chart-6";
    pub const ANDROID_REQUIREMENT: &str = "chart-7";
    pub const PRICE_BUCKETS: &str = "chart-8";
}

// =============================================================================
// Environment Overrides
// =============================================================================

pub mod env {
    pub const PAGE_SIZE: &str = "PLAYSTORE_PAGE_SIZE";
    pub const SEARCH_DEBOUNCE_MS: &str = "PLAYSTORE_SEARCH_DEBOUNCE_MS";
    pub const CHART_STAGGER_MS: &str = "PLAYSTORE_CHART_STAGGER_MS";
    pub const DATASET_PATH: &str = "PLAYSTORE_DATASET_PATH";
}
