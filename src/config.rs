//! Configuration management and validation.
//!
//! The pipeline consumes a handful of externally supplied constants: table page
//! size, search debounce interval, chart render stagger and input limits. They are
//! layered defaults -> optional TOML file -> environment -> CLI flags.

use crate::constants::{
    DEFAULT_CHART_RENDER_STAGGER_MS, DEFAULT_CSV_PATH, DEFAULT_MAX_FILE_SIZE_BYTES,
    DEFAULT_PAGE_SIZE, DEFAULT_SEARCH_DEBOUNCE_MS, SUPPORTED_EXTENSIONS, env,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Global configuration for the dashboard pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Dataset loaded when no path is given explicitly
    pub dataset_path: PathBuf,

    /// Rows per table page
    pub page_size: usize,

    /// Quiet period before a search query is applied
    pub search_debounce_ms: u64,

    /// Delay between consecutive chart renders
    pub chart_render_stagger_ms: u64,

    /// Maximum input file size in bytes
    pub max_file_size_bytes: u64,

    /// Accepted input file extensions, including the leading dot
    pub supported_extensions: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_CSV_PATH),
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            chart_render_stagger_ms: DEFAULT_CHART_RENDER_STAGGER_MS,
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            supported_extensions: SUPPORTED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration using layered approach (defaults -> file -> env)
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML configuration file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;
        let config: Self = toml::from_str(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Apply `PLAYSTORE_*` environment variables on top of the current values
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = read_env_number(env::PAGE_SIZE)? {
            self.page_size = value as usize;
        }
        if let Some(value) = read_env_number(env::SEARCH_DEBOUNCE_MS)? {
            self.search_debounce_ms = value;
        }
        if let Some(value) = read_env_number(env::CHART_STAGGER_MS)? {
            self.chart_render_stagger_ms = value;
        }
        if let Ok(path) = std::env::var(env::DATASET_PATH) {
            if !path.trim().is_empty() {
                self.dataset_path = PathBuf::from(path);
            }
        }
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::configuration("page_size must be greater than 0"));
        }
        if self.max_file_size_bytes == 0 {
            return Err(Error::configuration(
                "max_file_size_bytes must be greater than 0",
            ));
        }
        if self.supported_extensions.is_empty() {
            return Err(Error::configuration(
                "at least one supported extension is required",
            ));
        }
        if let Some(bad) = self
            .supported_extensions
            .iter()
            .find(|ext| !ext.starts_with('.'))
        {
            return Err(Error::configuration(format!(
                "supported extension '{}' must start with '.'",
                bad
            )));
        }
        Ok(())
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_search_debounce_ms(mut self, millis: u64) -> Self {
        self.search_debounce_ms = millis;
        self
    }

    pub fn with_chart_render_stagger_ms(mut self, millis: u64) -> Self {
        self.chart_render_stagger_ms = millis;
        self
    }

    pub fn with_dataset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset_path = path.into();
        self
    }

    pub fn with_max_file_size_bytes(mut self, bytes: u64) -> Self {
        self.max_file_size_bytes = bytes;
        self
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn chart_render_stagger(&self) -> Duration {
        Duration::from_millis(self.chart_render_stagger_ms)
    }
}

fn read_env_number(key: &str) -> Result<Option<u64>> {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<u64>().map(Some).map_err(|e| {
            Error::configuration(format!("{} must be a non-negative integer: {}", key, e))
        }),
        Err(_) => Ok(None),
    }
}
