//! Command-line argument definitions for the Play Store dashboard
//!
//! This module defines the CLI interface using the clap derive API. Every
//! subcommand shares [`CommonArgs`] for the dataset path, configuration file
//! and logging verbosity.

use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the Play Store dashboard
///
/// Loads a Google Play Store app metadata CSV, cleans it, and prints the KPI
/// summary, a page of the app table, the chart specifications or a CSV export.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "playstore-dashboard",
    version,
    about = "Clean and summarize Google Play Store app metadata CSV files",
    long_about = "Loads a Google Play Store app metadata CSV, repairs its lossy fields \
                  (\"1,000+\", \"$4.99\", \"19M\", \"4.1 and up\"), drops invalid and duplicate \
                  rows, and produces KPI cards, a searchable paginated table, eight chart \
                  specifications and a CSV export of the filtered rows."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print the dataset overview and KPI cards
    Summary(SummaryArgs),
    /// Print one page of the searchable app table
    Table(TableArgs),
    /// Build the eight chart specifications and write them as JSON
    Charts(ChartsArgs),
    /// Export the (optionally filtered) rows to a dated CSV file
    Export(ExportArgs),
    /// Search the table interactively; queries are read from stdin
    Browse(BrowseArgs),
}

/// Options shared by every subcommand
#[derive(Debug, Clone, ClapArgs)]
pub struct CommonArgs {
    /// Path to the Play Store CSV file
    ///
    /// If not specified, uses the configured dataset path (default:
    /// assets/data/googleplaystore.csv).
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Path to the Play Store CSV file"
    )]
    pub input_path: Option<PathBuf>,

    /// Path to configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Rows per table page, overrides the configuration
    #[arg(long = "page-size", value_name = "ROWS", help = "Rows per table page")]
    pub page_size: Option<usize>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the summary command
#[derive(Debug, Clone, Parser)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Year used for the "updated this year" card (default: current year)
    #[arg(long = "year", value_name = "YEAR", help = "Reference year for the update KPI")]
    pub year: Option<i32>,

    /// Output format for the summary
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the summary"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the table command
#[derive(Debug, Clone, Parser)]
pub struct TableArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Case-insensitive search over app name, category and type
    #[arg(short = 's', long = "search", value_name = "TEXT", help = "Search text")]
    pub query: Option<String>,

    /// 1-based page number; out-of-range pages are clamped
    #[arg(
        short = 'p',
        long = "page",
        value_name = "N",
        default_value_t = 1,
        help = "Page number to show"
    )]
    pub page: usize,
}

/// Arguments for the charts command
#[derive(Debug, Clone, Parser)]
pub struct ChartsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory receiving chart-1.json .. chart-8.json
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = "charts",
        help = "Directory for the chart JSON files"
    )]
    pub output_dir: PathBuf,

    /// Delay between charts, overrides the configuration
    #[arg(
        long = "stagger-ms",
        value_name = "MILLIS",
        help = "Delay between rendering consecutive charts"
    )]
    pub stagger_ms: Option<u64>,
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Only export rows matching this search text
    #[arg(short = 's', long = "search", value_name = "TEXT", help = "Search text")]
    pub query: Option<String>,

    /// Directory for the export file
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Directory for the exported CSV"
    )]
    pub output_dir: PathBuf,
}

/// Arguments for the browse command
#[derive(Debug, Clone, Parser)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Debounce interval for search input, overrides the configuration
    #[arg(
        long = "debounce-ms",
        value_name = "MILLIS",
        help = "Quiet time before a search is applied"
    )]
    pub debounce_ms: Option<u64>,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Commands {
    /// Options shared by all subcommands
    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::Summary(args) => &args.common,
            Commands::Table(args) => &args.common,
            Commands::Charts(args) => &args.common,
            Commands::Export(args) => &args.common,
            Commands::Browse(args) => &args.common,
        }
    }
}

impl CommonArgs {
    /// Validate argument consistency before any file is touched
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.input_path {
            if path.is_dir() {
                return Err(Error::configuration(format!(
                    "Input path is a directory, expected a CSV file: {}",
                    path.display()
                )));
            }
        }

        if self.page_size == Some(0) {
            return Err(Error::configuration(
                "Page size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Get log level based on verbosity
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }

        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
