//! Command implementations for the Play Store dashboard CLI
//!
//! Each command is implemented in its own module and shares logging,
//! configuration and dataset loading through [`shared`].

pub mod browse;
pub mod charts;
pub mod export;
pub mod shared;
pub mod summary;
pub mod table;

pub use shared::CommandStats;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner
///
/// Dispatches to the subcommand handler:
/// - `summary`: dataset overview and KPI cards
/// - `table`: one page of the searchable table
/// - `charts`: chart specs written as JSON
/// - `export`: filtered rows as a dated CSV
/// - `browse`: debounced interactive search
pub async fn run(args: Args) -> Result<CommandStats> {
    let command = args
        .command
        .ok_or_else(|| Error::configuration("No command given".to_string()))?;

    match command {
        Commands::Summary(summary_args) => summary::run_summary(summary_args).await,
        Commands::Table(table_args) => table::run_table(table_args).await,
        Commands::Charts(charts_args) => charts::run_charts(charts_args).await,
        Commands::Export(export_args) => export::run_export(export_args).await,
        Commands::Browse(browse_args) => browse::run_browse(browse_args).await,
    }
}
