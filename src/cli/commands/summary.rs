//! Summary command: dataset overview plus the KPI cards

use crate::Result;
use crate::app::services::kpi::{DatasetOverview, Kpi};
use crate::cli::args::{OutputFormat, SummaryArgs};
use crate::cli::commands::shared::{
    CommandStats, finish, load_configuration, load_state, setup_logging,
};
use chrono::Datelike;
use colored::Colorize;
use serde::Serialize;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Serialize)]
struct SummaryReport<'a> {
    source: &'a str,
    overview: &'a DatasetOverview,
    kpis: &'a [Kpi],
}

pub async fn run_summary(args: SummaryArgs) -> Result<CommandStats> {
    setup_logging(&args.common)?;
    let started = Instant::now();

    let config = load_configuration(&args.common)?;
    let state = load_state(config, args.output_format == OutputFormat::Human).await?;

    let year = args.year.unwrap_or_else(|| chrono::Local::now().year());
    let kpis = state.kpis(year);
    let overview = state.overview();
    let source = state.dataset().map(|d| d.source.as_str()).unwrap_or_default();
    info!("Built {} KPI cards for {}", kpis.len(), source);

    match args.output_format {
        OutputFormat::Json => {
            let report = SummaryReport {
                source,
                overview: &overview,
                kpis: &kpis,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => print_summary(source, &overview, &kpis),
    }

    let stats = CommandStats {
        rows_loaded: state.rows().len(),
        rows_matched: state.rows().len(),
        ..Default::default()
    };
    Ok(finish("summary", stats, started))
}

fn print_summary(source: &str, overview: &DatasetOverview, kpis: &[Kpi]) {
    println!("{}", format!("Dataset: {}", source).bright_green().bold());
    println!();
    for (label, value) in overview.lines() {
        println!("  {:<22} {}", format!("{}:", label).bright_white(), value);
    }

    println!();
    println!("{}", "KPIs".bright_green().bold());
    let width = kpis.iter().map(|k| k.label.chars().count()).max().unwrap_or(0);
    for kpi in kpis {
        println!(
            "  {:<width$}  {}",
            kpi.label,
            kpi.display_value().bright_cyan(),
            width = width
        );
    }
}
