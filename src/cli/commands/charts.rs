//! Charts command: build every chart spec and write it as JSON

use crate::Result;
use crate::app::services::charts::{ChartOutcome, JsonFileRenderer, render_all};
use crate::cli::args::ChartsArgs;
use crate::cli::commands::shared::{
    CommandStats, finish, load_configuration, load_state, setup_logging,
};
use colored::Colorize;
use std::time::{Duration, Instant};
use tracing::info;

pub async fn run_charts(args: ChartsArgs) -> Result<CommandStats> {
    setup_logging(&args.common)?;
    let started = Instant::now();

    let config = load_configuration(&args.common)?;
    let stagger = args
        .stagger_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.chart_render_stagger());
    let state = load_state(config, !args.common.quiet).await?;

    let outcomes = state.charts();
    let mut renderer = JsonFileRenderer::new(&args.output_dir)?;
    let ready = render_all(&mut renderer, &outcomes, stagger).await?;
    info!(
        "{} of {} charts written to {}",
        ready,
        outcomes.len(),
        renderer.output_dir().display()
    );

    for outcome in &outcomes {
        print_outcome(outcome);
    }

    let stats = CommandStats {
        rows_loaded: state.rows().len(),
        rows_matched: state.rows().len(),
        files_written: renderer.written().to_vec(),
        ..Default::default()
    };
    Ok(finish("charts", stats, started))
}

fn print_outcome(outcome: &ChartOutcome) {
    match outcome {
        ChartOutcome::Ready(spec) => {
            println!("{} {}", spec.id.bright_cyan(), spec.title.bold());
            for insight in &spec.insights {
                println!("    • {}", insight);
            }
        }
        ChartOutcome::NoData { id, reason } => {
            println!("{} {}", id.bright_cyan(), reason.yellow());
        }
    }
}
