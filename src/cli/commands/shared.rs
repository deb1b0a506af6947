//! Shared components for CLI commands
//!
//! Logging setup, layered configuration loading, dataset loading with a
//! spinner, and the statistics every command reports back to `main`.

use crate::app::state::{AppState, LoadOutcome};
use crate::cli::args::CommonArgs;
use crate::config::DashboardConfig;
use crate::{Error, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// What a command did, for the final report
#[derive(Debug, Clone, Default)]
pub struct CommandStats {
    /// Rows in the cleaned dataset
    pub rows_loaded: usize,
    /// Rows matching the active search
    pub rows_matched: usize,
    /// Files written by the command
    pub files_written: Vec<PathBuf>,
    /// Total time spent in the command
    pub elapsed: Duration,
}

impl CommandStats {
    /// Format a duration like "1.25s" or "320ms"
    pub fn format_elapsed(&self) -> String {
        if self.elapsed >= Duration::from_secs(1) {
            format!("{:.2}s", self.elapsed.as_secs_f64())
        } else {
            format!("{}ms", self.elapsed.as_millis())
        }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("playstore_dashboard={}", log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &CommonArgs) -> Result<DashboardConfig> {
    args.validate()?;

    match &args.config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => info!("No config file given, using defaults and environment variables"),
    }

    let mut config = DashboardConfig::load_layered(args.config_file.as_deref())?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut DashboardConfig, args: &CommonArgs) {
    if let Some(input_path) = &args.input_path {
        config.dataset_path = input_path.clone();
    }
    if let Some(page_size) = args.page_size {
        config.page_size = page_size;
    }
}

/// Build the state and load the configured dataset into it
pub async fn load_state(config: DashboardConfig, show_progress: bool) -> Result<AppState> {
    let path = config.dataset_path.clone();
    let mut state = AppState::new(config);

    let spinner = create_spinner(&format!("Loading {}", path.display()), show_progress);
    let outcome = state.load_path(&path).await;
    spinner.finish_and_clear();

    match outcome? {
        LoadOutcome::Applied { rows, .. } => {
            if let Some(dataset) = state.dataset() {
                info!("{}", dataset.cleaning_stats.summary());
            }
            info!("Loaded {} apps from {}", rows, path.display());
        }
        LoadOutcome::Stale { generation, current } => {
            debug!("Load {} superseded by {}", generation, current);
        }
    }

    Ok(state)
}

/// Create a spinner for work of unknown length; hidden when not wanted
pub fn create_spinner(message: &str, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print the closing line for a command
pub fn finish(command: &str, mut stats: CommandStats, started: Instant) -> CommandStats {
    stats.elapsed = started.elapsed();
    eprintln!(
        "{} {} ({} apps, {})",
        "✓".green().bold(),
        command.bold(),
        stats.rows_loaded,
        stats.format_elapsed()
    );
    stats
}
