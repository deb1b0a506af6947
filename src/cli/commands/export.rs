//! Export command: write the filtered rows to a dated CSV file

use crate::Result;
use crate::cli::args::ExportArgs;
use crate::cli::commands::shared::{
    CommandStats, finish, load_configuration, load_state, setup_logging,
};
use colored::Colorize;
use std::time::Instant;

pub async fn run_export(args: ExportArgs) -> Result<CommandStats> {
    setup_logging(&args.common)?;
    let started = Instant::now();

    let config = load_configuration(&args.common)?;
    let mut state = load_state(config, !args.common.quiet).await?;

    if let Some(query) = &args.query {
        state.table_mut().set_query(query);
    }

    let today = chrono::Local::now().date_naive();
    let path = state.export_filtered(&args.output_dir, today)?;
    println!(
        "{} {} apps to {}",
        "Exported".bright_green().bold(),
        state.table().filtered_len(),
        path.display()
    );

    let stats = CommandStats {
        rows_loaded: state.rows().len(),
        rows_matched: state.table().filtered_len(),
        files_written: vec![path],
        ..Default::default()
    };
    Ok(finish("export", stats, started))
}
