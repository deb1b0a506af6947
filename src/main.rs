use anyhow::Context;
use clap::Parser;
use playstore_dashboard::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result: anyhow::Result<commands::CommandStats> = runtime.block_on(async {
        let shutdown_signal = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("Failed to install CTRL+C signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            result = commands::run(args) => {
                result.context("Command failed")
            }
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err::<commands::CommandStats, _>(playstore_dashboard::Error::processing_interrupted(
                    "Interrupted by user".to_string(),
                ))
                .context("Command cancelled")
            }
        }
    });

    match result {
        Ok(_stats) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Play Store Dashboard - Google Play app metadata explorer");
    println!("========================================================");
    println!();
    println!("Clean a Google Play Store CSV export and turn it into KPI cards,");
    println!("a searchable table, chart specifications and filtered CSV exports.");
    println!();
    println!("USAGE:");
    println!("    playstore-dashboard <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    summary     Print the dataset overview and KPI cards");
    println!("    table       Print one page of the app table");
    println!("    charts      Write the eight chart specifications as JSON");
    println!("    export      Export the (filtered) rows to a dated CSV file");
    println!("    browse      Search the table interactively from stdin");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Summarize the default dataset:");
    println!("    playstore-dashboard summary");
    println!();
    println!("    # Show page 2 of the apps matching \"photo\":");
    println!("    playstore-dashboard table --input apps.csv --search photo --page 2");
    println!();
    println!("    # Write chart JSON files without the render delay:");
    println!("    playstore-dashboard charts --output charts --stagger-ms 0");
    println!();
    println!("    # Export every game to the current directory:");
    println!("    playstore-dashboard export --search game");
    println!();
    println!("For detailed help on any command, use:");
    println!("    playstore-dashboard <COMMAND> --help");
}
