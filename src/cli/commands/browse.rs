//! Browse command: interactive table search driven by stdin
//!
//! Each input line is either search text or a pager command:
//!
//! - `:n` / `:p` next and previous page
//! - `:g N` jump to page N
//! - `:load PATH` load another CSV in the background
//! - `:q` quit
//!
//! Search text is debounced so a burst of lines applies only the last one.
//! Background loads race freely; the state applies whichever is newest.

use crate::Result;
use crate::app::services::csv_loader::CsvLoader;
use crate::app::services::debounce::SearchDebouncer;
use crate::app::state::{AppState, LoadOutcome, LoadTicket, LoadedDataset, prepare_dataset};
use crate::cli::args::BrowseArgs;
use crate::cli::commands::shared::{
    CommandStats, finish, load_configuration, load_state, setup_logging,
};
use crate::cli::commands::table::print_page;
use colored::Colorize;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, warn};

const CHANNEL_CAPACITY: usize = 64;

/// One parsed line of browse input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseInput {
    Query(String),
    NextPage,
    PrevPage,
    GoTo(usize),
    Load(PathBuf),
    Quit,
}

impl BrowseInput {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(command) = trimmed.strip_prefix(':') else {
            return BrowseInput::Query(trimmed.to_string());
        };

        let (name, rest) = command
            .split_once(char::is_whitespace)
            .map(|(name, rest)| (name, rest.trim()))
            .unwrap_or((command, ""));

        match name {
            "n" | "next" => BrowseInput::NextPage,
            "p" | "prev" => BrowseInput::PrevPage,
            "q" | "quit" => BrowseInput::Quit,
            "g" | "page" => match rest.parse() {
                Ok(page) => BrowseInput::GoTo(page),
                Err(_) => BrowseInput::Query(trimmed.to_string()),
            },
            "load" if !rest.is_empty() => BrowseInput::Load(PathBuf::from(rest)),
            _ => BrowseInput::Query(trimmed.to_string()),
        }
    }
}

type LoadMessage = (LoadTicket, Result<LoadedDataset>);

pub async fn run_browse(args: BrowseArgs) -> Result<CommandStats> {
    setup_logging(&args.common)?;
    let started = Instant::now();

    let config = load_configuration(&args.common)?;
    let interval = args
        .debounce_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.search_debounce());
    let mut state = load_state(config, !args.common.quiet).await?;

    print_page(&state.table().visible_page());
    eprintln!(
        "{}",
        "Type to search; :n/:p to page, :g N to jump, :load PATH, :q to quit".bright_black()
    );

    let (query_tx, mut debouncer) = SearchDebouncer::channel(interval, CHANNEL_CAPACITY);
    let (command_tx, mut command_rx) = mpsc::channel::<BrowseInput>(CHANNEL_CAPACITY);
    let (load_tx, mut load_rx) = mpsc::channel::<LoadMessage>(CHANNEL_CAPACITY);

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    warn!("Failed to read input: {}", e);
                    break;
                }
            };
            let delivered = match BrowseInput::parse(&line) {
                BrowseInput::Query(query) => query_tx.send(query).await.is_ok(),
                BrowseInput::Quit => break,
                command => command_tx.send(command).await.is_ok(),
            };
            if !delivered {
                break;
            }
        }
    });

    let mut queries_open = true;
    let mut commands_open = true;
    while queries_open || commands_open {
        tokio::select! {
            query = debouncer.next_settled(), if queries_open => match query {
                Some(query) => {
                    state.table_mut().set_query(&query);
                    print_page(&state.table().visible_page());
                }
                None => queries_open = false,
            },
            command = command_rx.recv(), if commands_open => match command {
                Some(BrowseInput::Load(path)) => spawn_load(&state, path, load_tx.clone()),
                Some(command) => {
                    navigate(&mut state, &mut debouncer, command);
                    print_page(&state.table().visible_page());
                }
                None => commands_open = false,
            },
            Some((ticket, result)) = load_rx.recv() => {
                match state.complete_load(ticket, result) {
                    Ok(LoadOutcome::Applied { rows, .. }) => {
                        eprintln!("{} {} apps", "Loaded".bright_green().bold(), rows);
                        print_page(&state.table().visible_page());
                    }
                    Ok(LoadOutcome::Stale { generation, current }) => {
                        debug!("Ignored load {} (showing {})", generation, current);
                    }
                    Err(e) => eprintln!("{} {}", "Load failed:".red().bold(), e),
                }
            }
        }
    }

    let stats = CommandStats {
        rows_loaded: state.rows().len(),
        rows_matched: state.table().filtered_len(),
        ..Default::default()
    };
    Ok(finish("browse", stats, started))
}

fn spawn_load(state: &AppState, path: PathBuf, results: mpsc::Sender<LoadMessage>) {
    let ticket = state.begin_load();
    let loader = CsvLoader::from_config(state.config());
    debug!("Starting load {} from {}", ticket.generation(), path.display());
    tokio::spawn(async move {
        let result = prepare_dataset(&loader, &path).await;
        if results.send((ticket, result)).await.is_err() {
            debug!("Browse ended before load {} finished", ticket.generation());
        }
    });
}

/// Apply a pager command after any search typed before it
fn navigate(state: &mut AppState, debouncer: &mut SearchDebouncer, command: BrowseInput) {
    if let Some(query) = debouncer.take_pending() {
        state.table_mut().set_query(&query);
    }
    apply_navigation(state, command);
}

fn apply_navigation(state: &mut AppState, command: BrowseInput) {
    let table = state.table_mut();
    match command {
        BrowseInput::NextPage => table.next_page(),
        BrowseInput::PrevPage => table.prev_page(),
        BrowseInput::GoTo(page) => table.set_page(page),
        other => debug!("Ignoring non-navigation input {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;

    #[test]
    fn test_parse_queries() {
        assert_eq!(
            BrowseInput::parse("  chess  "),
            BrowseInput::Query("chess".to_string())
        );
        assert_eq!(BrowseInput::parse(""), BrowseInput::Query(String::new()));
        assert_eq!(
            BrowseInput::parse(":unknown"),
            BrowseInput::Query(":unknown".to_string())
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(BrowseInput::parse(":n"), BrowseInput::NextPage);
        assert_eq!(BrowseInput::parse(":prev"), BrowseInput::PrevPage);
        assert_eq!(BrowseInput::parse(":g 4"), BrowseInput::GoTo(4));
        assert_eq!(BrowseInput::parse(":q"), BrowseInput::Quit);
        assert_eq!(
            BrowseInput::parse(":load data/apps.csv"),
            BrowseInput::Load(PathBuf::from("data/apps.csv"))
        );
        assert_eq!(
            BrowseInput::parse(":g x"),
            BrowseInput::Query(":g x".to_string())
        );
    }

    fn five_row_state() -> AppState {
        let mut csv = String::from("App,Category,Type\n");
        for i in 0..5 {
            csv.push_str(&format!("App {},GAME,Free\n", i));
        }
        let mut state = AppState::new(DashboardConfig::default().with_page_size(2));
        state.load_str(&csv, "apps.csv").unwrap();
        state
    }

    #[test]
    fn test_apply_navigation_clamps() {
        let mut state = five_row_state();

        apply_navigation(&mut state, BrowseInput::GoTo(99));
        assert_eq!(state.table().page(), 3);

        apply_navigation(&mut state, BrowseInput::NextPage);
        assert_eq!(state.table().page(), 3);

        apply_navigation(&mut state, BrowseInput::PrevPage);
        assert_eq!(state.table().page(), 2);
    }

    #[tokio::test]
    async fn test_navigation_applies_earlier_search_first() {
        let mut state = five_row_state();
        let (tx, mut debouncer) = SearchDebouncer::channel(Duration::from_secs(60), 8);

        // Typed "game" then ":g 3" before the search settled
        tx.send("game".to_string()).await.unwrap();
        navigate(&mut state, &mut debouncer, BrowseInput::GoTo(3));

        assert_eq!(state.table().query(), "game");
        assert_eq!(state.table().filtered_len(), 5);
        assert_eq!(state.table().page(), 3);
    }

    #[tokio::test]
    async fn test_navigation_without_pending_search_keeps_query() {
        let mut state = five_row_state();
        state.table_mut().set_query("App 1");
        let (_tx, mut debouncer) = SearchDebouncer::channel(Duration::from_secs(60), 8);

        navigate(&mut state, &mut debouncer, BrowseInput::NextPage);

        assert_eq!(state.table().query(), "app 1");
        assert_eq!(state.table().filtered_len(), 1);
        assert_eq!(state.table().page(), 1);
    }
}
