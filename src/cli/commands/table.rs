//! Table command: one page of the searchable app table

use crate::Result;
use crate::app::format::{format_count, format_price, truncate_label};
use crate::app::models::CleanRecord;
use crate::app::services::table_view::PageView;
use crate::cli::args::TableArgs;
use crate::cli::commands::shared::{
    CommandStats, finish, load_configuration, load_state, setup_logging,
};
use crate::constants::EMPTY_MARKER;
use colored::Colorize;
use std::time::Instant;

const HEADERS: [&str; 7] = [
    "App", "Category", "Rating", "Reviews", "Installs", "Type", "Price",
];
const NAME_WIDTH: usize = 40;

pub async fn run_table(args: TableArgs) -> Result<CommandStats> {
    setup_logging(&args.common)?;
    let started = Instant::now();

    let config = load_configuration(&args.common)?;
    let mut state = load_state(config, !args.common.quiet).await?;

    let table = state.table_mut();
    if let Some(query) = &args.query {
        table.set_query(query);
    }
    table.set_page(args.page);

    let view = table.visible_page();
    print_page(&view);

    let stats = CommandStats {
        rows_loaded: state.rows().len(),
        rows_matched: state.table().filtered_len(),
        ..Default::default()
    };
    Ok(finish("table", stats, started))
}

/// Display cells for one table row
pub fn format_row(record: &CleanRecord) -> [String; 7] {
    [
        truncate_label(&record.name, NAME_WIDTH),
        record.category.clone(),
        record
            .rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| EMPTY_MARKER.to_string()),
        format_count(record.review_count),
        format_count(record.installs),
        record.app_type.clone(),
        if record.is_paid() {
            format_price(record.price)
        } else {
            "Free".to_string()
        },
    ]
}

/// Print a page with aligned columns and a pager footer
pub fn print_page(view: &PageView<'_>) {
    if view.items.is_empty() {
        println!("{}", "No apps match the current search.".yellow());
        return;
    }

    let rows: Vec<[String; 7]> = view.items.iter().map(|r| format_row(r)).collect();
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| format!("{:<w$}", h, w = *w))
        .collect();
    println!("{}", header.join("  ").bold());

    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
            .collect();
        println!("{}", line.join("  "));
    }

    println!();
    println!(
        "{}",
        format!(
            "Page {} of {} ({} apps){}{}",
            view.page,
            view.total_pages,
            format_count(view.total_filtered as u64),
            if view.has_prev { "  [prev]" } else { "" },
            if view.has_next { "  [next]" } else { "" },
        )
        .bright_black()
    );
}
