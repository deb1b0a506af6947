//! End-to-end tests for the load -> clean -> summarize -> export pipeline
//!
//! Each test writes a small Play Store CSV into a temporary directory and
//! drives it through `AppState` the way the CLI does.

use chrono::NaiveDate;
use playstore_dashboard::app::services::charts::{ChartOutcome, JsonFileRenderer, render_all};
use playstore_dashboard::app::services::kpi::KpiValue;
use playstore_dashboard::app::state::LoadOutcome;
use playstore_dashboard::constants::{chart_ids, messages};
use playstore_dashboard::{AppState, DashboardConfig, Error};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

const HEADER: &str = "App,Category,Rating,Reviews,Size,Installs,Type,Price,Content Rating,Genres,Last Updated,Current Ver,Android Ver";

/// A realistic slice of the Play Store export, quirks included
const SAMPLE_ROWS: &[&str] = &[
    "Photo Editor & Candy Camera,ART_AND_DESIGN,4.1,159,19M,\"10,000+\",Free,0,Everyone,Art & Design,\"January 7, 2018\",1.0.0,4.0.3 and up",
    "Coloring book moana,ART_AND_DESIGN,3.9,967,14M,\"500,000+\",Free,0,Everyone,Art & Design;Pretend Play,\"January 15, 2018\",2.0.0,4.0.3 and up",
    "Sketch - Draw & Paint,ART_AND_DESIGN,4.5,215644,25M,\"50,000,000+\",Free,0,Teen,Art & Design,\"June 8, 2018\",Varies with device,4.2 and up",
    "Minecraft,FAMILY,4.5,2376564,Varies with device,\"10,000,000+\",Paid,$6.99,Everyone 10+,Arcade;Action & Adventure,\"July 24, 2018\",1.5.2.1,Varies with device",
    "Hitman Sniper,GAME,4.6,408292,29M,\"10,000,000+\",Paid,$0.99,Mature 17+,Action,\"July 12, 2018\",1.7.110758,4.1 and up",
    "minecraft,family,4.0,10,1M,100+,Free,0,Everyone,Arcade,\"May 1, 2017\",1.0,4.0 and up",
    "Life Made WI-Fi Touchscreen Photo Frame,1.9,19,3.0M,1000+,Free,0,Everyone,,\"February 11, 2018\",1.0.19,4.0 and up,",
    "X,TOOLS,4.0,10,1M,100+,Free,0,Everyone,Tools,\"May 1, 2017\",1.0,4.0 and up",
];

fn write_csv(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let mut content = String::from(HEADER);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn new_state() -> AppState {
    AppState::new(DashboardConfig::default().with_page_size(2))
}

fn kpi_value(state: &AppState, id: &str) -> KpiValue {
    state
        .kpis(2018)
        .into_iter()
        .find(|k| k.id == id)
        .map(|k| k.value)
        .unwrap()
}

/// Duplicate (name, category) rows collapse to the first occurrence
#[test]
fn test_duplicate_rows_keep_first_occurrence() {
    let mut state = new_state();
    let csv = "App,Category,Rating,Installs,Type\n\
               A,GAME,4.5,\"1,000+\",Free\n\
               A,GAME,4.9,\"2,000+\",Free\n";

    state.load_str(csv, "dup.csv").unwrap();

    assert_eq!(state.rows().len(), 1);
    assert_eq!(state.rows()[0].installs, 1000);
    assert_eq!(kpi_value(&state, "total_installs"), KpiValue::Count(1000));
}

/// A numeric-looking category marks a column-shifted row and is dropped
#[test]
fn test_numeric_category_row_is_excluded() {
    let mut state = new_state();
    let csv = "App,Category,Rating,Installs,Type\n\
               Shifted App,3.5,4.5,\"1,000+\",Free\n\
               Kept App,GAME,4.5,\"1,000+\",Free\n";

    state.load_str(csv, "shifted.csv").unwrap();

    assert_eq!(state.rows().len(), 1);
    assert_eq!(state.rows()[0].name, "Kept App");
    let stats = &state.dataset().unwrap().cleaning_stats;
    assert_eq!(stats.raw_rows, 2);
    assert_eq!(stats.total_rejected(), 1);
}

#[tokio::test]
async fn test_full_pipeline_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(dir.path(), "googleplaystore.csv", SAMPLE_ROWS);
    let mut state = new_state();

    let outcome = state.load_path(&path).await.unwrap();

    // shifted row, one-char name and the case-insensitive duplicate are dropped
    assert_eq!(
        outcome,
        LoadOutcome::Applied {
            generation: 1,
            rows: 5
        }
    );

    let minecraft = state
        .rows()
        .iter()
        .find(|r| r.name == "Minecraft")
        .unwrap();
    assert_eq!(minecraft.category, "FAMILY");
    assert_eq!(minecraft.price, 6.99);
    assert_eq!(minecraft.size_mb, None);
    assert_eq!(minecraft.android_version_min, None);
    assert_eq!(minecraft.last_updated, NaiveDate::from_ymd_opt(2018, 7, 24));

    assert_eq!(kpi_value(&state, "total_apps"), KpiValue::Count(5));
    assert_eq!(
        kpi_value(&state, "most_installed_app"),
        KpiValue::Label("Sketch - Draw &...".to_string())
    );
    assert_eq!(kpi_value(&state, "updated_this_year"), KpiValue::Count(5));
    assert_eq!(kpi_value(&state, "paid_share"), KpiValue::Percent(40.0));

    let charts = state.charts();
    assert_eq!(charts.len(), 8);
    assert!(charts.iter().all(ChartOutcome::is_ready));
}

#[tokio::test]
async fn test_table_search_pagination_and_export() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(dir.path(), "apps.csv", SAMPLE_ROWS);
    let mut state = new_state();
    state.load_path(&path).await.unwrap();

    assert_eq!(state.table().total_pages(), 3);
    state.table_mut().set_page(10);
    assert_eq!(state.table().page(), 3);

    state.table_mut().set_query("ART_AND_design");
    let page = state.table().visible_page();
    assert_eq!(page.total_filtered, 3);
    assert_eq!(page.page, 1);
    assert_eq!(page.items.len(), 2);
    assert!(page.has_next);

    let out = dir.path().join("exports");
    let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    let export = state.export_filtered(&out, date).unwrap();
    assert_eq!(
        export.file_name().and_then(|n| n.to_str()),
        Some("googleplaystore_3_apps_2024-02-29.csv")
    );

    let mut reader = csv::Reader::from_path(&export).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(&headers[4], "Size (MB)");
    assert_eq!(&headers[7], "Price (USD)");
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][0], "Photo Editor & Candy Camera");
    assert_eq!(&rows[0][7], "0");

    state.table_mut().set_query("no such app");
    let err = state.export_filtered(&out, date).unwrap_err();
    assert!(matches!(err, Error::Export { .. }));
}

#[tokio::test]
async fn test_failed_loads_keep_previous_dataset() {
    let dir = TempDir::new().unwrap();
    let good = write_csv(dir.path(), "apps.csv", SAMPLE_ROWS);
    let mut state = new_state();
    state.load_path(&good).await.unwrap();

    let wrong_extension = dir.path().join("apps.txt");
    std::fs::write(&wrong_extension, "App,Category\nChess,GAME\n").unwrap();
    let err = state.load_path(&wrong_extension).await.unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }));

    let missing_column = dir.path().join("broken.csv");
    std::fs::write(&missing_column, "Name,Rating\nChess,4.5\n").unwrap();
    let err = state.load_path(&missing_column).await.unwrap_err();
    assert!(matches!(err, Error::MissingColumn { .. }));

    assert_eq!(state.rows().len(), 5);
    assert_eq!(state.applied_generation(), 1);
}

#[tokio::test]
async fn test_file_size_limit() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(dir.path(), "apps.csv", SAMPLE_ROWS);
    let mut state = AppState::new(DashboardConfig::default().with_max_file_size_bytes(64));

    let err = state.load_path(&path).await.unwrap_err();

    assert!(matches!(err, Error::FileTooLarge { .. }));
    assert!(state.dataset().is_none());
}

#[test]
fn test_correlation_on_proportional_points() {
    let mut state = new_state();
    let csv = "App,Category,Reviews,Installs,Type\n\
               Small,TOOLS,10,100+,Free\n\
               Large,TOOLS,100,\"1,000+\",Free\n";
    state.load_str(csv, "pairs.csv").unwrap();

    let charts = state.charts();
    let chart = charts
        .iter()
        .find(|c| c.id() == chart_ids::INSTALLS_VS_REVIEWS)
        .and_then(ChartOutcome::spec)
        .unwrap();

    assert_eq!(chart.annotation.as_deref(), Some("r ≈ 1.00"));
    assert_eq!(chart.series.len(), 2);
}

#[test]
fn test_empty_dataset_charts_report_no_data() {
    let mut state = new_state();
    state
        .load_str("App,Category\n1,GAME\n", "empty.csv")
        .unwrap();

    assert!(state.rows().is_empty());
    for outcome in state.charts() {
        match outcome {
            ChartOutcome::NoData { reason, .. } => assert!(
                reason == messages::NO_DATA
                    || reason == messages::NO_PAID_APPS
                    || reason == messages::NO_VALID_DATES
            ),
            ChartOutcome::Ready(spec) => panic!("{} should have no data", spec.id),
        }
    }
}

#[tokio::test]
async fn test_render_all_writes_every_chart() {
    let dir = TempDir::new().unwrap();
    let mut state = new_state();
    state
        .load_str(&format!("{}\n{}\n", HEADER, SAMPLE_ROWS[0]), "one.csv")
        .unwrap();

    let charts = state.charts();
    let mut renderer = JsonFileRenderer::new(&dir.path().join("charts")).unwrap();
    let ready = render_all(&mut renderer, &charts, Duration::ZERO)
        .await
        .unwrap();

    assert_eq!(renderer.written().len(), 8);
    assert!(ready < 8, "a free-only dataset has no paid-category chart");

    let json = std::fs::read_to_string(dir.path().join("charts").join("chart-3.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["status"], "no_data");
    assert_eq!(value["reason"], messages::NO_PAID_APPS);
}
