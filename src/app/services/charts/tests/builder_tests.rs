//! Tests for the individual chart builders

use super::*;
use crate::app::services::charts::{
    AxisValue, ChartKind, ChartOutcome, build_all,
    categories::{apps_by_category, installs_per_category, top_categories_by_installs},
    installs::{installs_by_content_rating, installs_by_price_bucket, installs_per_price_bucket},
    pricing::{category_prices, priciest_paid_categories},
    timeline::{android_requirement, apps_per_android_major, apps_per_update_year, updates_by_year},
};
use crate::constants::{chart_ids, messages};

fn labels(outcome: &ChartOutcome, axis: fn(&AxisValue) -> Option<String>, y: bool) -> Vec<String> {
    let series = outcome
        .spec()
        .and_then(|s| s.primary())
        .expect("chart should have data");
    let values = if y { &series.y } else { &series.x };
    values.iter().filter_map(axis).collect()
}

fn text(value: &AxisValue) -> Option<String> {
    value.as_text().map(str::to_string)
}

fn numbers(outcome: &ChartOutcome, y: bool) -> Vec<f64> {
    let series = outcome
        .spec()
        .and_then(|s| s.primary())
        .expect("chart should have data");
    let values = if y { &series.y } else { &series.x };
    values.iter().filter_map(AxisValue::as_number).collect()
}

#[test]
fn test_every_builder_reports_no_data_on_empty_input() {
    let outcomes = build_all(&[]);
    assert_eq!(outcomes.len(), 8);
    for outcome in &outcomes {
        assert!(!outcome.is_ready(), "{} should be empty", outcome.id());
    }
    let ids: Vec<&str> = outcomes.iter().map(ChartOutcome::id).collect();
    assert_eq!(
        ids,
        vec!["chart-1", "chart-2", "chart-3", "chart-4", "chart-5", "chart-6", "chart-7", "chart-8"]
    );
}

#[test]
fn test_build_all_on_dataset() {
    let outcomes = build_all(&create_dataset());
    assert!(outcomes.iter().all(ChartOutcome::is_ready));
}

#[test]
fn test_installs_per_category_sorted_desc() {
    let totals = installs_per_category(&create_dataset());
    assert_eq!(totals[0], ("TRAVEL".to_string(), 100_000.0));
    assert_eq!(totals[1], ("GAME".to_string(), 60_000.0));
    assert_eq!(totals.len(), 5);
}

#[test]
fn test_top_categories_reversed_for_display() {
    let outcome = top_categories_by_installs(&create_dataset());
    let spec = outcome.spec().expect("chart 1 has data");

    assert_eq!(spec.kind, ChartKind::HorizontalBar);
    assert_eq!(
        labels(&outcome, text, true),
        vec!["FINANCE", "PRODUCTIVITY", "MUSIC", "GAME", "TRAVEL"]
    );
    assert_eq!(numbers(&outcome, false)[4], 100_000.0);
    assert_eq!(spec.series[0].text[4], "100.000");
    assert!(spec.insights[1].contains("FINANCE"));
}

#[test]
fn test_top_categories_keeps_ten() {
    let rows: Vec<_> = (0..15)
        .map(|i| create_app(&format!("App {i}"), &format!("CAT_{i:02}"), 1_000 * (i + 1), 1))
        .collect();
    let outcome = top_categories_by_installs(&rows);
    let categories = labels(&outcome, text, true);

    assert_eq!(categories.len(), 10);
    assert_eq!(categories.first().map(String::as_str), Some("CAT_05"));
    assert_eq!(categories.last().map(String::as_str), Some("CAT_14"));
}

#[test]
fn test_installs_by_content_rating_groups_blank_as_unknown() {
    let outcome = installs_by_content_rating(&create_dataset());

    assert_eq!(
        labels(&outcome, text, false),
        vec!["Everyone", "Teen", "Unknown"]
    );
    assert_eq!(numbers(&outcome, true), vec![116_500.0, 50_000.0, 1_000.0]);
    assert!(outcome.spec().unwrap().insights[0].contains("Everyone"));
}

#[test]
fn test_priciest_paid_categories() {
    let prices = category_prices(&create_dataset());
    assert_eq!(prices.len(), 2);
    assert_eq!(prices[0].category, "FINANCE");
    assert_eq!(prices[1].category, "MUSIC");
    assert_eq!(prices[1].count, 2);
    assert!((prices[1].mean - 4.995).abs() < 1e-9);
    assert!((prices[1].median - 4.995).abs() < 1e-9);

    let outcome = priciest_paid_categories(&create_dataset());
    let series = outcome.spec().unwrap().primary().unwrap();
    assert_eq!(series.custom.len(), 2);
    assert_eq!(series.text, vec!["1", "2"]);
}

#[test]
fn test_priciest_paid_categories_without_paid_apps() {
    let rows = vec![create_app("Chess", "GAME", 10, 1)];
    assert_eq!(
        priciest_paid_categories(&rows),
        ChartOutcome::NoData {
            id: chart_ids::PRICIEST_CATEGORIES,
            reason: messages::NO_PAID_APPS,
        }
    );
}

#[test]
fn test_apps_by_category_counts() {
    let outcome = apps_by_category(&create_dataset());
    assert_eq!(
        labels(&outcome, text, false),
        vec!["GAME", "MUSIC", "TRAVEL", "PRODUCTIVITY", "FINANCE"]
    );
    assert_eq!(numbers(&outcome, true), vec![2.0, 2.0, 1.0, 1.0, 1.0]);
}

#[test]
fn test_updates_by_year_sorted_ascending() {
    let counts = apps_per_update_year(&create_dataset());
    assert_eq!(counts, vec![(2017, 1), (2018, 5)]);

    let outcome = updates_by_year(&create_dataset());
    assert_eq!(outcome.spec().unwrap().kind, ChartKind::Line);
    assert!(outcome.spec().unwrap().insights[0].contains("2018"));
}

#[test]
fn test_updates_by_year_without_dates() {
    let mut app = create_app("Chess", "GAME", 10, 1);
    app.update_year = None;
    assert_eq!(
        updates_by_year(&[app]),
        ChartOutcome::NoData {
            id: chart_ids::UPDATES_BY_YEAR,
            reason: messages::NO_VALID_DATES,
        }
    );
}

#[test]
fn test_android_requirement_floors_major_versions() {
    let mut rows = create_dataset();
    rows[0].android_version_min = Some(2.3);
    let counts = apps_per_android_major(&rows);
    assert_eq!(counts, vec![(2, 1), (4, 4), (5, 1)]);

    let outcome = android_requirement(&rows);
    assert_eq!(labels(&outcome, text, false), vec!["2", "4", "5"]);
}

#[test]
fn test_price_buckets_include_free_apps() {
    let buckets = installs_per_price_bucket(&create_dataset());
    assert_eq!(
        buckets,
        vec![
            ("[0, 1)", 161_000.0),
            ("[1, 5)", 5_000.0),
            ("[5, 10)", 1_000.0),
            ("10+", 500.0),
        ]
    );

    let outcome = installs_by_price_bucket(&create_dataset());
    assert!(outcome.spec().unwrap().insights[0].contains("[0, 1)"));
}
