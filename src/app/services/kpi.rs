//! KPI builder
//!
//! Turns the cleaned dataset into the fixed, ordered list of summary cards and
//! the broader dataset overview. Every summary degrades on its own when the input
//! is empty; none of them can fail.

use crate::app::format::{format_count, format_fixed_or_empty, truncate_label};
use crate::app::models::CleanRecord;
use crate::app::services::aggregation::{count_by, mean_by, sort_desc_by_value, sum_by};
use crate::constants::{EMPTY_MARKER, KPI_LABEL_MAX_CHARS, NOT_AVAILABLE};
use serde::Serialize;
use std::collections::HashSet;

/// Value carried by a KPI card
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum KpiValue {
    Count(u64),
    /// Two-decimal value; zero or NaN renders as the empty marker
    Decimal(f64),
    Percent(f64),
    /// Dollar amount; zero or NaN renders as the empty marker
    Currency(f64),
    Label(String),
}

impl KpiValue {
    pub fn display(&self) -> String {
        match self {
            KpiValue::Count(n) => format_count(*n),
            KpiValue::Decimal(v) => format_fixed_or_empty(*v, 2),
            KpiValue::Percent(p) => format!("{:.1}%", p),
            KpiValue::Currency(v) => {
                if v.is_finite() && *v != 0.0 {
                    format!("${:.2}", v)
                } else {
                    EMPTY_MARKER.to_string()
                }
            }
            KpiValue::Label(s) => s.clone(),
        }
    }
}

/// One labelled summary card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpi {
    pub id: &'static str,
    pub label: String,
    pub value: KpiValue,
}

impl Kpi {
    fn new(id: &'static str, label: impl Into<String>, value: KpiValue) -> Self {
        Self {
            id,
            label: label.into(),
            value,
        }
    }

    pub fn display_value(&self) -> String {
        self.value.display()
    }
}

/// Build the twelve KPI cards, counting updates made in `current_year`
pub fn build_kpis(rows: &[CleanRecord], current_year: i32) -> Vec<Kpi> {
    let total_apps = rows.len();
    let total_installs = sum_by(rows, |r| r.installs as f64);
    let total_reviews = sum_by(rows, |r| r.review_count as f64);

    let rated = rated_apps(rows);
    let mean_rating = mean_by(rated.iter(), |r| r.rating_or_nan());

    let paid_count = rows.iter().filter(|r| r.is_paid()).count();
    let paid_percentage = if total_apps > 0 {
        paid_count as f64 / total_apps as f64 * 100.0
    } else {
        0.0
    };

    let categories: HashSet<&str> = rows.iter().map(|r| r.category.as_str()).collect();

    let most_installed = first_max_by(rows.iter(), |r| r.installs as f64);
    let top_rated = first_max_by(rated.iter().copied(), |r| r.rating_or_nan());

    let category_label = match most_common_category(rows) {
        Some((name, count)) => format!("{} ({})", name, count),
        None => format!("{} (0)", NOT_AVAILABLE),
    };

    let updated_this_year = rows
        .iter()
        .filter(|r| r.update_year == Some(current_year))
        .count();

    let premium = premium_apps(rows);
    let mean_premium_price = if premium.is_empty() {
        0.0
    } else {
        mean_by(premium.iter(), |r| r.price)
    };
    let most_expensive = first_max_by(premium.iter().copied(), |r| r.price);

    vec![
        Kpi::new("total_apps", "Total Apps", KpiValue::Count(total_apps as u64)),
        Kpi::new(
            "total_installs",
            "Total Installs",
            KpiValue::Count(total_installs as u64),
        ),
        Kpi::new(
            "total_reviews",
            "Total Reviews",
            KpiValue::Count(total_reviews as u64),
        ),
        Kpi::new("mean_rating", "Average Rating", KpiValue::Decimal(mean_rating)),
        Kpi::new("paid_share", "% Paid Apps", KpiValue::Percent(paid_percentage)),
        Kpi::new(
            "unique_categories",
            "Unique Categories",
            KpiValue::Count(categories.len() as u64),
        ),
        Kpi::new(
            "most_installed_app",
            "Most Installed App",
            KpiValue::Label(short_name(most_installed)),
        ),
        Kpi::new(
            "top_rated_app",
            "Top Rated App",
            KpiValue::Label(short_name(top_rated)),
        ),
        Kpi::new(
            "most_popular_category",
            "Most Popular Category",
            KpiValue::Label(category_label),
        ),
        Kpi::new(
            "updated_this_year",
            format!("Apps Updated {}", current_year),
            KpiValue::Count(updated_this_year as u64),
        ),
        Kpi::new(
            "mean_premium_price",
            "Average Premium Price",
            KpiValue::Currency(mean_premium_price),
        ),
        Kpi::new(
            "most_expensive_app",
            "Most Expensive App",
            KpiValue::Label(short_name(most_expensive)),
        ),
    ]
}

/// Dataset-wide summary shown alongside the KPI cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetOverview {
    pub total: usize,
    pub paid: usize,
    pub free: usize,
    pub categories: usize,
    pub top_category: Option<String>,
    pub top_app_by_installs: Option<String>,
    pub top_app_by_reviews: Option<String>,
    pub total_installs: u64,
    pub total_reviews: u64,
    pub mean_rating: f64,
    pub mean_premium_price: f64,
    pub mean_size_mb: f64,
    pub mean_android_version: f64,
}

impl DatasetOverview {
    pub fn from_records(rows: &[CleanRecord]) -> Self {
        let paid = rows.iter().filter(|r| r.is_paid()).count();
        let categories: HashSet<&str> = rows.iter().map(|r| r.category.as_str()).collect();

        Self {
            total: rows.len(),
            paid,
            free: rows.len() - paid,
            categories: categories.len(),
            top_category: most_common_category(rows).map(|(name, _)| name),
            top_app_by_installs: first_max_by(rows.iter(), |r| r.installs as f64)
                .map(|r| r.name.clone()),
            top_app_by_reviews: first_max_by(rows.iter(), |r| r.review_count as f64)
                .map(|r| r.name.clone()),
            total_installs: sum_by(rows, |r| r.installs as f64) as u64,
            total_reviews: sum_by(rows, |r| r.review_count as f64) as u64,
            mean_rating: mean_by(rated_apps(rows), |r| r.rating_or_nan()),
            mean_premium_price: mean_by(premium_apps(rows), |r| r.price),
            mean_size_mb: mean_by(
                rows.iter().filter(|r| r.size_mb.is_some_and(|s| s > 0.0)),
                |r| r.size_mb.unwrap_or(f64::NAN),
            ),
            mean_android_version: mean_by(
                rows.iter()
                    .filter(|r| r.android_version_min.is_some_and(|v| v > 0.0)),
                |r| r.android_version_min.unwrap_or(f64::NAN),
            ),
        }
    }

    /// Human-readable lines for terminal output
    pub fn lines(&self) -> Vec<(String, String)> {
        let label = |value: &Option<String>| value.clone().unwrap_or_else(|| NOT_AVAILABLE.into());
        vec![
            (
                "Total apps".into(),
                format!(
                    "{} ({} paid, {} free)",
                    format_count(self.total as u64),
                    self.paid,
                    self.free
                ),
            ),
            (
                "Categories".into(),
                format!(
                    "{} (top: {})",
                    format_count(self.categories as u64),
                    label(&self.top_category)
                ),
            ),
            (
                "Total installs".into(),
                format!(
                    "{} (top: {})",
                    format_count(self.total_installs),
                    label(&self.top_app_by_installs)
                ),
            ),
            (
                "Total reviews".into(),
                format!(
                    "{} (top: {})",
                    format_count(self.total_reviews),
                    label(&self.top_app_by_reviews)
                ),
            ),
            (
                "Average rating".into(),
                format_fixed_or_empty(self.mean_rating, 2),
            ),
            (
                "Average premium price".into(),
                KpiValue::Currency(self.mean_premium_price).display(),
            ),
            (
                "Average size".into(),
                if self.mean_size_mb.is_finite() && self.mean_size_mb != 0.0 {
                    format!("{:.1}MB", self.mean_size_mb)
                } else {
                    EMPTY_MARKER.to_string()
                },
            ),
            (
                "Average Android version".into(),
                format_fixed_or_empty(self.mean_android_version, 1),
            ),
        ]
    }
}

/// Apps with a present, positive rating
fn rated_apps(rows: &[CleanRecord]) -> Vec<&CleanRecord> {
    rows.iter()
        .filter(|r| r.rating.is_some_and(|rating| rating > 0.0))
        .collect()
}

/// Paid apps with a positive price
fn premium_apps(rows: &[CleanRecord]) -> Vec<&CleanRecord> {
    rows.iter().filter(|r| r.is_paid() && r.price > 0.0).collect()
}

/// Category with the most apps; ties go to the first seen
fn most_common_category(rows: &[CleanRecord]) -> Option<(String, usize)> {
    let mut counts = count_by(rows, |r| r.category.clone());
    sort_desc_by_value(&mut counts);
    counts.into_iter().next()
}

/// First item holding the maximum key; later ties lose
fn first_max_by<'a, I, F>(items: I, mut key: F) -> Option<&'a CleanRecord>
where
    I: IntoIterator<Item = &'a CleanRecord>,
    F: FnMut(&CleanRecord) -> f64,
{
    let mut best: Option<(&CleanRecord, f64)> = None;
    for item in items {
        let value = key(item);
        match best {
            Some((_, top)) if value <= top => {}
            _ => best = Some((item, value)),
        }
    }
    best.map(|(item, _)| item)
}

fn short_name(record: Option<&CleanRecord>) -> String {
    record
        .map(|r| truncate_label(&r.name, KPI_LABEL_MAX_CHARS))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
