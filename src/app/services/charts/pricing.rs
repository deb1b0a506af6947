//! Priciest paid categories

use super::ChartOutcome;
use super::spec::{Axis, AxisValue, ChartKind, ChartSpec, Series};
use crate::app::models::CleanRecord;
use crate::app::services::aggregation::{group_by, mean_by, median_by};
use crate::constants::{TOP_N_CATEGORIES, chart_ids, messages};
use serde::Serialize;

/// Price statistics for the paid apps of one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPrice {
    pub category: String,
    pub mean: f64,
    pub median: f64,
    pub count: usize,
}

/// Per-category price statistics over paid apps with a positive price
///
/// Sorted by mean price, highest first.
pub fn category_prices(rows: &[CleanRecord]) -> Vec<CategoryPrice> {
    let paid = rows
        .iter()
        .filter(|r| r.is_paid() && r.price.is_finite() && r.price > 0.0);

    let mut prices: Vec<CategoryPrice> = group_by(paid, |r| r.category.clone())
        .into_iter()
        .map(|(category, members)| CategoryPrice {
            category,
            mean: mean_by(members.iter(), |r| r.price),
            median: median_by(members.iter(), |r| r.price),
            count: members.len(),
        })
        .filter(|p| p.mean.is_finite())
        .collect();

    prices.sort_by(|a, b| b.mean.total_cmp(&a.mean));
    prices
}

/// Chart 3: top categories by mean paid price, with median and app count
pub fn priciest_paid_categories(rows: &[CleanRecord]) -> ChartOutcome {
    let id = chart_ids::PRICIEST_CATEGORIES;
    let mut top = category_prices(rows);
    if top.is_empty() {
        return ChartOutcome::no_data(id, messages::NO_PAID_APPS);
    }
    top.truncate(TOP_N_CATEGORIES);

    let series = Series::new(
        "mean price",
        top.iter().map(|p| AxisValue::from(p.category.as_str())).collect(),
        top.iter().map(|p| AxisValue::from(p.mean)).collect(),
    )
    .with_custom(top.iter().map(|p| p.median).collect())
    .with_text(top.iter().map(|p| p.count.to_string()).collect());

    ChartOutcome::Ready(
        ChartSpec::new(id, "Priciest categories (paid), mean price", ChartKind::Bar)
            .with_axes(Axis::linear("Category"), Axis::linear("Mean price (USD)"))
            .with_series(series)
            .with_insights(vec![
                format!("Paid apps in {} tend to have higher prices.", top[0].category),
                "Other categories show more accessible prices.".to_string(),
            ]),
    )
}
