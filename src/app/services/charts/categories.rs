//! Category charts: top categories by installs and app counts per category

use super::ChartOutcome;
use super::spec::{Axis, AxisValue, ChartKind, ChartSpec, Series};
use crate::app::format::format_number;
use crate::app::models::CleanRecord;
use crate::app::services::aggregation::{count_by, group_by, sort_desc_by_value, sum_by};
use crate::constants::{TOP_N_CATEGORIES, chart_ids, messages};

/// Total installs per category, highest first
pub fn installs_per_category(rows: &[CleanRecord]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = group_by(rows, |r| r.category.clone())
        .into_iter()
        .map(|(category, members)| (category, sum_by(members, |r| r.installs as f64)))
        .collect();
    sort_desc_by_value(&mut totals);
    totals
}

/// Chart 1: top categories by summed installs
///
/// Bars are listed smallest first so a horizontal layout shows the leader on top.
pub fn top_categories_by_installs(rows: &[CleanRecord]) -> ChartOutcome {
    let id = chart_ids::TOP_CATEGORIES;
    let mut top = installs_per_category(rows);
    top.truncate(TOP_N_CATEGORIES);
    if top.is_empty() {
        return ChartOutcome::no_data(id, messages::NO_DATA);
    }

    let last_in_top = top[top.len() - 1].0.clone();
    top.reverse();

    let series = Series::new(
        "installs",
        top.iter().map(|(_, installs)| AxisValue::from(*installs)).collect(),
        top.iter().map(|(category, _)| AxisValue::from(category.as_str())).collect(),
    )
    .with_text(top.iter().map(|(_, installs)| format_number(*installs)).collect());

    ChartOutcome::Ready(
        ChartSpec::new(
            id,
            format!("Top {} categories by installs", TOP_N_CATEGORIES),
            ChartKind::HorizontalBar,
        )
        .with_axes(Axis::linear("Installs (sum)"), Axis::linear(""))
        .with_series(series)
        .with_insights(vec![
            "The leading categories concentrate a significant share of installs.".to_string(),
            format!("The last category in the top list is {}.", last_in_top),
        ]),
    )
}

/// Chart 5: number of apps per category, most first
pub fn apps_by_category(rows: &[CleanRecord]) -> ChartOutcome {
    let id = chart_ids::APPS_BY_CATEGORY;
    let mut counts = count_by(rows, |r| r.category.clone());
    if counts.is_empty() {
        return ChartOutcome::no_data(id, messages::NO_DATA);
    }
    sort_desc_by_value(&mut counts);

    let leader = counts[0].0.clone();
    let series = Series::new(
        "apps",
        counts.iter().map(|(category, _)| AxisValue::from(category.as_str())).collect(),
        counts.iter().map(|(_, n)| AxisValue::from(*n)).collect(),
    );

    ChartOutcome::Ready(
        ChartSpec::new(id, "Number of apps per category", ChartKind::Bar)
            .with_axes(Axis::linear("Category"), Axis::linear("Number of apps"))
            .with_series(series)
            .with_insights(vec![
                format!("The {} category stands out by number of apps.", leader),
                "The distribution suggests saturated areas versus niches.".to_string(),
            ]),
    )
}
