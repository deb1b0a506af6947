//! Install distribution charts: by content rating and by price bucket

use super::ChartOutcome;
use super::spec::{Axis, AxisValue, ChartKind, ChartSpec, Series};
use crate::app::format::format_number;
use crate::app::models::CleanRecord;
use crate::app::services::aggregation::{group_by, sort_desc_by_value, sum_by};
use crate::constants::{PRICE_BUCKETS, UNKNOWN_CONTENT_RATING, chart_ids, messages};

/// Chart 2: summed installs per content rating, in first-seen order
///
/// Blank ratings are grouped under "Unknown".
pub fn installs_by_content_rating(rows: &[CleanRecord]) -> ChartOutcome {
    let id = chart_ids::CONTENT_RATING;
    let totals: Vec<(String, f64)> = group_by(rows, |r| {
        if r.content_rating.is_empty() {
            UNKNOWN_CONTENT_RATING.to_string()
        } else {
            r.content_rating.clone()
        }
    })
    .into_iter()
    .map(|(rating, members)| (rating, sum_by(members, |r| r.installs as f64)))
    .collect();

    if totals.is_empty() {
        return ChartOutcome::no_data(id, messages::NO_DATA);
    }

    let mut ranked = totals.clone();
    sort_desc_by_value(&mut ranked);
    let leader = ranked[0].0.clone();

    let series = Series::new(
        "installs",
        totals.iter().map(|(rating, _)| AxisValue::from(rating.as_str())).collect(),
        totals.iter().map(|(_, installs)| AxisValue::from(*installs)).collect(),
    )
    .with_text(totals.iter().map(|(_, installs)| format_number(*installs)).collect());

    ChartOutcome::Ready(
        ChartSpec::new(id, "Installs by age group (content rating)", ChartKind::Bar)
            .with_axes(Axis::linear("Content rating"), Axis::linear("Installs (sum)"))
            .with_series(series)
            .with_insights(vec![
                format!("The {} group concentrates the most installs.", leader),
                "The differences suggest age profiles with different adoption.".to_string(),
            ]),
    )
}

/// Summed installs per price bucket, in bucket order
///
/// Every row takes part, free apps included, so free apps land in the first
/// bucket.
pub fn installs_per_price_bucket(rows: &[CleanRecord]) -> Vec<(&'static str, f64)> {
    PRICE_BUCKETS
        .iter()
        .map(|&(label, from, to)| {
            let installs = sum_by(
                rows.iter().filter(|r| r.price >= from && r.price < to),
                |r| r.installs as f64,
            );
            (label, installs)
        })
        .collect()
}

/// Chart 8: installs by price bucket
pub fn installs_by_price_bucket(rows: &[CleanRecord]) -> ChartOutcome {
    let id = chart_ids::PRICE_BUCKETS;
    if rows.is_empty() {
        return ChartOutcome::no_data(id, messages::NO_DATA);
    }

    let buckets = installs_per_price_bucket(rows);
    let mut ranked = buckets.clone();
    sort_desc_by_value(&mut ranked);
    let leader = ranked[0].0;

    let series = Series::new(
        "installs",
        buckets.iter().map(|(label, _)| AxisValue::from(*label)).collect(),
        buckets.iter().map(|(_, installs)| AxisValue::from(*installs)).collect(),
    )
    .with_text(buckets.iter().map(|(_, installs)| format_number(*installs)).collect());

    ChartOutcome::Ready(
        ChartSpec::new(id, "Installs by price range (USD)", ChartKind::Bar)
            .with_axes(Axis::linear("Price range"), Axis::linear("Installs (sum)"))
            .with_series(series)
            .with_insights(vec![
                format!("The {} range concentrates the most installs.", leader),
                "Cheaper apps attract a larger volume.".to_string(),
            ]),
    )
}
