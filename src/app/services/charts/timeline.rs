//! Update-year and Android requirement distributions

use super::ChartOutcome;
use super::spec::{Axis, AxisValue, ChartKind, ChartSpec, Series};
use crate::app::models::CleanRecord;
use crate::app::services::aggregation::{count_by, sort_desc_by_value};
use crate::constants::{chart_ids, messages};

/// Apps per update year, oldest first
pub fn apps_per_update_year(rows: &[CleanRecord]) -> Vec<(i32, usize)> {
    let mut counts = count_by(rows.iter().filter_map(|r| r.update_year), |year| *year);
    counts.sort_by_key(|(year, _)| *year);
    counts
}

/// Apps per major Android version, lowest first
pub fn apps_per_android_major(rows: &[CleanRecord]) -> Vec<(i64, usize)> {
    let majors = rows
        .iter()
        .filter_map(|r| r.android_version_min)
        .filter(|v| v.is_finite())
        .map(|v| v.floor() as i64);
    let mut counts = count_by(majors, |major| *major);
    counts.sort_by_key(|(major, _)| *major);
    counts
}

/// Chart 6: number of apps last updated in each year
pub fn updates_by_year(rows: &[CleanRecord]) -> ChartOutcome {
    let id = chart_ids::UPDATES_BY_YEAR;
    let counts = apps_per_update_year(rows);
    if counts.is_empty() {
        return ChartOutcome::no_data(id, messages::NO_VALID_DATES);
    }

    let mut ranked = counts.clone();
    sort_desc_by_value(&mut ranked);
    let peak = ranked[0].0;

    let series = Series::new(
        "apps",
        counts.iter().map(|(year, _)| AxisValue::from(*year)).collect(),
        counts.iter().map(|(_, n)| AxisValue::from(*n)).collect(),
    );

    ChartOutcome::Ready(
        ChartSpec::new(id, "Updates per year", ChartKind::Line)
            .with_axes(Axis::linear("Year"), Axis::linear("Number of apps"))
            .with_series(series)
            .with_insights(vec![
                format!("Updates peak around {}.", peak),
                "The activity may reflect adoption of new Android versions.".to_string(),
            ]),
    )
}

/// Chart 7: distribution of minimum Android major versions
pub fn android_requirement(rows: &[CleanRecord]) -> ChartOutcome {
    let id = chart_ids::ANDROID_REQUIREMENT;
    let counts = apps_per_android_major(rows);
    if counts.is_empty() {
        return ChartOutcome::no_data(id, messages::NO_DATA);
    }

    let lowest = counts[0].0;
    let series = Series::new(
        "apps",
        counts.iter().map(|(major, _)| AxisValue::from(major.to_string())).collect(),
        counts.iter().map(|(_, n)| AxisValue::from(*n)).collect(),
    );

    ChartOutcome::Ready(
        ChartSpec::new(
            id,
            "Android requirement distribution (major version)",
            ChartKind::Bar,
        )
        .with_axes(Axis::linear("Major version"), Axis::linear("Number of apps"))
        .with_series(series)
        .with_insights(vec![
            format!("Minimum requirements start at Android {}.", lowest),
            "Most apps target modern versions.".to_string(),
        ]),
    )
}
