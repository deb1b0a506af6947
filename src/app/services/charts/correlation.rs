//! Installs vs reviews with a least-squares fit in log-log space

use super::ChartOutcome;
use super::spec::{Axis, AxisValue, ChartKind, ChartSpec, Series};
use crate::app::models::CleanRecord;
use crate::app::services::aggregation::mean_by;
use crate::constants::{chart_ids, messages};
use serde::Serialize;

/// Descriptive fit of `log10(y) = intercept + slope * log10(x)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogLinearFit {
    /// Pearson correlation of the logs; 0 when either side has no spread
    pub r: f64,
    pub slope: f64,
    pub intercept: f64,
    pub points: usize,
    /// Trend endpoints in original units, at the smallest and largest x
    pub line: [(f64, f64); 2],
}

impl LogLinearFit {
    /// Trend value at `x` in original units
    pub fn predict(&self, x: f64) -> f64 {
        10f64.powf(self.intercept + self.slope * x.log10())
    }

    /// "r ≈ 0.87"
    pub fn label(&self) -> String {
        if self.r.is_finite() {
            format!("r ≈ {:.2}", self.r)
        } else {
            "r ≈ 0".to_string()
        }
    }
}

/// Fit positive `(x, y)` pairs; `None` when no pair is usable
///
/// Pairs with a non-positive coordinate are skipped. A single point or a set
/// with no x spread gives `r = 0` and a flat line through the mean.
pub fn fit_log_linear(pairs: &[(f64, f64)]) -> Option<LogLinearFit> {
    let usable: Vec<(f64, f64)> = pairs
        .iter()
        .copied()
        .filter(|&(x, y)| x > 0.0 && y > 0.0 && x.is_finite() && y.is_finite())
        .collect();
    if usable.is_empty() {
        return None;
    }

    let logs: Vec<(f64, f64)> = usable.iter().map(|&(x, y)| (x.log10(), y.log10())).collect();
    let mean_x = mean_by(logs.iter(), |p| p.0);
    let mean_y = mean_by(logs.iter(), |p| p.1);

    let (mut cov, mut ss_x, mut ss_y) = (0.0, 0.0, 0.0);
    for &(lx, ly) in &logs {
        let dx = lx - mean_x;
        let dy = ly - mean_y;
        cov += dx * dy;
        ss_x += dx * dx;
        ss_y += dy * dy;
    }

    let (sd_x, sd_y) = (ss_x.sqrt(), ss_y.sqrt());
    let r = if sd_x != 0.0 && sd_y != 0.0 {
        cov / (sd_x * sd_y)
    } else {
        0.0
    };
    let slope = cov / if ss_x != 0.0 { ss_x } else { 1.0 };
    let intercept = mean_y - slope * mean_x;

    let min_x = usable.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let max_x = usable.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);

    let mut fit = LogLinearFit {
        r,
        slope,
        intercept,
        points: usable.len(),
        line: [(min_x, 0.0), (max_x, 0.0)],
    };
    fit.line = [(min_x, fit.predict(min_x)), (max_x, fit.predict(max_x))];
    Some(fit)
}

/// Chart 4: installs against reviews on log axes, with trend and correlation
pub fn installs_vs_reviews(rows: &[CleanRecord]) -> ChartOutcome {
    let id = chart_ids::INSTALLS_VS_REVIEWS;
    let pairs: Vec<(f64, f64)> = rows
        .iter()
        .filter(|r| r.review_count > 0 && r.installs > 0)
        .map(|r| (r.review_count as f64, r.installs as f64))
        .collect();

    let Some(fit) = fit_log_linear(&pairs) else {
        return ChartOutcome::no_data(id, messages::NO_DATA);
    };

    let points = Series::new(
        "apps",
        pairs.iter().map(|p| AxisValue::from(p.0)).collect(),
        pairs.iter().map(|p| AxisValue::from(p.1)).collect(),
    );
    let trend = Series::new(
        "trend",
        fit.line.iter().map(|p| AxisValue::from(p.0)).collect(),
        fit.line.iter().map(|p| AxisValue::from(p.1)).collect(),
    );

    let relation = if fit.r > 0.0 {
        "There is a positive relationship: more installs go with more reviews."
    } else {
        "No positive relationship between installs and reviews is visible."
    };

    ChartOutcome::Ready(
        ChartSpec::new(
            id,
            format!("Installs vs reviews ({})", fit.label()),
            ChartKind::ScatterWithTrend,
        )
        .with_axes(Axis::log("Reviews (log)"), Axis::log("Installs (log)"))
        .with_series(points)
        .with_series(trend)
        .with_annotation(fit.label())
        .with_insights(vec![
            relation.to_string(),
            "The trend line shows the proportionality on a log scale.".to_string(),
        ]),
    )
}
