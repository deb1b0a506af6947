//! Chart builders for the dashboard
//!
//! Eight independent builders, each a pure function from the cleaned rows to a
//! [`ChartOutcome`]. Empty or degenerate input yields [`ChartOutcome::NoData`]
//! instead of a malformed spec.
//!
//! # Architecture
//!
//! - [`spec`] - Chart specification data types
//! - [`categories`] - Installs and app counts per category (charts 1 and 5)
//! - [`installs`] - Installs by content rating and price bucket (charts 2 and 8)
//! - [`pricing`] - Priciest paid categories (chart 3)
//! - [`correlation`] - Installs vs reviews with a log-log fit (chart 4)
//! - [`timeline`] - Update years and Android requirements (charts 6 and 7)
//! - [`render`] - Renderer boundary and the staggered render driver

pub mod categories;
pub mod correlation;
pub mod installs;
pub mod pricing;
pub mod render;
pub mod spec;
pub mod timeline;

#[cfg(test)]
pub mod tests;

use crate::app::models::CleanRecord;
use serde::Serialize;
use tracing::debug;

pub use correlation::{LogLinearFit, fit_log_linear};
pub use pricing::CategoryPrice;
pub use render::{ChartRenderer, JsonFileRenderer, render_all};
pub use spec::{AxisValue, ChartKind, ChartSpec, Series};

/// Result shared by every chart builder
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChartOutcome {
    Ready(ChartSpec),
    NoData {
        id: &'static str,
        reason: &'static str,
    },
}

impl ChartOutcome {
    pub(crate) fn no_data(id: &'static str, reason: &'static str) -> Self {
        debug!("Chart {} has no data: {}", id, reason);
        ChartOutcome::NoData { id, reason }
    }

    pub fn id(&self) -> &'static str {
        match self {
            ChartOutcome::Ready(spec) => spec.id,
            ChartOutcome::NoData { id, .. } => id,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ChartOutcome::Ready(_))
    }

    pub fn spec(&self) -> Option<&ChartSpec> {
        match self {
            ChartOutcome::Ready(spec) => Some(spec),
            ChartOutcome::NoData { .. } => None,
        }
    }
}

/// Signature shared by the chart builders
pub type ChartBuilder = fn(&[CleanRecord]) -> ChartOutcome;

/// All builders in display order
pub const BUILDERS: [ChartBuilder; 8] = [
    categories::top_categories_by_installs,
    installs::installs_by_content_rating,
    pricing::priciest_paid_categories,
    correlation::installs_vs_reviews,
    categories::apps_by_category,
    timeline::updates_by_year,
    timeline::android_requirement,
    installs::installs_by_price_bucket,
];

/// Run every builder over the same snapshot, in display order
pub fn build_all(rows: &[CleanRecord]) -> Vec<ChartOutcome> {
    BUILDERS.iter().map(|build| build(rows)).collect()
}
