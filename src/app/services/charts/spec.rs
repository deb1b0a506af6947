//! Chart specification types
//!
//! A spec is plain data: series, axis layout and some descriptive text. Drawing
//! is left to a [`ChartRenderer`](super::render::ChartRenderer).

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    HorizontalBar,
    /// Scatter points with a fitted trend line
    ScatterWithTrend,
    /// Filled line with markers
    Line,
}

/// One coordinate on a category or numeric axis
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisValue {
    Number(f64),
    Text(String),
}

impl From<f64> for AxisValue {
    fn from(value: f64) -> Self {
        AxisValue::Number(value)
    }
}

impl From<u64> for AxisValue {
    fn from(value: u64) -> Self {
        AxisValue::Number(value as f64)
    }
}

impl From<usize> for AxisValue {
    fn from(value: usize) -> Self {
        AxisValue::Number(value as f64)
    }
}

impl From<i32> for AxisValue {
    fn from(value: i32) -> Self {
        AxisValue::Number(f64::from(value))
    }
}

impl From<String> for AxisValue {
    fn from(value: String) -> Self {
        AxisValue::Text(value)
    }
}

impl From<&str> for AxisValue {
    fn from(value: &str) -> Self {
        AxisValue::Text(value.to_string())
    }
}

impl AxisValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AxisValue::Number(n) => Some(*n),
            AxisValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AxisValue::Text(s) => Some(s),
            AxisValue::Number(_) => None,
        }
    }
}

/// A named series of points
///
/// `text` holds per-point labels and `custom` extra per-point values (such as a
/// median shown next to a mean); both are empty or as long as `x`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub x: Vec<AxisValue>,
    pub y: Vec<AxisValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, x: Vec<AxisValue>, y: Vec<AxisValue>) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            text: Vec::new(),
            custom: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: Vec<String>) -> Self {
        self.text = text;
        self
    }

    pub fn with_custom(mut self, custom: Vec<f64>) -> Self {
        self.custom = custom;
        self
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    pub log_scale: bool,
}

impl Axis {
    pub fn linear(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            log_scale: false,
        }
    }

    pub fn log(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            log_scale: true,
        }
    }
}

/// Everything needed to draw one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: &'static str,
    pub title: String,
    pub kind: ChartKind,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub series: Vec<Series>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    /// Short observations about the data shown
    pub insights: Vec<String>,
}

impl ChartSpec {
    pub fn new(id: &'static str, title: impl Into<String>, kind: ChartKind) -> Self {
        Self {
            id,
            title: title.into(),
            kind,
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            series: Vec::new(),
            annotation: None,
            insights: Vec::new(),
        }
    }

    pub fn with_axes(mut self, x_axis: Axis, y_axis: Axis) -> Self {
        self.x_axis = x_axis;
        self.y_axis = y_axis;
        self
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    pub fn with_insights(mut self, insights: Vec<String>) -> Self {
        self.insights = insights;
        self
    }

    /// First series, which every builder emits
    pub fn primary(&self) -> Option<&Series> {
        self.series.first()
    }
}
