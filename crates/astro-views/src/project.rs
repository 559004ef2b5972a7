//! Chart projection stage
//!
//! Projects records onto the plain point and series shapes a chart
//! renderer consumes. No sorting, binning, or bounds logic lives here;
//! output order always matches input order.

use serde::Serialize;

/// Numeric transform applied to an axis accessor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Transform {
    Identity,
    /// Base-10 logarithm; datasets feeding log axes are curated to
    /// keep every value strictly positive
    Log10,
}

impl Transform {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Transform::Identity => value,
            Transform::Log10 => value.log10(),
        }
    }
}

/// Per-record x/y projection for a point chart
pub struct PointMapping<R> {
    pub x: fn(&R) -> f64,
    pub x_transform: Transform,
    pub y: fn(&R) -> f64,
    pub y_transform: Transform,
}

impl<R> PointMapping<R> {
    /// Mapping with identity transforms on both axes
    pub fn linear(x: fn(&R) -> f64, y: fn(&R) -> f64) -> Self {
        Self {
            x,
            x_transform: Transform::Identity,
            y,
            y_transform: Transform::Identity,
        }
    }

    /// Log-log mapping for order-of-magnitude plots
    pub fn log_log(x: fn(&R) -> f64, y: fn(&R) -> f64) -> Self {
        Self {
            x,
            x_transform: Transform::Log10,
            y,
            y_transform: Transform::Log10,
        }
    }
}

/// Project every record to a 2-D point, in input order
pub fn points<R>(records: &[R], mapping: &PointMapping<R>) -> Vec<[f64; 2]> {
    records
        .iter()
        .map(|record| {
            [
                mapping.x_transform.apply((mapping.x)(record)),
                mapping.y_transform.apply((mapping.y)(record)),
            ]
        })
        .collect()
}

/// How a point series is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PointKind {
    Scatter,
    Line,
}

/// Declarative chart binding for a view
pub struct ChartSpec<R> {
    pub kind: PointKind,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// Draw the x axis right-to-left (the HR diagram puts hotter
    /// stars on the left)
    pub reverse_x: bool,
    pub mapping: PointMapping<R>,
}

impl<R> ChartSpec<R> {
    /// Project `records` through this binding into a renderable chart
    pub fn project(&self, records: &[R]) -> PointChart {
        PointChart {
            kind: self.kind,
            title: self.title.to_string(),
            x_label: self.x_label.to_string(),
            y_label: self.y_label.to_string(),
            reverse_x: self.reverse_x,
            points: points(records, &self.mapping),
        }
    }
}

/// Materialized point chart handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointChart {
    pub kind: PointKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub reverse_x: bool,
    pub points: Vec<[f64; 2]>,
}

/// Materialized bar chart, e.g. the landing page's object distribution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Chart view model for one dashboard page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ChartData {
    Points(PointChart),
    Bars(BarChart),
}
