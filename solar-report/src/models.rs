//! Output models handed to the chart, table and document consumers.
//!
//! All structs derive `Serialize` so the CLI can emit them as JSON.

use serde::Serialize;

/// One `(month, value)` point of a chart series.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeriesPoint {
    /// Full month name, e.g. "January".
    pub month_name: String,
    pub value: f64,
}

/// Twelve points in calendar order for one monthly field.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub points: Vec<SeriesPoint>,
}

/// One table row: month name and the value rendered with two decimals.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TableRow {
    pub month_name: String,
    pub value: String,
}
