//! Column summaries over the numeric subset of each column.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::numeric::parse_number;
use crate::input::DataTable;

/// Statistics for the numeric values of one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    /// Column name from the header.
    pub name: String,
    /// Zero-based position in the header.
    pub position: usize,
    /// Number of cells that coerced to a number.
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub sum: f64,
}

/// Running count, sum, mean and extremes of a stream of numbers.
///
/// The mean is tracked incrementally rather than derived from the sum, so it
/// stays finite when the sum overflows.
#[derive(Debug, Clone)]
pub struct NumericAccumulator {
    count: usize,
    sum: f64,
    mean: f64,
    min: f64,
    max: f64,
}

impl NumericAccumulator {
    pub fn new() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            mean: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Add a value.
    pub fn add(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        let n = self.count as f64;
        self.mean += value / n - self.mean / n;
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Arithmetic mean, or None before the first value.
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.mean.clamp(self.min, self.max))
    }

    /// Finish into a column summary; None when nothing was added.
    pub fn finish(&self, name: impl Into<String>, position: usize) -> Option<ColumnSummary> {
        let mean = self.mean()?;
        Some(ColumnSummary {
            name: name.into(),
            position,
            count: self.count,
            min: self.min,
            max: self.max,
            mean,
            sum: self.sum,
        })
    }
}

impl Default for NumericAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<f64> for NumericAccumulator {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        for value in iter {
            acc.add(value);
        }
        acc
    }
}

/// Summarize one column; None when no cell in it is numeric.
pub fn summarize_column(table: &DataTable, position: usize) -> Option<ColumnSummary> {
    let name = table.headers.get(position)?;
    let acc: NumericAccumulator = table.column_values(position).filter_map(parse_number).collect();

    let summary = acc.finish(name.as_str(), position);
    if summary.is_none() {
        debug!(column = %name, "no numeric values, column left out of summary");
    }
    summary
}

/// Summaries for every numeric column, in header order.
pub fn summarize_table(table: &DataTable) -> Vec<ColumnSummary> {
    (0..table.column_count())
        .filter_map(|position| summarize_column(table, position))
        .collect()
}
