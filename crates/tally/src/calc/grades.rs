//! Grade statistics and the pass/fail verdict.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};
use crate::summary::NumericAccumulator;

/// Mean a student needs to pass when no other mark is given.
pub const DEFAULT_PASSING_MARK: f64 = 7.0;

/// Outcome of comparing a mean against the passing mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Approved,
    Failed,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Approved => write!(f, "APPROVED"),
            Verdict::Failed => write!(f, "FAILED"),
        }
    }
}

/// Summary of a list of grades.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Mean required for approval.
    pub passing_mark: f64,
    pub verdict: Verdict,
}

impl GradeSummary {
    /// Summarize grades against a passing mark.
    pub fn compute(grades: &[f64], passing_mark: f64) -> Result<Self> {
        let acc: NumericAccumulator = grades.iter().copied().collect();
        let mean = acc
            .mean()
            .ok_or_else(|| TallyError::EmptyData("no grades given".to_string()))?;

        let min = grades.iter().copied().fold(f64::INFINITY, f64::min);
        let max = grades.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let verdict = if mean >= passing_mark {
            Verdict::Approved
        } else {
            Verdict::Failed
        };

        Ok(Self {
            count: acc.count(),
            mean,
            median: median(grades).unwrap_or(mean),
            min,
            max,
            passing_mark,
            verdict,
        })
    }
}

/// Middle value of the sorted input; mean of the two middle values for an
/// even count.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}
