//! Month/year windowed analytics over the training set

use crate::data::{Observation, TrainingSet};
use crate::error::{ForecastError, Result};
use chrono::Datelike;
use sales_math::regression::LinearFit;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Minimum subset size (exclusive) for a trend line to be meaningful
pub const TREND_MIN_POINTS: usize = 5;

/// A calendar (month, year) filter over the training set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowQuery {
    month: u32,
    year: i32,
}

impl WindowQuery {
    /// Create a window query; month must be in 1..=12
    pub fn new(month: u32, year: i32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ForecastError::InvalidParameter(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }
        Ok(Self { month, year })
    }

    /// The calendar month (1..=12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The calendar year
    pub fn year(&self) -> i32 {
        self.year
    }
}

/// Summary statistics over a filtered observation subset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    /// Arithmetic sum of the values
    pub total: f64,
    /// Mean value (total / count)
    pub mean: f64,
    /// Maximum value
    pub max: f64,
    /// Sample standard deviation (n-1 divisor), 0.0 when count < 2
    pub std_dev: f64,
    /// Number of contributing observations
    pub count: usize,
}

/// A least-squares line over sequential position within a filtered subset,
/// used as an overlay comparison against the raw series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
    /// One fitted value per position in the subset
    pub fitted: Vec<f64>,
}

/// Windowed filtering, summary statistics and trend fitting
#[derive(Debug)]
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    /// Filter the training set to observations matching the query's calendar
    /// month and year exactly. Input order is preserved; an empty result is
    /// a valid outcome, not an error.
    pub fn filter_window(data: &TrainingSet, query: WindowQuery) -> Vec<Observation> {
        data.iter()
            .filter(|o| o.date.month() == query.month() && o.date.year() == query.year())
            .copied()
            .collect()
    }

    /// Summarize a filtered subset; `None` for an empty subset.
    ///
    /// Standard deviation uses the sample (n-1) divisor and is reported as
    /// 0.0 when the subset has fewer than 2 observations.
    pub fn summarize(subset: &[Observation]) -> Option<StatsSummary> {
        if subset.is_empty() {
            return None;
        }

        let values: Vec<f64> = subset.iter().map(|o| o.value).collect();
        let total: f64 = values.iter().sum();
        let count = values.len();
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let std_dev = if count < 2 {
            0.0
        } else {
            values.as_slice().std_dev()
        };

        Some(StatsSummary {
            total,
            mean: total / count as f64,
            max,
            std_dev,
            count,
        })
    }

    /// Fit a trend line of value against sequential position within the
    /// subset. Returns `None` unless the subset has more than
    /// `TREND_MIN_POINTS` observations.
    pub fn fit_trend(subset: &[Observation]) -> Option<TrendLine> {
        if subset.len() <= TREND_MIN_POINTS {
            return None;
        }

        let values: Vec<f64> = subset.iter().map(|o| o.value).collect();
        // More than 5 points with sequential x values cannot degenerate
        let fit = LinearFit::fit_positions(&values).ok()?;

        Some(TrendLine {
            slope: fit.slope(),
            intercept: fit.intercept(),
            fitted: fit.fitted_positions(values.len()),
        })
    }
}
