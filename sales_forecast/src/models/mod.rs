//! Forecasting models for daily sales data
//!
//! The pipeline depends only on the `ForecastModel` / `TrainedForecastModel`
//! contract, so any time-series regression technique can be substituted
//! behind it without touching validation, alignment or serving.

use crate::data::TrainingSet;
use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use std::fmt::Debug;

pub mod evaluation;
pub mod linear_trend;
pub mod seasonal_trend;

/// Minimum number of distinct dated observations required to fit
pub const MIN_DISTINCT_DATES: usize = 2;

/// A fitted model able to answer date-keyed predictions
pub trait TrainedForecastModel: Debug {
    /// Predict one value per input date, in input order.
    ///
    /// `None` entries mean the technique explicitly declined that date;
    /// extrapolation beyond the training range is otherwise expected to
    /// produce a value.
    fn predict(&self, dates: &[NaiveDate]) -> Result<Vec<Option<f64>>>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast model that can be fitted on a training set
pub trait ForecastModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedForecastModel;

    /// Fit the model on a validated training set.
    ///
    /// Fails with `InsufficientData` when the set has fewer than
    /// `MIN_DISTINCT_DATES` distinct dated observations.
    fn fit(&self, data: &TrainingSet) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

/// Shared fit precondition: enough distinct dates to estimate a trend
pub(crate) fn check_trainable(data: &TrainingSet) -> Result<()> {
    let distinct = data.distinct_date_count();
    if distinct < MIN_DISTINCT_DATES {
        return Err(ForecastError::InsufficientData(format!(
            "Need at least {} distinct dated observations, got {}",
            MIN_DISTINCT_DATES, distinct
        )));
    }
    Ok(())
}
