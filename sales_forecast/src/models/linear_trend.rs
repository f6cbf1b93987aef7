//! Linear trend model over calendar day offsets

use crate::data::TrainingSet;
use crate::error::{ForecastError, Result};
use crate::models::{check_trainable, ForecastModel, TrainedForecastModel};
use chrono::NaiveDate;
use sales_math::regression::LinearFit;

/// Ordinary least squares of value against days elapsed since the first
/// training date. Serves as the baseline technique behind the model contract.
#[derive(Debug, Clone)]
pub struct LinearTrend {
    name: String,
}

/// Trained linear trend model
#[derive(Debug, Clone)]
pub struct TrainedLinearTrend {
    name: String,
    origin: NaiveDate,
    fit: LinearFit,
}

impl LinearTrend {
    /// Create a new linear trend model
    pub fn new() -> Self {
        Self {
            name: "Linear Trend".to_string(),
        }
    }
}

impl Default for LinearTrend {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn day_offsets(origin: NaiveDate, dates: impl Iterator<Item = NaiveDate>) -> Vec<f64> {
    dates
        .map(|d| (d - origin).num_days() as f64)
        .collect()
}

impl ForecastModel for LinearTrend {
    type Trained = TrainedLinearTrend;

    fn fit(&self, data: &TrainingSet) -> Result<Self::Trained> {
        check_trainable(data)?;

        // check_trainable guarantees a non-empty set
        let origin = data.first_date().unwrap();
        let xs = day_offsets(origin, data.iter().map(|o| o.date));
        let ys: Vec<f64> = data.iter().map(|o| o.value).collect();

        let fit = LinearFit::fit_xy(&xs, &ys)
            .map_err(|e| ForecastError::ModelFit(e.to_string()))?;

        Ok(TrainedLinearTrend {
            name: self.name.clone(),
            origin,
            fit,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedForecastModel for TrainedLinearTrend {
    fn predict(&self, dates: &[NaiveDate]) -> Result<Vec<Option<f64>>> {
        Ok(dates
            .iter()
            .map(|&d| Some(self.fit.predict((d - self.origin).num_days() as f64)))
            .collect())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
