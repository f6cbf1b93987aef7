//! Seasonal trend model: linear trend plus weekly seasonal effects

use crate::data::TrainingSet;
use crate::error::{ForecastError, Result};
use crate::models::linear_trend::day_offsets;
use crate::models::{check_trainable, ForecastModel, TrainedForecastModel};
use chrono::{Datelike, NaiveDate};
use sales_math::regression::LinearFit;
use sales_math::seasonal::SeasonalEffects;

const WEEK_PERIOD: usize = 7;

/// Linear trend over calendar day offsets with an additive day-of-week
/// effect estimated from the trend residuals. Approximates a trend plus
/// periodic seasonal decomposition for daily sales series.
#[derive(Debug, Clone)]
pub struct SeasonalTrend {
    name: String,
}

/// Trained seasonal trend model
#[derive(Debug, Clone)]
pub struct TrainedSeasonalTrend {
    name: String,
    origin: NaiveDate,
    trend: LinearFit,
    weekly: SeasonalEffects,
}

impl SeasonalTrend {
    /// Create a new seasonal trend model
    pub fn new() -> Self {
        Self {
            name: "Seasonal Trend".to_string(),
        }
    }
}

impl Default for SeasonalTrend {
    fn default() -> Self {
        Self::new()
    }
}

fn weekday_phase(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

impl ForecastModel for SeasonalTrend {
    type Trained = TrainedSeasonalTrend;

    fn fit(&self, data: &TrainingSet) -> Result<Self::Trained> {
        check_trainable(data)?;

        // check_trainable guarantees a non-empty set
        let origin = data.first_date().unwrap();
        let xs = day_offsets(origin, data.iter().map(|o| o.date));
        let ys: Vec<f64> = data.iter().map(|o| o.value).collect();

        let trend =
            LinearFit::fit_xy(&xs, &ys).map_err(|e| ForecastError::ModelFit(e.to_string()))?;

        let residuals: Vec<f64> = xs
            .iter()
            .zip(ys.iter())
            .map(|(&x, &y)| y - trend.predict(x))
            .collect();
        let phases: Vec<usize> = data.iter().map(|o| weekday_phase(o.date)).collect();

        let weekly = SeasonalEffects::from_residuals(WEEK_PERIOD, &phases, &residuals)
            .map_err(|e| ForecastError::ModelFit(e.to_string()))?;

        Ok(TrainedSeasonalTrend {
            name: self.name.clone(),
            origin,
            trend,
            weekly,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedForecastModel for TrainedSeasonalTrend {
    fn predict(&self, dates: &[NaiveDate]) -> Result<Vec<Option<f64>>> {
        let mut values = Vec::with_capacity(dates.len());

        for &date in dates {
            let x = (date - self.origin).num_days() as f64;
            let effect = self
                .weekly
                .effect(weekday_phase(date))
                .map_err(|e| ForecastError::ModelFit(e.to_string()))?;
            values.push(Some(self.trend.predict(x) + effect));
        }

        Ok(values)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
