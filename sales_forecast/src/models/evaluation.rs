//! Accuracy metrics for trained models against labeled hold-out data

use crate::data::Observation;
use crate::error::{ForecastError, Result};
use crate::models::TrainedForecastModel;

/// Forecast accuracy metrics
#[derive(Debug, Clone)]
pub struct ForecastAccuracy {
    /// Mean Absolute Error
    pub mae: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Number of dates the model declined
    pub declined: usize,
}

impl std::fmt::Display for ForecastAccuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Forecast Accuracy Metrics:")?;
        writeln!(f, "  MAE:      {:.4}", self.mae)?;
        writeln!(f, "  RMSE:     {:.4}", self.rmse)?;
        writeln!(f, "  Declined: {}", self.declined)?;
        Ok(())
    }
}

/// Evaluate a trained model against labeled observations.
///
/// Declined predictions are excluded from the error sums and reported in
/// `declined`.
pub fn evaluate_model<M: TrainedForecastModel + ?Sized>(
    model: &M,
    actual: &[Observation],
) -> Result<ForecastAccuracy> {
    if actual.is_empty() {
        return Err(ForecastError::InvalidParameter(
            "Cannot evaluate against an empty hold-out set".to_string(),
        ));
    }

    let dates: Vec<_> = actual.iter().map(|o| o.date).collect();
    let predictions = model.predict(&dates)?;

    let mut abs_sum = 0.0;
    let mut sq_sum = 0.0;
    let mut scored = 0usize;
    let mut declined = 0usize;

    for (prediction, observation) in predictions.iter().zip(actual.iter()) {
        match prediction {
            Some(value) => {
                let err = value - observation.value;
                abs_sum += err.abs();
                sq_sum += err.powi(2);
                scored += 1;
            }
            None => declined += 1,
        }
    }

    if scored == 0 {
        return Err(ForecastError::ModelFit(
            "Model declined every hold-out date".to_string(),
        ));
    }

    let n = scored as f64;
    Ok(ForecastAccuracy {
        mae: abs_sum / n,
        rmse: (sq_sum / n).sqrt(),
        declined,
    })
}
