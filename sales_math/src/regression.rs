//! Ordinary least squares regression for trend estimation
//!
//! Supports two fitting modes:
//! - against sequential position (0, 1, 2, ...), used for trend overlays
//! - against explicit x values, used for calendar-offset trend models

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// A fitted least-squares line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    slope: f64,
    intercept: f64,
}

impl LinearFit {
    /// Fit a line to values against their sequential position (x = 0, 1, 2, ...)
    pub fn fit_positions(values: &[f64]) -> Result<Self> {
        let xs: Vec<f64> = (0..values.len()).map(|i| i as f64).collect();
        Self::fit_xy(&xs, values)
    }

    /// Fit a line to explicit (x, y) pairs
    pub fn fit_xy(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(MathError::InvalidInput(format!(
                "x and y lengths differ: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(MathError::InsufficientData(
                "Need at least 2 points for linear regression".to_string(),
            ));
        }

        let n = xs.len() as f64;
        let x_mean = xs.iter().sum::<f64>() / n;
        let y_mean = ys.iter().sum::<f64>() / n;

        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for (&x, &y) in xs.iter().zip(ys.iter()) {
            numerator += (x - x_mean) * (y - y_mean);
            denominator += (x - x_mean) * (x - x_mean);
        }

        if denominator.abs() < 1e-10 {
            return Err(MathError::CalculationError(
                "Cannot calculate slope: x values are too similar".to_string(),
            ));
        }

        let slope = numerator / denominator;
        let intercept = y_mean - slope * x_mean;

        Ok(Self { slope, intercept })
    }

    /// Get the slope of the fitted line
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Get the intercept of the fitted line
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Evaluate the line at a given x
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Evaluate the line at positions 0..n
    pub fn fitted_positions(&self, n: usize) -> Vec<f64> {
        (0..n).map(|i| self.predict(i as f64)).collect()
    }

    /// Coefficient of determination against the values the line was fitted to
    pub fn r_squared(&self, xs: &[f64], ys: &[f64]) -> Result<f64> {
        if xs.len() != ys.len() || ys.len() < 2 {
            return Err(MathError::InsufficientData(
                "Need at least 2 matching points to calculate R-squared".to_string(),
            ));
        }

        let y_mean = ys.iter().sum::<f64>() / ys.len() as f64;

        let mut ss_total = 0.0;
        let mut ss_residual = 0.0;

        for (&x, &y) in xs.iter().zip(ys.iter()) {
            let y_pred = self.predict(x);
            ss_total += (y - y_mean).powi(2);
            ss_residual += (y - y_pred).powi(2);
        }

        if ss_total.abs() < 1e-10 {
            return Err(MathError::CalculationError(
                "Cannot calculate R-squared: total sum of squares is too small".to_string(),
            ));
        }

        Ok(1.0 - (ss_residual / ss_total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_positions() {
        let fit = LinearFit::fit_positions(&[10.0, 20.0, 30.0]).unwrap();

        // Perfect linear data: slope 10, intercept 10
        assert!((fit.slope() - 10.0).abs() < 0.001);
        assert!((fit.intercept() - 10.0).abs() < 0.001);

        let forecast = fit.predict(3.0);
        assert!((forecast - 40.0).abs() < 0.001);
    }

    #[test]
    fn test_fit_xy() {
        let xs = [0.0, 7.0, 14.0];
        let ys = [100.0, 107.0, 114.0];
        let fit = LinearFit::fit_xy(&xs, &ys).unwrap();

        assert!((fit.slope() - 1.0).abs() < 0.001);
        assert!((fit.predict(21.0) - 121.0).abs() < 0.001);
    }

    #[test]
    fn test_fitted_positions_length() {
        let fit = LinearFit::fit_positions(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(fit.fitted_positions(4).len(), 4);
    }

    #[test]
    fn test_r_squared_perfect_fit() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [5.0, 7.0, 9.0];
        let fit = LinearFit::fit_xy(&xs, &ys).unwrap();
        assert!(fit.r_squared(&xs, &ys).unwrap() > 0.999);
    }

    #[test]
    fn test_insufficient_data() {
        let result = LinearFit::fit_positions(&[10.0]);
        assert!(matches!(result, Err(MathError::InsufficientData(_))));
    }

    #[test]
    fn test_degenerate_x_values() {
        let result = LinearFit::fit_xy(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]);
        assert!(matches!(result, Err(MathError::CalculationError(_))));
    }
}
