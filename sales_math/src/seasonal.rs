//! Periodic seasonal effect estimation
//!
//! Estimates an additive effect per phase of a fixed cycle (e.g. the seven
//! weekdays) as the mean residual observed in that phase.

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Additive seasonal effects over a fixed-length cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalEffects {
    effects: Vec<f64>,
}

impl SeasonalEffects {
    /// Estimate effects from residuals tagged with their cycle phase.
    ///
    /// A phase with no samples gets a zero effect, so prediction for an
    /// unseen phase falls back to the underlying trend.
    pub fn from_residuals(period: usize, phases: &[usize], residuals: &[f64]) -> Result<Self> {
        if period == 0 {
            return Err(MathError::InvalidInput(
                "Seasonal period must be at least 1".to_string(),
            ));
        }
        if phases.len() != residuals.len() {
            return Err(MathError::InvalidInput(format!(
                "Phase and residual lengths differ: {} vs {}",
                phases.len(),
                residuals.len()
            )));
        }

        let mut sums = vec![0.0; period];
        let mut counts = vec![0usize; period];

        for (&phase, &residual) in phases.iter().zip(residuals.iter()) {
            if phase >= period {
                return Err(MathError::InvalidInput(format!(
                    "Phase {} out of range for period {}",
                    phase, period
                )));
            }
            sums[phase] += residual;
            counts[phase] += 1;
        }

        let effects = sums
            .iter()
            .zip(counts.iter())
            .map(|(&sum, &count)| if count > 0 { sum / count as f64 } else { 0.0 })
            .collect();

        Ok(Self { effects })
    }

    /// The cycle length
    pub fn period(&self) -> usize {
        self.effects.len()
    }

    /// The additive effect for a given phase
    pub fn effect(&self, phase: usize) -> Result<f64> {
        self.effects.get(phase).copied().ok_or_else(|| {
            MathError::InvalidInput(format!(
                "Phase {} out of range for period {}",
                phase,
                self.effects.len()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_residual_per_phase() {
        let phases = [0, 1, 0, 1];
        let residuals = [2.0, -1.0, 4.0, -3.0];
        let effects = SeasonalEffects::from_residuals(2, &phases, &residuals).unwrap();

        assert!((effects.effect(0).unwrap() - 3.0).abs() < 0.001);
        assert!((effects.effect(1).unwrap() - (-2.0)).abs() < 0.001);
    }

    #[test]
    fn test_unseen_phase_has_zero_effect() {
        let effects = SeasonalEffects::from_residuals(7, &[0, 1], &[5.0, 5.0]).unwrap();
        assert_eq!(effects.effect(6).unwrap(), 0.0);
    }

    #[test]
    fn test_phase_out_of_range() {
        let result = SeasonalEffects::from_residuals(2, &[0, 2], &[1.0, 1.0]);
        assert!(matches!(result, Err(MathError::InvalidInput(_))));

        let effects = SeasonalEffects::from_residuals(2, &[0, 1], &[1.0, 1.0]).unwrap();
        assert!(effects.effect(5).is_err());
    }

    #[test]
    fn test_zero_period_rejected() {
        let result = SeasonalEffects::from_residuals(0, &[], &[]);
        assert!(matches!(result, Err(MathError::InvalidInput(_))));
    }
}
