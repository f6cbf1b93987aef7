//! Alignment of model predictions back onto the original future-request rows
//!
//! The alignment key is the validated, ordered position of surviving rows,
//! not the raw input index. Rows dropped during validation keep their
//! original slot so downstream row count always matches the input, and no
//! trailing prediction is ever shifted into the wrong row.

use crate::data::FutureRequest;
use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One future request merged with its prediction.
///
/// `predicted_value` is `None` when the model declined the date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub date: NaiveDate,
    pub predicted_value: Option<f64>,
}

/// Future requests merged with their predictions, preserving the original
/// input cardinality and order.
///
/// A `None` slot is a row whose date failed validation. Immutable after
/// pipeline initialization; all queries are read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedTestSet {
    records: Vec<Option<PredictionRecord>>,
}

impl AlignedTestSet {
    /// Build an aligned set directly from slotted records
    pub fn from_records(records: Vec<Option<PredictionRecord>>) -> Self {
        Self { records }
    }

    /// Get the slotted records in original input order
    pub fn records(&self) -> &[Option<PredictionRecord>] {
        &self.records
    }

    /// Number of slots, equal to the original future-request input length
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the set has no slots
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the slots
    pub fn iter(&self) -> std::slice::Iter<'_, Option<PredictionRecord>> {
        self.records.iter()
    }
}

/// Merges model output back onto the original future-request record set
#[derive(Debug)]
pub struct PredictionAligner;

impl PredictionAligner {
    /// Merge predictions into the validated slots.
    ///
    /// `slots` is the per-input-row outcome of validation (`None` = dropped)
    /// and `predictions` is the model output over only the surviving dates,
    /// in surviving order. Each surviving slot consumes exactly one
    /// prediction; a cardinality mismatch is an alignment contract violation
    /// and fails rather than silently truncating.
    pub fn align(
        slots: &[Option<FutureRequest>],
        predictions: &[Option<f64>],
    ) -> Result<AlignedTestSet> {
        let surviving = slots.iter().filter(|s| s.is_some()).count();
        if surviving != predictions.len() {
            return Err(ForecastError::Alignment(format!(
                "Got {} predictions for {} surviving rows",
                predictions.len(),
                surviving
            )));
        }

        let mut next_prediction = predictions.iter();
        let records = slots
            .iter()
            .map(|slot| {
                slot.as_ref().map(|request| PredictionRecord {
                    date: request.date,
                    // The count check above guarantees one prediction per
                    // surviving slot.
                    predicted_value: *next_prediction.next().unwrap(),
                })
            })
            .collect();

        Ok(AlignedTestSet { records })
    }

    /// The surviving dates, in the order the model must predict them
    pub fn surviving_dates(slots: &[Option<FutureRequest>]) -> Vec<NaiveDate> {
        slots
            .iter()
            .filter_map(|slot| slot.as_ref().map(|request| request.date))
            .collect()
    }
}
