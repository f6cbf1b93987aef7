//! Date-keyed exact-match prediction lookup

use crate::align::AlignedTestSet;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome of a prediction lookup.
///
/// `NotFound` covers both a date with no corresponding record and a record
/// whose prediction is absent; the core collapses both to one outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PredictionLookup {
    Found {
        date: NaiveDate,
        /// Unrounded predicted value
        value: f64,
        /// Value rounded to the nearest whole number for display
        rounded: i64,
    },
    NotFound,
}

impl PredictionLookup {
    /// Check whether the lookup found a prediction
    pub fn is_found(&self) -> bool {
        matches!(self, PredictionLookup::Found { .. })
    }
}

/// Exact-match query service over the aligned result set
#[derive(Debug)]
pub struct PredictionLookupService;

impl PredictionLookupService {
    /// Look up the prediction for an exact date.
    ///
    /// No nearest-date or interpolated fallback. When the source data held
    /// duplicate dates, the first matching record in sequence order wins.
    /// The aligned set itself always retains the unrounded value.
    pub fn lookup(aligned: &AlignedTestSet, date: NaiveDate) -> PredictionLookup {
        for record in aligned.iter().flatten() {
            if record.date == date {
                return match record.predicted_value {
                    Some(value) => PredictionLookup::Found {
                        date,
                        value,
                        rounded: value.round() as i64,
                    },
                    None => PredictionLookup::NotFound,
                };
            }
        }
        PredictionLookup::NotFound
    }
}
