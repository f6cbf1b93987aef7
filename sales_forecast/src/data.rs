//! Typed sales records, validation and CSV ingestion
//!
//! Raw rows enter here as strings plus numbers, and leave as fixed-shape
//! dated records. Rows whose date cannot be parsed are dropped and counted,
//! never raised as fatal errors.

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Day-first vs month-first interpretation of ambiguous date strings.
///
/// This must match the source convention of each dataset; train and test
/// inputs may use different conventions and each carries its own setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    DayFirst,
    MonthFirst,
}

impl DateOrder {
    fn formats(self) -> &'static [&'static str] {
        // ISO dates are unambiguous and accepted under either convention.
        match self {
            DateOrder::DayFirst => &["%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d"],
            DateOrder::MonthFirst => &["%m/%d/%Y", "%m-%d-%Y", "%Y-%m-%d"],
        }
    }
}

/// Parsing configuration for one dataset source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// CSV field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: u8,
    /// Date interpretation convention
    pub date_order: DateOrder,
    /// Name of the date column
    #[serde(default = "default_date_column")]
    pub date_column: String,
    /// Name of the value column
    #[serde(default = "default_value_column")]
    pub value_column: String,
}

fn default_delimiter() -> u8 {
    b','
}

fn default_date_column() -> String {
    "Date".to_string()
}

fn default_value_column() -> String {
    "Sales".to_string()
}

impl SourceConfig {
    /// Create a config with the given date convention and default columns
    pub fn new(date_order: DateOrder) -> Self {
        Self {
            delimiter: default_delimiter(),
            date_order,
            date_column: default_date_column(),
            value_column: default_value_column(),
        }
    }

    /// Set the CSV delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the date and value column names
    pub fn with_columns(mut self, date_column: &str, value_column: &str) -> Self {
        self.date_column = date_column.to_string();
        self.value_column = value_column.to_string();
        self
    }
}

/// One raw training row before validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSalesRow {
    /// Unparsed date text
    pub date: String,
    /// Observed sales value
    pub value: f64,
}

/// One raw future-request row before validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDateRow {
    /// Unparsed date text
    pub date: String,
}

/// One validated historical (date, value) pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

/// One validated date for which a prediction is wanted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FutureRequest {
    pub date: NaiveDate,
}

/// The validated historical series used to fit the model.
///
/// Chronological input order is preserved and duplicate dates are passed
/// through undeduplicated. The set is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSet {
    observations: Vec<Observation>,
}

impl TrainingSet {
    /// Create a training set from validated observations
    pub fn from_observations(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    /// Get the observations in input order
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Get the number of observations
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Check if the training set is empty
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Count the distinct dates in the set
    pub fn distinct_date_count(&self) -> usize {
        let mut dates: Vec<NaiveDate> = self.observations.iter().map(|o| o.date).collect();
        dates.sort_unstable();
        dates.dedup();
        dates.len()
    }

    /// Earliest date in the set, if any
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.observations.iter().map(|o| o.date).min()
    }

    /// Iterate over the observations
    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }
}

/// Parse a date string under the given convention
pub fn parse_date(text: &str, order: DateOrder) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    order
        .formats()
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Normalizes raw rows into typed, dated records
#[derive(Debug)]
pub struct RecordValidator;

impl RecordValidator {
    /// Validate raw sales rows into observations.
    ///
    /// Returns the surviving observations in original relative order and the
    /// count of dropped rows. Rows with an unparsable date or a non-finite
    /// value are dropped, never fatal.
    pub fn validate_sales(rows: &[RawSalesRow], order: DateOrder) -> (Vec<Observation>, usize) {
        let mut clean = Vec::with_capacity(rows.len());
        let mut dropped = 0usize;

        for row in rows {
            match parse_date(&row.date, order) {
                Some(date) if row.value.is_finite() => {
                    clean.push(Observation {
                        date,
                        value: row.value,
                    });
                }
                _ => {
                    dropped += 1;
                    log::warn!(
                        "Dropping sales row: date={:?} value={}",
                        row.date,
                        row.value
                    );
                }
            }
        }

        (clean, dropped)
    }

    /// Validate raw future-request rows.
    ///
    /// Returns one slot per input row (`None` where the date failed to
    /// parse) so the aligner can reinsert predictions at their original
    /// positions, plus the count of dropped rows.
    pub fn validate_dates(
        rows: &[RawDateRow],
        order: DateOrder,
    ) -> (Vec<Option<FutureRequest>>, usize) {
        let mut slots = Vec::with_capacity(rows.len());
        let mut dropped = 0usize;

        for row in rows {
            match parse_date(&row.date, order) {
                Some(date) => slots.push(Some(FutureRequest { date })),
                None => {
                    dropped += 1;
                    log::warn!("Dropping future-request row: date={:?}", row.date);
                    slots.push(None);
                }
            }
        }

        (slots, dropped)
    }
}

/// Data loader for CSV sources
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load raw sales rows from a headered CSV file
    pub fn sales_from_csv<P: AsRef<Path>>(
        path: P,
        config: &SourceConfig,
    ) -> Result<Vec<RawSalesRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(config.delimiter)
            .from_path(path.as_ref())?;

        let date_idx = column_index(&mut reader, &config.date_column)?;
        let value_idx = column_index(&mut reader, &config.value_column)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let date = record.get(date_idx).unwrap_or("").to_string();
            // A malformed numeric becomes NaN; the validator drops and
            // counts it alongside bad dates.
            let value = record
                .get(value_idx)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .unwrap_or(f64::NAN);
            rows.push(RawSalesRow { date, value });
        }

        Ok(rows)
    }

    /// Load raw future-request rows from a headered CSV file
    pub fn dates_from_csv<P: AsRef<Path>>(
        path: P,
        config: &SourceConfig,
    ) -> Result<Vec<RawDateRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(config.delimiter)
            .from_path(path.as_ref())?;

        let date_idx = column_index(&mut reader, &config.date_column)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let date = record.get(date_idx).unwrap_or("").to_string();
            rows.push(RawDateRow { date });
        }

        Ok(rows)
    }
}

fn column_index<R: std::io::Read>(reader: &mut csv::Reader<R>, name: &str) -> Result<usize> {
    reader
        .headers()?
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| ForecastError::DataError(format!("Column '{}' not found in CSV", name)))
}
