//! Error types for the sales_forecast crate

use thiserror::Error;

/// Custom error types for the sales_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Training data cannot support model fitting
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// The forecasting capability failed internally during fit
    #[error("Model fit error: {0}")]
    ModelFit(String),

    /// Predictions and surviving rows disagree on cardinality
    #[error("Alignment error: {0}")]
    Alignment(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV parsing or writing
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error from JSON serialization
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<sales_math::MathError> for ForecastError {
    fn from(err: sales_math::MathError) -> Self {
        match err {
            sales_math::MathError::InsufficientData(msg) => ForecastError::InsufficientData(msg),
            other => ForecastError::ModelFit(other.to_string()),
        }
    }
}
