//! # Sales Math
//!
//! Mathematical calculations for sales analytics and forecasting.
//! This crate provides least-squares regression and seasonal effect
//! estimation used by the forecasting pipeline.

use thiserror::Error;

pub mod regression;
pub mod seasonal;

/// Errors that can occur in sales-related calculations
#[derive(Error, Debug)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for sales math operations
pub type Result<T> = std::result::Result<T, MathError>;
