//! # Sales Forecast
//!
//! A Rust library for daily sales forecasting, windowed analytics and
//! date-keyed prediction lookup.
//!
//! ## Features
//!
//! - Typed ingestion of dated sales records with explicit day-first vs
//!   month-first parsing per dataset
//! - One-time model fitting behind a pluggable fit/predict contract
//! - Position-preserving alignment of predictions onto the original
//!   future-date rows
//! - Month/year windowed analytics with summary statistics and a linear
//!   trend overlay
//! - Exact-date prediction lookup with deterministic tie-breaking
//!
//! ## Quick Start
//!
//! ```no_run
//! use sales_forecast::data::{DateOrder, SourceConfig};
//! use sales_forecast::models::seasonal_trend::SeasonalTrend;
//! use sales_forecast::pipeline::ForecastPipeline;
//!
//! # fn main() -> sales_forecast::Result<()> {
//! let train_config = SourceConfig::new(DateOrder::DayFirst).with_delimiter(b';');
//! let test_config = SourceConfig::new(DateOrder::DayFirst);
//!
//! let pipeline = ForecastPipeline::initialize_from_csv(
//!     "train_sales.csv",
//!     "test_sales.csv",
//!     &train_config,
//!     &test_config,
//!     &SeasonalTrend::new(),
//! )?;
//!
//! // Windowed analytics over the historical series
//! let report = pipeline.window_report(1, 2021)?;
//!
//! // Exact-date prediction lookup
//! let date = chrono::NaiveDate::from_ymd_opt(2022, 1, 5).unwrap();
//! let prediction = pipeline.lookup(date);
//! # Ok(())
//! # }
//! ```

pub mod align;
pub mod analytics;
pub mod data;
pub mod error;
pub mod export;
pub mod lookup;
pub mod models;
pub mod pipeline;

// Re-export commonly used types
pub use crate::align::{AlignedTestSet, PredictionAligner, PredictionRecord};
pub use crate::analytics::{AnalyticsEngine, StatsSummary, TrendLine, WindowQuery};
pub use crate::data::{
    DataLoader, DateOrder, FutureRequest, Observation, RecordValidator, SourceConfig, TrainingSet,
};
pub use crate::error::{ForecastError, Result};
pub use crate::lookup::{PredictionLookup, PredictionLookupService};
pub use crate::models::{ForecastModel, TrainedForecastModel};
pub use crate::pipeline::{ForecastPipeline, WindowReport};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
