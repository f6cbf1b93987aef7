//! # Sales Forecast Workspace
//!
//! Umbrella crate for the sales forecasting workspace. The heavy lifting
//! lives in the members:
//!
//! - [`sales_forecast`]: validation, model fitting, alignment, windowed
//!   analytics and prediction lookup
//! - [`sales_math`]: regression and seasonal effect primitives
//!
//! ## Example
//!
//! ```
//! use sales_forecast_workspace::prelude::*;
//!
//! let query = WindowQuery::new(1, 2021).unwrap();
//! assert_eq!(query.month(), 1);
//! ```

pub use sales_forecast;
pub use sales_math;

/// Commonly used types from across the workspace
pub mod prelude {
    pub use sales_forecast::{
        AlignedTestSet, AnalyticsEngine, DateOrder, ForecastError, ForecastModel,
        ForecastPipeline, Observation, PredictionLookup, PredictionRecord, SourceConfig,
        StatsSummary, TrainingSet, TrendLine, WindowQuery, WindowReport,
    };
    pub use sales_math::regression::LinearFit;
}
