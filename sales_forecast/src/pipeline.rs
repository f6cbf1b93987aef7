//! Startup orchestration and the read-only serving surface
//!
//! `ForecastPipeline::initialize` runs the one-time sequence
//! validate -> fit -> predict -> align and returns an immutable snapshot.
//! A pipeline value only exists when serving is possible; fatal fit errors
//! surface at initialization instead of producing a half-empty dataset.

use crate::align::{AlignedTestSet, PredictionAligner};
use crate::analytics::{AnalyticsEngine, StatsSummary, TrendLine, WindowQuery};
use crate::data::{
    DataLoader, DateOrder, Observation, RawDateRow, RawSalesRow, RecordValidator, SourceConfig,
    TrainingSet,
};
use crate::error::Result;
use crate::lookup::{PredictionLookup, PredictionLookupService};
use crate::models::{ForecastModel, TrainedForecastModel};
use chrono::NaiveDate;
use std::io::Write;
use std::path::Path;

/// Outcome of a window query.
///
/// `Empty` is the distinct non-error outcome for a window matching zero
/// observations; "data unavailable" is instead the absence of a pipeline
/// value (initialization failed or never ran).
#[derive(Debug, Clone, PartialEq)]
pub enum WindowReport {
    Empty,
    Window {
        /// Matching observations in input order
        observations: Vec<Observation>,
        stats: StatsSummary,
        /// Present only when the window holds enough points
        trend: Option<TrendLine>,
    },
}

/// The forecasting-and-analytics pipeline after successful initialization.
///
/// Both datasets are immutable after construction, so queries are pure reads
/// and concurrent callers need no locking. Re-initialization with new source
/// data means building a new pipeline value and swapping it in whole (e.g.
/// behind an `Arc`), never mutating in place.
#[derive(Debug, Clone)]
pub struct ForecastPipeline {
    training_set: TrainingSet,
    aligned: AlignedTestSet,
    dropped_train_rows: usize,
    dropped_test_rows: usize,
    model_name: String,
}

impl ForecastPipeline {
    /// Run the one-time startup sequence over raw rows.
    ///
    /// Row-level date failures are dropped and counted; fewer than 2
    /// distinct surviving training dates or an internal model failure is
    /// fatal and no pipeline is produced.
    pub fn initialize<M: ForecastModel>(
        train_rows: &[RawSalesRow],
        test_rows: &[RawDateRow],
        train_order: DateOrder,
        test_order: DateOrder,
        model: &M,
    ) -> Result<Self> {
        let (observations, dropped_train_rows) =
            RecordValidator::validate_sales(train_rows, train_order);
        if dropped_train_rows > 0 {
            log::warn!(
                "Dropped {} of {} training rows during validation",
                dropped_train_rows,
                train_rows.len()
            );
        }
        let training_set = TrainingSet::from_observations(observations);

        log::info!(
            "Fitting model '{}' on {} observations",
            model.name(),
            training_set.len()
        );
        let trained = model.fit(&training_set)?;

        let (slots, dropped_test_rows) = RecordValidator::validate_dates(test_rows, test_order);
        if dropped_test_rows > 0 {
            log::warn!(
                "Dropped {} of {} future-request rows during validation",
                dropped_test_rows,
                test_rows.len()
            );
        }

        let surviving_dates = PredictionAligner::surviving_dates(&slots);
        let predictions = trained.predict(&surviving_dates)?;
        let aligned = PredictionAligner::align(&slots, &predictions)?;

        log::info!(
            "Pipeline initialized: {} observations, {} aligned predictions",
            training_set.len(),
            aligned.len()
        );

        Ok(Self {
            training_set,
            aligned,
            dropped_train_rows,
            dropped_test_rows,
            model_name: trained.name().to_string(),
        })
    }

    /// Load both CSV sources and run the startup sequence
    pub fn initialize_from_csv<M: ForecastModel, P: AsRef<Path>>(
        train_path: P,
        test_path: P,
        train_config: &SourceConfig,
        test_config: &SourceConfig,
        model: &M,
    ) -> Result<Self> {
        let train_rows = DataLoader::sales_from_csv(train_path, train_config)?;
        let test_rows = DataLoader::dates_from_csv(test_path, test_config)?;
        Self::initialize(
            &train_rows,
            &test_rows,
            train_config.date_order,
            test_config.date_order,
            model,
        )
    }

    /// Answer a (month, year) analytics query over the training set
    pub fn window_report(&self, month: u32, year: i32) -> Result<WindowReport> {
        let query = WindowQuery::new(month, year)?;
        let observations = AnalyticsEngine::filter_window(&self.training_set, query);

        match AnalyticsEngine::summarize(&observations) {
            None => Ok(WindowReport::Empty),
            Some(stats) => {
                let trend = AnalyticsEngine::fit_trend(&observations);
                Ok(WindowReport::Window {
                    observations,
                    stats,
                    trend,
                })
            }
        }
    }

    /// Look up the prediction for an exact date
    pub fn lookup(&self, date: NaiveDate) -> PredictionLookup {
        PredictionLookupService::lookup(&self.aligned, date)
    }

    /// The validated training set
    pub fn training_set(&self) -> &TrainingSet {
        &self.training_set
    }

    /// The aligned test set
    pub fn aligned_test_set(&self) -> &AlignedTestSet {
        &self.aligned
    }

    /// Training rows dropped during validation
    pub fn dropped_train_rows(&self) -> usize {
        self.dropped_train_rows
    }

    /// Future-request rows dropped during validation
    pub fn dropped_test_rows(&self) -> usize {
        self.dropped_test_rows
    }

    /// Name of the fitted model
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Export the aligned test set as CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<()> {
        crate::export::aligned_to_csv(&self.aligned, writer)
    }

    /// Export the aligned test set as JSON
    pub fn export_json(&self) -> Result<String> {
        crate::export::aligned_to_json(&self.aligned)
    }
}
