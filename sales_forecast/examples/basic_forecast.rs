use chrono::NaiveDate;
use sales_forecast::data::{DateOrder, RawDateRow, RawSalesRow};
use sales_forecast::models::seasonal_trend::SeasonalTrend;
use sales_forecast::pipeline::ForecastPipeline;
use sales_forecast::PredictionLookup;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Sales Forecast: Basic Pipeline Example");
    println!("======================================\n");

    // Create sample data
    println!("Creating sample data...");
    let train_rows = create_sample_training_rows();
    let test_rows = create_sample_future_rows();
    println!(
        "Sample data created: {} training rows, {} future-request rows\n",
        train_rows.len(),
        test_rows.len()
    );

    // One-time initialization: validate -> fit -> predict -> align
    println!("Initializing pipeline...");
    let pipeline = ForecastPipeline::initialize(
        &train_rows,
        &test_rows,
        DateOrder::DayFirst,
        DateOrder::DayFirst,
        &SeasonalTrend::new(),
    )?;
    println!(
        "Pipeline ready with model '{}' ({} dropped training rows, {} dropped request rows)\n",
        pipeline.model_name(),
        pipeline.dropped_train_rows(),
        pipeline.dropped_test_rows()
    );

    // Look up predictions for a few requested dates
    println!("Predictions:");
    for day in [3, 5, 9] {
        let date = NaiveDate::from_ymd_opt(2021, 2, day).unwrap();
        match pipeline.lookup(date) {
            PredictionLookup::Found { rounded, value, .. } => {
                println!("  {}: {} (raw {:.2})", date, rounded, value);
            }
            PredictionLookup::NotFound => {
                println!("  {}: no prediction available", date);
            }
        }
    }

    // Export the full aligned set as JSON
    println!("\nAligned test set as JSON:");
    println!("{}", pipeline.export_json()?);

    Ok(())
}

fn create_sample_training_rows() -> Vec<RawSalesRow> {
    // Four weeks of January 2021 with a gentle upward trend and a weekend lift
    (0..28)
        .map(|i| {
            let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap() + chrono::Days::new(i);
            let weekend = chrono::Datelike::weekday(&date).number_from_monday() >= 6;
            let value = 100.0 + 0.8 * i as f64 + if weekend { 25.0 } else { 0.0 };
            RawSalesRow {
                date: date.format("%d/%m/%Y").to_string(),
                value,
            }
        })
        .collect()
}

fn create_sample_future_rows() -> Vec<RawDateRow> {
    vec![
        RawDateRow {
            date: "03/02/2021".to_string(),
        },
        RawDateRow {
            date: "05/02/2021".to_string(),
        },
        RawDateRow {
            date: "not a date".to_string(),
        },
        RawDateRow {
            date: "09/02/2021".to_string(),
        },
    ]
}
