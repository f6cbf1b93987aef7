// This program explores the module structure of the sales forecasting workspace
fn main() {
    println!("Exploring the sales forecasting workspace\n");

    // Pipeline and serving surface
    println!("=== Forecast Pipeline ===");
    show_pipeline_examples();

    // Math primitives
    println!("\n=== Sales Math Utilities ===");
    show_sales_math_examples();

    println!("\nDone exploring");
}

fn show_pipeline_examples() {
    println!("Available pipeline functionality:");
    println!("- Record validation: typed dated records with explicit day-first/month-first parsing");
    println!("- Forecast models: linear trend and seasonal trend behind one fit/predict contract");
    println!("- Prediction alignment: position-preserving merge onto the original request rows");
    println!("- Window analytics: month/year filtering, summary stats, trend overlay");
    println!("- Prediction lookup: exact-date queries with display rounding");

    println!("\nUsage example (see sales_forecast/examples for more):");
    println!(
        r#"
    use sales_forecast::data::{{DateOrder, SourceConfig}};
    use sales_forecast::models::seasonal_trend::SeasonalTrend;
    use sales_forecast::pipeline::ForecastPipeline;

    // Initialize once at startup
    let train_config = SourceConfig::new(DateOrder::DayFirst).with_delimiter(b';');
    let test_config = SourceConfig::new(DateOrder::DayFirst);
    let pipeline = ForecastPipeline::initialize_from_csv(
        "train_sales.csv", "test_sales.csv",
        &train_config, &test_config,
        &SeasonalTrend::new(),
    )?;

    // Serve read-only queries
    let report = pipeline.window_report(1, 2021)?;
    let prediction = pipeline.lookup(date);
    "#
    );
}

fn show_sales_math_examples() {
    println!("Available mathematical functions:");
    println!("- Least squares regression over positions or explicit x values");
    println!("- Seasonal effect estimation from cycle-phase residuals");

    println!("\nUsage example:");
    println!(
        r#"
    use sales_math::regression::LinearFit;
    use sales_math::seasonal::SeasonalEffects;

    // Fit a trend line over sequential positions
    let fit = LinearFit::fit_positions(&values)?;
    let overlay = fit.fitted_positions(values.len());

    // Estimate weekday effects from residuals
    let effects = SeasonalEffects::from_residuals(7, &phases, &residuals)?;
    "#
    );
}
