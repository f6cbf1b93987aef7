use chrono::NaiveDate;
use sales_forecast::analytics::{AnalyticsEngine, WindowQuery};
use sales_forecast::data::{Observation, TrainingSet};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Sales Forecast: Window Analysis Example");
    println!("=======================================\n");

    // Two months of daily sales
    let observations: Vec<Observation> = (0..59)
        .map(|i| Observation {
            date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap() + chrono::Days::new(i),
            value: 100.0 + (i as f64 * 0.7) + ((i % 7) as f64 * 3.0),
        })
        .collect();
    let data = TrainingSet::from_observations(observations);

    for (month, year) in [(1, 2021), (2, 2021), (3, 2021)] {
        let query = WindowQuery::new(month, year)?;
        let subset = AnalyticsEngine::filter_window(&data, query);

        println!("Window {}/{}:", month, year);
        match AnalyticsEngine::summarize(&subset) {
            None => {
                println!("  no sales data for this window\n");
                continue;
            }
            Some(stats) => {
                println!("  count:   {}", stats.count);
                println!("  total:   {:.1}", stats.total);
                println!("  mean:    {:.2}", stats.mean);
                println!("  max:     {:.1}", stats.max);
                println!("  std dev: {:.2}", stats.std_dev);
            }
        }

        match AnalyticsEngine::fit_trend(&subset) {
            Some(trend) => println!(
                "  trend:   slope {:.3}, intercept {:.2}, {} fitted points\n",
                trend.slope,
                trend.intercept,
                trend.fitted.len()
            ),
            None => println!("  trend:   not enough points\n"),
        }
    }

    Ok(())
}
