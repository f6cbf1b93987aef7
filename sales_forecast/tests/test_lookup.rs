use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use sales_forecast::align::{AlignedTestSet, PredictionRecord};
use sales_forecast::lookup::{PredictionLookup, PredictionLookupService};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(y: i32, m: u32, d: u32, value: Option<f64>) -> Option<PredictionRecord> {
    Some(PredictionRecord {
        date: date(y, m, d),
        predicted_value: value,
    })
}

fn sample_aligned() -> AlignedTestSet {
    AlignedTestSet::from_records(vec![
        record(2022, 1, 5, Some(87.6)),
        None,
        record(2022, 1, 7, Some(91.2)),
    ])
}

#[test]
fn test_lookup_rounds_for_display() {
    let aligned = sample_aligned();

    match PredictionLookupService::lookup(&aligned, date(2022, 1, 5)) {
        PredictionLookup::Found {
            value, rounded, ..
        } => {
            // The underlying value stays unrounded
            assert_eq!(value, 87.6);
            assert_eq!(rounded, 88);
        }
        PredictionLookup::NotFound => panic!("Expected a prediction"),
    }
}

#[test]
fn test_lookup_missing_date() {
    let aligned = sample_aligned();
    let outcome = PredictionLookupService::lookup(&aligned, date(2022, 6, 30));
    assert_eq!(outcome, PredictionLookup::NotFound);
}

#[test]
fn test_lookup_absent_prediction_is_not_found() {
    let aligned = AlignedTestSet::from_records(vec![record(2022, 1, 5, None)]);
    let outcome = PredictionLookupService::lookup(&aligned, date(2022, 1, 5));
    assert_eq!(outcome, PredictionLookup::NotFound);
}

#[test]
fn test_lookup_is_idempotent() {
    let aligned = sample_aligned();
    let first = PredictionLookupService::lookup(&aligned, date(2022, 1, 7));
    let second = PredictionLookupService::lookup(&aligned, date(2022, 1, 7));
    assert_eq!(first, second);
    assert!(first.is_found());
}

#[test]
fn test_duplicate_dates_first_match_wins() {
    let aligned = AlignedTestSet::from_records(vec![
        record(2022, 1, 5, Some(87.6)),
        record(2022, 1, 5, Some(99.9)),
    ]);

    match PredictionLookupService::lookup(&aligned, date(2022, 1, 5)) {
        PredictionLookup::Found { rounded, .. } => assert_eq!(rounded, 88),
        PredictionLookup::NotFound => panic!("Expected a prediction"),
    }
}

#[test]
fn test_rounding_is_half_away_from_zero() {
    let aligned = AlignedTestSet::from_records(vec![
        record(2022, 1, 1, Some(87.5)),
        record(2022, 1, 2, Some(-2.5)),
    ]);

    match PredictionLookupService::lookup(&aligned, date(2022, 1, 1)) {
        PredictionLookup::Found { rounded, .. } => assert_eq!(rounded, 88),
        PredictionLookup::NotFound => panic!("Expected a prediction"),
    }
    match PredictionLookupService::lookup(&aligned, date(2022, 1, 2)) {
        PredictionLookup::Found { rounded, .. } => assert_eq!(rounded, -3),
        PredictionLookup::NotFound => panic!("Expected a prediction"),
    }
}
