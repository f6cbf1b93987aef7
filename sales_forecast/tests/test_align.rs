use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use sales_forecast::align::PredictionAligner;
use sales_forecast::data::FutureRequest;
use sales_forecast::ForecastError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn request(y: i32, m: u32, d: u32) -> Option<FutureRequest> {
    Some(FutureRequest {
        date: date(y, m, d),
    })
}

#[test]
fn test_align_preserves_cardinality_and_positions() {
    // Three input rows, the middle one dropped during validation
    let slots = vec![request(2022, 1, 5), None, request(2022, 1, 7)];
    let predictions = vec![Some(10.0), Some(20.0)];

    let aligned = PredictionAligner::align(&slots, &predictions).unwrap();

    assert_eq!(aligned.len(), 3);
    assert!(aligned.records()[1].is_none());

    let first = aligned.records()[0].unwrap();
    assert_eq!(first.date, date(2022, 1, 5));
    assert_eq!(first.predicted_value, Some(10.0));

    // The trailing prediction lands in its original position, not shifted
    let third = aligned.records()[2].unwrap();
    assert_eq!(third.date, date(2022, 1, 7));
    assert_eq!(third.predicted_value, Some(20.0));
}

#[test]
fn test_align_with_no_drops() {
    let slots = vec![request(2022, 1, 1), request(2022, 1, 2)];
    let predictions = vec![Some(1.0), Some(2.0)];

    let aligned = PredictionAligner::align(&slots, &predictions).unwrap();

    assert_eq!(aligned.len(), 2);
    assert!(aligned.iter().all(|slot| slot.is_some()));
}

#[test]
fn test_align_with_all_rows_dropped() {
    let slots: Vec<Option<FutureRequest>> = vec![None, None];
    let aligned = PredictionAligner::align(&slots, &[]).unwrap();

    assert_eq!(aligned.len(), 2);
    assert!(aligned.iter().all(|slot| slot.is_none()));
}

#[test]
fn test_align_carries_declined_predictions() {
    let slots = vec![request(2022, 1, 1)];
    let predictions = vec![None];

    let aligned = PredictionAligner::align(&slots, &predictions).unwrap();
    let record = aligned.records()[0].unwrap();

    assert_eq!(record.date, date(2022, 1, 1));
    assert_eq!(record.predicted_value, None);
}

#[test]
fn test_align_rejects_cardinality_mismatch() {
    let slots = vec![request(2022, 1, 1), request(2022, 1, 2)];

    let result = PredictionAligner::align(&slots, &[Some(1.0)]);
    assert!(matches!(result, Err(ForecastError::Alignment(_))));

    let result = PredictionAligner::align(&slots, &[Some(1.0), Some(2.0), Some(3.0)]);
    assert!(matches!(result, Err(ForecastError::Alignment(_))));
}

#[test]
fn test_surviving_dates_order() {
    let slots = vec![
        request(2022, 3, 1),
        None,
        request(2022, 1, 1),
        request(2022, 2, 1),
    ];

    // Surviving order is input order, not chronological order
    let dates = PredictionAligner::surviving_dates(&slots);
    assert_eq!(
        dates,
        vec![date(2022, 3, 1), date(2022, 1, 1), date(2022, 2, 1)]
    );
}
