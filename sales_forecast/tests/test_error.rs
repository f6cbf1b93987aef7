use sales_forecast::error::ForecastError;
use std::io;

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let forecast_error = ForecastError::from(io_error);

    assert!(matches!(forecast_error, ForecastError::IoError(_)));
}

#[test]
fn test_math_error_conversion() {
    let math_error = sales_math::MathError::InsufficientData("only one point".to_string());
    let forecast_error = ForecastError::from(math_error);
    assert!(matches!(
        forecast_error,
        ForecastError::InsufficientData(_)
    ));

    // Other math failures surface as model fit failures
    let math_error = sales_math::MathError::CalculationError("degenerate x values".to_string());
    let forecast_error = ForecastError::from(math_error);
    assert!(matches!(forecast_error, ForecastError::ModelFit(_)));
}

#[test]
fn test_error_display() {
    let error = ForecastError::InvalidParameter("month must be between 1 and 12".to_string());
    let error_string = format!("{}", error);
    assert!(error_string.contains("month must be between 1 and 12"));

    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let error = ForecastError::from(io_error);
    let error_string = format!("{}", error);

    assert!(error_string.contains("IO error"));
    assert!(error_string.contains("permission denied"));
}

#[test]
fn test_error_creation() {
    let insufficient = ForecastError::InsufficientData("need 2 distinct dates".to_string());
    let model = ForecastError::ModelFit("failed to converge".to_string());
    let alignment = ForecastError::Alignment("got 2 predictions for 3 rows".to_string());

    assert!(matches!(insufficient, ForecastError::InsufficientData(_)));
    assert!(matches!(model, ForecastError::ModelFit(_)));
    assert!(matches!(alignment, ForecastError::Alignment(_)));

    if let ForecastError::ModelFit(msg) = model {
        assert_eq!(msg, "failed to converge");
    } else {
        panic!("Wrong error variant");
    }
}
