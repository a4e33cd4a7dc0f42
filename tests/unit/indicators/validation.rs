//! Unit tests for price series validation

use chrono::{DateTime, Duration, Utc};
use trendwatch::indicators::IndicatorError;
use trendwatch::models::indicators::{PricePoint, PriceSeries};

fn at(minute: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap() + Duration::minutes(minute)
}

#[test]
fn test_valid_series_is_accepted() {
    let points = vec![PricePoint::new(at(0), 100.0), PricePoint::new(at(1), 101.0)];
    let series = PriceSeries::new(points).unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series.closes(), vec![100.0, 101.0]);
}

#[test]
fn test_empty_series_is_rejected() {
    assert_eq!(PriceSeries::new(Vec::new()), Err(IndicatorError::EmptySeries));
}

#[test]
fn test_nan_close_is_rejected() {
    let points = vec![PricePoint::new(at(0), 100.0), PricePoint::new(at(1), f64::NAN)];
    assert_eq!(
        PriceSeries::new(points),
        Err(IndicatorError::NonFiniteClose { index: 1 })
    );
}

#[test]
fn test_non_positive_close_is_rejected() {
    let points = vec![PricePoint::new(at(0), 0.0)];
    assert!(matches!(
        PriceSeries::new(points),
        Err(IndicatorError::NonPositiveClose { index: 0, .. })
    ));
}

#[test]
fn test_duplicate_timestamp_is_rejected() {
    let points = vec![PricePoint::new(at(0), 100.0), PricePoint::new(at(0), 101.0)];
    assert_eq!(
        PriceSeries::new(points),
        Err(IndicatorError::OutOfOrder { index: 1 })
    );
}

#[test]
fn test_sanitize_drops_bad_points() {
    let points = vec![
        PricePoint::new(at(0), 100.0),
        PricePoint::new(at(1), f64::INFINITY),
        PricePoint::new(at(2), 102.0),
        PricePoint::new(at(1), 103.0),
        PricePoint::new(at(3), -5.0),
        PricePoint::new(at(4), 104.0),
    ];
    let series = PriceSeries::sanitized(points).unwrap();
    assert_eq!(series.closes(), vec![100.0, 102.0, 104.0]);
}

#[test]
fn test_sanitize_with_nothing_usable_is_none() {
    assert!(PriceSeries::sanitized(Vec::new()).is_none());
    assert!(PriceSeries::sanitized(vec![PricePoint::new(at(0), f64::NAN)]).is_none());
}
