//! Unit tests for signal engine

use chrono::{DateTime, Duration};
use trendwatch::config::EngineConfig;
use trendwatch::models::indicators::{PricePoint, PriceSeries};
use trendwatch::signals::engine::SignalEngine;

fn create_points(closes: &[f64]) -> Vec<PricePoint> {
    let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint::new(start + Duration::minutes(i as i64), close))
        .collect()
}

#[test]
fn test_evaluate_empty_input() {
    let engine = SignalEngine::default();
    assert!(engine.evaluate_points(Vec::new()).is_none());
}

#[test]
fn test_evaluate_single_point() {
    let engine = SignalEngine::default();
    let series = PriceSeries::new(create_points(&[100.0])).unwrap();
    assert!(engine.evaluate(&series).is_none());
}

#[test]
fn test_evaluate_insufficient_data() {
    let engine = SignalEngine::default();
    let closes: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
    let series = PriceSeries::new(create_points(&closes)).unwrap();
    assert!(engine.evaluate(&series).is_none());
}

#[test]
fn test_evaluate_sufficient_data() {
    let engine = SignalEngine::new(EngineConfig::default());
    let closes: Vec<f64> = (0..50).map(|i| 100.0 + (i % 7) as f64).collect();
    let series = PriceSeries::new(create_points(&closes)).unwrap();

    let evaluation = engine.evaluate(&series).unwrap();
    assert_eq!(evaluation.indicators.len(), 50);
    assert!(evaluation.strength <= 100);
    assert_eq!(evaluation.record.price, *closes.last().unwrap());
    assert_eq!(evaluation.record.timestamp, series.last().unwrap().timestamp);
}

#[test]
fn test_evaluate_points_sanitizes_first() {
    let engine = SignalEngine::default();
    let mut points = create_points(&(0..30).map(|i| 100.0 + (i % 5) as f64).collect::<Vec<_>>());
    points[10].close = f64::NAN;
    let evaluation = engine.evaluate_points(points).unwrap();
    assert_eq!(evaluation.indicators.len(), 29);
    assert!(evaluation.record.rsi.is_finite());
}
