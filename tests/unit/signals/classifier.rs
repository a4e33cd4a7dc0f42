//! Unit tests for the signal classifier

use chrono::{DateTime, Duration, Utc};
use trendwatch::models::indicators::{IndicatorSeries, IndicatorSnapshot};
use trendwatch::models::signal::SignalClass;
use trendwatch::signals::SignalClassifier;

fn ts(minute: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap() + Duration::minutes(minute)
}

fn snapshot(
    minute: i64,
    price: f64,
    rsi: f64,
    macd: f64,
    macd_signal: f64,
    ema_short: f64,
    ema_long: f64,
) -> IndicatorSnapshot {
    IndicatorSnapshot::new(ts(minute), price)
        .with_rsi(rsi)
        .with_macd(macd, macd_signal)
        .with_emas(ema_short, ema_long)
}

#[test]
fn test_buy_scenario() {
    let latest = snapshot(14, 125.0, 62.0, 1.2, 0.9, 118.0, 110.0);
    let record = SignalClassifier::default().classify(&latest).unwrap();
    assert_eq!(record.signal_class, SignalClass::Buy);
    assert_eq!(record.price, 125.0);
    assert_eq!(record.timestamp, ts(14));
}

#[test]
fn test_sell_scenario() {
    let latest = snapshot(0, 95.0, 40.0, -0.5, -0.2, 95.0, 100.0);
    let record = SignalClassifier::default().classify(&latest).unwrap();
    assert_eq!(record.signal_class, SignalClass::Sell);
}

#[test]
fn test_momentum_guard_holds() {
    let latest = snapshot(0, 100.0, 50.0, 1.0, 0.9995, 101.0, 100.0);
    let record = SignalClassifier::default().classify(&latest).unwrap();
    assert_eq!(record.signal_class, SignalClass::Hold);
}

#[test]
fn test_missing_governing_field_yields_none() {
    let classifier = SignalClassifier::default();
    let no_rsi = IndicatorSnapshot::new(ts(0), 100.0)
        .with_macd(1.2, 0.9)
        .with_emas(118.0, 110.0);
    assert!(classifier.classify(&no_rsi).is_none());

    let no_macd = IndicatorSnapshot::new(ts(0), 100.0)
        .with_rsi(62.0)
        .with_emas(118.0, 110.0);
    assert!(classifier.classify(&no_macd).is_none());

    let mut nan_ema = snapshot(0, 100.0, 62.0, 1.2, 0.9, 118.0, 110.0);
    nan_ema.ema_long = Some(f64::NAN);
    assert!(classifier.classify(&nan_ema).is_none());

    let nan_price = snapshot(0, f64::NAN, 62.0, 1.2, 0.9, 118.0, 110.0);
    assert!(classifier.classify(&nan_price).is_none());
}

#[test]
fn test_class_ignores_price_and_timestamp() {
    let classifier = SignalClassifier::default();
    let a = classifier
        .classify(&snapshot(1, 10.0, 62.0, 1.2, 0.9, 118.0, 110.0))
        .unwrap();
    let b = classifier
        .classify(&snapshot(500, 99_999.0, 62.0, 1.2, 0.9, 118.0, 110.0))
        .unwrap();
    assert_eq!(a.signal_class, b.signal_class);
}

#[test]
fn test_volume_fields_are_carried() {
    let latest = snapshot(0, 100.0, 62.0, 1.2, 0.9, 118.0, 110.0).with_volume(2.5, Some(1.5));
    let record = SignalClassifier::default().classify(&latest).unwrap();
    assert_eq!(record.volume_proxy, Some(2.5));
    assert_eq!(record.volume_proxy_avg, Some(1.5));
}

#[test]
fn test_short_series_yield_none() {
    let classifier = SignalClassifier::default();
    assert!(classifier.classify_series(&IndicatorSeries::default()).is_none());

    let single = IndicatorSeries::new(vec![snapshot(0, 100.0, 62.0, 1.2, 0.9, 118.0, 110.0)]);
    assert!(classifier.classify_series(&single).is_none());
}

#[test]
fn test_series_classifies_last_snapshot() {
    let series = IndicatorSeries::new(vec![
        snapshot(0, 100.0, 40.0, -0.5, -0.2, 95.0, 100.0),
        snapshot(1, 101.0, 62.0, 1.2, 0.9, 118.0, 110.0),
    ]);
    let record = SignalClassifier::default().classify_series(&series).unwrap();
    assert_eq!(record.signal_class, SignalClass::Buy);
    assert_eq!(record.price, 101.0);
}
