//! Unit tests for notification formatting

use chrono::{DateTime, Utc};
use trendwatch::models::signal::{SignalClass, SignalRecord};
use trendwatch::signals::format::{format_message, trend_label};

fn record(signal_class: SignalClass, ema_short: f64, ema_long: f64) -> SignalRecord {
    SignalRecord {
        signal_class,
        price: 43_210.987,
        rsi: 62.04,
        macd: 1.23456,
        macd_signal: 0.9,
        ema_short,
        ema_long,
        volume_proxy: Some(12.0),
        volume_proxy_avg: Some(10.0),
        timestamp: Utc::now(),
    }
}

fn evaluated_at() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-05-01T14:03:22Z")
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn test_buy_message_contains_breakdown() {
    let message = format_message(&record(SignalClass::Buy, 118.0, 110.0), "Bitcoin", evaluated_at());
    assert!(message.starts_with("🟢 BUY SIGNAL"));
    assert!(message.contains("Bitcoin: $43210.99"));
    assert!(message.contains("RSI: 62.0"));
    assert!(message.contains("MACD: 1.2346"));
    assert!(message.contains("Trend: Up"));
    assert!(message.contains("14:03:22"));
}

#[test]
fn test_sell_message_reports_downtrend() {
    let message = format_message(&record(SignalClass::Sell, 95.0, 100.0), "Bitcoin", evaluated_at());
    assert!(message.starts_with("🔴 SELL SIGNAL"));
    assert!(message.contains("Trend: Down"));
}

#[test]
fn test_hold_message_is_bare_label() {
    let message = format_message(&record(SignalClass::Hold, 118.0, 110.0), "Bitcoin", evaluated_at());
    assert_eq!(message, "🟡 HOLD");
}

#[test]
fn test_equal_emas_are_down() {
    assert_eq!(trend_label(&record(SignalClass::Buy, 100.0, 100.0)), "Down");
}
