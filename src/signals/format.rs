//! Notification text for a signal record.

use chrono::{DateTime, Utc};

use crate::models::signal::{SignalClass, SignalRecord};

pub fn trend_label(record: &SignalRecord) -> &'static str {
    if record.is_uptrend() {
        "Up"
    } else {
        "Down"
    }
}

/// BUY and SELL get the full breakdown; HOLD is just its label.
pub fn format_message(record: &SignalRecord, asset: &str, evaluated_at: DateTime<Utc>) -> String {
    if record.signal_class == SignalClass::Hold {
        return record.signal_class.label().to_string();
    }

    format!(
        "{label}\n\n💰 {asset}: ${price:.2}\n📈 RSI: {rsi:.1}\n📉 MACD: {macd:.4}\n📊 Trend: {trend}\n\n⚡ Automated signal\n⏰ {time}",
        label = record.signal_class.label(),
        asset = asset,
        price = record.price,
        rsi = record.rsi,
        macd = record.macd,
        trend = trend_label(record),
        time = evaluated_at.format("%H:%M:%S"),
    )
}
