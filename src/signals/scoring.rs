//! Advisory strength score in `[0, 100]`.
//!
//! The score never feeds back into the BUY/SELL/HOLD decision.

use crate::indicators::trend::ema_trend;
use crate::models::signal::SignalRecord;

/// Returned when the inputs cannot produce a finite score.
pub const NEUTRAL_STRENGTH: u8 = 50;

const MAX_CONTRIBUTION: f64 = 2.0;

/// RSI extremity: +2 above 70, +1 above 60, -2 below 30, -1 below 40.
pub fn rsi_contribution(rsi: f64) -> f64 {
    if rsi > 70.0 {
        2.0
    } else if rsi > 60.0 {
        1.0
    } else if rsi < 30.0 {
        -2.0
    } else if rsi < 40.0 {
        -1.0
    } else {
        0.0
    }
}

/// MACD/signal gap scaled by 100, capped at 2, signed by direction.
pub fn macd_contribution(macd: f64, macd_signal: f64) -> f64 {
    let magnitude = ((macd - macd_signal).abs() * 100.0).min(MAX_CONTRIBUTION);
    if macd > macd_signal {
        magnitude
    } else {
        -magnitude
    }
}

/// EMA divergence in percent of the long EMA, capped at 2, signed by trend.
pub fn ema_contribution(ema_short: f64, ema_long: f64) -> f64 {
    let magnitude = ((ema_short - ema_long).abs() / ema_long * 100.0).min(MAX_CONTRIBUTION);
    if ema_trend(ema_short, ema_long) > 0 {
        magnitude
    } else {
        -magnitude
    }
}

/// Raw contributions sum to roughly `[-6, 6]`; shifted by 10, scaled by 5
/// and clamped. Non-finite inputs or a zero long EMA score neutral.
pub fn score(record: &SignalRecord) -> u8 {
    let inputs = [
        record.rsi,
        record.macd,
        record.macd_signal,
        record.ema_short,
        record.ema_long,
    ];
    if inputs.iter().any(|v| !v.is_finite()) || record.ema_long == 0.0 {
        return NEUTRAL_STRENGTH;
    }

    let raw = rsi_contribution(record.rsi)
        + macd_contribution(record.macd, record.macd_signal)
        + ema_contribution(record.ema_short, record.ema_long);

    ((raw + 10.0) * 5.0).clamp(0.0, 100.0).round() as u8
}
