//! EMA (Exponential Moving Average) indicator

use crate::common::math;

/// Calculate the EMA of every value in `values`.
///
/// Seeding is adjust-free: `ema[0] = values[0]`, then
/// `ema[i] = values[i] * alpha + ema[i - 1] * (1 - alpha)` with
/// `alpha = 2 / (period + 1)`. There is no simple-average warm-up, so early
/// values lean toward the first observation.
pub fn calculate_ema(values: &[f64], period: usize) -> Vec<f64> {
    let alpha = math::ema_alpha(period);
    let mut ema = Vec::with_capacity(values.len());
    let mut iter = values.iter();

    let Some(&first) = iter.next() else {
        return ema;
    };
    let mut prev = first;
    ema.push(prev);

    for &value in iter {
        prev = math::ema_from_previous(value, prev, alpha);
        ema.push(prev);
    }
    ema
}

/// Short and long EMA lines over the same closes.
pub fn calculate_ema_pair(closes: &[f64], short: usize, long: usize) -> (Vec<f64>, Vec<f64>) {
    (calculate_ema(closes, short), calculate_ema(closes, long))
}

/// +1 when the short EMA is above the long one, -1 below, 0 when equal.
pub fn ema_trend(ema_short: f64, ema_long: f64) -> i32 {
    if ema_short > ema_long {
        1
    } else if ema_short < ema_long {
        -1
    } else {
        0
    }
}
