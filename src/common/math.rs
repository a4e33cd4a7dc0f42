//! Numeric helpers shared by the indicator recurrences.

/// Smoothing factor for an EMA of the given span.
pub fn ema_alpha(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// One EMA step from the previous value.
pub fn ema_from_previous(value: f64, previous: f64, alpha: f64) -> f64 {
    value * alpha + previous * (1.0 - alpha)
}

/// Trailing simple moving average over `window` values.
///
/// Output is aligned with the input; index `i` is `Some` once `window`
/// defined samples ending at `i` exist. A `None` input resets the window.
pub fn rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(values.len());
    if window == 0 {
        out.resize(values.len(), None);
        return out;
    }

    let mut sum = 0.0;
    let mut run = 0usize;
    for (i, value) in values.iter().enumerate() {
        match value {
            Some(v) => {
                sum += v;
                run += 1;
                if run > window {
                    // the value leaving the window is defined because run > window
                    if let Some(old) = values[i - window] {
                        sum -= old;
                    }
                    run = window;
                }
                if run == window {
                    out.push(Some(sum / window as f64));
                } else {
                    out.push(None);
                }
            }
            None => {
                sum = 0.0;
                run = 0;
                out.push(None);
            }
        }
    }
    out
}

/// Maps non-finite values to `None`.
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
