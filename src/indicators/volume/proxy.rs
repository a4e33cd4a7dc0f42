//! Volume proxy for feeds that only carry closes.
//!
//! Absolute close-to-close change stands in for traded volume.

use crate::common::math;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VolumeProxySeries {
    pub volume: Vec<Option<f64>>,
    pub average: Vec<Option<f64>>,
}

/// `volume[i] = |close[i] - close[i - 1]|`; `average` is the trailing mean of
/// `window` volume samples.
pub fn calculate_volume_proxy(closes: &[f64], window: usize) -> VolumeProxySeries {
    let volume: Vec<Option<f64>> = (0..closes.len())
        .map(|i| (i > 0).then(|| (closes[i] - closes[i - 1]).abs()))
        .collect();
    let average = math::rolling_mean(&volume, window);
    VolumeProxySeries { volume, average }
}
