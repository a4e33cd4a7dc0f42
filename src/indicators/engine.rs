//! Converts a price series into aligned indicator snapshots.

use tracing::debug;

use crate::common::math::finite;
use crate::config::EngineConfig;
use crate::indicators::momentum::{calculate_macd, calculate_rsi};
use crate::indicators::trend::calculate_ema_pair;
use crate::indicators::volume::calculate_volume_proxy;
use crate::models::indicators::{IndicatorSeries, IndicatorSnapshot, PriceSeries};

#[derive(Debug, Clone, Default)]
pub struct IndicatorEngine {
    config: EngineConfig,
}

impl IndicatorEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute every indicator for every point of `series`.
    ///
    /// The output has exactly one snapshot per input point. Non-finite
    /// intermediates surface as `None` fields.
    pub fn compute(&self, series: &PriceSeries) -> IndicatorSeries {
        let cfg = &self.config;
        let closes = series.closes();

        let rsi = calculate_rsi(&closes, cfg.rsi_period);
        let (ema_short, ema_long) = calculate_ema_pair(&closes, cfg.ema_short, cfg.ema_long);
        let macd = calculate_macd(&closes, cfg.macd_fast, cfg.macd_slow, cfg.macd_signal);
        let volume = calculate_volume_proxy(&closes, cfg.volume_avg_window);

        let snapshots: Vec<IndicatorSnapshot> = series
            .points()
            .iter()
            .enumerate()
            .map(|(i, point)| IndicatorSnapshot {
                timestamp: point.timestamp,
                close: point.close,
                rsi: rsi.get(i).copied().flatten().and_then(finite),
                ema_short: ema_short.get(i).copied().and_then(finite),
                ema_long: ema_long.get(i).copied().and_then(finite),
                macd: macd.macd.get(i).copied().and_then(finite),
                macd_signal: macd.signal.get(i).copied().and_then(finite),
                macd_histogram: macd.histogram.get(i).copied().and_then(finite),
                volume_proxy: volume.volume.get(i).copied().flatten().and_then(finite),
                volume_proxy_avg: volume.average.get(i).copied().flatten().and_then(finite),
            })
            .collect();

        debug!(
            points = snapshots.len(),
            rsi_ready = snapshots.iter().filter(|s| s.rsi.is_some()).count(),
            "Computed indicator series"
        );

        IndicatorSeries::new(snapshots)
    }
}
