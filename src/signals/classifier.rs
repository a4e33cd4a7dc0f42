use tracing::debug;

use crate::common::math::finite;
use crate::config::SignalThresholds;
use crate::models::indicators::{IndicatorSeries, IndicatorSnapshot};
use crate::models::signal::SignalRecord;
use crate::signals::decision::{decide, GoverningFields};

/// Fewest snapshots a series needs before it is classified at all.
pub const MIN_POINTS: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct SignalClassifier {
    thresholds: SignalThresholds,
}

impl SignalClassifier {
    pub fn new(thresholds: SignalThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &SignalThresholds {
        &self.thresholds
    }

    /// Classify the last snapshot of `series`.
    pub fn classify_series(&self, series: &IndicatorSeries) -> Option<SignalRecord> {
        if series.len() < MIN_POINTS {
            debug!(points = series.len(), "Not enough points to classify");
            return None;
        }
        self.classify(series.latest()?)
    }

    /// Build a record from one snapshot, or `None` while any governing field
    /// or the price is still missing.
    pub fn classify(&self, latest: &IndicatorSnapshot) -> Option<SignalRecord> {
        let fields = governing_fields(latest)?;
        let price = finite(latest.close)?;

        Some(SignalRecord {
            signal_class: decide(&fields, &self.thresholds),
            price,
            rsi: fields.rsi,
            macd: fields.macd,
            macd_signal: fields.macd_signal,
            ema_short: fields.ema_short,
            ema_long: fields.ema_long,
            volume_proxy: latest.volume_proxy,
            volume_proxy_avg: latest.volume_proxy_avg,
            timestamp: latest.timestamp,
        })
    }
}

pub fn governing_fields(snapshot: &IndicatorSnapshot) -> Option<GoverningFields> {
    Some(GoverningFields {
        rsi: snapshot.rsi.and_then(finite)?,
        macd: snapshot.macd.and_then(finite)?,
        macd_signal: snapshot.macd_signal.and_then(finite)?,
        ema_short: snapshot.ema_short.and_then(finite)?,
        ema_long: snapshot.ema_long.and_then(finite)?,
    })
}
