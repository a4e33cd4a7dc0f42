use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::indicators::error::IndicatorError;
use crate::indicators::validation;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self { timestamp, close }
    }
}

/// Time-ordered, validated sequence of closes.
///
/// Timestamps are strictly increasing and every close is finite and positive.
/// The series cannot be mutated once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series, rejecting the first malformed point.
    pub fn new(points: Vec<PricePoint>) -> Result<Self, IndicatorError> {
        if points.is_empty() {
            return Err(IndicatorError::EmptySeries);
        }
        validation::validate_points(&points)?;
        Ok(Self { points })
    }

    /// Build a series, dropping malformed or out-of-order points.
    ///
    /// Returns `None` when nothing usable remains.
    pub fn sanitized(points: Vec<PricePoint>) -> Option<Self> {
        let total = points.len();
        let kept = validation::sanitize_points(points);
        if kept.len() < total {
            warn!(
                dropped = total - kept.len(),
                kept = kept.len(),
                "Dropped malformed price points"
            );
        }
        if kept.is_empty() {
            None
        } else {
            Some(Self { points: kept })
        }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }
}

/// Indicator values at one point of the series. `None` means not enough
/// history yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_short: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_long: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_signal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_histogram: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_proxy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_proxy_avg: Option<f64>,
}

impl IndicatorSnapshot {
    pub fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self {
            timestamp,
            close,
            rsi: None,
            ema_short: None,
            ema_long: None,
            macd: None,
            macd_signal: None,
            macd_histogram: None,
            volume_proxy: None,
            volume_proxy_avg: None,
        }
    }

    pub fn with_rsi(mut self, rsi: f64) -> Self {
        self.rsi = Some(rsi);
        self
    }

    pub fn with_emas(mut self, ema_short: f64, ema_long: f64) -> Self {
        self.ema_short = Some(ema_short);
        self.ema_long = Some(ema_long);
        self
    }

    pub fn with_macd(mut self, macd: f64, macd_signal: f64) -> Self {
        self.macd = Some(macd);
        self.macd_signal = Some(macd_signal);
        self.macd_histogram = Some(macd - macd_signal);
        self
    }

    pub fn with_volume(mut self, volume_proxy: f64, volume_proxy_avg: Option<f64>) -> Self {
        self.volume_proxy = Some(volume_proxy);
        self.volume_proxy_avg = volume_proxy_avg;
        self
    }
}

/// Snapshots aligned one-to-one with the input `PriceSeries`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSeries {
    pub snapshots: Vec<IndicatorSnapshot>,
}

impl IndicatorSeries {
    pub fn new(snapshots: Vec<IndicatorSnapshot>) -> Self {
        Self { snapshots }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn latest(&self) -> Option<&IndicatorSnapshot> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndicatorSnapshot> {
        self.snapshots.iter()
    }
}
