//! Main signal evaluation engine: indicators, then classification.

use crate::config::EngineConfig;
use crate::indicators::IndicatorEngine;
use crate::models::indicators::{IndicatorSeries, PricePoint, PriceSeries};
use crate::models::signal::SignalRecord;
use crate::signals::classifier::SignalClassifier;
use crate::signals::scoring;

/// One completed evaluation.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub record: SignalRecord,
    pub strength: u8,
    pub indicators: IndicatorSeries,
}

#[derive(Debug, Clone, Default)]
pub struct SignalEngine {
    indicators: IndicatorEngine,
    classifier: SignalClassifier,
}

impl SignalEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            indicators: IndicatorEngine::new(config),
            classifier: SignalClassifier::new(config.thresholds),
        }
    }

    pub fn indicators(&self) -> &IndicatorEngine {
        &self.indicators
    }

    pub fn classifier(&self) -> &SignalClassifier {
        &self.classifier
    }

    /// Evaluate a validated series. `None` means not evaluable yet.
    pub fn evaluate(&self, series: &PriceSeries) -> Option<Evaluation> {
        let indicators = self.indicators.compute(series);
        let record = self.classifier.classify_series(&indicators)?;
        let strength = scoring::score(&record);
        Some(Evaluation {
            record,
            strength,
            indicators,
        })
    }

    /// Evaluate raw points, sanitizing them first. Empty input yields `None`.
    pub fn evaluate_points(&self, points: Vec<PricePoint>) -> Option<Evaluation> {
        let series = PriceSeries::sanitized(points)?;
        self.evaluate(&series)
    }
}
