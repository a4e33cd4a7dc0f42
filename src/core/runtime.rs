//! Evaluation loop: fetch, evaluate, record, notify.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::config::{AppConfig, EngineConfig};
use crate::metrics::Metrics;
use crate::models::indicators::IndicatorSeries;
use crate::models::signal::{SignalClass, SignalRecord};
use crate::services::market_data::MarketDataProvider;
use crate::services::notifier::Notifier;
use crate::signals::engine::SignalEngine;
use crate::signals::format::format_message;
use crate::signals::history::{SignalHistory, DEFAULT_HISTORY_CAPACITY};

/// Configuration for the evaluation runtime
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub evaluation_interval_seconds: u64,
    pub series_limit: usize,
    pub history_capacity: usize,
    pub asset_name: String,
    pub engine: EngineConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            evaluation_interval_seconds: 300,
            series_limit: 100,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            asset_name: "Bitcoin".to_string(),
            engine: EngineConfig::default(),
        }
    }
}

impl From<&AppConfig> for RuntimeConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            evaluation_interval_seconds: config.eval_interval_seconds,
            series_limit: config.series_limit,
            history_capacity: config.history_capacity,
            asset_name: config.asset_name.clone(),
            engine: config.engine,
        }
    }
}

/// Most recent successful evaluation, as served to presentation clients.
#[derive(Debug, Clone, Serialize)]
pub struct LatestSignal {
    pub record: SignalRecord,
    pub strength: u8,
    pub evaluated_at: DateTime<Utc>,
    pub indicators: IndicatorSeries,
}

#[derive(Debug)]
pub struct SignalState {
    pub latest: Option<LatestSignal>,
    pub history: SignalHistory,
}

impl SignalState {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            latest: None,
            history: SignalHistory::new(history_capacity),
        }
    }
}

pub type SharedSignalState = Arc<RwLock<SignalState>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The provider failed or returned no usable series.
    Unavailable,
    /// Data arrived but the governing indicators are not populated yet.
    NotEvaluable,
    Evaluated {
        class: SignalClass,
        recorded: bool,
        notified: bool,
    },
}

pub struct SignalRuntime {
    config: RuntimeConfig,
    engine: SignalEngine,
    provider: Arc<dyn MarketDataProvider>,
    notifier: Option<Arc<dyn Notifier>>,
    metrics: Option<Arc<Metrics>>,
    state: SharedSignalState,
}

impl SignalRuntime {
    pub fn new(config: RuntimeConfig, provider: Arc<dyn MarketDataProvider>) -> Self {
        let state = Arc::new(RwLock::new(SignalState::new(config.history_capacity)));
        Self {
            engine: SignalEngine::new(config.engine),
            config,
            provider,
            notifier: None,
            metrics: None,
            state,
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// State shared with the HTTP surface.
    pub fn state(&self) -> SharedSignalState {
        self.state.clone()
    }

    /// Run one fetch/evaluate/notify cycle. Never fails; problems are logged
    /// and reported through the outcome.
    pub async fn run_cycle(&self) -> CycleOutcome {
        let series = match self.provider.fetch_series(self.config.series_limit).await {
            Ok(Some(series)) => series,
            Ok(None) => {
                warn!("Market data unavailable, skipping evaluation");
                self.count_skip();
                return CycleOutcome::Unavailable;
            }
            Err(e) => {
                error!(error = %e, "Market data fetch failed, skipping evaluation");
                if let Some(metrics) = &self.metrics {
                    metrics.fetch_failures_total.inc();
                }
                self.count_skip();
                return CycleOutcome::Unavailable;
            }
        };

        let Some(evaluation) = self.engine.evaluate(&series) else {
            debug!(points = series.len(), "Indicators not ready, no signal this cycle");
            self.count_skip();
            return CycleOutcome::NotEvaluable;
        };

        let evaluated_at = Utc::now();
        let record = evaluation.record.clone();
        let class = record.signal_class;

        info!(
            signal = %class,
            price = record.price,
            rsi = record.rsi,
            macd = record.macd,
            strength = evaluation.strength,
            "Signal evaluated"
        );
        if let Some(metrics) = &self.metrics {
            metrics.record_signal(class, evaluation.strength);
        }

        let recorded = {
            let mut state = self.state.write().await;
            state.latest = Some(LatestSignal {
                record: record.clone(),
                strength: evaluation.strength,
                evaluated_at,
                indicators: evaluation.indicators,
            });
            state.history.record(record.clone())
        };

        let notified = if recorded && class.is_actionable() {
            self.notify(&record, evaluated_at).await
        } else {
            false
        };

        CycleOutcome::Evaluated {
            class,
            recorded,
            notified,
        }
    }

    async fn notify(&self, record: &SignalRecord, evaluated_at: DateTime<Utc>) -> bool {
        let Some(notifier) = &self.notifier else {
            return false;
        };
        let message = format_message(record, &self.config.asset_name, evaluated_at);
        match notifier.send(&message).await {
            Ok(()) => {
                info!(signal = %record.signal_class, "Notification sent");
                if let Some(metrics) = &self.metrics {
                    metrics.notifications_sent_total.inc();
                }
                true
            }
            Err(e) => {
                warn!(error = %e, signal = %record.signal_class, "Notification failed");
                if let Some(metrics) = &self.metrics {
                    metrics.notifications_failed_total.inc();
                }
                false
            }
        }
    }

    fn count_skip(&self) {
        if let Some(metrics) = &self.metrics {
            metrics.evaluations_skipped_total.inc();
        }
    }

    /// Tick forever at the configured interval. The first cycle runs
    /// immediately.
    pub async fn run(&self) {
        let seconds = self.config.evaluation_interval_seconds.max(1);
        let mut ticker = interval(Duration::from_secs(seconds));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(interval = seconds, "SignalRuntime: evaluating every {}s", seconds);

        loop {
            ticker.tick().await;
            let outcome = self.run_cycle().await;
            debug!(?outcome, "SignalRuntime: cycle finished");
        }
    }

    /// Spawn [`run`](Self::run) on the tokio runtime.
    pub fn start(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move { self.run().await })
    }
}
