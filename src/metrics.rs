//! Prometheus metrics for the evaluation loop and the HTTP surface.

use prometheus::{
    Encoder, Gauge, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

use crate::models::signal::SignalClass;

pub struct Metrics {
    registry: Registry,
    pub evaluations_total: IntCounter,
    pub evaluations_skipped_total: IntCounter,
    pub signals_total: IntCounterVec,
    pub signal_strength: Gauge,
    pub fetch_failures_total: IntCounter,
    pub notifications_sent_total: IntCounter,
    pub notifications_failed_total: IntCounter,
    pub http_requests_total: IntCounter,
    pub http_requests_in_flight: IntGauge,
    pub http_request_duration_seconds: Histogram,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let evaluations_total =
            IntCounter::new("evaluations_total", "Completed signal evaluations")?;
        let evaluations_skipped_total = IntCounter::new(
            "evaluations_skipped_total",
            "Cycles that ended without a signal record",
        )?;
        let signals_total = IntCounterVec::new(
            Opts::new("signals_total", "Signal records by class"),
            &["class"],
        )?;
        let signal_strength = Gauge::new("signal_strength", "Strength score of the latest signal")?;
        let fetch_failures_total =
            IntCounter::new("fetch_failures_total", "Market data fetches that failed")?;
        let notifications_sent_total =
            IntCounter::new("notifications_sent_total", "Notifications delivered")?;
        let notifications_failed_total =
            IntCounter::new("notifications_failed_total", "Notifications that failed")?;
        let http_requests_total = IntCounter::new("http_requests_total", "HTTP requests served")?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests in flight")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency",
        ))?;

        registry.register(Box::new(evaluations_total.clone()))?;
        registry.register(Box::new(evaluations_skipped_total.clone()))?;
        registry.register(Box::new(signals_total.clone()))?;
        registry.register(Box::new(signal_strength.clone()))?;
        registry.register(Box::new(fetch_failures_total.clone()))?;
        registry.register(Box::new(notifications_sent_total.clone()))?;
        registry.register(Box::new(notifications_failed_total.clone()))?;
        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            evaluations_total,
            evaluations_skipped_total,
            signals_total,
            signal_strength,
            fetch_failures_total,
            notifications_sent_total,
            notifications_failed_total,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
        })
    }

    pub fn record_signal(&self, class: SignalClass, strength: u8) {
        let label = class.to_string();
        self.evaluations_total.inc();
        self.signals_total.with_label_values(&[label.as_str()]).inc();
        self.signal_strength.set(f64::from(strength));
    }

    /// Text exposition format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
