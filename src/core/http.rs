//! HTTP endpoint server using Axum

use axum::{
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

use crate::core::runtime::SharedSignalState;
use crate::metrics::Metrics;
use crate::models::indicators::IndicatorSeries;
use crate::models::signal::SignalRecord;

pub const SERVICE_NAME: &str = "trendwatch-signal-engine";
const DEFAULT_HISTORY_LIMIT: usize = 10;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub signals: SharedSignalState,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": SERVICE_NAME
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

/// Latest signal with its strength score
async fn latest_signal(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let signals = state.signals.read().await;
    let latest = signals.latest.as_ref().ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(json!({
        "record": latest.record,
        "strength": latest.strength,
        "evaluated_at": latest.evaluated_at,
    })))
}

/// Indicator series behind the latest signal
async fn latest_indicators(
    State(state): State<AppState>,
) -> Result<Json<IndicatorSeries>, StatusCode> {
    let signals = state.signals.read().await;
    let latest = signals.latest.as_ref().ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(latest.indicators.clone()))
}

#[derive(Debug, Deserialize)]
struct HistoryQuery {
    limit: Option<usize>,
}

/// Recorded signal changes, newest first
async fn signal_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> Json<Vec<SignalRecord>> {
    let limit = params.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let signals = state.signals.read().await;
    Json(signals.history.recent(limit))
}

async fn signal_distribution(State(state): State<AppState>) -> Json<BTreeMap<String, usize>> {
    let signals = state.signals.read().await;
    let counts = signals
        .history
        .distribution()
        .into_iter()
        .map(|(class, count)| (class.to_string(), count))
        .collect();
    Json(counts)
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/signal", get(latest_signal))
        .route("/api/indicators", get(latest_indicators))
        .route("/api/signals", get(signal_history))
        .route("/api/signals/distribution", get(signal_distribution))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    port: u16,
    metrics: Arc<Metrics>,
    signals: SharedSignalState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time: Arc::new(Instant::now()),
        signals,
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
