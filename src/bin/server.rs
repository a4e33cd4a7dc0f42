//! Trendwatch server
//!
//! Runs the signal evaluation loop and the HTTP API in one process; the API
//! reads the loop's in-memory history.

use dotenvy::dotenv;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use trendwatch::config::AppConfig;
use trendwatch::core::http::start_server;
use trendwatch::core::runtime::{RuntimeConfig, SignalRuntime};
use trendwatch::logging;
use trendwatch::metrics::Metrics;
use trendwatch::services::coingecko::CoinGeckoProvider;
use trendwatch::services::market_data::MarketDataProvider;
use trendwatch::services::notifier::{AlertLevel, TelegramNotifier};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = AppConfig::from_env()?;
    info!("Starting Trendwatch server");
    info!(environment = %config.environment, "Environment");
    info!(
        coin = %config.coingecko.coin_id,
        interval = config.eval_interval_seconds,
        "Signal Evaluation: {} every {} seconds",
        config.coingecko.coin_id,
        config.eval_interval_seconds
    );

    let metrics = Arc::new(Metrics::new()?);

    let provider = CoinGeckoProvider::new(config.coingecko.clone())?;
    if provider.ping().await {
        info!("CoinGecko API reachable");
    } else {
        warn!("CoinGecko API not reachable yet, evaluation will retry each cycle");
    }
    let provider: Arc<dyn MarketDataProvider> = Arc::new(provider);

    let mut runtime =
        SignalRuntime::new(RuntimeConfig::from(&config), provider).with_metrics(metrics.clone());

    match config.telegram.clone() {
        Some(telegram) => {
            let notifier = TelegramNotifier::new(telegram)?;
            match notifier.test_connection().await {
                Ok(true) => {
                    info!("Telegram bot connected");
                    if let Err(e) = notifier
                        .send_alert(AlertLevel::Info, "Trendwatch signal engine started")
                        .await
                    {
                        warn!(error = %e, "Failed to send startup alert");
                    }
                }
                Ok(false) => warn!("Telegram bot token rejected, notifications will fail"),
                Err(e) => warn!(error = %e, "Telegram connection test failed"),
            }
            runtime = runtime.with_notifier(Arc::new(notifier));
        }
        None => warn!("TELEGRAM_BOT_TOKEN/TELEGRAM_CHAT_ID not set, notifications disabled"),
    }

    let runtime = Arc::new(runtime);
    let signals = runtime.state();
    let runtime_handle = runtime.start();

    let port = config.port;
    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, metrics, signals).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("Server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }
    runtime_handle.abort();
    info!("Trendwatch stopped");

    Ok(())
}
