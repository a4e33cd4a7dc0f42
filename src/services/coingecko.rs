//! CoinGecko market chart provider

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use chrono::DateTime;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::CoinGeckoConfig;
use crate::models::indicators::{PricePoint, PriceSeries};
use crate::services::market_data::{MarketDataError, MarketDataProvider};

/// `GET /coins/{id}/market_chart` body. Each price is `[unix_ms, price]`.
#[derive(Debug, Deserialize)]
struct MarketChart {
    prices: Vec<(f64, f64)>,
}

pub struct CoinGeckoProvider {
    client: reqwest::Client,
    config: CoinGeckoConfig,
    retry_delay: Duration,
}

impl CoinGeckoProvider {
    pub fn new(config: CoinGeckoConfig) -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: CoinGeckoConfig, client: reqwest::Client) -> Self {
        let retry_delay = Duration::from_secs(config.retry_delay_seconds);
        Self {
            client,
            config,
            retry_delay,
        }
    }

    /// Override the initial backoff delay.
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    fn market_chart_url(&self) -> String {
        format!(
            "{}/coins/{}/market_chart",
            self.config.base_url.trim_end_matches('/'),
            self.config.coin_id
        )
    }

    fn backoff(&self) -> ExponentialBuilder {
        ExponentialBuilder::default()
            .with_min_delay(self.retry_delay)
            .with_max_delay(self.retry_delay * 8)
            .with_max_times(self.config.max_retries.saturating_sub(1))
    }

    async fn fetch_once(&self, limit: usize) -> Result<Vec<PricePoint>, MarketDataError> {
        let response = self
            .client
            .get(self.market_chart_url())
            .query(&[
                ("vs_currency", self.config.vs_currency.as_str()),
                ("days", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let chart: MarketChart = response
            .json()
            .await
            .map_err(|e| MarketDataError::Decode(e.to_string()))?;

        Ok(to_points(chart.prices, limit))
    }
}

/// Keep the last `limit` entries; entries with an unrepresentable timestamp
/// are skipped.
fn to_points(prices: Vec<(f64, f64)>, limit: usize) -> Vec<PricePoint> {
    let skip = prices.len().saturating_sub(limit);
    prices
        .into_iter()
        .skip(skip)
        .filter_map(|(ms, close)| {
            DateTime::from_timestamp_millis(ms as i64).map(|ts| PricePoint::new(ts, close))
        })
        .collect()
}

#[async_trait]
impl MarketDataProvider for CoinGeckoProvider {
    async fn fetch_series(&self, limit: usize) -> Result<Option<PriceSeries>, MarketDataError> {
        let points = (|| self.fetch_once(limit))
            .retry(self.backoff())
            .sleep(tokio::time::sleep)
            .when(MarketDataError::is_retryable)
            .notify(|err: &MarketDataError, delay: Duration| {
                warn!(
                    error = %err,
                    retry_in_ms = delay.as_millis() as u64,
                    "Market data fetch failed, retrying"
                );
            })
            .await?;

        debug!(
            coin = %self.config.coin_id,
            count = points.len(),
            "Fetched {} price points",
            points.len()
        );
        Ok(PriceSeries::sanitized(points))
    }

    async fn ping(&self) -> bool {
        let url = format!("{}/ping", self.config.base_url.trim_end_matches('/'));
        match self.client.get(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!(error = %e, "CoinGecko ping failed");
                false
            }
        }
    }
}
