//! Market data provider interface.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::indicators::PriceSeries;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("rate limited by market data API")]
    RateLimited,
    #[error("market data API returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid market data payload: {0}")]
    Decode(String),
}

impl MarketDataError {
    /// Transport errors, rate limits and server errors are worth retrying.
    pub fn is_retryable(&self) -> bool {
        match self {
            MarketDataError::Http(_) | MarketDataError::RateLimited => true,
            MarketDataError::Status { status, .. } => *status >= 500,
            MarketDataError::Decode(_) => false,
        }
    }
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Latest `limit` price points, oldest first.
    ///
    /// `Ok(None)` means the source answered but had nothing usable this
    /// cycle. Retries are the provider's business.
    async fn fetch_series(&self, limit: usize) -> Result<Option<PriceSeries>, MarketDataError>;

    /// Whether the upstream API is reachable.
    async fn ping(&self) -> bool;
}
