//! Engine and application configuration.
//!
//! `EngineConfig` is the immutable value handed to the indicator engine and
//! the classifier. `AppConfig` wraps it with the collaborator settings read
//! from the environment.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;

use crate::indicators::validation::validate_period;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
    #[error(transparent)]
    Indicator(#[from] crate::indicators::IndicatorError),
    #[error("invalid thresholds: {0}")]
    InvalidThresholds(String),
}

/// Open RSI band `(lower, upper)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiBand {
    pub lower: f64,
    pub upper: f64,
}

impl RsiBand {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, rsi: f64) -> bool {
        rsi > self.lower && rsi < self.upper
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalThresholds {
    pub buy_rsi: RsiBand,
    pub sell_rsi: RsiBand,
    /// Minimum MACD/signal separation required for BUY or SELL.
    pub momentum: f64,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            buy_rsi: RsiBand::new(45.0, 75.0),
            sell_rsi: RsiBand::new(25.0, 55.0),
            momentum: 0.001,
        }
    }
}

impl SignalThresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, band) in [("buy", self.buy_rsi), ("sell", self.sell_rsi)] {
            if !(band.lower < band.upper) {
                return Err(ConfigError::InvalidThresholds(format!(
                    "{} RSI band must satisfy lower < upper, got ({}, {})",
                    name, band.lower, band.upper
                )));
            }
        }
        if !(self.momentum >= 0.0) {
            return Err(ConfigError::InvalidThresholds(format!(
                "momentum threshold must be non-negative, got {}",
                self.momentum
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub ema_short: usize,
    pub ema_long: usize,
    pub volume_avg_window: usize,
    pub thresholds: SignalThresholds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            ema_short: 9,
            ema_long: 21,
            volume_avg_window: 20,
            thresholds: SignalThresholds::default(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_period("rsi_period", self.rsi_period)?;
        validate_period("macd_fast", self.macd_fast)?;
        validate_period("macd_slow", self.macd_slow)?;
        validate_period("macd_signal", self.macd_signal)?;
        validate_period("ema_short", self.ema_short)?;
        validate_period("ema_long", self.ema_long)?;
        validate_period("volume_avg_window", self.volume_avg_window)?;
        self.thresholds.validate()
    }

    /// Defaults overridden by `RSI_PERIOD`, `MACD_FAST`, `MACD_SLOW`,
    /// `MACD_SIGNAL`, `EMA_SHORT`, `EMA_LONG` and `VOLUME_AVG_WINDOW`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            rsi_period: env_or("RSI_PERIOD", defaults.rsi_period)?,
            macd_fast: env_or("MACD_FAST", defaults.macd_fast)?,
            macd_slow: env_or("MACD_SLOW", defaults.macd_slow)?,
            macd_signal: env_or("MACD_SIGNAL", defaults.macd_signal)?,
            ema_short: env_or("EMA_SHORT", defaults.ema_short)?,
            ema_long: env_or("EMA_LONG", defaults.ema_long)?,
            volume_avg_window: env_or("VOLUME_AVG_WINDOW", defaults.volume_avg_window)?,
            thresholds: defaults.thresholds,
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct CoinGeckoConfig {
    pub base_url: String,
    pub coin_id: String,
    pub vs_currency: String,
    pub timeout_seconds: u64,
    pub max_retries: usize,
    pub retry_delay_seconds: u64,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.coingecko.com/api/v3".to_string(),
            coin_id: "bitcoin".to_string(),
            vs_currency: "usd".to_string(),
            timeout_seconds: 10,
            max_retries: 5,
            retry_delay_seconds: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub port: u16,
    pub eval_interval_seconds: u64,
    pub history_capacity: usize,
    pub series_limit: usize,
    pub asset_name: String,
    pub engine: EngineConfig,
    pub coingecko: CoinGeckoConfig,
    /// `None` disables notifications.
    pub telegram: Option<TelegramConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let cg_defaults = CoinGeckoConfig::default();
        let coingecko = CoinGeckoConfig {
            base_url: env::var("COINGECKO_BASE_URL").unwrap_or(cg_defaults.base_url),
            coin_id: env::var("COIN_ID").unwrap_or(cg_defaults.coin_id),
            vs_currency: env::var("VS_CURRENCY").unwrap_or(cg_defaults.vs_currency),
            timeout_seconds: env_or("FETCH_TIMEOUT_SECONDS", cg_defaults.timeout_seconds)?,
            max_retries: env_or("FETCH_MAX_RETRIES", cg_defaults.max_retries)?,
            retry_delay_seconds: env_or(
                "FETCH_RETRY_DELAY_SECONDS",
                cg_defaults.retry_delay_seconds,
            )?,
        };

        let telegram = match (env::var("TELEGRAM_BOT_TOKEN"), env::var("TELEGRAM_CHAT_ID")) {
            (Ok(bot_token), Ok(chat_id)) if !bot_token.is_empty() && !chat_id.is_empty() => {
                Some(TelegramConfig { bot_token, chat_id })
            }
            _ => None,
        };

        let asset_name = env::var("ASSET_NAME").unwrap_or_else(|_| capitalize(&coingecko.coin_id));

        Ok(Self {
            environment: get_environment(),
            port: env_or("PORT", 8080)?,
            eval_interval_seconds: env_or("EVAL_INTERVAL_SECONDS", 300)?,
            history_capacity: env_or("HISTORY_CAPACITY", 50)?,
            series_limit: env_or("SERIES_LIMIT", 100)?,
            asset_name,
            engine: EngineConfig::from_env()?,
            coingecko,
            telegram,
        })
    }
}

/// Deployment environment name from `APP_ENV`, defaulting to `sandbox`.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

fn env_or<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
