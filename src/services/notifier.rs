//! Notification delivery.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::TelegramConfig;

pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("notification rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &str) -> Result<(), NotifyError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Error,
    Warning,
    Info,
    Success,
}

impl AlertLevel {
    fn emoji(&self) -> &'static str {
        match self {
            AlertLevel::Error => "🚨",
            AlertLevel::Warning => "⚠️",
            AlertLevel::Info => "ℹ️",
            AlertLevel::Success => "✅",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            AlertLevel::Error => "ERROR",
            AlertLevel::Warning => "WARNING",
            AlertLevel::Info => "INFO",
            AlertLevel::Success => "SUCCESS",
        }
    }
}

pub fn format_alert(level: AlertLevel, message: &str) -> String {
    format!("{} <b>{}</b>\n\n{}", level.emoji(), level.title(), message)
}

#[derive(Debug, Deserialize)]
struct TelegramResponse {
    ok: bool,
}

/// Telegram Bot API client.
pub struct TelegramNotifier {
    client: reqwest::Client,
    base_url: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(config: TelegramConfig) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self::with_client(config, TELEGRAM_API_BASE, client))
    }

    pub fn with_client(config: TelegramConfig, api_base: &str, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: format!("{}/bot{}", api_base.trim_end_matches('/'), config.bot_token),
            chat_id: config.chat_id,
        }
    }

    /// Calls `getMe` and reports whether the bot token is accepted.
    pub async fn test_connection(&self) -> Result<bool, NotifyError> {
        let response = self
            .client
            .get(format!("{}/getMe", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Ok(false);
        }
        let body: TelegramResponse = response.json().await?;
        Ok(body.ok)
    }

    pub async fn send_alert(&self, level: AlertLevel, message: &str) -> Result<(), NotifyError> {
        self.send(&format_alert(level, message)).await
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        let params = [
            ("chat_id", self.chat_id.as_str()),
            ("text", message),
            ("parse_mode", "HTML"),
        ];
        let response = self
            .client
            .post(format!("{}/sendMessage", self.base_url))
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        debug!("Telegram message delivered");
        Ok(())
    }
}
