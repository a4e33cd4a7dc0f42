use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalClass {
    Buy,
    Sell,
    Hold,
}

impl SignalClass {
    pub fn all() -> [SignalClass; 3] {
        [SignalClass::Buy, SignalClass::Sell, SignalClass::Hold]
    }

    /// BUY and SELL are forwarded to the notifier, HOLD never is.
    pub fn is_actionable(&self) -> bool {
        !matches!(self, SignalClass::Hold)
    }

    /// Display label used in notifications.
    pub fn label(&self) -> &'static str {
        match self {
            SignalClass::Buy => "🟢 BUY SIGNAL",
            SignalClass::Sell => "🔴 SELL SIGNAL",
            SignalClass::Hold => "🟡 HOLD",
        }
    }
}

impl fmt::Display for SignalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignalClass::Buy => "BUY",
            SignalClass::Sell => "SELL",
            SignalClass::Hold => "HOLD",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRecord {
    pub signal_class: SignalClass,
    pub price: f64,
    pub rsi: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub ema_short: f64,
    pub ema_long: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_proxy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_proxy_avg: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl SignalRecord {
    pub fn is_uptrend(&self) -> bool {
        self.ema_short > self.ema_long
    }
}
