//! Ordered decision table mapping governing fields to a signal class.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::SignalThresholds;
use crate::models::signal::SignalClass;

/// The five indicator values that alone decide the signal class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoverningFields {
    pub rsi: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub ema_short: f64,
    pub ema_long: f64,
}

pub type Predicate = fn(&GoverningFields, &SignalThresholds) -> bool;

#[derive(Clone, Copy)]
pub struct DecisionRule {
    pub name: &'static str,
    pub outcome: SignalClass,
    pub predicate: Predicate,
}

impl fmt::Debug for DecisionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecisionRule")
            .field("name", &self.name)
            .field("outcome", &self.outcome)
            .finish()
    }
}

impl DecisionRule {
    pub fn matches(&self, fields: &GoverningFields, thresholds: &SignalThresholds) -> bool {
        (self.predicate)(fields, thresholds)
    }
}

/// Rules in evaluation order. Anything unmatched is HOLD.
pub static DECISION_TABLE: [DecisionRule; 2] = [
    DecisionRule {
        name: "bullish_confirmation",
        outcome: SignalClass::Buy,
        predicate: is_buy,
    },
    DecisionRule {
        name: "bearish_confirmation",
        outcome: SignalClass::Sell,
        predicate: is_sell,
    },
];

/// RSI in the buy band, MACD above its signal by more than the momentum
/// threshold, short EMA above the long one.
pub fn is_buy(f: &GoverningFields, t: &SignalThresholds) -> bool {
    t.buy_rsi.contains(f.rsi)
        && f.macd > f.macd_signal
        && f.ema_short > f.ema_long
        && (f.macd - f.macd_signal) > t.momentum
}

/// Mirror of [`is_buy`] for the bearish side.
pub fn is_sell(f: &GoverningFields, t: &SignalThresholds) -> bool {
    t.sell_rsi.contains(f.rsi)
        && f.macd < f.macd_signal
        && f.ema_short < f.ema_long
        && (f.macd_signal - f.macd) > t.momentum
}

/// First matching rule wins.
pub fn decide(fields: &GoverningFields, thresholds: &SignalThresholds) -> SignalClass {
    DECISION_TABLE
        .iter()
        .find(|rule| rule.matches(fields, thresholds))
        .map(|rule| rule.outcome)
        .unwrap_or(SignalClass::Hold)
}

/// Every rule that matches, in table order. At most one entry is expected.
pub fn matching_rules(fields: &GoverningFields, thresholds: &SignalThresholds) -> Vec<&'static DecisionRule> {
    DECISION_TABLE
        .iter()
        .filter(|rule| rule.matches(fields, thresholds))
        .collect()
}
