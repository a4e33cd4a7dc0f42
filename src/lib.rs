//! Trendwatch: technical-indicator signal engine.
//!
//! Prices flow one way through the crate:
//! `PriceSeries` -> [`indicators::IndicatorEngine`] -> `IndicatorSeries`
//! -> [`signals::SignalClassifier`] -> `SignalRecord`.
//!
//! The market-data provider, notifier, runtime and HTTP surface around that
//! pipeline live in [`services`] and [`core`].

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
