//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod signal;

pub use indicators::{IndicatorSeries, IndicatorSnapshot, PricePoint, PriceSeries};
pub use signal::{SignalClass, SignalRecord};
