use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("price series is empty")]
    EmptySeries,
    #[error("close at index {index} is not finite")]
    NonFiniteClose { index: usize },
    #[error("close at index {index} is not positive: {close}")]
    NonPositiveClose { index: usize, close: f64 },
    #[error("timestamp at index {index} does not increase")]
    OutOfOrder { index: usize },
    #[error("invalid period for {name}: must be at least 1")]
    InvalidPeriod { name: &'static str },
}
