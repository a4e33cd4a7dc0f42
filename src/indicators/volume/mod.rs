//! Volume indicators

pub mod proxy;

pub use proxy::*;
