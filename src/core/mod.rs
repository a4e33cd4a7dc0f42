//! Core application primitives (runtime, HTTP surface)

pub mod http;
pub mod runtime;

pub use http::*;
pub use runtime::*;
