//! Signal classification, scoring and bookkeeping.

pub mod classifier;
pub mod decision;
pub mod engine;
pub mod format;
pub mod history;
pub mod scoring;

pub use classifier::SignalClassifier;
pub use decision::*;
pub use engine::{Evaluation, SignalEngine};
pub use format::format_message;
pub use history::SignalHistory;
pub use scoring::score;
