//! Reelsense Core
//!
//! Core types shared across Reelsense components.
//!
//! This crate provides:
//! - Error types and result handling
//! - The sentiment label and prediction types produced by scoring
//! - The review submission payload and its validation rules

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Prediction, ReviewSubmission, SentimentLabel, DEFAULT_THRESHOLD};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{Prediction, ReviewSubmission, SentimentLabel, DEFAULT_THRESHOLD};
}
