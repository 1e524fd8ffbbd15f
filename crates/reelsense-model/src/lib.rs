//! Reelsense Model
//!
//! Sentiment scoring over fixed-length encoded reviews.
//!
//! The [`Scorer`] trait is the seam between preprocessing and the model: a
//! scorer accepts a padded review and returns a probability, nothing more.
//! Two implementations ship here:
//! - [`RnnScorer`]: the pre-trained recurrent network, loaded from a
//!   safetensors artifact through Candle
//! - [`LexiconScorer`]: a word-list fallback used when no artifact is
//!   available
//!
//! [`SentimentPipeline`] wires a vocabulary and a scorer together into the
//! text-in, prediction-out operation the demo consumes.

pub mod config;
pub mod lexicon;
pub mod loader;
pub mod pipeline;
pub mod rnn;
pub mod scorer;

pub use config::{ArtifactSpec, DeviceSpec};
pub use lexicon::LexiconScorer;
pub use loader::{ArtifactConfig, ArtifactSource, DeviceKind, RnnDimensions};
pub use pipeline::SentimentPipeline;
pub use rnn::RnnScorer;
pub use scorer::Scorer;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{ArtifactSpec, DeviceSpec};
    pub use crate::lexicon::LexiconScorer;
    pub use crate::loader::{ArtifactConfig, ArtifactSource, DeviceKind, RnnDimensions};
    pub use crate::pipeline::SentimentPipeline;
    pub use crate::rnn::RnnScorer;
    pub use crate::scorer::Scorer;
}
