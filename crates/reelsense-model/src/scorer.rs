//! Scorer trait: the injected model capability

use async_trait::async_trait;
use reelsense_core::Result;
use reelsense_encoder::PaddedReview;

/// Trait for sentiment scorers.
///
/// A scorer is a black box from a padded review to a probability in
/// `[0.0, 1.0]`. It makes no assumptions about how the input was produced
/// and the encoder makes none about how the score is computed, so the two
/// sides can be developed and tested independently.
#[async_trait]
pub trait Scorer: Send + Sync {
    /// Score the given padded review
    async fn score(&self, review: &PaddedReview) -> Result<f32>;

    /// Get the scorer name (used for prediction attribution)
    fn name(&self) -> &str;
}
