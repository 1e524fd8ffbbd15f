//! Text-in, prediction-out scoring pipeline

use crate::scorer::Scorer;
use reelsense_core::types::DEFAULT_THRESHOLD;
use reelsense_core::{Prediction, Result, SentimentLabel};
use reelsense_encoder::Vocabulary;
use std::sync::Arc;
use std::time::Instant;

/// Pairs the immutable vocabulary with an injected scorer.
///
/// Each call encodes the text, hands the padded input to the scorer, and
/// thresholds the probability into a label. The intermediate encoding is
/// created fresh per call and discarded after scoring.
pub struct SentimentPipeline {
    vocabulary: Arc<Vocabulary>,
    scorer: Arc<dyn Scorer>,
    threshold: f32,
}

impl SentimentPipeline {
    /// Create a pipeline with the default decision threshold
    pub fn new(vocabulary: Arc<Vocabulary>, scorer: Arc<dyn Scorer>) -> Self {
        Self {
            vocabulary,
            scorer,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Override the decision threshold
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Get the vocabulary this pipeline encodes with
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Get the scorer name
    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    /// Get the decision threshold
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Encode and score review text
    pub async fn analyze(&self, text: &str) -> Result<Prediction> {
        let start = Instant::now();

        let padded = self.vocabulary.encode(text);
        let score = self.scorer.score(&padded).await?;
        let label = SentimentLabel::from_score(score, self.threshold);

        Ok(Prediction {
            label,
            score,
            model: Some(self.scorer.name().to_string()),
            latency_us: start.elapsed().as_micros() as u64,
        })
    }
}
