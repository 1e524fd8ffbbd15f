//! Lightweight lexicon scorer (fallback)
//!
//! This is a word-list scorer used when no model artifact is loaded. The
//! lexicon is resolved to padded-input indices at construction, so scoring
//! honors the same contract as the real model: padded review in, probability
//! out.

use crate::scorer::Scorer;
use async_trait::async_trait;
use reelsense_core::Result;
use reelsense_encoder::{PaddedReview, Vocabulary, INDEX_OFFSET, PAD_INDEX};
use std::collections::HashSet;

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "love",
    "loved",
    "amazing",
    "wonderful",
    "happy",
    "fantastic",
    "awesome",
    "best",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "hate",
    "hated",
    "horrible",
    "worst",
    "sad",
    "boring",
    "disappointed",
    "poor",
];

pub struct LexiconScorer {
    name: String,
    positive: HashSet<u32>,
    negative: HashSet<u32>,
}

impl LexiconScorer {
    pub fn from_vocabulary(vocabulary: &Vocabulary) -> Self {
        Self::with_name("sentiment-lexicon", vocabulary)
    }

    pub fn with_name(name: impl Into<String>, vocabulary: &Vocabulary) -> Self {
        // Lexicon words absent from the vocabulary cannot occur in encoded
        // input either, so they are simply skipped.
        let resolve = |words: &[&str]| -> HashSet<u32> {
            words
                .iter()
                .filter_map(|word| vocabulary.rank(word))
                .map(|rank| rank + INDEX_OFFSET)
                .collect()
        };

        Self {
            name: name.into(),
            positive: resolve(POSITIVE_WORDS),
            negative: resolve(NEGATIVE_WORDS),
        }
    }
}

#[async_trait]
impl Scorer for LexiconScorer {
    async fn score(&self, review: &PaddedReview) -> Result<f32> {
        let mut positive_hits = 0.0f32;
        let mut negative_hits = 0.0f32;

        for &index in review.as_slice() {
            if index == PAD_INDEX {
                continue;
            }
            if self.positive.contains(&index) {
                positive_hits += 1.0;
            } else if self.negative.contains(&index) {
                negative_hits += 1.0;
            }
        }

        let total = positive_hits + negative_hits;
        let score = if total == 0.0 {
            0.5
        } else {
            positive_hits / total
        };
        Ok(score)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
