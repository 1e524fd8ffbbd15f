use crate::models::{DemoConfig, ReviewRecord};
use parking_lot::RwLock;
use reelsense_core::Result;
use reelsense_encoder::Vocabulary;
use reelsense_model::{LexiconScorer, RnnScorer, Scorer, SentimentPipeline};
use std::collections::VecDeque;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct DemoAppState {
    /// Demo configuration
    pub config: Arc<DemoConfig>,

    /// Vocabulary and scorer wired into the analyze operation
    pub pipeline: Arc<SentimentPipeline>,

    /// Scored review history for the inspector
    pub history: Arc<RwLock<VecDeque<ReviewRecord>>>,
}

impl DemoAppState {
    /// Build state around an already-constructed pipeline
    pub fn new(config: DemoConfig, pipeline: SentimentPipeline) -> Self {
        let capacity = config.history_capacity;
        Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
            history: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
        }
    }

    /// Load the vocabulary and scorer described by the configuration.
    ///
    /// An unreadable vocabulary or model artifact fails here, before the
    /// server accepts any submission.
    pub fn from_config(config: DemoConfig) -> Result<Self> {
        let vocabulary = Arc::new(Vocabulary::from_json_file(&config.vocabulary_path)?);

        let scorer: Arc<dyn Scorer> = match &config.artifact {
            Some(spec) => {
                let artifact_config =
                    spec.to_artifact_config(config.device.to_device_kind(), config.dimensions);
                Arc::new(RnnScorer::load(artifact_config)?)
            }
            None => {
                tracing::warn!("no model artifact configured, falling back to lexicon scorer");
                Arc::new(LexiconScorer::from_vocabulary(&vocabulary))
            }
        };

        let pipeline = SentimentPipeline::new(vocabulary, scorer).with_threshold(config.threshold);
        Ok(Self::new(config, pipeline))
    }

    /// Add a scored review to history
    pub fn record_review(&self, record: ReviewRecord) {
        let mut history = self.history.write();
        history.push_front(record);
        if history.len() > self.config.history_capacity {
            history.pop_back();
        }
    }

    /// Get a scored review by ID
    pub fn get_review(&self, id: &str) -> Option<ReviewRecord> {
        self.history.read().iter().find(|r| r.id == id).cloned()
    }

    /// Get recent scored reviews, newest first
    pub fn recent_reviews(&self, limit: usize) -> Vec<ReviewRecord> {
        self.history.read().iter().take(limit).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelsense_core::{Prediction, ReviewSubmission, SentimentLabel};

    fn test_state(history_capacity: usize) -> DemoAppState {
        let vocabulary = Arc::new(
            Vocabulary::from_entries([("great", 1), ("awful", 2)]).unwrap(),
        );
        let scorer = Arc::new(LexiconScorer::from_vocabulary(&vocabulary));
        let pipeline = SentimentPipeline::new(vocabulary, scorer);
        let config = DemoConfig {
            history_capacity,
            ..Default::default()
        };
        DemoAppState::new(config, pipeline)
    }

    fn test_record(movie: &str) -> ReviewRecord {
        ReviewRecord::new(
            ReviewSubmission::new(movie, "great"),
            Prediction::new(SentimentLabel::Positive, 1.0),
        )
    }

    #[test]
    fn test_history_is_bounded() {
        let state = test_state(2);
        state.record_review(test_record("First"));
        state.record_review(test_record("Second"));
        state.record_review(test_record("Third"));

        let recent = state.recent_reviews(10);
        assert_eq!(recent.len(), 2);
        // Newest first, oldest evicted.
        assert_eq!(recent[0].movie, "Third");
        assert_eq!(recent[1].movie, "Second");
    }

    #[test]
    fn test_get_review_by_id() {
        let state = test_state(10);
        let record = test_record("Arrival");
        let id = record.id.clone();
        state.record_review(record);

        assert!(state.get_review(&id).is_some());
        assert!(state.get_review("missing").is_none());
    }

    #[test]
    fn test_missing_vocabulary_fails_fast() {
        let config = DemoConfig {
            vocabulary_path: "/nonexistent/word_index.json".into(),
            ..Default::default()
        };
        assert!(DemoAppState::from_config(config).is_err());
    }
}
