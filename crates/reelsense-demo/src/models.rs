//! Demo configuration and scored review records

use chrono::{DateTime, Utc};
use reelsense_core::types::DEFAULT_THRESHOLD;
use reelsense_core::{Error, Prediction, Result, ReviewSubmission, SentimentLabel};
use reelsense_model::{ArtifactSpec, DeviceSpec, RnnDimensions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Demo configuration (flags or YAML file)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Path to the word-index JSON artifact
    #[serde(default = "default_vocabulary_path")]
    pub vocabulary_path: PathBuf,

    /// Model artifact to load; the lexicon fallback is used when absent
    #[serde(default)]
    pub artifact: Option<ArtifactSpec>,

    /// Device for model inference
    #[serde(default)]
    pub device: DeviceSpec,

    /// Network dimensions the artifact was trained with
    #[serde(default)]
    pub dimensions: RnnDimensions,

    /// Decision threshold for the Positive label
    #[serde(default = "default_threshold")]
    pub threshold: f32,

    /// Maximum number of scored reviews kept for the inspector
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

fn default_vocabulary_path() -> PathBuf {
    PathBuf::from("./data/imdb_word_index.json")
}

fn default_threshold() -> f32 {
    DEFAULT_THRESHOLD
}

fn default_history_capacity() -> usize {
    1000
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            vocabulary_path: default_vocabulary_path(),
            artifact: None,
            device: DeviceSpec::default(),
            dimensions: RnnDimensions::default(),
            threshold: default_threshold(),
            history_capacity: default_history_capacity(),
        }
    }
}

impl DemoConfig {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| Error::config(format!("invalid demo config: {e}")))
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("failed to read config {}: {e}", path.display()))
        })?;
        Self::from_yaml(&content)
    }
}

/// A scored review kept in the demo history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub id: String,
    pub submitted_at: DateTime<Utc>,
    pub movie: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watched: Option<String>,
    pub review: String,
    pub sentiment: SentimentLabel,
    pub score: f32,
    pub score_display: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub latency_us: u64,
}

impl ReviewRecord {
    /// Combine a validated submission with its prediction
    pub fn new(submission: ReviewSubmission, prediction: Prediction) -> Self {
        let score_display = prediction.score_display();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            submitted_at: Utc::now(),
            movie: submission.movie,
            genre: submission.genre,
            watched: submission.watched,
            review: submission.review,
            sentiment: prediction.label,
            score: prediction.score,
            score_display,
            model: prediction.model,
            latency_us: prediction.latency_us,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_config_yaml() {
        let yaml = r#"
vocabulary_path: ./data/imdb_word_index.json
artifact:
  path: ./models/imdb-rnn.safetensors
threshold: 0.6
history_capacity: 50
"#;
        let config = DemoConfig::from_yaml(yaml).unwrap();
        assert!(config.artifact.is_some());
        assert_eq!(config.threshold, 0.6);
        assert_eq!(config.history_capacity, 50);
        // Unspecified sections fall back to defaults.
        assert_eq!(config.dimensions.vocab_size, 10_000);
    }

    #[test]
    fn test_demo_config_defaults() {
        let config = DemoConfig::from_yaml("{}").unwrap();
        assert!(config.artifact.is_none());
        assert_eq!(config.threshold, 0.5);
        assert_eq!(config.history_capacity, 1000);
    }

    #[test]
    fn test_demo_config_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "history_capacity: 25").unwrap();

        let config = DemoConfig::from_file(file.path()).unwrap();
        assert_eq!(config.history_capacity, 25);
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        let result = DemoConfig::from_yaml("threshold: [not, a, number]");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_review_record_from_prediction() {
        let submission = ReviewSubmission {
            movie: "Arrival".to_string(),
            review: "The movie was great".to_string(),
            genre: Some("Sci-Fi".to_string()),
            watched: Some("Less than a week ago".to_string()),
        };
        let prediction = Prediction {
            label: SentimentLabel::Positive,
            score: 0.87654,
            model: Some("imdb-rnn".to_string()),
            latency_us: 42,
        };

        let record = ReviewRecord::new(submission, prediction);
        assert_eq!(record.movie, "Arrival");
        assert_eq!(record.sentiment, SentimentLabel::Positive);
        assert_eq!(record.score_display, "0.88");
        assert_eq!(record.model.as_deref(), Some("imdb-rnn"));
        assert!(!record.id.is_empty());
    }
}
