//! Sentiment labels, predictions, and the review submission payload

use serde::{Deserialize, Serialize};
use std::fmt;

/// Decision threshold separating positive from negative sentiment
pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// Binary sentiment label derived from a scorer probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl SentimentLabel {
    /// Derive a label by thresholding a probability.
    ///
    /// A score exactly at the threshold is Negative; only scores strictly
    /// above it count as Positive.
    pub fn from_score(score: f32, threshold: f32) -> Self {
        if score > threshold {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    /// Get the user-facing label string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring a single review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Sentiment label after thresholding
    pub label: SentimentLabel,

    /// Raw scorer probability (0.0-1.0)
    pub score: f32,

    /// Name of the scorer that produced this prediction
    pub model: Option<String>,

    /// Latency in microseconds
    pub latency_us: u64,
}

impl Prediction {
    /// Create a new prediction with no model attribution
    pub fn new(label: SentimentLabel, score: f32) -> Self {
        Self {
            label,
            score,
            model: None,
            latency_us: 0,
        }
    }

    /// Probability formatted to two decimal places for display
    pub fn score_display(&self) -> String {
        format!("{:.2}", self.score)
    }
}

/// A review submitted through the demo form.
///
/// `genre` and `watched` are recorded for the history inspector but play no
/// part in scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSubmission {
    /// Movie name (required, non-blank)
    pub movie: String,

    /// Free-form review text (required, non-blank)
    pub review: String,

    /// Movie genre selected in the form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// When the movie was watched (coarse recency bucket)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watched: Option<String>,
}

impl ReviewSubmission {
    /// Create a submission with only the required fields
    pub fn new(movie: impl Into<String>, review: impl Into<String>) -> Self {
        Self {
            movie: movie.into(),
            review: review.into(),
            genre: None,
            watched: None,
        }
    }

    /// Per-field validation messages.
    ///
    /// Both the movie name and the review text must be non-blank before
    /// encoding proceeds. An empty vector means the submission is valid.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.movie.trim().is_empty() {
            errors.push("Please enter the movie name.".to_string());
        }
        if self.review.trim().is_empty() {
            errors.push("Please write your movie review.".to_string());
        }
        errors
    }

    /// Validate the submission, returning the first failure as an error
    pub fn validate(&self) -> crate::Result<()> {
        let errors = self.validation_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(crate::Error::validation(errors.join(" ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_score() {
        assert_eq!(
            SentimentLabel::from_score(0.8, DEFAULT_THRESHOLD),
            SentimentLabel::Positive
        );
        assert_eq!(
            SentimentLabel::from_score(0.2, DEFAULT_THRESHOLD),
            SentimentLabel::Negative
        );
    }

    #[test]
    fn test_label_at_threshold_is_negative() {
        // The decision rule is strictly greater-than.
        assert_eq!(
            SentimentLabel::from_score(0.5, DEFAULT_THRESHOLD),
            SentimentLabel::Negative
        );
    }

    #[test]
    fn test_label_display() {
        assert_eq!(SentimentLabel::Positive.to_string(), "Positive");
        assert_eq!(SentimentLabel::Negative.to_string(), "Negative");
    }

    #[test]
    fn test_score_display_two_decimals() {
        let prediction = Prediction::new(SentimentLabel::Positive, 0.87654);
        assert_eq!(prediction.score_display(), "0.88");

        let prediction = Prediction::new(SentimentLabel::Negative, 0.1);
        assert_eq!(prediction.score_display(), "0.10");
    }

    #[test]
    fn test_valid_submission() {
        let submission = ReviewSubmission::new("Arrival", "Loved every minute of it");
        assert!(submission.validation_errors().is_empty());
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn test_blank_movie_rejected() {
        let submission = ReviewSubmission::new("   ", "Great movie");
        let errors = submission.validation_errors();
        assert_eq!(errors, vec!["Please enter the movie name.".to_string()]);
    }

    #[test]
    fn test_blank_review_rejected() {
        let submission = ReviewSubmission::new("Arrival", "");
        let errors = submission.validation_errors();
        assert_eq!(errors, vec!["Please write your movie review.".to_string()]);
    }

    #[test]
    fn test_both_fields_blank() {
        let submission = ReviewSubmission::new("", "  ");
        assert_eq!(submission.validation_errors().len(), 2);
        assert!(submission.validate().is_err());
    }
}
