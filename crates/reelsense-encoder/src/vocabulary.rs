//! Word-to-rank vocabulary and the review encoding operation

use crate::sequence::{PaddedReview, INDEX_OFFSET, OOV_INDEX};
use reelsense_core::{Error, Result};
use std::collections::HashMap;
use std::path::Path;

/// Immutable mapping from lowercase word to its 1-indexed frequency rank.
///
/// Built once at process start from the corpus word-index artifact and never
/// mutated afterwards, so sharing it behind an `Arc` is safe for concurrent
/// reads.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    ranks: HashMap<String, u32>,
}

impl Vocabulary {
    /// Build a vocabulary from `(word, rank)` pairs.
    ///
    /// Ranks are 1-indexed; a zero rank would collide with the padding
    /// sentinel after the index shift and is rejected.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut ranks = HashMap::new();
        for (word, rank) in entries {
            let word = word.into();
            if rank == 0 {
                return Err(Error::config(format!(
                    "vocabulary rank for {word:?} must be positive (ranks are 1-indexed)"
                )));
            }
            ranks.insert(word, rank);
        }
        Ok(Self { ranks })
    }

    /// Load the word-index JSON artifact (a flat `{"word": rank}` object).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("failed to read word index {}: {e}", path.display()))
        })?;
        let entries: HashMap<String, u32> = serde_json::from_str(&content)?;
        let vocabulary = Self::from_entries(entries)?;
        tracing::debug!(
            words = vocabulary.len(),
            path = %path.display(),
            "loaded vocabulary"
        );
        Ok(vocabulary)
    }

    /// Look up the frequency rank of a word (exact lowercase match)
    pub fn rank(&self, word: &str) -> Option<u32> {
        self.ranks.get(word).copied()
    }

    /// Number of words in the vocabulary
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Whether the vocabulary has no entries
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Encode review text into the fixed-length scorer input.
    ///
    /// The whole input is lowercased and split on whitespace; punctuation is
    /// not stripped, so a token like `great!` stays intact and falls back to
    /// the unknown index. Each token maps to `rank + INDEX_OFFSET` when found
    /// and [`OOV_INDEX`] when not, and the sequence is fitted to exactly
    /// [`crate::SEQ_LEN`] positions (left-padded, or truncated from the front
    /// so the most recent tokens survive).
    pub fn encode(&self, text: &str) -> PaddedReview {
        let lowered = text.to_lowercase();
        let indices: Vec<u32> = lowered
            .split_whitespace()
            .map(|word| {
                self.rank(word)
                    .map_or(OOV_INDEX, |rank| rank + INDEX_OFFSET)
            })
            .collect();
        PaddedReview::from_indices(&indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{PAD_INDEX, SEQ_LEN};

    fn sample_vocabulary() -> Vocabulary {
        Vocabulary::from_entries([("the", 1), ("movie", 2), ("was", 3), ("great", 4)]).unwrap()
    }

    #[test]
    fn test_empty_text_is_all_padding() {
        let vocabulary = sample_vocabulary();
        let padded = vocabulary.encode("");
        assert_eq!(padded.len(), SEQ_LEN);
        assert!(padded.as_slice().iter().all(|&index| index == PAD_INDEX));
    }

    #[test]
    fn test_known_words_shift_by_offset() {
        let vocabulary = sample_vocabulary();
        let padded = vocabulary.encode("The movie was great");
        assert_eq!(&padded.as_slice()[SEQ_LEN - 4..], &[4, 5, 6, 7]);
        assert!(padded.as_slice()[..SEQ_LEN - 4]
            .iter()
            .all(|&index| index == PAD_INDEX));
    }

    #[test]
    fn test_case_insensitive() {
        let vocabulary = sample_vocabulary();
        assert_eq!(vocabulary.encode("Great Movie"), vocabulary.encode("great movie"));
        assert_eq!(vocabulary.encode("GREAT MOVIE"), vocabulary.encode("great movie"));
    }

    #[test]
    fn test_unknown_word_maps_to_oov_index() {
        let empty = Vocabulary::from_entries(Vec::<(String, u32)>::new()).unwrap();
        let padded = empty.encode("xyzzy");
        assert_eq!(padded.as_slice()[SEQ_LEN - 1], OOV_INDEX);
        assert_eq!(padded.token_count(), 1);
    }

    #[test]
    fn test_punctuation_keeps_token_whole() {
        let vocabulary = sample_vocabulary();
        // "great!" is not the vocabulary word "great": it falls back to the
        // unknown index rather than being stripped or skipped.
        let padded = vocabulary.encode("great!");
        assert_eq!(padded.as_slice()[SEQ_LEN - 1], OOV_INDEX);
    }

    #[test]
    fn test_front_truncation_keeps_most_recent_tokens() {
        let vocabulary = sample_vocabulary();
        let mut words = vec!["the"; 600];
        words[599] = "great";
        let text = words.join(" ");
        let padded = vocabulary.encode(&text);
        assert_eq!(padded.token_count(), SEQ_LEN);
        // "the" -> 4 fills the window; the final "great" -> 7 survives at the end.
        assert_eq!(padded.as_slice()[0], 4);
        assert_eq!(padded.as_slice()[SEQ_LEN - 1], 7);
    }

    #[test]
    fn test_mixed_whitespace_splitting() {
        let vocabulary = sample_vocabulary();
        assert_eq!(
            vocabulary.encode("the\tmovie\n was   great"),
            vocabulary.encode("the movie was great")
        );
    }

    #[test]
    fn test_zero_rank_rejected() {
        let result = Vocabulary::from_entries([("padding", 0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"the": 1, "movie": 2, "was": 3, "great": 4}}"#).unwrap();

        let vocabulary = Vocabulary::from_json_file(file.path()).unwrap();
        assert_eq!(vocabulary.len(), 4);
        assert_eq!(vocabulary.rank("great"), Some(4));
        assert_eq!(vocabulary.rank("xyzzy"), None);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = Vocabulary::from_json_file("/nonexistent/word_index.json");
        assert!(matches!(result, Err(reelsense_core::Error::Config(_))));
    }
}
