//! Reelsense Encoder
//!
//! Maps free-form review text into the fixed-shape integer input the
//! pre-trained sentiment scorer expects.
//!
//! The encoding convention matches the corpus the scorer was trained on:
//! words are ranked by frequency (1-indexed), ranks are shifted by a fixed
//! offset so indices 0/1/2 stay reserved for the padding/start/unknown
//! sentinels, and every review is fitted to exactly [`SEQ_LEN`] positions by
//! left-padding or front-truncation.
//!
//! Encoding is a pure function of (text, vocabulary): no state, no failure
//! modes. Unknown words are mapped to [`OOV_INDEX`], never rejected.

pub mod sequence;
pub mod vocabulary;

pub use sequence::{PaddedReview, INDEX_OFFSET, OOV_INDEX, OOV_RANK, PAD_INDEX, SEQ_LEN};
pub use vocabulary::Vocabulary;
