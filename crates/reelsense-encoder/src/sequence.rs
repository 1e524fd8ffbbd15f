//! Fixed-length padded input and the encoding constants

/// Number of positions the scorer expects per review
pub const SEQ_LEN: usize = 500;

/// Index used for left-padding positions
pub const PAD_INDEX: u32 = 0;

/// Reserved rank substituted for words absent from the vocabulary
pub const OOV_RANK: u32 = 2;

/// Offset between a vocabulary rank and its model input index.
/// Keeps indices 0/1/2 free for the padding/start/unknown sentinels.
pub const INDEX_OFFSET: u32 = 3;

/// Model input index for out-of-vocabulary words
pub const OOV_INDEX: u32 = OOV_RANK + INDEX_OFFSET;

/// A review encoded to exactly [`SEQ_LEN`] model input indices.
///
/// Shorter reviews are left-padded with [`PAD_INDEX`]; longer reviews keep
/// only their last [`SEQ_LEN`] tokens. This is the sole artifact handed to a
/// scorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedReview([u32; SEQ_LEN]);

impl PaddedReview {
    /// Build from an already-encoded token index sequence, applying the
    /// pad-or-truncate step.
    pub fn from_indices(indices: &[u32]) -> Self {
        let mut positions = [PAD_INDEX; SEQ_LEN];
        let skip = indices.len().saturating_sub(SEQ_LEN);
        let kept = &indices[skip..];
        positions[SEQ_LEN - kept.len()..].copy_from_slice(kept);
        Self(positions)
    }

    /// View the full fixed-length sequence
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Total sequence length (always [`SEQ_LEN`])
    pub fn len(&self) -> usize {
        SEQ_LEN
    }

    /// Whether every position is padding (the empty-review encoding)
    pub fn is_empty(&self) -> bool {
        self.token_count() == 0
    }

    /// Number of non-padding positions
    pub fn token_count(&self) -> usize {
        self.0.iter().filter(|&&index| index != PAD_INDEX).count()
    }

    /// Consume into the raw fixed-length array
    pub fn into_inner(self) -> [u32; SEQ_LEN] {
        self.0
    }
}

impl Default for PaddedReview {
    fn default() -> Self {
        Self([PAD_INDEX; SEQ_LEN])
    }
}
