//! Property tests for the encoding contract

use proptest::prelude::*;
use reelsense_encoder::{Vocabulary, INDEX_OFFSET, OOV_INDEX, PAD_INDEX, SEQ_LEN};

fn sample_vocabulary() -> Vocabulary {
    Vocabulary::from_entries([
        ("the", 1),
        ("movie", 2),
        ("was", 3),
        ("great", 4),
        ("boring", 5),
        ("acting", 6),
    ])
    .expect("sample vocabulary is valid")
}

proptest! {
    /// The output length is exactly SEQ_LEN for every input, no matter how
    /// short, long, or strange the text is.
    #[test]
    fn encoded_length_is_always_fixed(text in ".*") {
        let vocabulary = sample_vocabulary();
        prop_assert_eq!(vocabulary.encode(&text).as_slice().len(), SEQ_LEN);
    }

    /// For inputs of at most SEQ_LEN tokens, the result is the token-by-token
    /// mapping left-padded with zeros.
    #[test]
    fn short_inputs_pad_on_the_left(words in proptest::collection::vec("[a-z]{1,8}", 0..SEQ_LEN)) {
        let vocabulary = sample_vocabulary();
        let text = words.join(" ");
        let padded = vocabulary.encode(&text);

        let expected: Vec<u32> = words
            .iter()
            .map(|word| vocabulary.rank(word).map_or(OOV_INDEX, |rank| rank + INDEX_OFFSET))
            .collect();

        let pad_len = SEQ_LEN - expected.len();
        prop_assert!(padded.as_slice()[..pad_len].iter().all(|&index| index == PAD_INDEX));
        prop_assert_eq!(&padded.as_slice()[pad_len..], expected.as_slice());
    }

    /// For inputs longer than SEQ_LEN tokens, only the last SEQ_LEN survive.
    #[test]
    fn long_inputs_truncate_from_the_front(words in proptest::collection::vec("[a-z]{1,8}", SEQ_LEN + 1..SEQ_LEN + 100)) {
        let vocabulary = sample_vocabulary();
        let text = words.join(" ");
        let padded = vocabulary.encode(&text);

        let expected: Vec<u32> = words[words.len() - SEQ_LEN..]
            .iter()
            .map(|word| vocabulary.rank(word).map_or(OOV_INDEX, |rank| rank + INDEX_OFFSET))
            .collect();

        prop_assert_eq!(padded.as_slice(), expected.as_slice());
    }

    /// Lowercasing first means case never changes the encoding.
    #[test]
    fn encoding_is_case_insensitive(words in proptest::collection::vec("[a-zA-Z]{1,8}", 0..50)) {
        let vocabulary = sample_vocabulary();
        let text = words.join(" ");
        prop_assert_eq!(
            vocabulary.encode(&text),
            vocabulary.encode(&text.to_lowercase())
        );
    }
}
