//! Property tests for the segmentation invariants

use proptest::prelude::*;
use silben_core::{simple_split, FallbackPolicy, Segmenter};

const LETTERS: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'ä', 'ö', 'ü',
];

fn german_word() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(LETTERS), 1..16)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn concatenation_reproduces_word(word in german_word(), count in 0usize..8) {
        let syllables = Segmenter::german().segment(&word, count);
        prop_assert_eq!(syllables.concat(), word);
    }

    #[test]
    fn count_matches_when_word_is_long_enough(word in german_word(), count in 1usize..8) {
        let syllables = Segmenter::german().segment(&word, count);
        let len = word.chars().count();
        prop_assert_eq!(syllables.len(), count.min(len));
        prop_assert!(syllables.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn any_positive_count_keeps_every_character(
        word in german_word(),
        count in 1usize..=usize::MAX,
    ) {
        let syllables = Segmenter::german().segment(&word, count);
        let len = word.chars().count();
        prop_assert_eq!(syllables.len(), count.min(len));
        prop_assert_eq!(syllables.concat(), word);
    }

    #[test]
    fn ceil_chunks_accepts_any_count(word in german_word(), count in any::<usize>()) {
        let pieces = simple_split(&word, count, FallbackPolicy::CeilChunks);
        prop_assert!(pieces.len() <= count.max(1));
        prop_assert_eq!(pieces.concat(), word);
    }

    #[test]
    fn case_does_not_move_breaks(word in german_word(), count in 1usize..6) {
        let segmenter = Segmenter::german();
        let widths = |w: &str| -> Vec<usize> {
            segmenter.segment(w, count).iter().map(|s| s.chars().count()).collect()
        };
        prop_assert_eq!(widths(&word), widths(&word.to_uppercase()));
    }

    #[test]
    fn ceil_chunks_never_loses_characters(word in german_word(), count in 1usize..8) {
        let pieces = simple_split(&word, count, FallbackPolicy::CeilChunks);
        prop_assert!(pieces.len() <= count);
        prop_assert_eq!(pieces.concat(), word);
    }

    #[test]
    fn segmentation_is_deterministic(word in german_word(), count in 1usize..6) {
        let segmenter = Segmenter::german();
        prop_assert_eq!(segmenter.segment(&word, count), segmenter.segment(&word, count));
    }
}
