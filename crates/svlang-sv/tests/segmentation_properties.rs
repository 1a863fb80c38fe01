//! Property tests for segmentation over generated dictionaries and words.
//!
//! Run: cargo test -p svlang-sv --test segmentation_properties

use proptest::prelude::*;
use svlang_core::character::lowercase_word;
use svlang_sv::compound::{DEFAULT_JOINERS, Segmenter, SegmenterOptions, SplitOrder};
use svlang_sv::dictionary::Dictionary;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Small dense dictionaries over an alphabet that includes joiner letters.
fn dense_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[abse]{1,4}", 1..8)
}

fn split_order() -> impl Strategy<Value = SplitOrder> {
    prop_oneof![
        Just(SplitOrder::LongestPrefixFirst),
        Just(SplitOrder::ShortestPrefixFirst),
    ]
}

/// A first part over {k, l} and a second part over {m, n}. Neither can be
/// mistaken for the other or for a joiner, so `a + b` has one split only.
fn unambiguous_pair() -> impl Strategy<Value = (String, String)> {
    ("k[kl]{1,4}", "m[mn]{1,4}")
}

fn linking_joiner() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["s", "e", "o", "u"])
}

fn segmenter(words: &[String], split_order: SplitOrder) -> Segmenter {
    Segmenter::with_options(
        Dictionary::from_words(words),
        SegmenterOptions {
            split_order,
            ..SegmenterOptions::default()
        },
    )
}

/// Concatenate dictionary members, picked by index, with the given joiners.
fn join_members(words: &[String], picks: &[(usize, usize)]) -> String {
    let mut word = String::new();
    for (i, &(member, joiner)) in picks.iter().enumerate() {
        if i > 0 {
            word.push_str(DEFAULT_JOINERS[joiner % DEFAULT_JOINERS.len()]);
        }
        word.push_str(&words[member % words.len()]);
    }
    word
}

/// Check the structural invariants of one result.
fn check_well_formed(s: &Segmenter, word: &str) -> Result<(), TestCaseError> {
    let r = s.segment(word);
    prop_assert_eq!(r.word(), word);
    if r.is_compound() {
        prop_assert!(r.parts().len() >= 2);
        prop_assert_eq!(r.joiners().len(), r.parts().len() - 1);
        for part in r.parts() {
            prop_assert!(s.dictionary().contains(part), "unknown part {:?}", part);
        }
        for joiner in r.joiners() {
            prop_assert!(DEFAULT_JOINERS.contains(&joiner.as_str()));
        }
        prop_assert_eq!(r.reconstruct(), lowercase_word(word));
    } else {
        prop_assert!(r.joiners().is_empty());
        if word.is_empty() {
            prop_assert!(r.parts().is_empty());
        } else {
            prop_assert_eq!(r.parts(), [lowercase_word(word)]);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn arbitrary_words_are_well_formed(
        words in dense_words(),
        word in "[abseAB ]{0,12}",
        order in split_order(),
    ) {
        let s = segmenter(&words, order);
        check_well_formed(&s, &word)?;
    }

    #[test]
    fn member_concatenations_are_well_formed(
        words in dense_words(),
        picks in prop::collection::vec((0..8usize, 0..5usize), 1..6),
        order in split_order(),
    ) {
        let s = segmenter(&words, order);
        let word = join_members(&words, &picks);
        check_well_formed(&s, &word)?;
        check_well_formed(&s, &word.to_uppercase())?;
    }

    #[test]
    fn padded_words_reconstruct_exactly(
        (a, b) in unambiguous_pair(),
        left in "[ \t]{0,2}",
        right in "[ \t]{0,2}",
    ) {
        let s = segmenter(&[a.clone(), b.clone()], SplitOrder::default());
        let word = format!("{left}{a}{b}{right}");
        check_well_formed(&s, &word)?;
        if !left.is_empty() || !right.is_empty() {
            prop_assert!(!s.segment(&word).is_compound());
        }
    }

    #[test]
    fn known_words_stay_whole_when_kept(
        words in dense_words(),
        index in 0..8usize,
    ) {
        let s = Segmenter::with_options(
            Dictionary::from_words(&words),
            SegmenterOptions {
                keep_known_words: true,
                ..SegmenterOptions::default()
            },
        );
        let word = &words[index % words.len()];
        let r = s.segment(word);
        prop_assert!(!r.is_compound());
        prop_assert_eq!(r.parts(), [word.clone()]);
    }

    #[test]
    fn sole_member_is_not_split(word in "[a-z\u{00E5}\u{00E4}\u{00F6}]{1,10}") {
        let s = segmenter(&[word.clone()], SplitOrder::default());
        let r = s.segment(&word);
        prop_assert!(!r.is_compound());
        prop_assert_eq!(r.parts(), [word.clone()]);
    }

    #[test]
    fn pair_splits_into_members(
        (a, b) in unambiguous_pair(),
        order in split_order(),
    ) {
        let s = segmenter(&[a.clone(), b.clone()], order);
        for word in [format!("{a}{b}"), format!("{a}{b}").to_uppercase()] {
            let r = s.segment(&word);
            prop_assert!(r.is_compound());
            prop_assert_eq!(r.parts(), [a.clone(), b.clone()]);
            prop_assert_eq!(r.joiners(), [String::new()]);
        }
    }

    #[test]
    fn joiner_is_consumed(
        (a, b) in unambiguous_pair(),
        joiner in linking_joiner(),
        order in split_order(),
    ) {
        let s = segmenter(&[a.clone(), b.clone()], order);
        let r = s.segment(&format!("{a}{joiner}{b}"));
        prop_assert!(r.is_compound());
        prop_assert_eq!(r.parts(), [a.clone(), b.clone()]);
        prop_assert_eq!(r.joiners(), [joiner.to_string()]);
    }

    #[test]
    fn segmentation_is_deterministic(
        words in dense_words(),
        word in "[abse]{0,14}",
        order in split_order(),
    ) {
        let s = segmenter(&words, order);
        let first = s.segment(&word);
        prop_assert_eq!(&first, &s.segment(&word));
        prop_assert_eq!(&first, &segmenter(&words, order).segment(&word));
    }
}
