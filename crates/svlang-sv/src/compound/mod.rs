// Compound word segmentation
//
// Splits a Swedish word into a sequence of dictionary words, allowing a
// linking fragment ("fogemorfem", e.g. the s in "arbetsdag") between parts.
// The search is a bounded backtracking over split points:
// 1. Every prefix that is a dictionary word is a candidate first part.
// 2. The remainder is taken as-is or after stripping one joiner.
// 3. A remainder that is a word closes the split; otherwise it is split
//    recursively, up to `max_depth` levels.
// 4. The candidate with the fewest parts wins; ties go to the one found first
//    in the configured scan order.

mod search;

use svlang_core::character::{lowercase_word, normalize_word};
use svlang_core::segmentation::SegmentationResult;

use crate::dictionary::{Dictionary, WordSet};

use search::Search;

/// Linking fragments tried between two parts, in priority order.
/// The empty fragment (direct boundary) is tried last.
pub const DEFAULT_JOINERS: &[&str] = &["s", "e", "o", "u", ""];

/// Order in which split points are scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SplitOrder {
    /// Scan prefix lengths from longest to shortest and stop at the first
    /// prefix length that yields a two-part split.
    ///
    /// Prefers "sjukhus+byggnad" over "sjuk+husbyggnad".
    #[default]
    LongestPrefixFirst,
    /// Scan prefix lengths from shortest to longest and compare every
    /// candidate by part count, with no early exit.
    ///
    /// Prefers "sjuk+husbyggnad" over "sjukhus+byggnad" when both exist.
    ShortestPrefixFirst,
}

/// Configuration options for the segmenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmenterOptions {
    /// Minimum length of a part, in characters. Values below 1 are treated as 1.
    pub min_part_len: usize,

    /// Maximum recursion depth. The top-level split is depth 0, so a word
    /// can have at most `max_depth + 2` parts.
    pub max_depth: usize,

    /// Joiner fragments, tried in order at every boundary. Include `""` to
    /// allow direct boundaries.
    pub joiners: Vec<String>,

    /// Scan order and tie-break policy.
    pub split_order: SplitOrder,

    /// When true, a word that is itself in the dictionary is reported as a
    /// non-compound without searching for a split.
    pub keep_known_words: bool,
}

impl Default for SegmenterOptions {
    fn default() -> Self {
        Self {
            min_part_len: 2,
            max_depth: 5,
            joiners: DEFAULT_JOINERS.iter().map(|j| j.to_string()).collect(),
            split_order: SplitOrder::default(),
            keep_known_words: false,
        }
    }
}

/// Dictionary-based compound splitter.
///
/// The segmenter holds no mutable state: every call to [`segment`](Self::segment)
/// builds its own search state, so one segmenter can be shared across
/// threads when its word set is `Sync`.
#[derive(Debug, Clone)]
pub struct Segmenter<W = Dictionary> {
    words: W,
    options: SegmenterOptions,
}

impl<W: WordSet> Segmenter<W> {
    /// Create a segmenter with default options.
    pub fn new(words: W) -> Self {
        Self::with_options(words, SegmenterOptions::default())
    }

    /// Create a segmenter with the given options.
    ///
    /// Joiners are normalized like dictionary words.
    pub fn with_options(words: W, mut options: SegmenterOptions) -> Self {
        options.min_part_len = options.min_part_len.max(1);
        for joiner in &mut options.joiners {
            *joiner = normalize_word(joiner);
        }
        Self { words, options }
    }

    pub fn options(&self) -> &SegmenterOptions {
        &self.options
    }

    /// The word set used for lookups.
    pub fn dictionary(&self) -> &W {
        &self.words
    }

    /// Split a word into dictionary parts.
    ///
    /// Never fails: a word with no valid split comes back as a non-compound
    /// whose single part is the lowercased word, and empty input gives a
    /// result with no parts.
    pub fn segment(&self, word: &str) -> SegmentationResult {
        if word.is_empty() {
            return SegmentationResult::empty();
        }
        let lowered = lowercase_word(word);
        if lowered.chars().count() < 2
            || (self.options.keep_known_words && self.words.contains_normalized(&lowered))
        {
            return SegmentationResult::non_compound(word, lowered);
        }

        match self.split_compound(word, &lowered) {
            Some(result) => result,
            None => SegmentationResult::non_compound(word, lowered),
        }
    }

    /// Run the search and build a compound result if it finds two or more parts.
    fn split_compound(&self, word: &str, lowered: &str) -> Option<SegmentationResult> {
        let mut search = Search::new(&self.words, &self.options, lowered);
        let split = search.run().filter(|split| split.len() >= 2)?;
        let parts = split
            .iter()
            .map(|range| search.slice(range.clone()).to_string())
            .collect();
        let joiners = split
            .windows(2)
            .map(|pair| search.slice(pair[0].end..pair[1].start).to_string())
            .collect();
        Some(SegmentationResult::compound(word, parts, joiners))
    }

    /// Whether `word` splits into two or more dictionary parts.
    pub fn is_valid_compound(&self, word: &str) -> bool {
        self.segment(word).is_compound()
    }
}

impl Default for Segmenter<Dictionary> {
    /// A segmenter over the built-in vocabulary.
    fn default() -> Self {
        Self::new(Dictionary::builtin())
    }
}
