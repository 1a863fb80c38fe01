// Bounded backtracking search over split points and joiners

use std::ops::Range;

use hashbrown::HashMap;

use super::{SegmenterOptions, SplitOrder};
use crate::dictionary::WordSet;

/// Char ranges of the parts of one segmentation, left to right.
///
/// Gaps between consecutive ranges are the joiners that were consumed.
pub(crate) type Split = Vec<Range<usize>>;

/// Search state for a single `segment` call.
///
/// Every subproblem is a suffix of the normalized word, identified by its
/// start char offset. Its outcome depends only on that offset and the
/// current depth, so results are memoized under `(start, depth)`.
pub(crate) struct Search<'a, W: ?Sized> {
    words: &'a W,
    options: &'a SegmenterOptions,
    text: &'a str,
    /// Byte offset of each char index, plus `text.len()` at the end.
    offsets: Vec<usize>,
    memo: HashMap<(usize, usize), Option<Split>>,
}

impl<'a, W: WordSet + ?Sized> Search<'a, W> {
    /// `text` must already be normalized.
    pub(crate) fn new(words: &'a W, options: &'a SegmenterOptions, text: &'a str) -> Self {
        let offsets = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        Self {
            words,
            options,
            text,
            offsets,
            memo: HashMap::new(),
        }
    }

    /// Search the whole word.
    pub(crate) fn run(&mut self) -> Option<Split> {
        self.split_from(0, 0)
    }

    /// The text covered by a char range.
    pub(crate) fn slice(&self, range: Range<usize>) -> &'a str {
        let text = self.text;
        &text[self.offsets[range.start]..self.offsets[range.end]]
    }

    fn char_len(&self) -> usize {
        self.offsets.len() - 1
    }

    fn is_word(&self, range: Range<usize>) -> bool {
        self.words.contains_normalized(self.slice(range))
    }

    fn split_from(&mut self, start: usize, depth: usize) -> Option<Split> {
        if depth > self.options.max_depth {
            log::trace!(
                "depth limit {} reached at \"{}\"",
                self.options.max_depth,
                self.slice(start..self.char_len())
            );
            return None;
        }
        if let Some(cached) = self.memo.get(&(start, depth)) {
            return cached.clone();
        }
        let result = self.search(start, depth);
        self.memo.insert((start, depth), result.clone());
        result
    }

    fn search(&mut self, start: usize, depth: usize) -> Option<Split> {
        let options = self.options;
        let min = options.min_part_len;
        let end = self.char_len();
        let len = end - start;

        // Too short to hold two parts: only a whole-word match can succeed.
        if len < min * 2 {
            return self.is_word(start..end).then(|| vec![start..end]);
        }

        let prefix_lens: Vec<usize> = match options.split_order {
            SplitOrder::LongestPrefixFirst => (min..=len - min).rev().collect(),
            SplitOrder::ShortestPrefixFirst => (min..=len - min).collect(),
        };

        let mut best: Option<Split> = None;
        for prefix_len in prefix_lens {
            let cut = start + prefix_len;
            if !self.is_word(start..cut) {
                continue;
            }

            for joiner in &options.joiners {
                let rest_start = if joiner.is_empty() {
                    cut
                } else if self.slice(cut..end).starts_with(joiner.as_str()) {
                    cut + joiner.chars().count()
                } else {
                    continue;
                };
                if rest_start >= end {
                    continue;
                }

                let candidate = if self.is_word(rest_start..end) {
                    vec![start..cut, rest_start..end]
                } else {
                    let Some(sub) = self.split_from(rest_start, depth + 1) else {
                        continue;
                    };
                    let mut parts = Vec::with_capacity(sub.len() + 1);
                    parts.push(start..cut);
                    parts.extend(sub);
                    parts
                };

                // Strictly fewer parts only: the earliest candidate wins ties.
                if best.as_ref().is_none_or(|b| candidate.len() < b.len()) {
                    best = Some(candidate);
                }
            }

            // Nothing beats two parts, so the longest such prefix is final.
            if options.split_order == SplitOrder::LongestPrefixFirst
                && best.as_ref().is_some_and(|b| b.len() == 2)
            {
                return best;
            }
        }
        best
    }
}
