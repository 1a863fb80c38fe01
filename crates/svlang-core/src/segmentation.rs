// Compound segmentation result type

use crate::case::{CaseType, apply_case, detect_case};

/// The outcome of segmenting one word.
///
/// A result is either a compound (two or more dictionary parts, with the
/// joiner consumed at each boundary) or a non-compound, whose only part is
/// the lowercased word itself. The empty word has no parts at all.
///
/// Invariants:
/// - `is_compound()` implies `parts().len() >= 2` and
///   `joiners().len() == parts().len() - 1`.
/// - A non-compound result has no joiners and at most one part.
/// - For compounds, [`reconstruct`](Self::reconstruct) equals the
///   lowercased word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SegmentationResult {
    word: String,
    parts: Vec<String>,
    joiners: Vec<String>,
    is_compound: bool,
}

impl SegmentationResult {
    /// Build a compound result.
    ///
    /// `joiners[i]` is the fragment consumed between `parts[i]` and
    /// `parts[i + 1]`; an empty string marks a direct boundary.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if fewer than two parts are given or the
    /// joiner count does not match the boundary count.
    pub fn compound(word: impl Into<String>, parts: Vec<String>, joiners: Vec<String>) -> Self {
        debug_assert!(parts.len() >= 2, "a compound needs at least two parts");
        debug_assert_eq!(joiners.len() + 1, parts.len());
        Self {
            word: word.into(),
            parts,
            joiners,
            is_compound: true,
        }
    }

    /// Build a non-compound result. `lowered` becomes the single part,
    /// unless it is empty, in which case there are no parts.
    pub fn non_compound(word: impl Into<String>, lowered: impl Into<String>) -> Self {
        let lowered = lowered.into();
        let parts = if lowered.is_empty() {
            Vec::new()
        } else {
            vec![lowered]
        };
        Self {
            word: word.into(),
            parts,
            joiners: Vec::new(),
            is_compound: false,
        }
    }

    /// The degenerate result for empty input.
    pub fn empty() -> Self {
        Self::non_compound(String::new(), String::new())
    }

    /// The word as given by the caller, casing preserved.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Lowercase parts in left-to-right order.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Joiner fragments consumed at each boundary.
    pub fn joiners(&self) -> &[String] {
        &self.joiners
    }

    pub fn is_compound(&self) -> bool {
        self.is_compound
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// `true` when there are no parts. The segmenter produces this only
    /// for empty input.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Interleave parts and joiners back into one lowercase string.
    pub fn reconstruct(&self) -> String {
        let mut out = String::with_capacity(self.word.len());
        for (i, part) in self.parts.iter().enumerate() {
            if let Some(joiner) = i.checked_sub(1).and_then(|j| self.joiners.get(j)) {
                out.push_str(joiner);
            }
            out.push_str(part);
        }
        out
    }

    /// Parts rendered in the casing of the original word.
    ///
    /// An all-uppercase word gives all-uppercase parts; a capitalized word
    /// capitalizes only the first part. Mixed-case words get the stored
    /// lowercase parts.
    pub fn display_parts(&self) -> Vec<String> {
        let case = detect_case(&self.word);
        self.parts
            .iter()
            .enumerate()
            .map(|(i, part)| match case {
                CaseType::AllUpper => apply_case(part, CaseType::AllUpper),
                CaseType::FirstUpper if i == 0 => apply_case(part, CaseType::FirstUpper),
                _ => part.clone(),
            })
            .collect()
    }
}
