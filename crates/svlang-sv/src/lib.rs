//! Swedish language module for svlang.
//!
//! - [`dictionary`] -- Known-word set loaded from a wordlist or the built-in vocabulary
//! - [`compound`] -- Compound word segmentation over a dictionary
//!
//! ```
//! use svlang_sv::compound::Segmenter;
//! use svlang_sv::dictionary::Dictionary;
//!
//! let segmenter = Segmenter::new(Dictionary::from_words(["barn", "bok"]));
//! let result = segmenter.segment("Barnbok");
//! assert!(result.is_compound());
//! assert_eq!(result.parts(), ["barn", "bok"]);
//! ```

pub mod compound;
pub mod dictionary;

pub use svlang_core::segmentation::SegmentationResult;
