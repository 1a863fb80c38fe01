// Known-word dictionary
//
// The dictionary is the leaf component of segmentation: an immutable set of
// normalized words, built once and then only read. It can come from a
// newline-delimited wordlist, from a caller-supplied set, or from the
// built-in fallback vocabulary.

pub mod builtin;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use hashbrown::HashSet;
use svlang_core::character::normalize_word;

pub use builtin::BUILTIN_WORDS;

/// Lines starting with this character are comments in a wordlist file.
pub const COMMENT_MARKER: char = '#';

/// Error type for wordlist loading failures.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The wordlist file could not be opened.
    #[error("failed to open wordlist {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading failed partway through (I/O error or invalid UTF-8).
    #[error("failed to read wordlist at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

impl DictionaryError {
    /// Whether the error means the wordlist simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Open { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Trait for word membership lookups used by the segmenter.
///
/// `contains_normalized` receives a word that is already lowercased, as
/// [`normalize_word`] or the segmenter produce it; `contains` accepts any
/// casing and surrounding whitespace.
pub trait WordSet {
    /// Check membership of an already-normalized word.
    fn contains_normalized(&self, word: &str) -> bool;

    /// Case-insensitive membership check.
    fn contains(&self, word: &str) -> bool {
        self.contains_normalized(&normalize_word(word))
    }
}

impl<T: WordSet + ?Sized> WordSet for &T {
    fn contains_normalized(&self, word: &str) -> bool {
        (**self).contains_normalized(word)
    }
}

impl<T: WordSet + ?Sized> WordSet for Arc<T> {
    fn contains_normalized(&self, word: &str) -> bool {
        (**self).contains_normalized(word)
    }
}

/// An immutable set of known root words.
///
/// Every entry is normalized at construction, so membership tests are
/// case-insensitive. There is no way to add or remove words afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from caller-supplied words.
    ///
    /// Entries are normalized; blank entries are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize_word(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Build the fallback dictionary from [`BUILTIN_WORDS`].
    ///
    /// Each call builds a fresh set; nothing is shared between dictionaries.
    pub fn builtin() -> Self {
        Self::from_words(BUILTIN_WORDS)
    }

    /// Parse a newline-delimited wordlist.
    ///
    /// Lines whose first character is [`COMMENT_MARKER`] and blank lines are
    /// skipped. Every other line is trimmed and lowercased into one entry.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let mut words = HashSet::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| DictionaryError::Read {
                line: index + 1,
                source,
            })?;
            if line.starts_with(COMMENT_MARKER) {
                continue;
            }
            let word = normalize_word(&line);
            if !word.is_empty() {
                words.insert(word);
            }
        }
        Ok(Self { words })
    }

    /// Load a wordlist file.
    ///
    /// The file handle lives only for the duration of this call and is
    /// closed whether reading succeeds or fails.
    pub fn from_path(path: &Path) -> Result<Self, DictionaryError> {
        let file = File::open(path).map_err(|source| DictionaryError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::from_reader(BufReader::new(file))?;
        log::debug!(
            "loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Load a wordlist if one is given and readable, otherwise fall back to
    /// the built-in vocabulary. Never fails.
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::debug!("no wordlist given, using built-in vocabulary");
            return Self::builtin();
        };
        match Self::from_path(path) {
            Ok(dictionary) => dictionary,
            Err(e) if e.is_not_found() => {
                log::info!(
                    "wordlist {} not found, using built-in vocabulary",
                    path.display()
                );
                Self::builtin()
            }
            Err(e) => {
                log::warn!("{e}; using built-in vocabulary");
                Self::builtin()
            }
        }
    }

    /// Case-insensitive membership check.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(normalize_word(word).as_str())
    }

    /// Membership check for a word that is already normalized.
    pub fn contains_normalized(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl WordSet for Dictionary {
    fn contains_normalized(&self, word: &str) -> bool {
        Dictionary::contains_normalized(self, word)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
