// Character classification and case normalization

// ---------------------------------------------------------------------------
// Swedish alphabet
// ---------------------------------------------------------------------------

/// Letters outside a-z that occur in ordinary Swedish words (lowercase).
const SWEDISH_EXTRA_LETTERS: &[char] = &['\u{00E5}', '\u{00E4}', '\u{00F6}', '\u{00E9}'];

/// Check whether a character is a letter of the Swedish alphabet
/// (case-insensitive): a-z, å, ä, ö and the loan-word é.
pub fn is_swedish_letter(c: char) -> bool {
    let lower = simple_lower(c);
    lower.is_ascii_lowercase() || SWEDISH_EXTRA_LETTERS.contains(&lower)
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library's to_lowercase / to_uppercase yield iterators since
// some characters expand to several. Only the first character is kept, so a
// normalized word always has the same number of chars as its input and char
// offsets computed on one are valid on the other.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c)
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c != simple_upper(c)
}

/// Lowercase every character one-to-one. Whitespace is kept, so the result
/// has exactly the chars of `word` in the same positions.
pub fn lowercase_word(word: &str) -> String {
    word.chars().map(simple_lower).collect()
}

/// Normalize a dictionary entry: trim surrounding whitespace, then
/// [`lowercase_word`].
pub fn normalize_word(word: &str) -> String {
    lowercase_word(word.trim())
}
