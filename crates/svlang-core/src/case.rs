// Case type detection and conversion

use crate::character::{is_lower, is_upper, simple_lower, simple_upper};

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found in the word (only digits, punctuation, etc.).
    NoLetters,
    /// All letters are lowercase: "bok".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Bok".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "bOk".
    Complex,
    /// All letters are uppercase: "BOK".
    AllUpper,
}

/// Detect the case pattern of a word.
///
/// Non-letter characters (digits, punctuation) are ignored when
/// determining the case pattern.
pub fn detect_case(word: &str) -> CaseType {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return CaseType::NoLetters;
    };

    let mut first_uc = false;
    let mut rest_lc = true;
    let mut all_uc = true;
    let mut no_letters = true;

    if is_upper(first) {
        first_uc = true;
        no_letters = false;
    }
    if is_lower(first) {
        all_uc = false;
        no_letters = false;
    }

    for c in chars {
        if is_upper(c) {
            no_letters = false;
            rest_lc = false;
        }
        if is_lower(c) {
            all_uc = false;
            no_letters = false;
        }
    }

    if no_letters {
        return CaseType::NoLetters;
    }
    if all_uc {
        return CaseType::AllUpper;
    }
    if !rest_lc {
        return CaseType::Complex;
    }
    if first_uc {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}

/// Return `word` rewritten in the given case pattern.
///
/// - `NoLetters` / `Complex` -- returned unchanged.
/// - `AllLower` -- every letter is lowercased.
/// - `AllUpper` -- every letter is uppercased.
/// - `FirstUpper` -- first character is uppercased, rest are lowercased.
pub fn apply_case(word: &str, case_type: CaseType) -> String {
    match case_type {
        CaseType::NoLetters | CaseType::Complex => word.to_string(),
        CaseType::AllLower => word.chars().map(simple_lower).collect(),
        CaseType::AllUpper => word.chars().map(simple_upper).collect(),
        CaseType::FirstUpper => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => std::iter::once(simple_upper(first))
                    .chain(chars.map(simple_lower))
                    .collect(),
                None => String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_empty() {
        assert_eq!(detect_case(""), CaseType::NoLetters);
    }

    #[test]
    fn detect_no_letters() {
        assert_eq!(detect_case("123"), CaseType::NoLetters);
        assert_eq!(detect_case("..."), CaseType::NoLetters);
    }

    #[test]
    fn detect_patterns() {
        assert_eq!(detect_case("barnbok"), CaseType::AllLower);
        assert_eq!(detect_case("Barnbok"), CaseType::FirstUpper);
        assert_eq!(detect_case("BARNBOK"), CaseType::AllUpper);
        assert_eq!(detect_case("barnBok"), CaseType::Complex);
    }

    #[test]
    fn detect_with_digits() {
        assert_eq!(detect_case("abc123"), CaseType::AllLower);
        assert_eq!(detect_case("ABC123"), CaseType::AllUpper);
        assert_eq!(detect_case("Abc123"), CaseType::FirstUpper);
    }

    #[test]
    fn detect_swedish_chars() {
        assert_eq!(detect_case("\u{00E5}ker"), CaseType::AllLower); // åker
        assert_eq!(detect_case("\u{00D6}ga"), CaseType::FirstUpper); // Öga
        assert_eq!(detect_case("\u{00C5}\u{00C4}\u{00D6}"), CaseType::AllUpper); // ÅÄÖ
    }

    #[test]
    fn apply_each_pattern() {
        assert_eq!(apply_case("STOL", CaseType::AllLower), "stol");
        assert_eq!(apply_case("stol", CaseType::AllUpper), "STOL");
        assert_eq!(apply_case("sTOL", CaseType::FirstUpper), "Stol");
        assert_eq!(apply_case("sToL", CaseType::Complex), "sToL");
        assert_eq!(apply_case("42", CaseType::NoLetters), "42");
    }

    #[test]
    fn apply_empty() {
        assert_eq!(apply_case("", CaseType::FirstUpper), "");
        assert_eq!(apply_case("", CaseType::AllUpper), "");
    }

    #[test]
    fn apply_swedish_chars() {
        assert_eq!(apply_case("\u{00F6}ga", CaseType::AllUpper), "\u{00D6}GA");
        assert_eq!(apply_case("\u{00E5}ker", CaseType::FirstUpper), "\u{00C5}ker");
    }

    #[test]
    fn roundtrip_detect_and_apply() {
        let case = detect_case("Sjukhus");
        assert_eq!(case, CaseType::FirstUpper);
        let lowered = apply_case("Sjukhus", CaseType::AllLower);
        assert_eq!(lowered, "sjukhus");
        assert_eq!(apply_case(&lowered, case), "Sjukhus");
    }
}
