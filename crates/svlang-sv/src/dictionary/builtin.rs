// Built-in fallback vocabulary
//
// A small set of common Swedish roots, enough to demonstrate segmentation
// when no wordlist file is available. It is far from complete and should
// not be mistaken for real coverage.

/// Fallback vocabulary used by [`Dictionary::builtin`](super::Dictionary::builtin).
/// Entries are lowercase and unique.
pub const BUILTIN_WORDS: &[&str] = &[
    // Common nouns
    "barn", "bil", "bok", "bord", "brev", "bro", "dag", "dator", "del", "djur",
    "d\u{00F6}rr", "fisk", "flyg", "folk", "fot", "f\u{00E4}rg", "f\u{00F6}rening", "gata",
    "glas", "golv", "g\u{00E5}rd", "hand", "hem", "hjul", "hund", "hus", "h\u{00E5}r", "jord",
    "katt", "klass", "klocka", "konst", "kraft", "kropp", "kung", "kvinna", "k\u{00E4}lla",
    "lag", "land", "ljus", "luft", "l\u{00E4}genhet", "man", "mat", "mark", "mor", "musik",
    "natt", "namn", "nyckel", "ord", "papper", "plats", "polis", "program", "rum",
    "r\u{00E4}tt", "sj\u{00F6}", "skog", "skola", "sol", "stad", "stol", "str\u{00F6}m",
    "system", "tak", "tid", "trafik", "tr\u{00E4}", "vagn", "vakt", "vatten", "vin", "vind",
    "v\u{00E4}g", "v\u{00E4}gg", "v\u{00E4}rld", "v\u{00E4}xt", "yta", "\u{00F6}ga", "\u{00F6}ra",
    // Buildings and places
    "bana", "bank", "butik", "fabrik", "kyrka", "plan", "sjukhus", "station", "torget",
    "tunnel",
    // Frequent compound members
    "boll", "brand", "bruk", "by", "b\u{00E5}t", "flod", "hamn", "hyra", "is", "j\u{00E4}rn",
    "krig", "kust", "k\u{00F6}p", "leda", "mot", "park", "resa", "ring", "sand", "sjuk",
    "sn\u{00F6}", "s\u{00E5}ng", "torg", "t\u{00E5}g", "vapen", "v\u{00E5}rd",
    // Sports
    "fotboll", "handboll", "ishockey", "tennis",
    // Society
    "riksdag", "kommun", "ledamot", "minister", "samh\u{00E4}lle", "stat",
    // Transport
    "j\u{00E4}rnv\u{00E4}g", "sp\u{00E5}r", "buss",
    // Adjectives
    "stor", "liten", "ny", "gammal", "ung", "l\u{00E5}ng", "kort", "bred", "h\u{00F6}g",
    "l\u{00E5}g", "varm", "kall", "vit", "svart", "r\u{00F6}d", "bl\u{00E5}", "gr\u{00F6}n",
    "snabb", "sen", "fin", "ren", "fri",
    // Verb stems
    "lek", "spel", "skriv", "l\u{00E4}s", "k\u{00F6}r", "spring", "t\u{00E4}nk", "sov",
    "sjung", "flytt", "bygg", "st\u{00E4}d", "l\u{00E4}r", "s\u{00E4}g",
    // Body parts
    "arm", "ben", "finger", "huvud", "mage", "rygg", "tand",
    // Nature
    "berg", "blad", "blomma", "eld", "frukt", "gren", "sten", "tr\u{00E4}d",
    // House and building
    "f\u{00F6}nster", "k\u{00F6}k", "trapp", "byggnad", "v\u{00E5}ning",
    // Computing
    "data", "fil", "kod", "n\u{00E4}t", "webb", "server", "sk\u{00E4}rm",
    // Prefix forms
    "arbets", "efter", "f\u{00F6}re", "grupp", "halv", "inne", "lands", "mellan", "mitt",
    "riks", "sam", "slut", "stats", "under", "ute", "\u{00F6}ver",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for word in BUILTIN_WORDS {
            assert!(seen.insert(*word), "duplicate builtin word: {word}");
        }
    }

    #[test]
    fn entries_are_normalized() {
        for word in BUILTIN_WORDS {
            assert_eq!(svlang_core::character::normalize_word(word), *word);
            assert!(!word.is_empty());
        }
    }

    #[test]
    fn covers_several_categories() {
        for word in ["barn", "sjukhus", "stor", "bygg", "huvud", "sten", "byggnad", "\u{00F6}ver"] {
            assert!(BUILTIN_WORDS.contains(&word), "missing {word}");
        }
    }
}
