//! Word lists backing the heuristic extractor.
//!
//! Kept as static slices so they are available at zero runtime cost; the
//! extractor consults them during token classification.  All entries are
//! lowercase -- lookups must lowercase the token first.

/// Determiners and similar noise words skipped when hunting for the subject
/// and resource nouns.
pub static DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "any", "all", "each",
    "every", "some", "no",
];

/// Modal and auxiliary verbs that typically precede the root predicate
/// ("the user **can** read...").
pub static MODALS: &[&str] = &[
    "can", "may", "must", "shall", "should", "will", "would", "could",
    "might", "is", "are", "be",
];

/// Subordinating markers that open an adverbial (condition) clause.
pub static CONDITION_MARKERS: &[&str] = &[
    "if", "when", "whenever", "unless", "while", "until", "once", "provided",
    "where",
];

/// Prepositions treated as condition qualifiers, mirroring dependency
/// parsers that label them `prep`.
pub static PREPOSITIONS: &[&str] = &[
    "during", "after", "before", "within", "from", "between", "outside",
    "inside", "via", "through", "on", "at",
];

/// Case-insensitive membership test against one of the lists above.
pub fn contains(list: &[&str], token: &str) -> bool {
    let lower = token.to_lowercase();
    list.iter().any(|w| *w == lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_entries_are_lowercase() {
        for list in [DETERMINERS, MODALS, CONDITION_MARKERS, PREPOSITIONS] {
            for word in list {
                assert_eq!(*word, word.to_lowercase(), "entry must be lowercase");
            }
        }
    }

    #[test]
    fn entries_are_unique_within_each_list() {
        for list in [DETERMINERS, MODALS, CONDITION_MARKERS, PREPOSITIONS] {
            let mut seen = std::collections::HashSet::new();
            for word in list {
                assert!(seen.insert(*word), "duplicate lexicon entry: {word}");
            }
        }
    }

    #[test]
    fn contains_is_case_insensitive() {
        assert!(contains(MODALS, "Can"));
        assert!(contains(CONDITION_MARKERS, "IF"));
        assert!(!contains(DETERMINERS, "user"));
    }
}
