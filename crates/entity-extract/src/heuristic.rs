//! Built-in lexicon-and-position extractor.
//!
//! Approximates the dependency roles a statistical parser would assign
//! (nominal subject, root predicate, direct object, adverbial/prepositional
//! qualifiers) using word lists and token position.  Good enough to drive
//! the pipeline end to end; accuracy is explicitly out of scope and a real
//! NLP backend can replace this behind [`EntityExtractor`].

use regex::Regex;
use tracing::trace;

use crate::bundle::{EntityBundle, EntityCategory};
use crate::extractor::{EntityExtractor, ExtractError};
use crate::lexicon;

/// Token pattern: word characters plus apostrophes, so contractions stay
/// whole ("doesn't").
const TOKEN_PATTERN: &str = r"[A-Za-z0-9_']+";

/// Where we are within one sentence while classifying tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Hunting for the subject noun.
    Subject,
    /// Subject found; hunting for the predicate verb.
    Action,
    /// Predicate found; hunting for the direct object.
    Resource,
    /// Main clause exhausted; remaining tokens are trailing context.
    Tail,
    /// A condition marker or preposition was seen; the rest of the
    /// sentence qualifies the grant.
    Condition,
}

/// Rule-based [`EntityExtractor`] implementation.
///
/// The tokenizer pattern is compiled once at construction.
pub struct HeuristicExtractor {
    token_re: Regex,
}

impl HeuristicExtractor {
    /// Build the extractor, compiling the tokenizer pattern.
    pub fn new() -> Result<Self, ExtractError> {
        let token_re = Regex::new(TOKEN_PATTERN)?;
        Ok(Self { token_re })
    }

    /// Classify the tokens of a single sentence into `bundle`.
    fn classify_sentence(&self, sentence: &str, bundle: &mut EntityBundle) {
        let mut phase = Phase::Subject;

        for m in self.token_re.find_iter(sentence) {
            let token = m.as_str();

            // Condition markers and prepositions flip the sentence into the
            // condition clause regardless of the current phase.
            if phase != Phase::Condition {
                if lexicon::contains(lexicon::CONDITION_MARKERS, token) {
                    // The marker itself is grammar, not content; the clause
                    // that follows carries the condition.
                    phase = Phase::Condition;
                    continue;
                }
                if lexicon::contains(lexicon::PREPOSITIONS, token) {
                    // Dependency parsers label the preposition itself as the
                    // qualifier, so it is recorded as a condition token.
                    bundle.push(EntityCategory::Condition, token);
                    phase = Phase::Condition;
                    continue;
                }
            }

            match phase {
                Phase::Subject => {
                    if lexicon::contains(lexicon::DETERMINERS, token)
                        || lexicon::contains(lexicon::MODALS, token)
                    {
                        continue;
                    }
                    bundle.push(EntityCategory::Subject, token);
                    phase = Phase::Action;
                }
                Phase::Action => {
                    if lexicon::contains(lexicon::DETERMINERS, token)
                        || lexicon::contains(lexicon::MODALS, token)
                    {
                        continue;
                    }
                    bundle.push(EntityCategory::Action, token);
                    phase = Phase::Resource;
                }
                Phase::Resource => {
                    if lexicon::contains(lexicon::DETERMINERS, token) {
                        continue;
                    }
                    bundle.push(EntityCategory::Resource, token);
                    phase = Phase::Tail;
                }
                Phase::Tail => {
                    trace!(token, "ignoring trailing main-clause token");
                }
                Phase::Condition => {
                    if lexicon::contains(lexicon::DETERMINERS, token) {
                        continue;
                    }
                    bundle.push(EntityCategory::Condition, token);
                }
            }
        }
    }
}

impl EntityExtractor for HeuristicExtractor {
    fn extract(&self, text: &str) -> Result<EntityBundle, ExtractError> {
        let mut bundle = EntityBundle::new();

        // Sentence boundaries reset the phase machine so multi-sentence
        // statements yield one entry per sentence per category.
        for sentence in text.split(|c: char| matches!(c, '.' | ';' | '\n')) {
            let sentence = sentence.trim();
            if sentence.is_empty() {
                continue;
            }
            self.classify_sentence(sentence, &mut bundle);
        }

        trace!(
            subjects = bundle.subjects.len(),
            actions = bundle.actions.len(),
            resources = bundle.resources.len(),
            conditions = bundle.conditions.len(),
            "extraction complete"
        );

        Ok(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> EntityBundle {
        HeuristicExtractor::new().unwrap().extract(text).unwrap()
    }

    // ---- basic clause shapes ----

    #[test]
    fn simple_grant_fills_all_categories() {
        let bundle = extract("the user can read a file if online");
        assert_eq!(bundle.subjects, vec!["user"]);
        assert_eq!(bundle.actions, vec!["read"]);
        assert_eq!(bundle.resources, vec!["file"]);
        assert_eq!(bundle.conditions, vec!["online"]);
    }

    #[test]
    fn determiners_and_modals_are_skipped() {
        let bundle = extract("an admin must delete every record");
        assert_eq!(bundle.subjects, vec!["admin"]);
        assert_eq!(bundle.actions, vec!["delete"]);
        assert_eq!(bundle.resources, vec!["record"]);
        assert!(bundle.conditions.is_empty());
    }

    #[test]
    fn preposition_is_recorded_as_condition_token() {
        let bundle = extract("the operator may restart servers during maintenance");
        assert_eq!(bundle.subjects, vec!["operator"]);
        assert_eq!(bundle.actions, vec!["restart"]);
        assert_eq!(bundle.resources, vec!["servers"]);
        // The preposition itself plus the clause content that follows.
        assert_eq!(bundle.conditions, vec!["during", "maintenance"]);
    }

    #[test]
    fn condition_clause_content_is_captured_without_the_marker() {
        let bundle = extract("alice can approve invoices when authenticated");
        assert_eq!(bundle.conditions, vec!["authenticated"]);
    }

    // ---- incomplete statements ----

    #[test]
    fn bare_noun_yields_incomplete_bundle() {
        let bundle = extract("file");
        assert_eq!(bundle.subjects, vec!["file"]);
        assert!(bundle.actions.is_empty());
        assert!(bundle.resources.is_empty());
        assert!(bundle.conditions.is_empty());
        assert!(!bundle.is_complete());
    }

    #[test]
    fn empty_text_yields_empty_bundle() {
        let bundle = extract("   \n  ");
        assert_eq!(bundle, EntityBundle::new());
    }

    // ---- ordering and multiplicity ----

    #[test]
    fn multiple_sentences_append_in_order() {
        let bundle = extract("alice can read reports. bob can write logs.");
        assert_eq!(bundle.subjects, vec!["alice", "bob"]);
        assert_eq!(bundle.actions, vec!["read", "write"]);
        assert_eq!(bundle.resources, vec!["reports", "logs"]);
    }

    #[test]
    fn duplicate_tokens_are_preserved() {
        let bundle = extract("alice can read files. alice can read logs.");
        assert_eq!(bundle.subjects, vec!["alice", "alice"]);
        assert_eq!(bundle.actions, vec!["read", "read"]);
    }

    #[test]
    fn trailing_main_clause_tokens_are_ignored() {
        let bundle = extract("the auditor can inspect records remotely today");
        assert_eq!(bundle.resources, vec!["records"]);
        // "remotely today" fall in the tail; they belong to no category.
        assert!(bundle.conditions.is_empty());
    }
}
