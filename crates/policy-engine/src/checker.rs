//! Pluggable matching strategy between one policy and one inquiry.

use crate::policy::{Inquiry, Policy, CONDITION_KEY};

/// Matching strategy boundary.
///
/// The guard asks the checker whether a stored [`Policy`] applies to an
/// [`Inquiry`].  Richer rule types (wildcards, prefixes, numeric ranges,
/// boolean composition) slot in here without touching the guard or the
/// store.
pub trait Checker: Send + Sync {
    fn matches(&self, policy: &Policy, inquiry: &Inquiry) -> bool;
}

/// Reference strategy: exact string equality on all four categories.
///
/// The condition is read from the inquiry's context map; an absent
/// `condition` key simply fails the comparison (a Deny, not an error).
pub struct EqualityChecker;

impl Checker for EqualityChecker {
    fn matches(&self, policy: &Policy, inquiry: &Inquiry) -> bool {
        let condition_matches = inquiry
            .context
            .get(CONDITION_KEY)
            .is_some_and(|c| *c == policy.condition_rule);

        policy.subject_rule == inquiry.subject
            && policy.action_rule == inquiry.action
            && policy.resource_rule == inquiry.resource
            && condition_matches
    }
}
