//! The decision engine: evaluates inquiries against the shared store.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::checker::Checker;
use crate::policy::{Decision, Inquiry};
use crate::store::SharedStore;

/// Evaluates inquiries against stored policies via a pluggable [`Checker`].
///
/// Construct one guard at process start and share it across requests.  Each
/// call to [`evaluate`](Self::evaluate) is synchronous, independent of prior
/// calls (store mutation aside), and costs O(number of stored policies).
pub struct Guard {
    store: SharedStore,
    checker: Arc<dyn Checker>,
}

impl Guard {
    pub fn new(store: SharedStore, checker: Arc<dyn Checker>) -> Self {
        Self { store, checker }
    }

    /// The shared store this guard evaluates against.
    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Scan stored policies in insertion order; Allow on the first match,
    /// Deny when none match or the store is empty.  "No match" is a normal
    /// outcome, never an error.
    pub fn evaluate(&self, inquiry: &Inquiry) -> Decision {
        self.evaluate_with_match(inquiry).0
    }

    /// Like [`evaluate`](Self::evaluate), additionally reporting the id of
    /// the first matching policy for audit trails.
    pub fn evaluate_with_match(&self, inquiry: &Inquiry) -> (Decision, Option<String>) {
        let store = self.store.read();

        for policy in store.iter() {
            if self.checker.matches(policy, inquiry) {
                debug!(
                    policy_id = %policy.id,
                    subject = %inquiry.subject,
                    action = %inquiry.action,
                    resource = %inquiry.resource,
                    "inquiry allowed"
                );
                return (Decision::Allow, Some(policy.id.clone()));
            }
            trace!(policy_id = %policy.id, "policy did not match inquiry");
        }

        debug!(
            subject = %inquiry.subject,
            action = %inquiry.action,
            resource = %inquiry.resource,
            stored = store.len(),
            "no policy matched; inquiry denied"
        );
        (Decision::Deny, None)
    }

    /// Convenience wrapper mirroring the classic guard API.
    pub fn is_allowed(&self, inquiry: &Inquiry) -> bool {
        self.evaluate(inquiry).is_allowed()
    }
}
