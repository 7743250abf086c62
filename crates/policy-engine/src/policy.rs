//! Stored policies, inquiries, and the decision outcome.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Context key the reference checker consults on every inquiry.
pub const CONDITION_KEY: &str = "condition";

/// A stored access-control rule: one expected string value per category.
///
/// Immutable once compiled; the id is unique within a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Store-unique identifier.
    pub id: String,
    /// Expected inquiry subject.
    pub subject_rule: String,
    /// Expected inquiry action.
    pub action_rule: String,
    /// Expected inquiry resource.
    pub resource_rule: String,
    /// Expected value of the inquiry's `condition` context entry.
    pub condition_rule: String,
}

/// A concrete access request submitted for a decision.
///
/// Ephemeral: built per evaluation call and dropped afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    pub subject: String,
    pub action: String,
    pub resource: String,
    /// Free-form context; carries at least the [`CONDITION_KEY`] entry.
    pub context: HashMap<String, String>,
}

impl Inquiry {
    /// Build an inquiry whose context holds the single `condition` entry.
    pub fn new(
        subject: impl Into<String>,
        action: impl Into<String>,
        resource: impl Into<String>,
        condition: impl Into<String>,
    ) -> Self {
        let mut context = HashMap::new();
        context.insert(CONDITION_KEY.to_string(), condition.into());
        Self {
            subject: subject.into(),
            action: action.into(),
            resource: resource.into(),
            context,
        }
    }

    /// The `condition` context entry, if present.
    pub fn condition(&self) -> Option<&str> {
        self.context.get(CONDITION_KEY).map(String::as_str)
    }
}

/// The outcome of evaluating an inquiry: two terminal states, nothing
/// partial or pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        self == Decision::Allow
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Allow => "allow",
            Decision::Deny => "deny",
        }
    }

    /// The enforcement phrase reported at the response boundary.
    pub fn enforcement_str(self) -> &'static str {
        match self {
            Decision::Allow => "Access Granted",
            Decision::Deny => "Access Denied",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inquiry_new_populates_condition_context() {
        let inquiry = Inquiry::new("user", "read", "file", "ifOnline");
        assert_eq!(inquiry.condition(), Some("ifOnline"));
        assert_eq!(inquiry.context.len(), 1);
    }

    #[test]
    fn missing_condition_is_none_not_a_panic() {
        let inquiry = Inquiry {
            subject: "user".into(),
            action: "read".into(),
            resource: "file".into(),
            context: HashMap::new(),
        };
        assert_eq!(inquiry.condition(), None);
    }

    #[test]
    fn decision_enforcement_strings() {
        assert_eq!(Decision::Allow.enforcement_str(), "Access Granted");
        assert_eq!(Decision::Deny.enforcement_str(), "Access Denied");
        assert!(Decision::Allow.is_allowed());
        assert!(!Decision::Deny.is_allowed());
    }

    #[test]
    fn decision_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Decision::Allow).unwrap(), "\"allow\"");
        assert_eq!(serde_json::to_string(&Decision::Deny).unwrap(), "\"deny\"");
    }
}
