use serde::{Deserialize, Serialize};

/// A single line in the decision log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionEntry {
    pub id: uuid::Uuid,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub event: DecisionEvent,
    /// The component that produced the event ("lexguard", "guard", ...).
    pub component: String,
    /// Free-form structured payload (policy ids, inquiry fields, errors).
    pub details: serde_json::Value,
    /// Present on evaluation events; absent for lifecycle events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
}

impl DecisionEntry {
    /// Create an entry with an auto-generated UUID v4 and the current UTC
    /// timestamp.  `verdict` defaults to `None`.
    pub fn new(
        event: DecisionEvent,
        component: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            timestamp: chrono::Utc::now(),
            event,
            component: component.into(),
            details,
            verdict: None,
        }
    }

    /// Attach the evaluation verdict, builder-style.
    pub fn with_verdict(mut self, verdict: Verdict) -> Self {
        self.verdict = Some(verdict);
        self
    }
}

/// The category of pipeline event being recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionEvent {
    ProcessStarted,
    ProcessStopped,
    StoreSeeded,
    PolicyCompiled,
    CompileRejected,
    PolicyStored,
    ExtractionFailed,
    InquiryEvaluated,
}

/// Outcome of one guard evaluation, attached to `InquiryEvaluated` entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    /// "allow" or "deny".
    pub decision: String,
    /// Id of the first matching policy, when the decision was an allow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_policy: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entry_has_unique_id_and_no_verdict() {
        let a = DecisionEntry::new(
            DecisionEvent::ProcessStarted,
            "lexguard",
            serde_json::json!({}),
        );
        let b = DecisionEntry::new(
            DecisionEvent::ProcessStarted,
            "lexguard",
            serde_json::json!({}),
        );
        assert_ne!(a.id, b.id);
        assert!(a.verdict.is_none());
    }

    #[test]
    fn verdict_is_attached_builder_style() {
        let entry = DecisionEntry::new(
            DecisionEvent::InquiryEvaluated,
            "guard",
            serde_json::json!({"subject": "alice"}),
        )
        .with_verdict(Verdict {
            decision: "allow".to_string(),
            matched_policy: Some("p1".to_string()),
        });

        let verdict = entry.verdict.unwrap();
        assert_eq!(verdict.decision, "allow");
        assert_eq!(verdict.matched_policy.as_deref(), Some("p1"));
    }

    #[test]
    fn absent_verdict_is_omitted_from_json() {
        let entry = DecisionEntry::new(
            DecisionEvent::PolicyStored,
            "store",
            serde_json::json!({"policy_id": "p1"}),
        );
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("verdict"));
        assert!(json.contains("policy_stored"));
    }

    #[test]
    fn event_names_serialize_snake_case() {
        let json = serde_json::to_string(&DecisionEvent::InquiryEvaluated).unwrap();
        assert_eq!(json, "\"inquiry_evaluated\"");
    }
}
