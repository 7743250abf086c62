//! Policy compilation: validated entity bundle in, stored policy plus
//! exchange document out.

use entity_extract::EntityBundle;
use tracing::debug;

use crate::error::PolicyError;
use crate::policy::Policy;
use crate::xacml;

/// The two artifacts compilation produces from one bundle.
#[derive(Debug, Clone)]
pub struct CompiledPolicy {
    /// The equality-rule policy ready for storage.
    pub policy: Policy,
    /// The serialized exchange document (XML), a rendering of the same
    /// validated data.
    pub document: String,
}

/// Compile `bundle` into a [`Policy`] with id `id` plus its exchange
/// document.
///
/// Validation runs eagerly: a bundle with any empty category list fails
/// with [`PolicyError::EmptyCategory`] before any policy is constructed,
/// never with an index fault.  Each equality rule captures the first
/// element of its category list; the document carries the full lists.
pub fn compile(id: impl Into<String>, bundle: &EntityBundle) -> Result<CompiledPolicy, PolicyError> {
    if let Some(category) = bundle.first_empty_category() {
        return Err(PolicyError::EmptyCategory { category });
    }

    // Validation above guarantees every list has a first element.
    let policy = Policy {
        id: id.into(),
        subject_rule: bundle.subjects[0].clone(),
        action_rule: bundle.actions[0].clone(),
        resource_rule: bundle.resources[0].clone(),
        condition_rule: bundle.conditions[0].clone(),
    };

    let document = xacml::render(bundle)?;

    debug!(
        policy_id = %policy.id,
        subject = %policy.subject_rule,
        action = %policy.action_rule,
        resource = %policy.resource_rule,
        condition = %policy.condition_rule,
        "compiled policy"
    );

    Ok(CompiledPolicy { policy, document })
}
