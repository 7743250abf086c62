//! The entity-bundle output contract shared with the policy compiler.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The four grammatical roles an extracted token can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    /// Nominal-subject tokens: who the policy statement is about.
    Subject,
    /// Root-predicate tokens: what they are permitted to do.
    Action,
    /// Direct-object tokens: what the action applies to.
    Resource,
    /// Adverbial-clause / prepositional tokens qualifying the grant.
    Condition,
}

impl EntityCategory {
    /// All categories in the order the compiler validates them.
    pub const ALL: [EntityCategory; 4] = [
        EntityCategory::Subject,
        EntityCategory::Action,
        EntityCategory::Resource,
        EntityCategory::Condition,
    ];
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Subject => write!(f, "subject"),
            Self::Action => write!(f, "action"),
            Self::Resource => write!(f, "resource"),
            Self::Condition => write!(f, "condition"),
        }
    }
}

// ---------------------------------------------------------------------------
// Bundle
// ---------------------------------------------------------------------------

/// Categorized entity lists produced by an [`EntityExtractor`].
///
/// Each list preserves extraction order and may contain duplicates; order
/// reflects where tokens appeared in the input, not semantic rank.  The
/// policy compiler reads the *first* element of each list, so an empty list
/// in any category makes the bundle uncompilable.
///
/// [`EntityExtractor`]: crate::extractor::EntityExtractor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityBundle {
    pub subjects: Vec<String>,
    pub actions: Vec<String>,
    pub resources: Vec<String>,
    pub conditions: Vec<String>,
}

impl EntityBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the list for a given category.
    pub fn category(&self, category: EntityCategory) -> &[String] {
        match category {
            EntityCategory::Subject => &self.subjects,
            EntityCategory::Action => &self.actions,
            EntityCategory::Resource => &self.resources,
            EntityCategory::Condition => &self.conditions,
        }
    }

    /// Append a token to the list for `category`, preserving arrival order.
    pub fn push(&mut self, category: EntityCategory, token: impl Into<String>) {
        let list = match category {
            EntityCategory::Subject => &mut self.subjects,
            EntityCategory::Action => &mut self.actions,
            EntityCategory::Resource => &mut self.resources,
            EntityCategory::Condition => &mut self.conditions,
        };
        list.push(token.into());
    }

    /// The first category whose list is empty, if any.
    ///
    /// Used by the compiler to produce a validation error instead of an
    /// index fault.
    pub fn first_empty_category(&self) -> Option<EntityCategory> {
        EntityCategory::ALL
            .into_iter()
            .find(|c| self.category(*c).is_empty())
    }

    /// True when every category has at least one token.
    pub fn is_complete(&self) -> bool {
        self.first_empty_category().is_none()
    }
}
