//! In-memory policy storage.
//!
//! Insertion-ordered so evaluation outcomes are deterministic when several
//! policies are stored, with an id index for O(1) lookup.  One store is
//! shared across concurrently-served evaluations behind a reader-writer
//! lock: `add` takes the write side, evaluation enumerates under the read
//! side.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::PolicyError;
use crate::policy::Policy;

/// Insertion-ordered mapping from policy id to [`Policy`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Policies in insertion order; evaluation scans this.
    policies: Vec<Policy>,
    /// Id -> position in `policies`.
    index: HashMap<String, usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a policy, rejecting duplicate ids before any state changes.
    pub fn add(&mut self, policy: Policy) -> Result<(), PolicyError> {
        if self.index.contains_key(&policy.id) {
            return Err(PolicyError::DuplicateId(policy.id));
        }

        debug!(policy_id = %policy.id, position = self.policies.len(), "policy stored");
        self.index.insert(policy.id.clone(), self.policies.len());
        self.policies.push(policy);
        Ok(())
    }

    /// Look up a policy by id.
    pub fn get(&self, id: &str) -> Option<&Policy> {
        self.index.get(id).map(|&pos| &self.policies[pos])
    }

    /// Enumerate policies in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Policy> {
        self.policies.iter()
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

/// A store shared across evaluations.
pub type SharedStore = Arc<RwLock<MemoryStore>>;

/// Wrap a store for sharing.
pub fn shared(store: MemoryStore) -> SharedStore {
    Arc::new(RwLock::new(store))
}
