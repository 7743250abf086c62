//! # policy-engine
//!
//! Core access-control logic for lexguard.  This crate compiles extracted
//! entity bundles into stored policies, renders the XACML-style exchange
//! document, and evaluates inquiries against the stored policies to produce
//! an Allow/Deny decision.
//!
//! ## Quick start
//!
//! ```rust
//! use entity_extract::EntityBundle;
//! use policy_engine::{compile, EqualityChecker, Guard, Inquiry, MemoryStore};
//! use policy_engine::store::shared;
//! use std::sync::Arc;
//!
//! let bundle = EntityBundle {
//!     subjects: vec!["user".into()],
//!     actions: vec!["read".into()],
//!     resources: vec!["file".into()],
//!     conditions: vec!["ifOnline".into()],
//! };
//!
//! let compiled = compile("p1", &bundle).unwrap();
//! let store = shared(MemoryStore::new());
//! store.write().add(compiled.policy).unwrap();
//!
//! let guard = Guard::new(store, Arc::new(EqualityChecker));
//! let inquiry = Inquiry::new("user", "read", "file", "ifOnline");
//! assert!(guard.evaluate(&inquiry).is_allowed());
//! ```

mod checker;
mod compiler;
mod error;
mod guard;
pub mod loader;
mod policy;
pub mod store;
pub mod xacml;

// Re-export primary public API at crate root.
pub use checker::{Checker, EqualityChecker};
pub use compiler::{compile, CompiledPolicy};
pub use error::PolicyError;
pub use guard::Guard;
pub use policy::{Decision, Inquiry, Policy, CONDITION_KEY};
pub use store::{MemoryStore, SharedStore};
