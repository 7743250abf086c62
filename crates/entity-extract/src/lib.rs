//! # entity-extract
//!
//! Turns free-text access-policy statements into categorized entity lists
//! for the lexguard policy compiler.
//!
//! The crate is organised around three layers:
//!
//! 1. **[`bundle`]** -- the [`EntityBundle`](bundle::EntityBundle) output
//!    contract: four ordered string lists (subjects, actions, resources,
//!    conditions) in extraction order.
//! 2. **[`extractor`]** -- the [`EntityExtractor`](extractor::EntityExtractor)
//!    trait boundary.  Any NLP backend that produces the bundle shape can sit
//!    behind it; extraction quality is the backend's problem, not ours.
//! 3. **[`heuristic`]** -- a built-in lexicon-and-position extractor so the
//!    pipeline works end to end without an external NLP service.
//!
//! ## Quick start
//!
//! ```rust
//! use entity_extract::{EntityExtractor, HeuristicExtractor};
//!
//! let extractor = HeuristicExtractor::new().unwrap();
//! let bundle = extractor.extract("the user can read a file if online").unwrap();
//! assert_eq!(bundle.subjects, vec!["user"]);
//! ```

pub mod bundle;
pub mod extractor;
pub mod heuristic;
pub mod lexicon;

// Re-export the most commonly used types at the crate root for ergonomic
// imports (`use entity_extract::EntityBundle`).
pub use bundle::{EntityBundle, EntityCategory};
pub use extractor::{EntityExtractor, ExtractError};
pub use heuristic::HeuristicExtractor;
