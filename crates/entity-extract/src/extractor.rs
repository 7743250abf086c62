//! The collaborator boundary between lexguard and its NLP backend.

use thiserror::Error;

use crate::bundle::EntityBundle;

/// Errors that can occur while extracting entities from policy text.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The backing tokenizer pattern failed to compile.
    #[error("failed to compile tokenizer pattern: {0}")]
    Tokenizer(#[from] regex::Error),

    /// The extraction backend failed.  The message is passed through
    /// opaquely; the core does not interpret backend failures.
    #[error("entity extraction failed: {0}")]
    Backend(String),
}

/// Strategy boundary for entity extraction.
///
/// Implementations take a UTF-8 policy statement and return an
/// [`EntityBundle`] whose lists follow the dependency-role contract:
/// nominal subjects, root predicates, direct objects, and adverbial-clause /
/// prepositional qualifiers, as ordered sequences that may contain
/// duplicates.  The core never grades extraction quality -- it only
/// requires this shape.
///
/// Implementations must be `Send + Sync` so one extractor instance can be
/// constructed at process start and shared across evaluations.
pub trait EntityExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Result<EntityBundle, ExtractError>;
}
