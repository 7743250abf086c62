use entity_extract::EntityCategory;
use thiserror::Error;

/// Errors raised by policy compilation and storage.
///
/// Evaluation never appears here: an unmatched inquiry is a Deny, not a
/// fault.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The entity bundle has no tokens in a category the compiler needs.
    #[error(
        "no {category} entities were extracted; a policy requires at least \
         one token in every category"
    )]
    EmptyCategory { category: EntityCategory },

    /// A policy with this id is already present in the store.
    #[error("policy id '{0}' is already stored")]
    DuplicateId(String),

    /// The exchange document could not be rendered.
    #[error("failed to render exchange document: {0}")]
    Document(#[from] quick_xml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_category_message_names_the_category() {
        let err = PolicyError::EmptyCategory {
            category: EntityCategory::Resource,
        };
        assert!(err.to_string().contains("no resource entities"));
    }

    #[test]
    fn duplicate_id_message_names_the_id() {
        let err = PolicyError::DuplicateId("p1".to_string());
        assert!(err.to_string().contains("'p1'"));
    }
}
