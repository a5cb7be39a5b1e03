//! Error types for the element model.

use thiserror::Error;

use crate::element::ElementKind;

/// Errors raised while constructing an element tree.
///
/// These indicate an inconsistency in the analysed input rather than a
/// transient condition, so callers should surface them immediately.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("{child} not supported in {parent}")]
    UnsupportedElementKind {
        child: ElementKind,
        parent: ElementKind,
    },

    #[error("qualified name must have at least one segment")]
    EmptyQualifiedName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_message_names_both_kinds() {
        let err = ModelError::UnsupportedElementKind {
            child: ElementKind::Property,
            parent: ElementKind::Module,
        };
        assert_eq!(err.to_string(), "Property not supported in Module");
    }
}
