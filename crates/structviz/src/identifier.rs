//! Node identifiers derived from hierarchical paths.
//!
//! Diagram nodes are addressed by flattening their position in the module
//! tree: path segments are joined with `/` and every `/` is then replaced by
//! `|`. The same encoding is applied to inheritance and dependency targets so
//! that cross-reference edges land on the id the target node was given.

use structviz_core::QualifiedName;

/// Separator between path segments before encoding.
pub const PATH_SEPARATOR: char = '/';

/// Separator that replaces [`PATH_SEPARATOR`] in encoded identifiers.
pub const ID_SEPARATOR: char = '|';

/// Encodes `name` under `prefix` into a flat identifier.
///
/// # Examples
///
/// ```
/// use structviz::identifier::encode;
///
/// assert_eq!(encode("", "app"), "app");
/// assert_eq!(encode("app", "Base"), "app|Base");
/// assert_eq!(encode("src/app", "Base"), "src|app|Base");
/// ```
pub fn encode(prefix: &str, name: &str) -> String {
    let joined = if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}{PATH_SEPARATOR}{name}")
    };
    joined.replace(PATH_SEPARATOR, &ID_SEPARATOR.to_string())
}

/// Encodes a qualified name by nesting each segment under the previous ones.
///
/// # Examples
///
/// ```
/// use structviz::identifier::encode_qualified;
///
/// let name = "app.models.User".parse().unwrap();
/// assert_eq!(encode_qualified(&name), "app|models|User");
/// ```
pub fn encode_qualified(name: &QualifiedName) -> String {
    name.parts()
        .iter()
        .fold(String::new(), |prefix, segment| encode(&prefix, segment))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_empty_prefix() {
        assert_eq!(encode("", "Base"), "Base");
    }

    #[test]
    fn test_slashes_in_name_are_replaced() {
        assert_eq!(encode("", "./lib/util"), ".|lib|util");
    }

    #[test]
    fn test_qualified_matches_nested_encoding() {
        let module_id = encode("", "app");
        let class_id = encode(&module_id, "Base");
        let target = encode_qualified(&"app.Base".parse().unwrap());
        assert_eq!(class_id, target);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(encode("a|b", "c"), encode("a|b", "c"));
    }

    proptest! {
        #[test]
        fn prop_distinct_paths_have_distinct_ids(
            left in proptest::collection::vec("[a-z]{1,3}", 1..4),
            right in proptest::collection::vec("[a-z]{1,3}", 1..4),
        ) {
            let encode_path = |segments: &[String]| {
                segments.iter().fold(String::new(), |prefix, name| encode(&prefix, name))
            };
            if left != right {
                prop_assert_ne!(encode_path(&left), encode_path(&right));
            } else {
                prop_assert_eq!(encode_path(&left), encode_path(&right));
            }
        }
    }
}
