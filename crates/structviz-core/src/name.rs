//! Dotted names used for type references and inheritance targets.
//!
//! A [`QualifiedName`] is an ordered, non-empty list of segments such as
//! `["app", "models", "User"]`. It is written `app.models.User` in model files
//! and diagnostics.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// An ordered, non-empty sequence of name segments.
///
/// # Examples
///
/// ```
/// use structviz_core::QualifiedName;
///
/// let name: QualifiedName = "app.Base".parse().unwrap();
/// assert_eq!(name.name(), "Base");
/// assert_eq!(name.full_name(), "app.Base");
/// assert_eq!(name.parts(), ["app", "Base"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QualifiedName {
    parts: Vec<String>,
}

impl QualifiedName {
    /// Creates a qualified name from its segments.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyQualifiedName`] when `parts` is empty.
    pub fn new<I, S>(parts: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parts: Vec<String> = parts.into_iter().map(Into::into).collect();
        if parts.is_empty() {
            return Err(ModelError::EmptyQualifiedName);
        }
        Ok(Self { parts })
    }

    /// Creates a name made of one segment.
    pub fn single(segment: impl Into<String>) -> Self {
        Self {
            parts: vec![segment.into()],
        }
    }

    /// Returns a new name with `segment` appended.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut parts = self.parts.clone();
        parts.push(segment.into());
        Self { parts }
    }

    /// Returns the segments in order.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Returns the last segment.
    pub fn name(&self) -> &str {
        // Construction guarantees at least one segment.
        &self.parts[self.parts.len() - 1]
    }

    /// Returns all segments joined by `.`.
    pub fn full_name(&self) -> String {
        self.parts.join(".")
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

impl FromStr for QualifiedName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ModelError::EmptyQualifiedName);
        }
        Self::new(s.split('.'))
    }
}

impl TryFrom<String> for QualifiedName {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<QualifiedName> for String {
    fn from(name: QualifiedName) -> Self {
        name.full_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_last_segment() {
        let name = QualifiedName::new(["Foo", "Bar"]).unwrap();
        assert_eq!(name.name(), "Bar");
        assert_eq!(name.full_name(), "Foo.Bar");
    }

    #[test]
    fn test_single_segment() {
        let name = QualifiedName::new(["TypeA"]).unwrap();
        assert_eq!(name.name(), "TypeA");
        assert_eq!(name.full_name(), "TypeA");
    }

    #[test]
    fn test_empty_is_rejected() {
        let parts: [&str; 0] = [];
        assert_eq!(
            QualifiedName::new(parts),
            Err(ModelError::EmptyQualifiedName)
        );
        assert_eq!(
            "".parse::<QualifiedName>(),
            Err(ModelError::EmptyQualifiedName)
        );
    }

    #[test]
    fn test_parse_dotted() {
        let name: QualifiedName = "app.models.User".parse().unwrap();
        assert_eq!(name.parts(), ["app", "models", "User"]);
        assert_eq!(name.to_string(), "app.models.User");
    }

    #[test]
    fn test_child() {
        let module = QualifiedName::new(["app"]).unwrap();
        let class = module.child("Base");
        assert_eq!(class.full_name(), "app.Base");
        assert_eq!(module.full_name(), "app");
    }
}
