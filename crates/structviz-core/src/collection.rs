//! Destination rules for attaching child elements.
//!
//! [`resolve`] maps a (parent, child) pair of [`ElementKind`]s to the
//! [`Collection`] of the parent that receives the child:
//!
//! | Parent | Child | Collection |
//! |--------|-------|------------|
//! | Module | Class | [`Collection::Classes`] |
//! | Module | Module | [`Collection::Modules`] |
//! | Module | ImportedModule | [`Collection::Dependencies`] |
//! | Module | Method | [`Collection::Methods`] |
//! | Class | Method | [`Collection::Methods`] |
//! | Class | Property | [`Collection::Properties`] (merged by name) |
//!
//! Every other pair is rejected.

use crate::{element::ElementKind, error::ModelError};

/// A named child collection of a module or class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Modules,
    Classes,
    Methods,
    Dependencies,
    /// Keyed by name; a repeated name merges accessor flags instead of appending.
    Properties,
}

/// Returns the collection of a `parent` element that holds a `child` element.
///
/// # Errors
///
/// Returns [`ModelError::UnsupportedElementKind`] naming both kinds when the
/// parent has no collection for the child.
///
/// # Examples
///
/// ```
/// use structviz_core::collection::{Collection, resolve};
/// use structviz_core::element::ElementKind;
///
/// assert_eq!(
///     resolve(ElementKind::Module, ElementKind::ImportedModule),
///     Ok(Collection::Dependencies)
/// );
/// assert!(resolve(ElementKind::Class, ElementKind::Module).is_err());
/// ```
pub fn resolve(parent: ElementKind, child: ElementKind) -> Result<Collection, ModelError> {
    match (parent, child) {
        (ElementKind::Module, ElementKind::Class) => Ok(Collection::Classes),
        (ElementKind::Module, ElementKind::Module) => Ok(Collection::Modules),
        (ElementKind::Module, ElementKind::ImportedModule) => Ok(Collection::Dependencies),
        (ElementKind::Module, ElementKind::Method) => Ok(Collection::Methods),
        (ElementKind::Class, ElementKind::Method) => Ok(Collection::Methods),
        (ElementKind::Class, ElementKind::Property) => Ok(Collection::Properties),
        _ => Err(ModelError::UnsupportedElementKind { child, parent }),
    }
}
