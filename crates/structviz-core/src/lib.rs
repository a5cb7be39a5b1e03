//! Structviz Core Types and Definitions
//!
//! This crate provides the element model that structural diagrams are built
//! from. It includes:
//!
//! - **Names**: Dotted type references ([`name::QualifiedName`])
//! - **Elements**: Modules, classes, methods, properties and imports ([`element`] module)
//! - **Collections**: Rules attaching a child element to its parent ([`collection`] module)
//! - **Errors**: Model consistency errors ([`error::ModelError`])

pub mod collection;
pub mod element;
pub mod error;
pub mod name;

pub use error::ModelError;
pub use name::QualifiedName;
