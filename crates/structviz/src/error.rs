//! Error types for Structviz operations.
//!
//! This module provides the main error type [`StructvizError`] which wraps
//! the error conditions that can occur while loading models and rendering
//! diagrams.

use std::{io, path::PathBuf};

use thiserror::Error;

use structviz_core::ModelError;

/// The main error type for Structviz operations.
#[derive(Debug, Error)]
pub enum StructvizError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Failed to load model file '{}': {message}", path.display())]
    Load { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    /// The requested model location does not exist.
    ///
    /// Loading reports this through the log and returns no modules, so it is
    /// never returned from [`crate::DiagramBuilder::load`].
    #[error("'{}' does not exist", .0.display())]
    MissingTargetPath(PathBuf),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl StructvizError {
    /// Create a new `Load` error for a model file.
    pub fn new_load_error(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Load {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
