//! Machine-readable module dependency summary.

use std::collections::BTreeSet;

use serde::Serialize;

use structviz_core::element::{Element, Module};

use crate::error::StructvizError;

/// A module and the names it imports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDependencies {
    pub name: String,
    /// Distinct imported module names, sorted.
    pub dependencies: Vec<String>,
}

/// Summarizes the imports of each root module.
///
/// The result is sorted by module name ignoring case, with an exact comparison
/// breaking ties. Each dependency list is de-duplicated and sorted byte-wise
/// regardless of discovery order.
pub fn modules_dependencies(modules: &[Module]) -> Vec<ModuleDependencies> {
    let mut summary: Vec<ModuleDependencies> = modules
        .iter()
        .map(|module| {
            let dependencies: BTreeSet<&str> = module
                .dependencies()
                .iter()
                .map(|dependency| dependency.name())
                .collect();
            ModuleDependencies {
                name: module.name().to_string(),
                dependencies: dependencies.into_iter().map(str::to_string).collect(),
            }
        })
        .collect();
    summary.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    summary
}

/// Serializes a summary as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`StructvizError::Export`] if serialization fails.
pub fn to_json(summary: &[ModuleDependencies]) -> Result<String, StructvizError> {
    serde_json::to_string_pretty(summary).map_err(|err| StructvizError::Export(Box::new(err)))
}
