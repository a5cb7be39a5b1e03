//! Loading analysed modules from model files.
//!
//! Source analysis happens outside this crate; its result arrives as JSON
//! model files, each holding one root module or an array of them. Every child
//! record is attached through [`Element::add_element`], so repeated property
//! entries are merged exactly as they would be during analysis.
//!
//! # Example
//!
//! ```json
//! {
//!   "name": "app",
//!   "dependencies": ["./util"],
//!   "classes": [{
//!     "name": "Derived",
//!     "extends": "app.Base",
//!     "properties": [{ "name": "x", "type": "TypeA", "has_getter": true }]
//!   }]
//! }
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, error, info};
use serde::Deserialize;

use structviz_core::{
    ModelError, QualifiedName,
    element::{
        Class, Element, ElementInfo, ImportedModule, Lifetime, Method, Module, Property,
        Visibility,
    },
};

use crate::error::StructvizError;

/// File extension of model files picked up from directories.
const MODEL_EXTENSION: &str = "json";

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ModelFile {
    Many(Vec<ModuleRecord>),
    One(ModuleRecord),
}

#[derive(Debug, Deserialize)]
struct ModuleRecord {
    name: String,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    visibility: Visibility,
    #[serde(default)]
    lifetime: Lifetime,
    #[serde(default)]
    modules: Vec<ModuleRecord>,
    #[serde(default)]
    classes: Vec<ClassRecord>,
    #[serde(default)]
    methods: Vec<MethodRecord>,
    #[serde(default)]
    dependencies: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ClassRecord {
    name: String,
    #[serde(default)]
    visibility: Visibility,
    #[serde(default)]
    lifetime: Lifetime,
    #[serde(default)]
    extends: Option<QualifiedName>,
    #[serde(default)]
    methods: Vec<MethodRecord>,
    #[serde(default)]
    properties: Vec<PropertyRecord>,
}

#[derive(Debug, Deserialize)]
struct MethodRecord {
    name: String,
    #[serde(default)]
    visibility: Visibility,
    #[serde(default)]
    lifetime: Lifetime,
    #[serde(default)]
    return_type: Option<QualifiedName>,
    #[serde(default)]
    argument_types: Vec<QualifiedName>,
}

#[derive(Debug, Deserialize)]
struct PropertyRecord {
    name: String,
    #[serde(default)]
    visibility: Visibility,
    #[serde(default)]
    lifetime: Lifetime,
    #[serde(rename = "type")]
    property_type: QualifiedName,
    #[serde(default)]
    has_getter: bool,
    #[serde(default)]
    has_setter: bool,
}

impl ModuleRecord {
    fn into_module(
        self,
        parent: Option<&QualifiedName>,
        default_path: &str,
    ) -> Result<Module, ModelError> {
        let info = ElementInfo::new(self.name, parent.cloned())
            .with_visibility(self.visibility)
            .with_lifetime(self.lifetime);
        let qualified = info.qualified_name();
        let path = self.path.unwrap_or_else(|| default_path.to_string());
        let mut module = Module::new(info).with_path(path);

        for child in self.modules {
            module.add_element(child.into_module(Some(&qualified), "")?.into())?;
        }
        for class in self.classes {
            module.add_element(class.into_class(&qualified)?.into())?;
        }
        for method in self.methods {
            module.add_element(method.into_method(&qualified).into())?;
        }
        for dependency in self.dependencies {
            let info = ElementInfo::new(dependency, Some(qualified.clone()));
            module.add_element(ImportedModule::new(info).into())?;
        }
        Ok(module)
    }
}

impl ClassRecord {
    fn into_class(self, parent: &QualifiedName) -> Result<Class, ModelError> {
        let info = ElementInfo::new(self.name, Some(parent.clone()))
            .with_visibility(self.visibility)
            .with_lifetime(self.lifetime);
        let qualified = info.qualified_name();
        let mut class = Class::new(info);
        class.set_extends(self.extends);

        for method in self.methods {
            class.add_element(method.into_method(&qualified).into())?;
        }
        for property in self.properties {
            class.add_element(property.into_property(&qualified).into())?;
        }
        Ok(class)
    }
}

impl MethodRecord {
    fn into_method(self, parent: &QualifiedName) -> Method {
        let info = ElementInfo::new(self.name, Some(parent.clone()))
            .with_visibility(self.visibility)
            .with_lifetime(self.lifetime);
        Method::new(info)
            .with_return_type(self.return_type)
            .with_argument_types(self.argument_types)
    }
}

impl PropertyRecord {
    fn into_property(self, parent: &QualifiedName) -> Property {
        let info = ElementInfo::new(self.name, Some(parent.clone()))
            .with_visibility(self.visibility)
            .with_lifetime(self.lifetime);
        Property::new(info, self.property_type)
            .with_getter(self.has_getter)
            .with_setter(self.has_setter)
    }
}

/// Parses the root modules held by one model document.
///
/// # Arguments
///
/// * `content` - JSON text of the model file.
/// * `source` - Location of the model file, used in error messages.
/// * `default_path` - Path given to root modules that do not declare one.
///
/// # Errors
///
/// Returns [`StructvizError::Load`] for malformed JSON and
/// [`StructvizError::Model`] when the records form an invalid tree.
pub fn parse_modules(
    content: &str,
    source: &Path,
    default_path: &str,
) -> Result<Vec<Module>, StructvizError> {
    let file: ModelFile = serde_json::from_str(content)
        .map_err(|err| StructvizError::new_load_error(source, err))?;
    let records = match file {
        ModelFile::Many(records) => records,
        ModelFile::One(record) => vec![record],
    };
    let modules = records
        .into_iter()
        .map(|record| record.into_module(None, default_path))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(modules)
}

/// Loads every root module found at `target`.
///
/// `target` may be a single model file or a directory of `.json` files;
/// subdirectories are searched only when `recursive` is set. Files are read in
/// path order. A missing target is reported and yields no modules.
///
/// # Errors
///
/// Returns an error if a directory or file cannot be read, or a model file
/// cannot be parsed.
pub fn load_modules(target: &Path, recursive: bool) -> Result<Vec<Module>, StructvizError> {
    if !target.exists() {
        error!("{}", StructvizError::MissingTargetPath(target.to_path_buf()));
        return Ok(Vec::new());
    }

    let files = if target.is_dir() {
        let mut files = Vec::new();
        collect_model_files(target, recursive, &mut files)?;
        files.sort();
        files
    } else {
        vec![target.to_path_buf()]
    };

    let mut modules = Vec::new();
    for file in &files {
        debug!(path = file.display().to_string(); "Reading model file");
        let content = fs::read_to_string(file)?;
        let default_path = relative_directory(target, file);
        modules.extend(parse_modules(&content, file, &default_path)?);
    }

    info!(modules = modules.len(); "Found module(s)");
    Ok(modules)
}

fn collect_model_files(
    dir: &Path,
    recursive: bool,
    files: &mut Vec<PathBuf>,
) -> Result<(), StructvizError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            if recursive {
                collect_model_files(&path, recursive, files)?;
            }
        } else if path.extension().and_then(|ext| ext.to_str()) == Some(MODEL_EXTENSION) {
            files.push(path);
        }
    }
    Ok(())
}

/// Returns the directory of `file` relative to `target`, `/`-separated.
fn relative_directory(target: &Path, file: &Path) -> String {
    file.parent()
        .and_then(|parent| parent.strip_prefix(target).ok())
        .map(|relative| {
            relative
                .components()
                .map(|component| component.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/")
        })
        .unwrap_or_default()
}
