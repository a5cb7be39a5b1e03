//! Element model for analysed program structure.
//!
//! Every analysed entity is one of five variants: [`Module`], [`Class`],
//! [`Method`], [`Property`] and [`ImportedModule`]. They share the attributes
//! in [`ElementInfo`] and the [`Element`] trait. Children are attached through
//! [`Element::add_element`], which consults [`crate::collection::resolve`] to
//! pick the destination collection.
//!
//! # Ownership
//!
//! Modules own nested modules, classes, methods and imports; classes own
//! methods and properties. Back-references to the owner are stored as the
//! owner's [`QualifiedName`] and are never followed for ownership. Inheritance
//! targets and property types are likewise names, resolved when the diagram
//! is assembled.

use std::fmt;

use indexmap::{IndexMap, map::Entry};
use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    collection::{self, Collection},
    error::ModelError,
    name::QualifiedName,
};

/// Access level of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Private,
    #[default]
    Public,
    Protected,
}

/// Whether an element belongs to the type or to its instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifetime {
    Static,
    #[default]
    Instance,
}

/// Tag identifying an element variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Module,
    Class,
    Method,
    Property,
    ImportedModule,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Module => "Module",
            Self::Class => "Class",
            Self::Method => "Method",
            Self::Property => "Property",
            Self::ImportedModule => "ImportedModule",
        };
        f.write_str(name)
    }
}

/// Attributes shared by all element variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementInfo {
    name: String,
    parent: Option<QualifiedName>,
    visibility: Visibility,
    lifetime: Lifetime,
}

impl ElementInfo {
    /// Creates element attributes with public visibility and instance lifetime.
    ///
    /// # Arguments
    ///
    /// * `name` - The element name.
    /// * `parent` - Qualified name of the owning element, `None` for roots.
    pub fn new(name: impl Into<String>, parent: Option<QualifiedName>) -> Self {
        Self {
            name: name.into(),
            parent,
            visibility: Visibility::default(),
            lifetime: Lifetime::default(),
        }
    }

    /// Creates attributes for an element without an owner.
    pub fn root(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    /// Sets the visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Sets the lifetime.
    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&QualifiedName> {
        self.parent.as_ref()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    /// Returns the owner's qualified name extended with this element's name.
    pub fn qualified_name(&self) -> QualifiedName {
        match &self.parent {
            Some(parent) => parent.child(self.name.as_str()),
            None => QualifiedName::single(self.name.as_str()),
        }
    }
}

/// Common behaviour of all element variants.
pub trait Element {
    /// Returns the shared attributes.
    fn info(&self) -> &ElementInfo;

    /// Returns the variant tag.
    fn kind(&self) -> ElementKind;

    fn name(&self) -> &str {
        self.info().name()
    }

    fn parent(&self) -> Option<&QualifiedName> {
        self.info().parent()
    }

    fn visibility(&self) -> Visibility {
        self.info().visibility()
    }

    fn lifetime(&self) -> Lifetime {
        self.info().lifetime()
    }

    /// Attaches `child` to the collection it belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnsupportedElementKind`] when this variant has no
    /// collection for the child's variant.
    fn add_element(&mut self, child: AnyElement) -> Result<(), ModelError> {
        Err(ModelError::UnsupportedElementKind {
            child: child.kind(),
            parent: self.kind(),
        })
    }
}

/// An element of any variant, as handed to [`Element::add_element`].
#[derive(Debug, Clone, PartialEq)]
pub enum AnyElement {
    Module(Module),
    Class(Class),
    Method(Method),
    Property(Property),
    ImportedModule(ImportedModule),
}

impl AnyElement {
    fn as_element(&self) -> &dyn Element {
        match self {
            Self::Module(module) => module,
            Self::Class(class) => class,
            Self::Method(method) => method,
            Self::Property(property) => property,
            Self::ImportedModule(import) => import,
        }
    }
}

impl Element for AnyElement {
    fn info(&self) -> &ElementInfo {
        self.as_element().info()
    }

    fn kind(&self) -> ElementKind {
        self.as_element().kind()
    }

    fn add_element(&mut self, child: AnyElement) -> Result<(), ModelError> {
        match self {
            Self::Module(module) => module.add_element(child),
            Self::Class(class) => class.add_element(child),
            Self::Method(method) => method.add_element(child),
            Self::Property(property) => property.add_element(child),
            Self::ImportedModule(import) => import.add_element(child),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for AnyElement {
                fn from(element: $variant) -> Self {
                    Self::$variant(element)
                }
            }
        )*
    };
}

impl_from_variant!(Module, Class, Method, Property, ImportedModule);

/// A source module: the unit that becomes a diagram cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    info: ElementInfo,
    modules: Vec<Module>,
    classes: Vec<Class>,
    methods: Vec<Method>,
    dependencies: Vec<ImportedModule>,
    path: String,
}

impl Module {
    pub fn new(info: ElementInfo) -> Self {
        Self {
            info,
            modules: Vec::new(),
            classes: Vec::new(),
            methods: Vec::new(),
            dependencies: Vec::new(),
            path: String::new(),
        }
    }

    /// Sets the module's location in the source tree.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn dependencies(&self) -> &[ImportedModule] {
        &self.dependencies
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }
}

impl Element for Module {
    fn info(&self) -> &ElementInfo {
        &self.info
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Module
    }

    fn add_element(&mut self, child: AnyElement) -> Result<(), ModelError> {
        match (collection::resolve(self.kind(), child.kind())?, child) {
            (Collection::Classes, AnyElement::Class(class)) => self.classes.push(class),
            (Collection::Modules, AnyElement::Module(module)) => self.modules.push(module),
            (Collection::Methods, AnyElement::Method(method)) => self.methods.push(method),
            (Collection::Dependencies, AnyElement::ImportedModule(import)) => {
                self.dependencies.push(import)
            }
            (_, child) => {
                return Err(ModelError::UnsupportedElementKind {
                    child: child.kind(),
                    parent: self.kind(),
                });
            }
        }
        Ok(())
    }
}

/// A class with its methods, merged properties and optional base class.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    info: ElementInfo,
    methods: Vec<Method>,
    properties: IndexMap<String, Property>,
    extends: Option<QualifiedName>,
}

impl Class {
    pub fn new(info: ElementInfo) -> Self {
        Self {
            info,
            methods: Vec::new(),
            properties: IndexMap::new(),
            extends: None,
        }
    }

    /// Sets the base class reference.
    pub fn with_extends(mut self, extends: QualifiedName) -> Self {
        self.extends = Some(extends);
        self
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Returns the properties in the order their names were first added.
    pub fn properties(&self) -> impl ExactSizeIterator<Item = &Property> {
        self.properties.values()
    }

    /// Returns the property stored under `name`.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    pub fn extends(&self) -> Option<&QualifiedName> {
        self.extends.as_ref()
    }

    pub fn set_extends(&mut self, extends: Option<QualifiedName>) {
        self.extends = extends;
    }

    /// Returns the property types, de-duplicated by full name.
    ///
    /// Order follows the first property referencing each type.
    pub fn dependencies(&self) -> Vec<&QualifiedName> {
        let mut unique: IndexMap<String, &QualifiedName> = IndexMap::new();
        for property in self.properties.values() {
            let ty = property.property_type();
            unique.insert(ty.full_name(), ty);
        }
        unique.into_values().collect()
    }

    fn insert_property(&mut self, property: Property) {
        match self.properties.entry(property.name().to_string()) {
            Entry::Occupied(mut entry) => {
                trace!(class = self.info.name(), property = property.name(); "Merging property accessors");
                let merged = entry.get().merged(&property);
                entry.insert(merged);
            }
            Entry::Vacant(entry) => {
                entry.insert(property);
            }
        }
    }
}

impl Element for Class {
    fn info(&self) -> &ElementInfo {
        &self.info
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Class
    }

    fn add_element(&mut self, child: AnyElement) -> Result<(), ModelError> {
        match (collection::resolve(self.kind(), child.kind())?, child) {
            (Collection::Methods, AnyElement::Method(method)) => self.methods.push(method),
            (Collection::Properties, AnyElement::Property(property)) => {
                self.insert_property(property)
            }
            (_, child) => {
                return Err(ModelError::UnsupportedElementKind {
                    child: child.kind(),
                    parent: self.kind(),
                });
            }
        }
        Ok(())
    }
}

/// A method or free function.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    info: ElementInfo,
    return_type: Option<QualifiedName>,
    argument_types: Vec<QualifiedName>,
}

impl Method {
    pub fn new(info: ElementInfo) -> Self {
        Self {
            info,
            return_type: None,
            argument_types: Vec::new(),
        }
    }

    pub fn with_return_type(mut self, return_type: Option<QualifiedName>) -> Self {
        self.return_type = return_type;
        self
    }

    pub fn with_argument_types(mut self, argument_types: Vec<QualifiedName>) -> Self {
        self.argument_types = argument_types;
        self
    }

    pub fn return_type(&self) -> Option<&QualifiedName> {
        self.return_type.as_ref()
    }

    pub fn argument_types(&self) -> &[QualifiedName] {
        &self.argument_types
    }
}

impl Element for Method {
    fn info(&self) -> &ElementInfo {
        &self.info
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Method
    }
}

/// A class property with its accessors and declared type.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    info: ElementInfo,
    has_getter: bool,
    has_setter: bool,
    property_type: QualifiedName,
}

impl Property {
    pub fn new(info: ElementInfo, property_type: QualifiedName) -> Self {
        Self {
            info,
            has_getter: false,
            has_setter: false,
            property_type,
        }
    }

    pub fn with_getter(mut self, has_getter: bool) -> Self {
        self.has_getter = has_getter;
        self
    }

    pub fn with_setter(mut self, has_setter: bool) -> Self {
        self.has_setter = has_setter;
        self
    }

    pub fn has_getter(&self) -> bool {
        self.has_getter
    }

    pub fn has_setter(&self) -> bool {
        self.has_setter
    }

    pub fn property_type(&self) -> &QualifiedName {
        &self.property_type
    }

    /// Returns this property with accessor flags OR-ed with `other`'s.
    ///
    /// All other attributes are taken from `self`.
    pub fn merged(&self, other: &Property) -> Property {
        Property {
            has_getter: self.has_getter || other.has_getter,
            has_setter: self.has_setter || other.has_setter,
            ..self.clone()
        }
    }
}

impl Element for Property {
    fn info(&self) -> &ElementInfo {
        &self.info
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Property
    }
}

/// The target of an import edge.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedModule {
    info: ElementInfo,
}

impl ImportedModule {
    pub fn new(info: ElementInfo) -> Self {
        Self { info }
    }
}

impl Element for ImportedModule {
    fn info(&self) -> &ElementInfo {
        &self.info
    }

    fn kind(&self) -> ElementKind {
        ElementKind::ImportedModule
    }
}
