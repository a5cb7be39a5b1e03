//! Structviz - Structural diagrams of analysed source code.
//!
//! Turns a forest of analysed modules (classes, members, visibility,
//! inheritance and imports) into a Graphviz graph and renders it to PNG or
//! SVG. Layout is left entirely to Graphviz.

pub mod config;
pub mod export;
pub mod graph;
pub mod identifier;
pub mod signature;
pub mod source;
pub mod structure;
pub mod summary;

mod error;

pub use structviz_core::{collection, element, name};

pub use error::StructvizError;
pub use export::OutputFormat;
pub use structure::DiagramMode;
pub use summary::ModuleDependencies;

use std::path::Path;

#[cfg(feature = "graphviz")]
use log::debug;
use log::info;

use config::AppConfig;
use element::Module;
use graph::Graph;

/// Builder for loading models and rendering Structviz diagrams.
///
/// This provides an API for processing analysed modules through assembly
/// and rendering stages.
///
/// # Examples
///
/// ```rust,no_run
/// use structviz::{DiagramBuilder, DiagramMode, OutputFormat, config::AppConfig};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Load model files produced by source analysis
/// let modules = builder.load("model/", true)
///     .expect("Failed to load models");
///
/// // Assemble and render the diagram
/// let graph = builder.build(&modules, DiagramMode::Full);
/// builder.render_image(&graph, OutputFormat::Svg, "diagram.svg")
///     .expect("Failed to render");
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including style and backend settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Load analysed modules from a model file or directory.
    ///
    /// A missing `target` is reported in the log and yields no modules.
    ///
    /// # Arguments
    ///
    /// * `target` - Model file or directory of model files
    /// * `recursive` - Whether to descend into subdirectories
    ///
    /// # Errors
    ///
    /// Returns `StructvizError` for I/O failures, malformed model files, or
    /// models that violate element nesting rules.
    pub fn load(
        &self,
        target: impl AsRef<Path>,
        recursive: bool,
    ) -> Result<Vec<Module>, StructvizError> {
        let target = target.as_ref();
        info!(target = target.display().to_string(), recursive = recursive; "Loading models");
        source::load_modules(target, recursive)
    }

    /// Assemble the diagram graph for a module forest.
    ///
    /// # Examples
    ///
    /// ```
    /// use structviz::{DiagramBuilder, DiagramMode, graph::Scope};
    /// use structviz::element::{Class, Element, ElementInfo, Module};
    ///
    /// let mut app = Module::new(ElementInfo::root("app"));
    /// app.add_element(Class::new(ElementInfo::root("Base")).into()).unwrap();
    ///
    /// let graph = DiagramBuilder::default().build(&[app], DiagramMode::Full);
    /// assert!(graph.find_node("app|Base").is_some());
    /// ```
    pub fn build(&self, modules: &[Module], mode: DiagramMode) -> Graph {
        info!(modules = modules.len(), mode:? = mode; "Building diagram graph");
        structure::build_graph(modules, mode, self.config.style())
    }

    /// Summarize each module's distinct imports, sorted by module name.
    pub fn dependencies(&self, modules: &[Module]) -> Vec<ModuleDependencies> {
        summary::modules_dependencies(modules)
    }

    /// Render a diagram graph as a DOT document.
    #[cfg(feature = "graphviz")]
    pub fn render_dot(&self, graph: &Graph) -> String {
        let dot = export::dot::to_dot(graph);
        debug!(bytes = dot.len(); "DOT document rendered");
        dot
    }

    /// Render a diagram graph to an image file with the Graphviz backend.
    ///
    /// The backend is looked up on the search path first; a failed lookup
    /// only logs a warning.
    ///
    /// # Errors
    ///
    /// Returns `StructvizError` if the backend cannot be run or fails.
    #[cfg(feature = "graphviz")]
    pub fn render_image(
        &self,
        graph: &Graph,
        format: OutputFormat,
        output: impl AsRef<Path>,
    ) -> Result<(), StructvizError> {
        let backend = export::backend::Backend::locate(self.config.backend().executable());
        let dot = self.render_dot(graph);
        backend.render(&dot, format, output.as_ref())?;
        info!(output = output.as_ref().display().to_string(); "Diagram rendered successfully");
        Ok(())
    }
}
