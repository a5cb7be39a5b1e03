//! Diagram assembly from a module forest.
//!
//! [`build_graph`] walks every root [`Module`] depth-first and emits:
//!
//! - one cluster per module, nested for nested modules, shaded lighter the
//!   deeper it sits;
//! - a borderless node listing the module's own functions, when it has any;
//! - one record node per class (`{name|properties|methods}`);
//! - an inheritance edge for `extends` and an association edge per distinct
//!   property type.
//!
//! In [`DiagramMode::DependenciesOnly`] root modules only contribute their
//! cluster and one edge per distinct imported module name.
//!
//! Cross-reference targets are encoded with [`identifier::encode_qualified`]
//! and are not checked against the nodes actually emitted.

use indexmap::IndexSet;
use log::{debug, trace};

use structviz_core::element::{Class, Element, Module, Visibility};

use crate::{
    config::StyleConfig,
    graph::{Cluster, Edge, Graph, Node, Relation, Scope},
    identifier,
    signature::{self, combine_signatures},
};

/// Prefix DOT requires for a subgraph to be drawn as a cluster.
const CLUSTER_PREFIX: &str = "cluster_";

/// Shade of the outermost cluster.
const BASE_SHADE: usize = 95;

/// Shade decrease per nesting level.
const SHADE_STEP: usize = 6;

/// Lowest shade a cluster can get.
const MIN_SHADE: usize = 40;

/// Which parts of the model are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagramMode {
    /// Classes, members and type relations.
    #[default]
    Full,
    /// Only module-to-module import edges.
    DependenciesOnly,
}

/// Returns the gray shade of a cluster at `level`.
///
/// # Examples
///
/// ```
/// use structviz::structure::cluster_shade;
///
/// assert_eq!(cluster_shade(0), 95);
/// assert_eq!(cluster_shade(1), 89);
/// assert_eq!(cluster_shade(20), 40);
/// ```
pub fn cluster_shade(level: usize) -> usize {
    BASE_SHADE
        .saturating_sub(SHADE_STEP.saturating_mul(level))
        .max(MIN_SHADE)
}

/// Builds the diagram graph for a module forest.
///
/// Root modules use their `path` as identifier prefix.
///
/// # Arguments
///
/// * `modules` - Root modules in output order.
/// * `mode` - Whether to draw full class detail or only dependencies.
/// * `style` - Font settings applied to the graph, nodes and edges.
pub fn build_graph(modules: &[Module], mode: DiagramMode, style: &StyleConfig) -> Graph {
    let mut graph = Graph::new("G");

    let font_size = style.font_size().to_string();
    graph.set("fontsize", font_size.as_str());
    graph.set("fontname", style.font_name());
    graph.set_edge_default("fontsize", font_size.as_str());
    graph.set_edge_default("fontname", style.font_name());
    graph.set_node_default("fontsize", font_size.as_str());
    graph.set_node_default("fontname", style.font_name());
    graph.set_node_default("shape", "record");

    for module in modules {
        build_module(module, &mut graph, module.path(), 0, mode);
    }

    debug!(
        nodes = graph.all_nodes().len(),
        edges = graph.all_edges().len();
        "Diagram graph assembled"
    );
    graph
}

fn build_module(
    module: &Module,
    scope: &mut impl Scope,
    prefix: &str,
    level: usize,
    mode: DiagramMode,
) {
    trace!(module = module.name(), level = level; "Building module");

    let module_id = identifier::encode(prefix, module.name());
    let mut cluster = Cluster::new(format!("{CLUSTER_PREFIX}{module_id}"));
    cluster.set("label", cluster_label(module));
    cluster.set("style", "filled");
    cluster.set("color", format!("gray{}", cluster_shade(level)));

    match mode {
        DiagramMode::DependenciesOnly => {
            scope.add_cluster(cluster);
            let targets: IndexSet<&str> = module
                .dependencies()
                .iter()
                .map(|dependency| dependency.name())
                .collect();
            for target in targets {
                scope.add_edge(Edge::new(module.name(), identifier::encode("", target)));
            }
        }
        DiagramMode::Full => {
            let methods = combine_signatures(module.methods());
            if !methods.is_empty() {
                cluster.add_node(
                    Node::new(module_id.as_str())
                        .with_attribute("label", methods)
                        .with_attribute("shape", "none"),
                );
            }

            for child in module.modules() {
                build_module(child, &mut cluster, &module_id, level + 1, DiagramMode::Full);
            }

            for class in module.classes() {
                build_class(class, &mut cluster, &module_id);
            }

            scope.add_cluster(cluster);
        }
    }
}

fn cluster_label(module: &Module) -> String {
    match module.visibility() {
        Visibility::Public => module.name().to_string(),
        visibility => format!(
            "{} {}",
            signature::visibility_glyph(visibility),
            module.name()
        ),
    }
}

fn build_class(class: &Class, scope: &mut impl Scope, prefix: &str) {
    let class_id = identifier::encode(prefix, class.name());
    trace!(class = class_id.as_str(); "Building class");

    scope.add_node(Node::new(class_id.as_str()).with_attribute("label", class_label(class)));

    if let Some(base) = class.extends() {
        scope.add_edge(
            Edge::new(class_id.as_str(), identifier::encode_qualified(base))
                .with_relation(Relation::Inheritance),
        );
    }

    for dependency in class.dependencies() {
        scope.add_edge(
            Edge::new(class_id.as_str(), identifier::encode_qualified(dependency))
                .with_relation(Relation::Association),
        );
    }
}

/// Returns the record label `{name|properties|methods}` without empty segments.
fn class_label(class: &Class) -> String {
    let properties = combine_signatures(class.properties());
    let methods = combine_signatures(class.methods());
    let segments: Vec<&str> = [class.name(), properties.as_str(), methods.as_str()]
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .collect();
    format!("{{{}}}", segments.join("|"))
}

#[cfg(test)]
mod tests {
    use structviz_core::{
        QualifiedName,
        element::{ElementInfo, ImportedModule, Lifetime, Method, Property},
    };

    use super::*;

    fn qn(name: &str) -> QualifiedName {
        name.parse().unwrap()
    }

    fn method(name: &str) -> Method {
        Method::new(ElementInfo::root(name))
    }

    fn build(modules: &[Module], mode: DiagramMode) -> Graph {
        build_graph(modules, mode, &StyleConfig::default())
    }

    fn inheritance_app() -> Module {
        let mut base = Class::new(ElementInfo::root("Base"));
        base.add_element(method("run").into()).unwrap();
        let derived = Class::new(ElementInfo::root("Derived")).with_extends(qn("app.Base"));

        let mut app = Module::new(ElementInfo::root("app"));
        app.add_element(base.into()).unwrap();
        app.add_element(derived.into()).unwrap();
        app
    }

    #[test]
    fn test_graph_defaults() {
        let graph = build(&[], DiagramMode::Full);
        assert_eq!(graph.id(), "G");
        assert_eq!(graph.attributes()["fontname"], "Verdana");
        assert_eq!(graph.attributes()["fontsize"], "12");
        assert_eq!(graph.node_defaults()["shape"], "record");
        assert_eq!(graph.node_defaults()["fontsize"], "12");
        assert_eq!(graph.edge_defaults()["fontname"], "Verdana");
    }

    #[test]
    fn test_custom_style() {
        let style = StyleConfig::new("Courier", 9);
        let graph = build_graph(&[], DiagramMode::Full, &style);
        assert_eq!(graph.attributes()["fontname"], "Courier");
        assert_eq!(graph.edge_defaults()["fontsize"], "9");
    }

    #[test]
    fn test_inheritance_scenario() {
        let graph = build(&[inheritance_app()], DiagramMode::Full);

        let nodes = graph.all_nodes();
        assert_eq!(nodes.len(), 2);
        let base = graph.find_node("app|Base").unwrap();
        assert_eq!(base.label(), Some("{Base|+  run()\\l}"));
        let derived = graph.find_node("app|Derived").unwrap();
        assert_eq!(derived.label(), Some("{Derived}"));

        let edges = graph.all_edges();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].source(), "app|Derived");
        assert_eq!(edges[0].target(), "app|Base");
        assert_eq!(edges[0].relation(), Some(Relation::Inheritance));
    }

    #[test]
    fn test_class_dependencies_collapse() {
        let mut holder = Class::new(ElementInfo::root("Holder"));
        holder
            .add_element(
                Property::new(ElementInfo::root("x"), qn("TypeA"))
                    .with_getter(true)
                    .into(),
            )
            .unwrap();
        holder
            .add_element(
                Property::new(ElementInfo::root("y"), qn("TypeA"))
                    .with_setter(true)
                    .into(),
            )
            .unwrap();
        let mut module = Module::new(ElementInfo::root("m"));
        module.add_element(holder.into()).unwrap();

        let graph = build(&[module], DiagramMode::Full);
        let edges = graph.all_edges();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].target(), "TypeA");
        assert_eq!(edges[0].relation(), Some(Relation::Association));
        assert_eq!(
            graph.find_node("m|Holder").unwrap().label(),
            Some("{Holder|+  get x\\l+  set y\\l}")
        );
    }

    #[test]
    fn test_dependencies_only_collapses_duplicates_in_order() {
        let mut module = Module::new(ElementInfo::root("app"));
        for name in ["B", "A", "B"] {
            module
                .add_element(ImportedModule::new(ElementInfo::root(name)).into())
                .unwrap();
        }
        module
            .add_element(Class::new(ElementInfo::root("Hidden")).into())
            .unwrap();

        let graph = build(&[module], DiagramMode::DependenciesOnly);
        let targets: Vec<_> = graph.all_edges().iter().map(|e| e.target()).collect();
        assert_eq!(targets, ["B", "A"]);
        assert!(graph.all_edges().iter().all(|e| e.source() == "app"));
        assert!(graph.all_nodes().is_empty());
        assert_eq!(graph.all_clusters().len(), 1);
    }

    #[test]
    fn test_dependency_targets_are_encoded() {
        let mut module = Module::new(ElementInfo::root("main"));
        module
            .add_element(ImportedModule::new(ElementInfo::root("./lib/util")).into())
            .unwrap();
        let graph = build(&[module], DiagramMode::DependenciesOnly);
        assert_eq!(graph.all_edges()[0].target(), ".|lib|util");
    }

    #[test]
    fn test_module_methods_node() {
        let mut module = Module::new(ElementInfo::root("util")).with_path("src");
        module
            .add_element(
                Method::new(ElementInfo::root("helper").with_lifetime(Lifetime::Static)).into(),
            )
            .unwrap();

        let graph = build(&[module], DiagramMode::Full);
        let node = graph.find_node("src|util").unwrap();
        assert_eq!(node.label(), Some("+ \\<static\\> helper()\\l"));
        assert_eq!(node.attributes()["shape"], "none");
        assert_eq!(graph.all_clusters()[0].id(), "cluster_src|util");
    }

    #[test]
    fn test_module_without_methods_has_no_node() {
        let module = Module::new(ElementInfo::root("empty"));
        let graph = build(&[module], DiagramMode::Full);
        assert!(graph.all_nodes().is_empty());
        assert_eq!(graph.all_clusters().len(), 1);
    }

    #[test]
    fn test_nested_modules_render_in_full_and_shade_lighter() {
        let mut inner = Module::new(
            ElementInfo::root("inner").with_visibility(Visibility::Private),
        );
        inner
            .add_element(Class::new(ElementInfo::root("Leaf")).into())
            .unwrap();
        let mut outer = Module::new(ElementInfo::root("outer"));
        outer.add_element(inner.into()).unwrap();

        let graph = build(&[outer], DiagramMode::DependenciesOnly);
        // Dependency-only mode never descends, so nothing nested appears.
        assert_eq!(graph.all_clusters().len(), 1);

        let mut inner = Module::new(
            ElementInfo::root("inner").with_visibility(Visibility::Private),
        );
        inner
            .add_element(Class::new(ElementInfo::root("Leaf")).into())
            .unwrap();
        let mut outer = Module::new(ElementInfo::root("outer"));
        outer.add_element(inner.into()).unwrap();

        let graph = build(&[outer], DiagramMode::Full);
        let clusters = graph.all_clusters();
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].attributes()["color"], "gray95");
        assert_eq!(clusters[1].id(), "cluster_outer|inner");
        assert_eq!(clusters[1].label(), Some("- inner"));
        assert_eq!(clusters[1].attributes()["color"], "gray89");
        assert!(graph.find_node("outer|inner|Leaf").is_some());
    }

    #[test]
    fn test_shade_floor() {
        assert_eq!(cluster_shade(9), 41);
        assert_eq!(cluster_shade(10), 40);
        assert_eq!(cluster_shade(usize::MAX), 40);
    }

    #[test]
    fn test_dangling_targets_are_kept() {
        let class = Class::new(ElementInfo::root("Child")).with_extends(qn("vendor.Missing"));
        let mut module = Module::new(ElementInfo::root("m"));
        module.add_element(class.into()).unwrap();

        let graph = build(&[module], DiagramMode::Full);
        assert_eq!(graph.all_edges()[0].target(), "vendor|Missing");
        assert!(graph.find_node("vendor|Missing").is_none());
    }
}
