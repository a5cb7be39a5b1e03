//! Abstract directed graph handed to the rendering backend.
//!
//! The graph mirrors what a DOT document can express: graph-level and default
//! node/edge attributes, nested clusters, nodes and edges. Statement order is
//! preserved so the exported document is reproducible.
//!
//! # Architecture
//!
//! - [`Graph`]: The root, holding defaults and top-level statements
//! - [`Cluster`]: A nested group of statements, rendered as a filled box
//! - [`Node`]: A labelled node addressed by its encoded identifier
//! - [`Edge`]: A directed edge, optionally tagged with a [`Relation`]
//!
//! Both [`Graph`] and [`Cluster`] implement [`Scope`], so assembly code can
//! add statements without caring which level it is writing to.

use indexmap::IndexMap;

/// Ordered attribute list.
pub type Attributes = IndexMap<&'static str, String>;

/// Kind of relation an edge expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Class extends another class; drawn with a hollow arrowhead.
    Inheritance,
    /// Class references another type; drawn with an open arrowhead.
    Association,
}

impl Relation {
    /// Returns the arrowhead style for this relation.
    pub fn arrowhead(self) -> &'static str {
        match self {
            Self::Inheritance => "onormal",
            Self::Association => "vee",
        }
    }
}

/// A labelled node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: String,
    attributes: Attributes,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Attributes::new(),
        }
    }

    /// Sets an attribute, replacing any previous value.
    pub fn with_attribute(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns the `label` attribute, if set.
    pub fn label(&self) -> Option<&str> {
        self.attributes.get("label").map(String::as_str)
    }
}

/// A directed edge between two node identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    source: String,
    target: String,
    relation: Option<Relation>,
    attributes: Attributes,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            relation: None,
            attributes: Attributes::new(),
        }
    }

    /// Tags the edge with a relation and its arrowhead.
    pub fn with_relation(mut self, relation: Relation) -> Self {
        self.relation = Some(relation);
        self.attributes
            .insert("arrowhead", relation.arrowhead().to_string());
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn relation(&self) -> Option<Relation> {
        self.relation
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// A nested group of statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    id: String,
    attributes: Attributes,
    statements: Vec<Statement>,
}

impl Cluster {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Attributes::new(),
            statements: Vec::new(),
        }
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        self.attributes.insert(key, value.into());
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns the `label` attribute, if set.
    pub fn label(&self) -> Option<&str> {
        self.attributes.get("label").map(String::as_str)
    }
}

/// A statement inside a graph or cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Cluster(Cluster),
    Node(Node),
    Edge(Edge),
}

/// A container of statements.
pub trait Scope {
    fn statements(&self) -> &[Statement];

    fn statements_mut(&mut self) -> &mut Vec<Statement>;

    fn add_cluster(&mut self, cluster: Cluster) {
        self.statements_mut().push(Statement::Cluster(cluster));
    }

    fn add_node(&mut self, node: Node) {
        self.statements_mut().push(Statement::Node(node));
    }

    fn add_edge(&mut self, edge: Edge) {
        self.statements_mut().push(Statement::Edge(edge));
    }

    /// Returns every node in this scope and its nested clusters, in statement order.
    fn all_nodes(&self) -> Vec<&Node> {
        let mut nodes = Vec::new();
        collect(self.statements(), &mut |statement| {
            if let Statement::Node(node) = statement {
                nodes.push(node);
            }
        });
        nodes
    }

    /// Returns every edge in this scope and its nested clusters, in statement order.
    fn all_edges(&self) -> Vec<&Edge> {
        let mut edges = Vec::new();
        collect(self.statements(), &mut |statement| {
            if let Statement::Edge(edge) = statement {
                edges.push(edge);
            }
        });
        edges
    }

    /// Returns every cluster in this scope, parents before their children.
    fn all_clusters(&self) -> Vec<&Cluster> {
        let mut clusters = Vec::new();
        collect(self.statements(), &mut |statement| {
            if let Statement::Cluster(cluster) = statement {
                clusters.push(cluster);
            }
        });
        clusters
    }

    /// Finds a node by identifier anywhere in this scope.
    fn find_node(&self, id: &str) -> Option<&Node> {
        self.all_nodes().into_iter().find(|node| node.id() == id)
    }
}

fn collect<'a>(statements: &'a [Statement], visit: &mut impl FnMut(&'a Statement)) {
    for statement in statements {
        visit(statement);
        if let Statement::Cluster(cluster) = statement {
            collect(&cluster.statements, visit);
        }
    }
}

impl Scope for Cluster {
    fn statements(&self) -> &[Statement] {
        &self.statements
    }

    fn statements_mut(&mut self) -> &mut Vec<Statement> {
        &mut self.statements
    }
}

/// The root of a diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    id: String,
    attributes: Attributes,
    node_defaults: Attributes,
    edge_defaults: Attributes,
    statements: Vec<Statement>,
}

impl Graph {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Attributes::new(),
            node_defaults: Attributes::new(),
            edge_defaults: Attributes::new(),
            statements: Vec::new(),
        }
    }

    /// Sets a graph-level attribute.
    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        self.attributes.insert(key, value.into());
    }

    /// Sets a default attribute applied to every node.
    pub fn set_node_default(&mut self, key: &'static str, value: impl Into<String>) {
        self.node_defaults.insert(key, value.into());
    }

    /// Sets a default attribute applied to every edge.
    pub fn set_edge_default(&mut self, key: &'static str, value: impl Into<String>) {
        self.edge_defaults.insert(key, value.into());
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn node_defaults(&self) -> &Attributes {
        &self.node_defaults
    }

    pub fn edge_defaults(&self) -> &Attributes {
        &self.edge_defaults
    }
}

impl Scope for Graph {
    fn statements(&self) -> &[Statement] {
        &self.statements
    }

    fn statements_mut(&mut self) -> &mut Vec<Statement> {
        &mut self.statements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_arrowheads_differ() {
        assert_eq!(Relation::Inheritance.arrowhead(), "onormal");
        assert_eq!(Relation::Association.arrowhead(), "vee");
    }

    #[test]
    fn test_edge_relation_sets_arrowhead() {
        let edge = Edge::new("a", "b").with_relation(Relation::Inheritance);
        assert_eq!(edge.relation(), Some(Relation::Inheritance));
        assert_eq!(
            edge.attributes().get("arrowhead").map(String::as_str),
            Some("onormal")
        );

        let plain = Edge::new("a", "b");
        assert!(plain.relation().is_none());
        assert!(plain.attributes().is_empty());
    }

    #[test]
    fn test_nested_collection_order() {
        let mut inner = Cluster::new("cluster_inner");
        inner.add_node(Node::new("inner_node"));
        inner.add_edge(Edge::new("inner_node", "outer_node"));

        let mut outer = Cluster::new("cluster_outer");
        outer.add_node(Node::new("outer_node"));
        outer.add_cluster(inner);

        let mut graph = Graph::new("G");
        graph.add_cluster(outer);
        graph.add_edge(Edge::new("x", "y"));

        let nodes: Vec<_> = graph.all_nodes().iter().map(|n| n.id()).collect();
        assert_eq!(nodes, ["outer_node", "inner_node"]);

        let clusters: Vec<_> = graph.all_clusters().iter().map(|c| c.id()).collect();
        assert_eq!(clusters, ["cluster_outer", "cluster_inner"]);

        assert_eq!(graph.all_edges().len(), 2);
        assert!(graph.find_node("inner_node").is_some());
        assert!(graph.find_node("missing").is_none());
    }
}
