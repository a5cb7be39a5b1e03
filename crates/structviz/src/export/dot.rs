//! DOT serialization of diagram graphs.
//!
//! The abstract [`Graph`] is converted statement by statement into the
//! `dot-structures` model and printed with the `graphviz-rust` printer. All
//! identifiers and attribute values are emitted as quoted strings, since node
//! ids contain `|` and labels contain record syntax.

use dot_structures::{
    Attribute, Edge as DotEdge, EdgeTy, Graph as DotGraph, GraphAttributes, Id, Node as DotNode,
    NodeId, Stmt, Subgraph, Vertex,
};
use graphviz_rust::printer::{DotPrinter, PrinterContext};

use crate::graph::{Attributes, Cluster, Edge, Graph, Node, Scope, Statement};

/// Renders `graph` as a DOT document.
pub fn to_dot(graph: &Graph) -> String {
    convert_graph(graph).print(&mut PrinterContext::default())
}

fn convert_graph(graph: &Graph) -> DotGraph {
    let mut stmts = vec![
        Stmt::GAttribute(GraphAttributes::Graph(convert_attributes(graph.attributes()))),
        Stmt::GAttribute(GraphAttributes::Edge(convert_attributes(
            graph.edge_defaults(),
        ))),
        Stmt::GAttribute(GraphAttributes::Node(convert_attributes(
            graph.node_defaults(),
        ))),
    ];
    stmts.extend(graph.statements().iter().map(convert_statement));

    DotGraph::DiGraph {
        id: Id::Plain(graph.id().to_string()),
        strict: false,
        stmts,
    }
}

fn convert_statement(statement: &Statement) -> Stmt {
    match statement {
        Statement::Cluster(cluster) => Stmt::Subgraph(convert_cluster(cluster)),
        Statement::Node(node) => Stmt::Node(convert_node(node)),
        Statement::Edge(edge) => Stmt::Edge(convert_edge(edge)),
    }
}

fn convert_cluster(cluster: &Cluster) -> Subgraph {
    let mut stmts: Vec<Stmt> = convert_attributes(cluster.attributes())
        .into_iter()
        .map(Stmt::Attribute)
        .collect();
    stmts.extend(cluster.statements().iter().map(convert_statement));

    Subgraph {
        id: quoted(cluster.id()),
        stmts,
    }
}

fn convert_node(node: &Node) -> DotNode {
    DotNode::new(node_id(node.id()), convert_attributes(node.attributes()))
}

fn convert_edge(edge: &Edge) -> DotEdge {
    DotEdge {
        ty: EdgeTy::Pair(
            Vertex::N(node_id(edge.source())),
            Vertex::N(node_id(edge.target())),
        ),
        attributes: convert_attributes(edge.attributes()),
    }
}

fn convert_attributes(attributes: &Attributes) -> Vec<Attribute> {
    attributes
        .iter()
        .map(|(key, value)| Attribute(Id::Plain((*key).to_string()), quoted(value)))
        .collect()
}

fn node_id(id: &str) -> NodeId {
    NodeId(quoted(id), None)
}

/// Wraps `value` in double quotes, escaping embedded quotes.
///
/// Backslashes are kept as-is so label escapes such as `\l` reach the backend.
fn quoted(value: &str) -> Id {
    Id::Escaped(format!("\"{}\"", value.replace('"', "\\\"")))
}
