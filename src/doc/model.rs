// src/doc/model.rs

use serde::{Deserialize, Serialize};

use crate::graph::{Edge, Node, PrereqGraph};

/// Version written into new documents. Older versions are handled by a
/// migration chain owned by the file-I/O collaborator; the core only gates on
/// the string.
pub const DOCUMENT_VERSION: &str = "1.0";

/// One element of the flat `elements` list: a node or an edge.
///
/// Nodes carry a `kind` tag, edges carry `source`/`target`, so the untagged
/// representation is unambiguous.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Element {
    Node(Node),
    Edge(Edge),
}

/// The persisted flow document: `{version, elements}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowDocument {
    pub version: String,
    pub elements: Vec<Element>,
}

impl FlowDocument {
    /// Serialize a working graph into the document shape, nodes first then
    /// edges, both in id order.
    pub fn from_graph(graph: &PrereqGraph) -> Self {
        let mut elements: Vec<Element> = Vec::with_capacity(graph.node_count() + graph.edge_count());
        for node in graph.nodes() {
            elements.push(Element::Node(node.clone()));
        }
        for edge in graph.edges() {
            elements.push(Element::Edge(edge.clone()));
        }
        Self {
            version: DOCUMENT_VERSION.to_string(),
            elements,
        }
    }
}
