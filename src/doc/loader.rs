// src/doc/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::doc::model::{Element, FlowDocument};
use crate::doc::validate::validate_document;
use crate::errors::DocumentError;
use crate::graph::PrereqGraph;

/// Deserialize a document from a JSON string. No semantic validation; use
/// [`graph_from_str`] / [`load_graph`] for the full load path.
pub fn document_from_str(contents: &str) -> Result<FlowDocument, DocumentError> {
    Ok(serde_json::from_str(contents)?)
}

/// Parse and validate a document, then build the working graph from it.
///
/// The document was validated first, so every insertion is accepted; this is
/// the only path by which persisted state reaches the live graph.
pub fn graph_from_str(contents: &str) -> Result<PrereqGraph, DocumentError> {
    let doc = document_from_str(contents)?;
    validate_document(&doc)?;

    let mut graph = PrereqGraph::new();
    for element in &doc.elements {
        match element {
            Element::Node(node) => {
                graph.insert_node(node.clone());
            }
            Element::Edge(edge) => {
                graph.add_edge(edge.clone());
            }
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        version = %doc.version,
        "loaded flow document"
    );
    Ok(graph)
}

/// Load a flow document file into a working graph.
pub fn load_graph(path: impl AsRef<Path>) -> Result<PrereqGraph, DocumentError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    graph_from_str(&contents)
}

/// Serialize the working graph into the document shape as pretty JSON.
pub fn graph_to_string(graph: &PrereqGraph) -> Result<String, DocumentError> {
    Ok(serde_json::to_string_pretty(&FlowDocument::from_graph(graph))?)
}

/// Write the working graph to a flow document file.
pub fn save_graph(path: impl AsRef<Path>, graph: &PrereqGraph) -> Result<(), DocumentError> {
    let path = path.as_ref();
    let contents = graph_to_string(graph)?;
    fs::write(path, contents).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })
}
