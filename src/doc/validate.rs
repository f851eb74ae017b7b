// src/doc/validate.rs

use std::collections::BTreeSet;

use crate::doc::model::{DOCUMENT_VERSION, Element, FlowDocument};
use crate::errors::DocumentError;
use crate::graph::edge_id;

/// Run structural validation against a deserialized document.
///
/// Checks, each with its own rejection cause:
/// - the version string is the supported one,
/// - node ids are unique,
/// - every edge id is consistent with its endpoints (the arrow-id scheme),
/// - edge endpoints refer to nodes present in the document,
/// - no self-loops, no duplicate or reverse-duplicate edges.
///
/// Called before any live state is touched; a malformed document never
/// partially loads.
pub fn validate_document(doc: &FlowDocument) -> Result<(), DocumentError> {
    if doc.version != DOCUMENT_VERSION {
        return Err(DocumentError::UnsupportedVersion {
            found: doc.version.clone(),
            expected: DOCUMENT_VERSION.to_string(),
        });
    }

    let mut node_ids: BTreeSet<&str> = BTreeSet::new();
    for element in &doc.elements {
        if let Element::Node(node) = element {
            if !node_ids.insert(node.id.as_str()) {
                return Err(DocumentError::InvalidElement(format!(
                    "duplicate node id '{}'",
                    node.id
                )));
            }
        }
    }

    let mut edge_pairs: BTreeSet<(&str, &str)> = BTreeSet::new();
    for element in &doc.elements {
        let Element::Edge(edge) = element else { continue };

        if edge.id != edge_id(&edge.source, &edge.target) {
            return Err(DocumentError::InvalidElement(format!(
                "edge id '{}' does not match its endpoints '{}' and '{}'",
                edge.id, edge.source, edge.target
            )));
        }
        if edge.source == edge.target {
            return Err(DocumentError::InvalidElement(format!(
                "self-loop edge '{}'",
                edge.id
            )));
        }
        for endpoint in [&edge.source, &edge.target] {
            if !node_ids.contains(endpoint.as_str()) {
                return Err(DocumentError::InvalidElement(format!(
                    "edge '{}' references missing node '{}'",
                    edge.id, endpoint
                )));
            }
        }
        if !edge_pairs.insert((edge.source.as_str(), edge.target.as_str())) {
            return Err(DocumentError::InvalidElement(format!(
                "duplicate edge '{}'",
                edge.id
            )));
        }
        if edge_pairs.contains(&(edge.target.as_str(), edge.source.as_str())) {
            return Err(DocumentError::InvalidElement(format!(
                "edge '{}' is the reverse of an existing edge",
                edge.id
            )));
        }
    }

    Ok(())
}
