// src/graph/metadata.rs

use std::collections::BTreeMap;

use tracing::debug;

use crate::graph::model::{EdgeId, NodeId, PrereqGraph};

/// Derived per-node metadata: adjacency and longest-path depth.
///
/// Not authoritative; rebuilt in full after every structural mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeMetadata {
    /// Longest path length (in edges) from any root. Roots have depth 0.
    pub depth: usize,
    pub incoming_nodes: Vec<NodeId>,
    pub incoming_edges: Vec<EdgeId>,
    pub outgoing_nodes: Vec<NodeId>,
    pub outgoing_edges: Vec<EdgeId>,
    /// Union of both directions; used only for UI highlighting.
    pub connected_nodes: Vec<NodeId>,
    pub connected_edges: Vec<EdgeId>,
}

/// Map of derived metadata, keyed by node id.
pub type MetadataMap = BTreeMap<NodeId, NodeMetadata>;

/// Compute adjacency lists and longest-path depth for every node.
///
/// Rebuilds from scratch; O(V+E) plus the depth relaxation. Running it twice
/// on an unchanged graph yields identical output.
///
/// Precondition: the graph is acyclic. This function performs no cycle
/// detection; the depth relaxation does not terminate on a cyclic graph.
/// Callers accepting user edits must reject cycle-creating insertions first
/// (see [`crate::graph::validate`]).
pub fn compute_metadata(graph: &PrereqGraph) -> MetadataMap {
    let mut meta: MetadataMap = graph
        .nodes()
        .map(|node| (node.id.clone(), NodeMetadata::default()))
        .collect();

    // Adjacency: one pass over the edge list. Edges iterate in id order, so
    // all lists come out deterministic.
    for edge in graph.edges() {
        if let Some(m) = meta.get_mut(&edge.source) {
            m.outgoing_nodes.push(edge.target.clone());
            m.outgoing_edges.push(edge.id.clone());
        }
        if let Some(m) = meta.get_mut(&edge.target) {
            m.incoming_nodes.push(edge.source.clone());
            m.incoming_edges.push(edge.id.clone());
        }
    }

    for m in meta.values_mut() {
        m.connected_nodes = m
            .incoming_nodes
            .iter()
            .chain(m.outgoing_nodes.iter())
            .cloned()
            .collect();
        m.connected_edges = m
            .incoming_edges
            .iter()
            .chain(m.outgoing_edges.iter())
            .cloned()
            .collect();
    }

    // Depth: from every root, walk outgoing edges with an explicit stack and
    // relax `depth = max(depth, parent + 1)`. A node is revisited only when
    // its depth strictly increases, which bounds the walk on acyclic input.
    let roots: Vec<NodeId> = meta
        .iter()
        .filter(|(_, m)| m.incoming_nodes.is_empty())
        .map(|(id, _)| id.clone())
        .collect();

    debug!(roots = roots.len(), nodes = meta.len(), "computing depth from roots");

    let mut stack: Vec<(NodeId, usize)> = roots.into_iter().map(|id| (id, 0)).collect();

    while let Some((id, depth)) = stack.pop() {
        let children: Vec<NodeId> = match meta.get(&id) {
            Some(m) => m.outgoing_nodes.clone(),
            None => continue,
        };
        for child in children {
            if let Some(child_meta) = meta.get_mut(&child) {
                if depth + 1 > child_meta.depth {
                    child_meta.depth = depth + 1;
                    stack.push((child, depth + 1));
                }
            }
        }
    }

    meta
}
