// src/graph/validate.rs

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::graph::model::PrereqGraph;

/// Structural precondition checks for user-driven edits.
///
/// The metadata engine has no internal cycle guard (its depth relaxation does
/// not terminate on a cyclic graph), so cycle-creating insertions must be
/// refused here, *before* the edit mutates anything. A refusal is a boolean
/// no-op: the graph is left unchanged and no error is raised.

/// Returns `true` if inserting `source -> target` would close a cycle.
///
/// Builds the hypothetical graph and topologically sorts it; a failed sort
/// means the candidate edge closes a cycle.
pub fn creates_cycle(graph: &PrereqGraph, source: &str, target: &str) -> bool {
    if source == target {
        return true;
    }

    let mut candidate: DiGraphMap<&str, ()> = DiGraphMap::new();

    for node in graph.nodes() {
        candidate.add_node(node.id.as_str());
    }
    for edge in graph.edges() {
        candidate.add_edge(edge.source.as_str(), edge.target.as_str(), ());
    }
    candidate.add_edge(source, target, ());

    toposort(&candidate, None).is_err()
}

/// Returns `true` if the edge `source -> target` may be inserted.
///
/// Checks, in order: distinct existing endpoints, no duplicate, no reverse
/// duplicate, and no cycle. Collaborators call this before issuing the edit;
/// [`PrereqGraph::add_edge`] re-checks everything except the cycle condition.
pub fn can_add_edge(graph: &PrereqGraph, source: &str, target: &str) -> bool {
    if source == target {
        return false;
    }
    if !graph.contains_node(source) || !graph.contains_node(target) {
        return false;
    }
    if graph.has_edge(source, target) || graph.has_edge(target, source) {
        return false;
    }
    !creates_cycle(graph, source, target)
}
