// src/layout/reduce.rs

use tracing::debug;

use crate::graph::{Edge, NodeId, PrereqGraph};

/// Contract all logic gates out of the graph.
///
/// For each gate, an edge is synthesized directly between each of its
/// predecessors and each of its successors, then the gate and its arcs are
/// removed. The result is a course-only graph in which gates never affect
/// course depth or x-position. Duplicate/reverse synthesized edges are
/// refused by the usual insertion invariants, which is fine for layout.
pub fn contract_gates(graph: &PrereqGraph) -> PrereqGraph {
    let mut reduced = graph.clone();

    let gates: Vec<NodeId> = reduced
        .nodes()
        .filter(|node| node.is_gate())
        .map(|node| node.id.clone())
        .collect();

    for gate in &gates {
        let preds: Vec<NodeId> = reduced
            .edges()
            .filter(|edge| edge.target == *gate)
            .map(|edge| edge.source.clone())
            .collect();
        let succs: Vec<NodeId> = reduced
            .edges()
            .filter(|edge| edge.source == *gate)
            .map(|edge| edge.target.clone())
            .collect();

        for pred in &preds {
            for succ in &succs {
                reduced.add_edge(Edge::new(pred.as_str(), succ.as_str()));
            }
        }
        reduced.remove_node(gate);
    }

    debug!(
        gates = gates.len(),
        before = graph.node_count(),
        after = reduced.node_count(),
        "contracted logic gates for layout"
    );

    reduced
}
