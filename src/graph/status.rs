// src/graph/status.rs

use tracing::{debug, warn};

use crate::graph::metadata::MetadataMap;
use crate::graph::model::{Edge, NodeKind, PrereqGraph, Status};

/// Effective status code an edge contributes to its target.
///
/// Mirrors the edge class, except that a concurrent-flagged edge whose source
/// is enrolled counts as completed: concurrent enrollment satisfies the
/// requirement as if already done.
fn effective_code(edge: &Edge) -> u8 {
    if edge.concurrent && edge.status == Status::Enrolled {
        Status::Completed.code()
    } else {
        edge.status.code()
    }
}

/// Recompute one node's status from its incoming edge classes, then mirror
/// the new status onto its outgoing edge classes so dependents see the
/// propagated value on their next recompute.
///
/// The rule branches on the node variant:
///
/// - course: `m = max` incoming effective code (0 with no incoming edges).
///   `m == 0` keeps an explicit completed/enrolled status and otherwise means
///   ready; `m == 1` under-one-away; `m == 2` one-away; `m > 2` over-one-away.
/// - `and` gate: status at position `max` of the incoming effective codes
///   (completed when nothing feeds it).
/// - `or` gate: status at position `min` of the incoming effective codes
///   (completed when nothing feeds it).
pub fn update_node_status(graph: &mut PrereqGraph, metadata: &MetadataMap, id: &str) {
    let Some(meta) = metadata.get(id) else {
        warn!(node = %id, "status update for node missing from metadata; ignoring");
        return;
    };

    let codes: Vec<u8> = meta
        .incoming_edges
        .iter()
        .filter_map(|edge_id| graph.edge(edge_id))
        .map(effective_code)
        .collect();

    let Some(node) = graph.node(id) else {
        warn!(node = %id, "status update for unknown node; ignoring");
        return;
    };

    let new_status = match node.kind {
        NodeKind::Course { .. } => {
            let m = codes.iter().copied().max().unwrap_or(0);
            match m {
                0 => match node.status {
                    // Already taken or in progress; never demote to ready.
                    Status::Completed | Status::Enrolled => node.status,
                    _ => Status::Ready,
                },
                1 => Status::UnderOneAway,
                2 => Status::OneAway,
                _ => Status::OverOneAway,
            }
        }
        NodeKind::And => {
            let m = codes.iter().copied().max().unwrap_or(0);
            Status::from_code(m)
        }
        NodeKind::Or => {
            let m = codes.iter().copied().min().unwrap_or(0);
            Status::from_code(m)
        }
    };

    apply_status(graph, metadata, id, new_status);
}

/// Set a node's status and mirror it onto the node's outgoing edge classes.
///
/// This is also the entry point for user-driven status changes ("mark course
/// completed/enrolled"): apply the status, then recompute downstream.
pub fn apply_status(graph: &mut PrereqGraph, metadata: &MetadataMap, id: &str, status: Status) {
    let Some(node) = graph.node_mut(id) else {
        warn!(node = %id, "apply_status for unknown node; ignoring");
        return;
    };
    if node.status != status {
        debug!(node = %id, from = node.status.as_str(), to = status.as_str(), "status changed");
    }
    node.status = status;

    let outgoing: Vec<String> = match metadata.get(id) {
        Some(meta) => meta.outgoing_edges.clone(),
        None => Vec::new(),
    };
    for edge_id in outgoing {
        if let Some(edge) = graph.edge_mut(&edge_id) {
            edge.status = status;
        }
    }
}

/// Recompute every node once, in non-decreasing depth order.
///
/// A node's new status depends on up-to-date incoming edge classes, so
/// processing ancestors first makes a single pass converge on an acyclic
/// graph.
pub fn update_all(graph: &mut PrereqGraph, metadata: &MetadataMap) {
    let mut order: Vec<(usize, String)> = metadata
        .iter()
        .map(|(id, m)| (m.depth, id.clone()))
        .collect();
    order.sort();

    debug!(nodes = order.len(), "recomputing status for all nodes in depth order");

    for (_, id) in order {
        update_node_status(graph, metadata, &id);
    }
}

/// Recompute the descendants of a changed node, in depth order.
///
/// Exact within the changed node's reachable set. The changed node itself is
/// not recomputed; its status is taken as authoritative (typically just set
/// by the user) and is mirrored onto its outgoing edges first.
pub fn update_downstream(graph: &mut PrereqGraph, metadata: &MetadataMap, changed: &str) {
    let Some(status) = graph.node(changed).map(|node| node.status) else {
        warn!(node = %changed, "downstream update from unknown node; ignoring");
        return;
    };
    apply_status(graph, metadata, changed, status);

    // Collect the reachable set by walking outgoing adjacency.
    let mut reachable: Vec<String> = Vec::new();
    let mut stack: Vec<String> = vec![changed.to_string()];
    while let Some(id) = stack.pop() {
        let Some(meta) = metadata.get(&id) else { continue };
        for next in &meta.outgoing_nodes {
            if !reachable.contains(next) {
                reachable.push(next.clone());
                stack.push(next.clone());
            }
        }
    }

    let mut order: Vec<(usize, String)> = reachable
        .into_iter()
        .filter_map(|id| metadata.get(&id).map(|m| (m.depth, id)))
        .collect();
    order.sort();

    debug!(
        changed = %changed,
        descendants = order.len(),
        "recomputing status for downstream nodes"
    );

    for (_, id) in order {
        update_node_status(graph, metadata, &id);
    }
}
