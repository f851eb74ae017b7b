// src/layout/layered.rs

use std::collections::BTreeMap;

use tracing::debug;

use crate::graph::{NodeId, Position, PrereqGraph, compute_metadata};
use crate::layout::reduce::contract_gates;

/// Spacing knobs for the layered layout.
#[derive(Debug, Clone, Copy)]
pub struct LayoutOptions {
    /// Horizontal distance between consecutive depth layers.
    pub layer_spacing: f64,
    /// Vertical distance between neighbouring nodes in a layer.
    pub node_spacing: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            layer_spacing: 180.0,
            node_spacing: 60.0,
        }
    }
}

/// Compute a position for every node.
///
/// Course nodes are laid out layered/hierarchically over the gate-contracted
/// subgraph: x by longest-path depth, y by in-layer order after one
/// barycenter pass against the previous layer. Gate nodes are then placed
/// between their neighbours: x halfway between the minimum and maximum
/// neighbour x, y at the neighbour average. A gate dangling on one side is
/// offset half a layer from that side.
pub fn compute_positions(
    graph: &PrereqGraph,
    options: LayoutOptions,
) -> BTreeMap<NodeId, Position> {
    let reduced = contract_gates(graph);
    let meta = compute_metadata(&reduced);

    // Group course ids into layers by depth.
    let mut layers: BTreeMap<usize, Vec<NodeId>> = BTreeMap::new();
    for (id, m) in &meta {
        layers.entry(m.depth).or_default().push(id.clone());
    }

    let mut positions: BTreeMap<NodeId, Position> = BTreeMap::new();

    for (depth, mut layer) in layers {
        if depth > 0 {
            // Barycenter pass: order each layer by the average y of its
            // predecessors in the already-placed layers.
            layer.sort_by(|a, b| {
                let ka = predecessor_barycenter(a, &meta, &positions);
                let kb = predecessor_barycenter(b, &meta, &positions);
                ka.total_cmp(&kb).then_with(|| a.cmp(b))
            });
        }

        let offset = (layer.len() as f64 - 1.0) / 2.0;
        for (row, id) in layer.into_iter().enumerate() {
            positions.insert(
                id,
                Position {
                    x: depth as f64 * options.layer_spacing,
                    y: (row as f64 - offset) * options.node_spacing,
                },
            );
        }
    }

    place_gates(graph, options, &mut positions);

    debug!(nodes = positions.len(), "layout computed");
    positions
}

/// Compute positions and write them onto the graph's nodes.
pub fn apply_layout(graph: &mut PrereqGraph, options: LayoutOptions) {
    let positions = compute_positions(graph, options);
    for (id, position) in positions {
        if let Some(node) = graph.node_mut(&id) {
            node.position = position;
        }
    }
}

fn predecessor_barycenter(
    id: &str,
    meta: &crate::graph::MetadataMap,
    positions: &BTreeMap<NodeId, Position>,
) -> f64 {
    let Some(m) = meta.get(id) else { return 0.0 };
    let ys: Vec<f64> = m
        .incoming_nodes
        .iter()
        .filter_map(|pred| positions.get(pred))
        .map(|p| p.y)
        .collect();
    if ys.is_empty() {
        0.0
    } else {
        ys.iter().sum::<f64>() / ys.len() as f64
    }
}

/// Position gates relative to their (already placed) course neighbours.
fn place_gates(
    graph: &PrereqGraph,
    options: LayoutOptions,
    positions: &mut BTreeMap<NodeId, Position>,
) {
    let meta = compute_metadata(graph);

    let gates: Vec<NodeId> = graph
        .nodes()
        .filter(|node| node.is_gate())
        .map(|node| node.id.clone())
        .collect();

    for gate in gates {
        let Some(m) = meta.get(&gate) else { continue };

        let incoming: Vec<Position> = m
            .incoming_nodes
            .iter()
            .filter_map(|id| positions.get(id))
            .copied()
            .collect();
        let outgoing: Vec<Position> = m
            .outgoing_nodes
            .iter()
            .filter_map(|id| positions.get(id))
            .copied()
            .collect();

        let neighbours: Vec<Position> =
            incoming.iter().chain(outgoing.iter()).copied().collect();

        let position = if neighbours.is_empty() {
            Position::default()
        } else if incoming.is_empty() || outgoing.is_empty() {
            // Dangling gate: offset half a layer from its single side, so it
            // sits before its targets (incoming missing) or after its
            // sources (outgoing missing).
            let anchor_x = mean(neighbours.iter().map(|p| p.x));
            let shift = if incoming.is_empty() {
                -options.layer_spacing / 2.0
            } else {
                options.layer_spacing / 2.0
            };
            Position {
                x: anchor_x + shift,
                y: mean(neighbours.iter().map(|p| p.y)),
            }
        } else {
            // Between sources and targets: halfway between the extreme
            // neighbour x coordinates, at the average neighbour y.
            let min_x = neighbours.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
            let max_x = neighbours
                .iter()
                .map(|p| p.x)
                .fold(f64::NEG_INFINITY, f64::max);
            Position {
                x: (min_x + max_x) / 2.0,
                y: mean(neighbours.iter().map(|p| p.y)),
            }
        };

        positions.insert(gate, position);
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let collected: Vec<f64> = values.collect();
    if collected.is_empty() {
        0.0
    } else {
        collected.iter().sum::<f64>() / collected.len() as f64
    }
}
