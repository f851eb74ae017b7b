use std::error::Error;

use prereqdag::graph::{Edge, Node, PrereqGraph, compute_metadata};

type TestResult = Result<(), Box<dyn Error>>;

/// Diamond with a long side:
///
/// ```text
/// MATH 124 -> MATH 125 -> MATH 126 -> MATH 307
/// MATH 124 ------------------------> MATH 307
/// CSE 142  -> CSE 143
/// ```
fn sample_graph() -> PrereqGraph {
    let mut graph = PrereqGraph::new();
    for id in ["MATH 124", "MATH 125", "MATH 126", "MATH 307", "CSE 142", "CSE 143"] {
        graph.insert_node(Node::placeholder(id));
    }
    graph.add_edge(Edge::new("MATH 124", "MATH 125"));
    graph.add_edge(Edge::new("MATH 125", "MATH 126"));
    graph.add_edge(Edge::new("MATH 126", "MATH 307"));
    graph.add_edge(Edge::new("MATH 124", "MATH 307"));
    graph.add_edge(Edge::new("CSE 142", "CSE 143"));
    graph
}

#[test]
fn roots_have_depth_zero() -> TestResult {
    let graph = sample_graph();
    let meta = compute_metadata(&graph);

    assert_eq!(meta["MATH 124"].depth, 0);
    assert_eq!(meta["CSE 142"].depth, 0);

    Ok(())
}

#[test]
fn depth_is_the_longest_path_from_any_root() -> TestResult {
    let graph = sample_graph();
    let meta = compute_metadata(&graph);

    assert_eq!(meta["MATH 125"].depth, 1);
    assert_eq!(meta["MATH 126"].depth, 2);
    // The direct MATH 124 edge does not shorten the longest path.
    assert_eq!(meta["MATH 307"].depth, 3);

    // The edge inequality holds for every edge.
    for edge in graph.edges() {
        assert!(
            meta[&edge.target].depth >= meta[&edge.source].depth + 1,
            "edge {}",
            edge.id
        );
    }

    Ok(())
}

#[test]
fn adjacency_lists_cover_both_directions() -> TestResult {
    let graph = sample_graph();
    let meta = compute_metadata(&graph);

    let m = &meta["MATH 125"];
    assert_eq!(m.incoming_nodes, vec!["MATH 124".to_string()]);
    assert_eq!(m.outgoing_nodes, vec!["MATH 126".to_string()]);
    assert_eq!(m.incoming_edges, vec!["MATH 124 -> MATH 125".to_string()]);
    assert_eq!(m.outgoing_edges, vec!["MATH 125 -> MATH 126".to_string()]);
    assert_eq!(
        m.connected_nodes,
        vec!["MATH 124".to_string(), "MATH 126".to_string()]
    );
    assert_eq!(m.connected_edges.len(), 2);

    let root = &meta["MATH 124"];
    assert!(root.incoming_nodes.is_empty());
    assert_eq!(root.outgoing_nodes.len(), 2);

    Ok(())
}

#[test]
fn recompute_on_an_unchanged_graph_is_idempotent() -> TestResult {
    let graph = sample_graph();

    let first = compute_metadata(&graph);
    let second = compute_metadata(&graph);

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn recompute_follows_structural_mutations() -> TestResult {
    let mut graph = sample_graph();
    let before = compute_metadata(&graph);
    assert_eq!(before["CSE 143"].depth, 1);

    graph.remove_edge("CSE 142 -> CSE 143");
    let after = compute_metadata(&graph);

    assert_eq!(after["CSE 143"].depth, 0);
    assert!(after["CSE 143"].incoming_nodes.is_empty());

    Ok(())
}
