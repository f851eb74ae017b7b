use std::error::Error;

use prereqdag::doc::{
    DOCUMENT_VERSION, FlowDocument, graph_from_str, graph_to_string, load_graph, save_graph,
    validate_document,
};
use prereqdag::errors::DocumentError;
use prereqdag::graph::{Status, compute_metadata, update_all};
use prereqdag::parse::{AmbiguityHandling, generate_flow};
use prereqdag::records::CourseRecord;

type TestResult = Result<(), Box<dyn Error>>;

fn record(id: &str, prerequisite: &str) -> CourseRecord {
    CourseRecord {
        id: id.into(),
        prerequisite: prerequisite.into(),
        extra: serde_json::Map::new(),
    }
}

fn sample_flow() -> prereqdag::graph::PrereqGraph {
    let records = vec![
        record("CSE 142", ""),
        record("CSE 143", "CSE 142."),
        record("CSE 311", ""),
        record("CSE 321", ""),
        record("CSE 332", "CSE 311, CSE 321, or CSE 331."),
    ];
    let mut generated = generate_flow(&records, AmbiguityHandling::Conservative)
        .expect("flow generation");
    let meta = compute_metadata(&generated.graph);
    generated.graph.node_mut("CSE 142").unwrap().status = Status::Completed;
    update_all(&mut generated.graph, &meta);
    generated.graph
}

#[test]
fn round_trip_preserves_ids_statuses_and_flags() -> TestResult {
    let graph = sample_flow();

    let serialized = graph_to_string(&graph)?;
    let restored = graph_from_str(&serialized)?;

    assert_eq!(restored.node_count(), graph.node_count());
    assert_eq!(restored.edge_count(), graph.edge_count());

    for node in graph.nodes() {
        let restored_node = restored.node(&node.id).expect("node survives round trip");
        assert_eq!(restored_node.status, node.status, "node {}", node.id);
        assert_eq!(restored_node.is_gate(), node.is_gate(), "node {}", node.id);
    }
    for edge in graph.edges() {
        let restored_edge = restored.edge(&edge.id).expect("edge survives round trip");
        assert_eq!(restored_edge.status, edge.status, "edge {}", edge.id);
        assert_eq!(restored_edge.concurrent, edge.concurrent, "edge {}", edge.id);
    }

    Ok(())
}

#[test]
fn course_payload_fields_survive_the_round_trip() -> TestResult {
    let mut extra = serde_json::Map::new();
    extra.insert("title".into(), serde_json::json!("Computer Programming II"));
    let records = vec![CourseRecord {
        id: "CSE 143".into(),
        prerequisite: String::new(),
        extra,
    }];
    let generated = generate_flow(&records, AmbiguityHandling::Conservative)?;

    let serialized = graph_to_string(&generated.graph)?;
    assert!(serialized.contains("Computer Programming II"));
    let restored = graph_from_str(&serialized)?;
    assert!(restored.contains_node("CSE 143"));

    Ok(())
}

#[test]
fn unsupported_version_is_a_distinct_rejection() -> TestResult {
    let graph = sample_flow();
    let mut doc = FlowDocument::from_graph(&graph);
    assert_eq!(doc.version, DOCUMENT_VERSION);

    doc.version = "0.3".into();
    let err = validate_document(&doc).expect_err("old version must be rejected");
    assert!(matches!(err, DocumentError::UnsupportedVersion { .. }), "{err}");

    Ok(())
}

#[test]
fn garbage_input_is_classified_as_malformed() -> TestResult {
    let err = graph_from_str("not a flow document").expect_err("must fail");
    assert!(matches!(err, DocumentError::Malformed(_)), "{err}");

    Ok(())
}

#[test]
fn edge_with_missing_endpoint_is_rejected() -> TestResult {
    let contents = format!(
        r#"{{
            "version": "{DOCUMENT_VERSION}",
            "elements": [
                {{"id": "CSE 142", "kind": "course",
                  "record": {{"id": "CSE 142", "prerequisite": ""}},
                  "status": "ready"}},
                {{"id": "CSE 141 -> CSE 142", "source": "CSE 141",
                  "target": "CSE 142", "status": "ready"}}
            ]
        }}"#
    );

    let err = graph_from_str(&contents).expect_err("dangling edge must be rejected");
    assert!(matches!(err, DocumentError::InvalidElement(_)), "{err}");

    Ok(())
}

#[test]
fn edge_id_inconsistent_with_endpoints_is_rejected() -> TestResult {
    let contents = format!(
        r#"{{
            "version": "{DOCUMENT_VERSION}",
            "elements": [
                {{"id": "CSE 142", "kind": "course",
                  "record": {{"id": "CSE 142", "prerequisite": ""}},
                  "status": "ready"}},
                {{"id": "CSE 143", "kind": "course",
                  "record": {{"id": "CSE 143", "prerequisite": ""}},
                  "status": "ready"}},
                {{"id": "bogus", "source": "CSE 142",
                  "target": "CSE 143", "status": "ready"}}
            ]
        }}"#
    );

    let err = graph_from_str(&contents).expect_err("bogus edge id must be rejected");
    assert!(matches!(err, DocumentError::InvalidElement(_)), "{err}");

    Ok(())
}

#[test]
fn duplicate_node_ids_are_rejected() -> TestResult {
    let contents = format!(
        r#"{{
            "version": "{DOCUMENT_VERSION}",
            "elements": [
                {{"id": "CSE 142", "kind": "course",
                  "record": {{"id": "CSE 142", "prerequisite": ""}},
                  "status": "ready"}},
                {{"id": "CSE 142", "kind": "course",
                  "record": {{"id": "CSE 142", "prerequisite": ""}},
                  "status": "completed"}}
            ]
        }}"#
    );

    let err = graph_from_str(&contents).expect_err("duplicate node must be rejected");
    assert!(matches!(err, DocumentError::InvalidElement(_)), "{err}");

    Ok(())
}

#[test]
fn save_and_load_through_a_file() -> TestResult {
    let graph = sample_flow();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("flow.json");

    save_graph(&path, &graph)?;
    let restored = load_graph(&path)?;

    assert_eq!(restored.node_count(), graph.node_count());
    assert_eq!(restored.edge_count(), graph.edge_count());

    Ok(())
}

#[test]
fn missing_file_is_an_io_rejection() -> TestResult {
    let dir = tempfile::tempdir()?;
    let err = load_graph(dir.path().join("absent.json")).expect_err("must fail");
    assert!(matches!(err, DocumentError::Io { .. }), "{err}");

    Ok(())
}
