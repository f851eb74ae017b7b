use std::error::Error;

use prereqdag::graph::{NodeKind, edge_id};
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

#[test]
fn single_course_clause_yields_one_direct_edge() -> TestResult {
    let records = vec![record("CSE 142", ""), record("CSE 143", "CSE 142.")];

    let generated = generate_flow(&records, AmbiguityHandling::Conservative)?;
    let graph = generated.graph;

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.has_edge("CSE 142", "CSE 143"));
    assert!(graph.nodes().all(|n| !n.is_gate()));

    Ok(())
}

#[test]
fn single_course_clause_with_unknown_source_is_skipped() -> TestResult {
    let records = vec![record("MATH 125", "MATH 124.")];

    let generated = generate_flow(&records, AmbiguityHandling::Conservative)?;

    assert_eq!(generated.graph.node_count(), 1);
    assert_eq!(generated.graph.edge_count(), 0);

    Ok(())
}

#[test]
fn either_clause_conservative_drops_when_nothing_is_required() -> TestResult {
    let records = vec![record("MATH 125", "Either MATH 124 or MATH 134.")];

    let generated = generate_flow(&records, AmbiguityHandling::Conservative)?;

    assert_eq!(generated.graph.node_count(), 1);
    assert_eq!(generated.graph.edge_count(), 0);
    // Shape-matched clauses are resolved, not reported as unparsed.
    assert!(generated.report.unparsed.is_empty());

    Ok(())
}

#[test]
fn either_clause_aggressive_wires_every_alternative() -> TestResult {
    let records = vec![record("MATH 125", "Either MATH 124 or MATH 134.")];

    let generated = generate_flow(&records, AmbiguityHandling::Aggressive)?;
    let graph = generated.graph;

    assert_eq!(graph.node_count(), 3);
    assert!(graph.has_edge("MATH 124", "MATH 125"));
    assert!(graph.has_edge("MATH 134", "MATH 125"));

    Ok(())
}

#[test]
fn already_required_alternative_gets_a_single_edge_in_both_modes() -> TestResult {
    for mode in [AmbiguityHandling::Conservative, AmbiguityHandling::Aggressive] {
        let records = vec![
            record("MATH 124", ""),
            record("MATH 125", "Either MATH 124 or MATH 134."),
        ];

        let generated = generate_flow(&records, mode)?;
        let graph = generated.graph;

        assert_eq!(graph.edge_count(), 1, "mode {mode:?}");
        assert!(graph.has_edge("MATH 124", "MATH 125"));
        assert!(!graph.contains_node("MATH 134"), "mode {mode:?}");
    }

    Ok(())
}

#[test]
fn triple_either_with_two_present_synthesizes_an_or_gate() -> TestResult {
    let records = vec![
        record("CSE 311", ""),
        record("CSE 321", ""),
        record("CSE 332", "CSE 311, CSE 321, or CSE 331."),
    ];

    let generated = generate_flow(&records, AmbiguityHandling::Conservative)?;
    let graph = generated.graph;

    let gate = graph
        .nodes()
        .find(|n| n.is_gate())
        .expect("an or gate should have been synthesized");
    assert!(matches!(gate.kind, NodeKind::Or));

    assert!(graph.has_edge("CSE 311", &gate.id));
    assert!(graph.has_edge("CSE 321", &gate.id));
    assert!(graph.has_edge(&gate.id, "CSE 332"));
    assert_eq!(graph.edge_count(), 3);
    // The absent alternative is not pulled in.
    assert!(!graph.contains_node("CSE 331"));

    Ok(())
}

#[test]
fn concurrent_phrase_sets_the_concurrent_flag() -> TestResult {
    let records = vec![
        record("E E 215", ""),
        record("E E 233", "E E 215, which may be taken concurrently."),
    ];

    let generated = generate_flow(&records, AmbiguityHandling::Conservative)?;
    let graph = generated.graph;

    let edge = graph
        .edge(&edge_id("E E 215", "E E 233"))
        .expect("direct edge should exist");
    assert!(edge.concurrent);

    Ok(())
}

#[test]
fn double_match_on_a_three_course_list_is_rejected() -> TestResult {
    // The double-either pattern matches the head of this clause, but it only
    // captures two of the three course tokens, so the match is thrown away
    // and the clause counts as unparsed.
    let records = vec![record("CSE 332", "CSE 311 or CSE 321, CSE 331.")];

    let generated = generate_flow(&records, AmbiguityHandling::Conservative)?;

    assert_eq!(generated.graph.edge_count(), 0);
    assert_eq!(generated.report.unparsed.len(), 1);
    assert_eq!(generated.report.unparsed[0].course, "CSE 332");

    Ok(())
}

#[test]
fn unmatched_clause_aggressive_wires_every_token() -> TestResult {
    let records = vec![record("CSE 332", "CSE 311 or CSE 321, CSE 331.")];

    let generated = generate_flow(&records, AmbiguityHandling::Aggressive)?;
    let graph = generated.graph;

    assert!(graph.has_edge("CSE 311", "CSE 332"));
    assert!(graph.has_edge("CSE 321", "CSE 332"));
    assert!(graph.has_edge("CSE 331", "CSE 332"));
    assert!(generated.report.unparsed.is_empty());

    Ok(())
}

#[test]
fn bidirectional_catalog_cycle_keeps_the_first_direction() -> TestResult {
    let records = vec![
        record("BIOL 180", "BIOL 200."),
        record("BIOL 200", "BIOL 180."),
    ];

    let generated = generate_flow(&records, AmbiguityHandling::Conservative)?;
    let graph = generated.graph;

    assert_eq!(graph.edge_count(), 1);
    assert!(graph.has_edge("BIOL 200", "BIOL 180"));
    assert!(!graph.has_edge("BIOL 180", "BIOL 200"));

    Ok(())
}

#[test]
fn multi_letter_department_ids_are_tokenized() -> TestResult {
    let records = vec![
        record("E E 215", ""),
        record("E E 271", "E E 215; MATH 309."),
    ];

    let generated = generate_flow(&records, AmbiguityHandling::Conservative)?;
    let graph = generated.graph;

    // "E E 215" is one token (space-separated letter groups), and the
    // unknown "MATH 309" clause is skipped in pass one.
    assert!(graph.has_edge("E E 215", "E E 271"));
    assert_eq!(graph.edge_count(), 1);

    Ok(())
}
