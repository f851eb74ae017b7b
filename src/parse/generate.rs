// src/parse/generate.rs

use std::str::FromStr;

use anyhow::Result;
use tracing::{debug, info};

use crate::graph::{Edge, Node, NodeId, PrereqGraph};
use crate::parse::patterns::ClausePatterns;
use crate::records::CourseRecord;

/// How ambiguous prerequisite clauses with no already-required alternative
/// are resolved.
///
/// - `Conservative` (default): drop the clause; no edges are added.
/// - `Aggressive`: over-approximate by wiring every alternative to the owning
///   course (treats OR as AND rather than drop the requirement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmbiguityHandling {
    #[default]
    Conservative,
    Aggressive,
}

impl FromStr for AmbiguityHandling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "conservative" => Ok(AmbiguityHandling::Conservative),
            "aggressively" | "aggressive" => Ok(AmbiguityHandling::Aggressive),
            other => Err(format!(
                "invalid ambiguity handling: {other} (expected \"conservative\" or \"aggressively\")"
            )),
        }
    }
}

/// A clause the parser could not shape-match, kept for the caller to surface.
/// A data-quality condition, not a program error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnparsedClause {
    /// The course whose prerequisite text contained the clause.
    pub course: NodeId,
    pub clause: String,
}

/// What came out of a generation run besides the graph itself.
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    /// Clauses dropped under conservative handling.
    pub unparsed: Vec<UnparsedClause>,
}

/// A freshly generated flow: the graph plus its parse report.
#[derive(Debug, Clone)]
pub struct GeneratedFlow {
    pub graph: PrereqGraph,
    pub report: ParseReport,
}

/// Convert raw course records into a prerequisite graph.
///
/// Two passes:
///
/// 1. Every record becomes a course node, and every *unambiguous* clause
///    (exactly one course token) becomes a direct edge, provided the source
///    is a known node and neither the forward nor the reverse edge exists.
/// 2. Ambiguous clauses (more than one token) go through the clause-shape
///    cascade and the already-required/or-gate resolution.
pub fn generate_flow(
    records: &[CourseRecord],
    ambiguity: AmbiguityHandling,
) -> Result<GeneratedFlow> {
    let patterns = ClausePatterns::compile()?;

    let mut graph = PrereqGraph::new();
    for record in records {
        graph.insert_node(Node::course(record.clone()));
    }

    // Pass one: direct edges from unambiguous clauses; defer the rest.
    let mut deferred: Vec<(NodeId, String)> = Vec::new();

    for record in records {
        for clause in record.prerequisite.split(';') {
            let clause = clause.trim();
            if clause.is_empty() {
                continue;
            }

            let tokens = patterns.course_tokens(clause);
            match tokens.len() {
                // No course reference at all ("minimum grade of 2.0", ...).
                0 => {}
                1 => {
                    let source = tokens[0];
                    if source != record.id
                        && graph.contains_node(source)
                        && !graph.has_edge(source, &record.id)
                        && !graph.has_edge(&record.id, source)
                    {
                        let edge = if patterns.is_concurrent(clause) {
                            Edge::concurrent(source, record.id.as_str())
                        } else {
                            Edge::new(source, record.id.as_str())
                        };
                        graph.add_edge(edge);
                    }
                }
                _ => deferred.push((record.id.clone(), clause.to_string())),
            }
        }
    }

    // Pass two: ambiguous clauses.
    let mut report = ParseReport::default();
    let mut gate_counter = 0usize;

    for (owner, clause) in deferred {
        let concurrent = patterns.is_concurrent(&clause);

        match patterns.match_alternatives(&clause) {
            Some(alternatives) => {
                resolve_alternatives(
                    &mut graph,
                    &mut gate_counter,
                    &owner,
                    &alternatives,
                    concurrent,
                    ambiguity,
                );
            }
            None => match ambiguity {
                AmbiguityHandling::Aggressive => {
                    // No recognizable shape: over-approximate by requiring
                    // every course mentioned in the clause.
                    let tokens: Vec<String> = patterns
                        .course_tokens(&clause)
                        .into_iter()
                        .map(str::to_string)
                        .collect();
                    debug!(
                        course = %owner,
                        clause = %clause,
                        edges = tokens.len(),
                        "unmatched clause; wiring every course token (aggressive)"
                    );
                    for token in tokens {
                        add_course_edge(&mut graph, &token, &owner, false);
                    }
                }
                AmbiguityHandling::Conservative => {
                    debug!(
                        course = %owner,
                        clause = %clause,
                        "unmatched clause; dropping (conservative)"
                    );
                    report.unparsed.push(UnparsedClause {
                        course: owner.clone(),
                        clause,
                    });
                }
            },
        }
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        gates = gate_counter,
        unparsed = report.unparsed.len(),
        "flow generation complete"
    );

    Ok(GeneratedFlow { graph, report })
}

/// Resolve a shape-matched alternatives list against the current node set.
///
/// - Exactly one alternative already required elsewhere: a single direct
///   edge; the others would falsely become requirements.
/// - More than one already required: an `or` gate, so that any of the
///   already-required options satisfies the requirement without requiring
///   them all.
/// - None required: every alternative under aggressive handling, nothing
///   under conservative handling.
fn resolve_alternatives(
    graph: &mut PrereqGraph,
    gate_counter: &mut usize,
    owner: &str,
    alternatives: &[String],
    concurrent: bool,
    ambiguity: AmbiguityHandling,
) {
    let present: Vec<&String> = alternatives
        .iter()
        .filter(|alt| alt.as_str() != owner && graph.contains_node(alt))
        .collect();

    match present.len() {
        1 => {
            add_course_edge(graph, present[0], owner, concurrent);
        }
        n if n > 1 => {
            *gate_counter += 1;
            let gate_id = format!("or-{gate_counter}");
            debug!(
                course = %owner,
                gate = %gate_id,
                alternatives = n,
                "multiple alternatives already required; synthesizing or gate"
            );
            graph.insert_node(Node::or_gate(gate_id.as_str()));
            for alt in present {
                add_course_edge(graph, alt, &gate_id, concurrent);
            }
            graph.add_edge(Edge::new(gate_id, owner));
        }
        _ => match ambiguity {
            AmbiguityHandling::Aggressive => {
                for alt in alternatives {
                    if alt != owner {
                        add_course_edge(graph, alt, owner, concurrent);
                    }
                }
            }
            AmbiguityHandling::Conservative => {
                debug!(
                    course = %owner,
                    "no alternative already required; dropping clause (conservative)"
                );
            }
        },
    }
}

/// Insert `source -> target`, pre-creating a placeholder course node for a
/// source the record set never described. [`PrereqGraph::add_edge`] still
/// refuses duplicates, reverse duplicates and self-loops.
fn add_course_edge(graph: &mut PrereqGraph, source: &str, target: &str, concurrent: bool) {
    graph.ensure_node(source);
    let edge = if concurrent {
        Edge::concurrent(source, target)
    } else {
        Edge::new(source, target)
    };
    graph.add_edge(edge);
}
