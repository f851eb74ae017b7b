// src/lib.rs

pub mod cli;
pub mod config;
pub mod doc;
pub mod errors;
pub mod graph;
pub mod layout;
pub mod logging;
pub mod parse;
pub mod records;

use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use tracing::{info, warn};

use crate::cli::CliArgs;
use crate::graph::{MetadataMap, NodeKind, PrereqGraph, Status, compute_metadata};
use crate::parse::AmbiguityHandling;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - flow generation (or loading an existing flow document)
/// - metadata derivation + status propagation
/// - user status overrides
/// - (optional) layout and document output
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = config::load_optional(&args.config)?;

    let mut graph = match (&args.courses, &args.flow) {
        (Some(_), Some(_)) => {
            return Err(anyhow!("--courses and --flow are mutually exclusive"));
        }
        (None, None) => {
            return Err(anyhow!("either --courses or --flow is required"));
        }
        (None, Some(flow_path)) => doc::load_graph(flow_path)
            .with_context(|| format!("loading flow document from {flow_path}"))?,
        (Some(courses_path), None) => {
            let records = records::load_records(courses_path)?;
            let ambiguity = effective_ambiguity(&args, &cfg)?;
            info!(
                records = records.len(),
                ?ambiguity,
                "generating flow from course records"
            );

            let generated = parse::generate_flow(&records, ambiguity)?;
            for unparsed in &generated.report.unparsed {
                warn!(
                    course = %unparsed.course,
                    clause = %unparsed.clause,
                    "prerequisite clause could not be parsed; dropped"
                );
            }
            generated.graph
        }
    };

    // Derive metadata and settle every status once.
    let metadata = compute_metadata(&graph);
    graph::update_all(&mut graph, &metadata);

    // User-driven status changes: the set status is authoritative for the
    // node itself, recomputation is scoped to its descendants.
    for pair in &args.set_status {
        let (course, status) = parse_status_override(pair)?;
        if !graph.contains_node(&course) {
            warn!(course = %course, "status override for unknown course; ignoring");
            continue;
        }
        graph::apply_status(&mut graph, &metadata, &course, status);
        graph::update_downstream(&mut graph, &metadata, &course);
    }

    if args.layout {
        layout::apply_layout(&mut graph, cfg.layout_options());
    }

    print_summary(&graph, &metadata);

    if args.dry_run {
        return Ok(());
    }

    if let Some(out) = &args.out {
        doc::save_graph(out, &graph)
            .with_context(|| format!("writing flow document to {out}"))?;
        info!(path = %out, "flow document written");
    }

    Ok(())
}

/// CLI flag first, then the config file, then conservative.
fn effective_ambiguity(args: &CliArgs, cfg: &config::ConfigFile) -> Result<AmbiguityHandling> {
    let source = args
        .ambiguity
        .as_deref()
        .or(cfg.parse.ambiguity.as_deref());

    match source {
        Some(s) => AmbiguityHandling::from_str(s)
            .map_err(|e| anyhow!(e))
            .context("invalid --ambiguity"),
        None => Ok(AmbiguityHandling::Conservative),
    }
}

/// Parse a `COURSE=STATUS` pair from `--set`.
fn parse_status_override(pair: &str) -> Result<(String, Status)> {
    let (course, status) = pair
        .split_once('=')
        .ok_or_else(|| anyhow!("invalid --set {pair:?} (expected \"COURSE=STATUS\")"))?;

    let status = Status::from_str(status).map_err(|e| anyhow!(e))?;
    Ok((course.trim().to_string(), status))
}

/// Simple summary output: nodes in depth order with status, then counts.
fn print_summary(graph: &PrereqGraph, metadata: &MetadataMap) {
    let mut order: Vec<(usize, &str)> = metadata
        .iter()
        .map(|(id, m)| (m.depth, id.as_str()))
        .collect();
    order.sort();

    println!("prereqdag flow ({} nodes, {} edges):", graph.node_count(), graph.edge_count());
    for (depth, id) in order {
        let Some(node) = graph.node(id) else { continue };
        let kind = match node.kind {
            NodeKind::Course { .. } => "",
            NodeKind::And => " [and]",
            NodeKind::Or => " [or]",
        };
        println!("  {:indent$}{id}{kind}  ({})", "", node.status.as_str(), indent = depth * 2);
    }
}
