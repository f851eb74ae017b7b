// src/graph/model.rs

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::records::CourseRecord;

/// Public type alias for node identifiers throughout the graph.
///
/// Course nodes use the course id (e.g. `"CSE 143"`); logic gates use a
/// generated id prefixed by their kind (e.g. `"or-3"`).
pub type NodeId = String;

/// Edge identifiers are the arrow-id string, see [`edge_id`].
pub type EdgeId = String;

/// Separator used by [`edge_id`]. Collaborators rely on this exact literal
/// for existence checks before issuing structural edits.
pub const EDGE_ID_SEPARATOR: &str = " -> ";

/// Deterministic identifier for the directed edge `source -> target`.
///
/// Injective on its two-argument input: two distinct ordered pairs never
/// produce the same id, because node ids cannot contain the separator.
pub fn edge_id(source: &str, target: &str) -> EdgeId {
    format!("{source}{EDGE_ID_SEPARATOR}{target}")
}

/// Readiness status, totally ordered by ascending severity.
///
/// The discriminants are the status codes used by the propagation rules:
/// `completed(0) < enrolled(1) < ready(2) < under-one-away(3) < one-away(4)
/// < over-one-away(5)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Completed = 0,
    Enrolled = 1,
    Ready = 2,
    UnderOneAway = 3,
    OneAway = 4,
    OverOneAway = 5,
}

impl Status {
    /// Numeric code of this status in the ordered lattice.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Status at the given position in the ordered lattice.
    ///
    /// Codes above the lattice are clamped to the most severe status; the
    /// propagation rules only ever produce codes in range.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Status::Completed,
            1 => Status::Enrolled,
            2 => Status::Ready,
            3 => Status::UnderOneAway,
            4 => Status::OneAway,
            _ => Status::OverOneAway,
        }
    }

    /// The kebab-case name used in persisted documents and on the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Completed => "completed",
            Status::Enrolled => "enrolled",
            Status::Ready => "ready",
            Status::UnderOneAway => "under-one-away",
            Status::OneAway => "one-away",
            Status::OverOneAway => "over-one-away",
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "completed" => Ok(Status::Completed),
            "enrolled" => Ok(Status::Enrolled),
            "ready" => Ok(Status::Ready),
            "under-one-away" => Ok(Status::UnderOneAway),
            "one-away" => Ok(Status::OneAway),
            "over-one-away" => Ok(Status::OverOneAway),
            other => Err(format!(
                "invalid status: {other} (expected one of \"completed\", \"enrolled\", \
                 \"ready\", \"under-one-away\", \"one-away\", \"over-one-away\")"
            )),
        }
    }
}

/// 2D coordinate for a node. Owned by the presentation layer; the core only
/// stores it and the layout reducer assigns it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// The three node variants.
///
/// Course nodes carry the full course record; `and`/`or` gates are synthetic
/// and carry nothing. The tag is serialized as `"kind"` in documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeKind {
    Course { record: CourseRecord },
    And,
    Or,
}

/// A node in the prerequisite graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(default)]
    pub position: Position,
    pub status: Status,
    /// Transient UI highlight flag; not part of the core invariants.
    #[serde(default)]
    pub connected: bool,
}

impl Node {
    /// Course node for a full course record. Courses start at the most severe
    /// status until propagation or the user says otherwise.
    pub fn course(record: CourseRecord) -> Self {
        Self {
            id: record.id.clone(),
            kind: NodeKind::Course { record },
            position: Position::default(),
            status: Status::OverOneAway,
            connected: false,
        }
    }

    /// Minimal placeholder for a course id referenced by an edge but absent
    /// from the input record set.
    pub fn placeholder(id: &str) -> Self {
        Self::course(CourseRecord::bare(id))
    }

    /// Synthetic `and` gate. Gates start vacuously satisfied.
    pub fn and_gate(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::And,
            position: Position::default(),
            status: Status::Completed,
            connected: false,
        }
    }

    /// Synthetic `or` gate. Gates start vacuously satisfied.
    pub fn or_gate(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Or,
            position: Position::default(),
            status: Status::Completed,
            connected: false,
        }
    }

    /// True for `and`/`or` gates, false for course nodes.
    pub fn is_gate(&self) -> bool {
        matches!(self.kind, NodeKind::And | NodeKind::Or)
    }
}

/// A directed edge `source -> target`.
///
/// `status` is the edge *class*: it mirrors the status of the source node and
/// is what dependents read during propagation. `concurrent` marks a
/// prerequisite satisfiable by simultaneous enrollment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub status: Status,
    #[serde(default)]
    pub concurrent: bool,
}

impl Edge {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: edge_id(&source, &target),
            source,
            target,
            status: Status::OverOneAway,
            concurrent: false,
        }
    }

    pub fn concurrent(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        let mut edge = Self::new(source, target);
        edge.concurrent = true;
        edge
    }
}

/// The node/edge container shared by all components.
///
/// Both maps are keyed by id and iterate in id order, so every derived
/// computation (metadata, propagation order, serialization) is deterministic.
/// The graph is a single-writer value: callers own mutual exclusion, there is
/// no internal locking.
#[derive(Debug, Clone, Default)]
pub struct PrereqGraph {
    nodes: BTreeMap<NodeId, Node>,
    edges: BTreeMap<EdgeId, Edge>,
}

impl PrereqGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.get(id)
    }

    pub fn edge_mut(&mut self, id: &str) -> Option<&mut Edge> {
        self.edges.get_mut(id)
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// True if the directed edge `source -> target` exists.
    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.edges.contains_key(&edge_id(source, target))
    }

    /// Insert a node, keeping any existing node with the same id.
    ///
    /// Returns `true` if the node was inserted. Keeping the existing node
    /// means a placeholder never overwrites a full course record.
    pub fn insert_node(&mut self, node: Node) -> bool {
        if self.nodes.contains_key(&node.id) {
            return false;
        }
        self.nodes.insert(node.id.clone(), node);
        true
    }

    /// Insert a node if absent, creating a placeholder course node.
    ///
    /// This is how the graph stays closed under edge endpoints: an edge may
    /// reference a course the input record set never described.
    pub fn ensure_node(&mut self, id: &str) {
        if !self.nodes.contains_key(id) {
            debug!(node = %id, "creating placeholder course node for referenced id");
            self.insert_node(Node::placeholder(id));
        }
    }

    /// Insert an edge, enforcing the structural invariants:
    ///
    /// - no self-loops,
    /// - at most one edge per ordered pair,
    /// - never a reverse edge when the forward edge exists (this is what
    ///   silently breaks bidirectional catalog cycles, keeping whichever
    ///   direction was discovered first),
    /// - both endpoints must be present in the node set.
    ///
    /// Returns `true` if the edge was inserted; a refusal is a no-op, never
    /// an error.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        if edge.source == edge.target {
            debug!(edge = %edge.id, "refusing self-loop edge");
            return false;
        }
        if self.edges.contains_key(&edge.id) {
            debug!(edge = %edge.id, "refusing duplicate edge");
            return false;
        }
        if self.has_edge(&edge.target, &edge.source) {
            debug!(edge = %edge.id, "refusing reverse of an existing edge");
            return false;
        }
        if !self.nodes.contains_key(&edge.source) || !self.nodes.contains_key(&edge.target) {
            debug!(edge = %edge.id, "refusing edge with missing endpoint");
            return false;
        }
        self.edges.insert(edge.id.clone(), edge);
        true
    }

    /// Remove an edge by id. Returns `true` if it existed.
    pub fn remove_edge(&mut self, id: &str) -> bool {
        self.edges.remove(id).is_some()
    }

    /// Remove a node and every edge incident to it.
    ///
    /// Returns `true` if the node existed.
    pub fn remove_node(&mut self, id: &str) -> bool {
        if self.nodes.remove(id).is_none() {
            return false;
        }
        self.edges
            .retain(|_, edge| edge.source != id && edge.target != id);
        true
    }
}
