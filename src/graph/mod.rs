// src/graph/mod.rs

//! Graph model, derived metadata, and status propagation.
//!
//! - [`model`] holds the node/edge container and the identifier scheme.
//! - [`metadata`] derives adjacency and longest-path depth for every node.
//! - [`status`] recomputes readiness statuses from incoming edge classes.
//! - [`validate`] checks structural preconditions for user edits (cycles,
//!   duplicates) before anything mutates.

pub mod metadata;
pub mod model;
pub mod status;
pub mod validate;

pub use metadata::{MetadataMap, NodeMetadata, compute_metadata};
pub use model::{
    EDGE_ID_SEPARATOR, Edge, EdgeId, Node, NodeId, NodeKind, Position, PrereqGraph, Status,
    edge_id,
};
pub use status::{apply_status, update_all, update_downstream, update_node_status};
pub use validate::{can_add_edge, creates_cycle};
