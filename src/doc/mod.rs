// src/doc/mod.rs

//! Persisted flow documents.
//!
//! Responsibilities:
//! - Define the `{version, elements}` document shape (`model.rs`).
//! - Load/save documents and convert to/from the working graph (`loader.rs`).
//! - Validate structure and version before any live state is touched
//!   (`validate.rs`).
//!
//! Version migration itself belongs to the file-I/O collaborator; the core
//! only accepts the current version.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{document_from_str, graph_from_str, graph_to_string, load_graph, save_graph};
pub use model::{DOCUMENT_VERSION, Element, FlowDocument};
pub use validate::validate_document;
