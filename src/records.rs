// src/records.rs

//! Course records as consumed from the course-catalog collaborator.
//!
//! Records arrive as a JSON array of objects with at least an `id` and a
//! free-text `prerequisite` field; any other display fields are carried
//! through untouched so the presentation layer gets them back when a flow
//! document round-trips.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One course as described by the catalog.
///
/// `id` matches "one or more space-separated uppercase-letter/ampersand
/// tokens followed by a 3-digit number", e.g. `"CSE 143"` or `"E E 215"`.
/// Immutable once ingested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: String,

    /// Raw prerequisite description, e.g.
    /// `"CSE 142; MATH 124, MATH 134, or MATH 145."`. Empty when the course
    /// has no prerequisites (or when the node is a placeholder).
    #[serde(default)]
    pub prerequisite: String,

    /// Display fields (title, credits, offered quarters, ...) preserved
    /// verbatim for the presentation layer.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CourseRecord {
    /// Minimal record for a course id that only ever appeared as an edge
    /// endpoint.
    pub fn bare(id: &str) -> Self {
        Self {
            id: id.to_string(),
            prerequisite: String::new(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Load a course record list from a JSON file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<CourseRecord>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading course records at {:?}", path))?;

    let records: Vec<CourseRecord> = serde_json::from_str(&contents)
        .with_context(|| format!("parsing course records JSON from {:?}", path))?;

    Ok(records)
}
