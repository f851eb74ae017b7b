// src/errors.rs

//! Crate-wide error aliases and structured error types.
//!
//! Application-level paths use `anyhow`; the persisted-document load path has
//! its own taxonomy so the user-facing layer can report a distinct message
//! per cause.

use std::path::PathBuf;

use thiserror::Error;

pub use anyhow::{Error, Result};

/// Why a persisted flow document was rejected.
///
/// The load path rejects before mutating any live state, so every variant
/// leaves the working graph untouched.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read flow document at {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("flow document is not valid JSON")]
    Malformed(#[from] serde_json::Error),

    #[error("unsupported flow document version {found:?} (expected {expected:?})")]
    UnsupportedVersion { found: String, expected: String },

    #[error("invalid element in flow document: {0}")]
    InvalidElement(String),
}
