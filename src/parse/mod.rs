// src/parse/mod.rs

//! Prerequisite-text parsing.
//!
//! This module turns each course's free-text prerequisite description into
//! directed edges (and, where needed, `or`-gate nodes):
//!
//! - [`patterns`] compiles the course-id token pattern and the clause-shape
//!   cascade (triple-either, double-either, concurrent phrase).
//! - [`generate`] runs the two-pass flow generation over a course record
//!   list.
//!
//! Parsing ambiguities are resolved locally per the configured
//! [`AmbiguityHandling`] and never surfaced as errors.

pub mod generate;
pub mod patterns;

pub use generate::{
    AmbiguityHandling, GeneratedFlow, ParseReport, UnparsedClause, generate_flow,
};
pub use patterns::ClausePatterns;
