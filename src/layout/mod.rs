// src/layout/mod.rs

//! Automatic node arrangement.
//!
//! A presentation heuristic, not a correctness-critical algorithm:
//!
//! - [`reduce`] contracts logic gates out of the graph so they never affect
//!   course depth or x-position.
//! - [`layered`] lays courses out by depth layer and then positions gates
//!   between their neighbours.

pub mod layered;
pub mod reduce;

pub use layered::{LayoutOptions, apply_layout, compute_positions};
pub use reduce::contract_gates;
