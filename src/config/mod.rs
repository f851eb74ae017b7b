// src/config/mod.rs

//! Configuration loading and validation for prereqdag.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load an (optional) config file from disk (`loader.rs`).
//! - Validate the handling mode and layout knobs (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_optional};
pub use model::{ConfigFile, LayoutSection, ParseSection};
pub use validate::validate_config;
