// src/config/validate.rs

use std::str::FromStr;

use anyhow::{Context, Result, anyhow};

use crate::config::model::ConfigFile;
use crate::parse::AmbiguityHandling;

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - `[parse].ambiguity` is a valid handling mode, if set
/// - layout spacings are positive, if set
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    if let Some(ambiguity) = &cfg.parse.ambiguity {
        AmbiguityHandling::from_str(ambiguity)
            .map_err(|e| anyhow!(e))
            .context("invalid [parse].ambiguity")?;
    }

    for (name, value) in [
        ("layer_spacing", cfg.layout.layer_spacing),
        ("node_spacing", cfg.layout.node_spacing),
    ] {
        if let Some(v) = value {
            if !v.is_finite() || v <= 0.0 {
                return Err(anyhow!("[layout].{name} must be a positive number (got {v})"));
            }
        }
    }

    Ok(())
}
