// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [parse]
/// ambiguity = "conservative"
///
/// [layout]
/// layer_spacing = 180.0
/// node_spacing = 60.0
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Parser behaviour from `[parse]`.
    #[serde(default)]
    pub parse: ParseSection,

    /// Layout spacing knobs from `[layout]`.
    #[serde(default)]
    pub layout: LayoutSection,
}

/// `[parse]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParseSection {
    /// `"conservative"` or `"aggressively"`. The CLI flag overrides this;
    /// when neither is given, conservative is used.
    #[serde(default)]
    pub ambiguity: Option<String>,
}

/// `[layout]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayoutSection {
    /// Horizontal distance between depth layers.
    #[serde(default)]
    pub layer_spacing: Option<f64>,

    /// Vertical distance between nodes within a layer.
    #[serde(default)]
    pub node_spacing: Option<f64>,
}

impl ConfigFile {
    /// Effective layout options, falling back to the built-in spacing.
    pub fn layout_options(&self) -> crate::layout::LayoutOptions {
        let defaults = crate::layout::LayoutOptions::default();
        crate::layout::LayoutOptions {
            layer_spacing: self.layout.layer_spacing.unwrap_or(defaults.layer_spacing),
            node_spacing: self.layout.node_spacing.unwrap_or(defaults.node_spacing),
        }
    }
}
