use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration from config.toml in the store directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides keyed by theme slot name (e.g. `selected_bg = "#007bff"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Cells the pointer must travel (Chebyshev distance) before a press
    /// becomes a drag rather than a click.
    #[serde(default = "default_drag_threshold")]
    pub drag_threshold: u16,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            drag_threshold: default_drag_threshold(),
        }
    }
}

fn default_drag_threshold() -> u16 {
    2
}
