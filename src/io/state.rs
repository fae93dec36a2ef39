use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Persisted TUI state (written to .state.json in the store directory)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiState {
    /// Selected location id
    #[serde(default)]
    pub selected: Option<String>,
    /// Per-location list state
    #[serde(default)]
    pub locations: HashMap<String, LocationUiState>,
}

/// Per-location list state
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LocationUiState {
    /// Cursor row in the filtered item list
    #[serde(default)]
    pub cursor: usize,
    /// Scroll offset
    #[serde(default)]
    pub scroll_offset: usize,
}

/// Read .state.json from the store directory
pub fn read_ui_state(store_dir: &Path) -> Option<UiState> {
    let path = store_dir.join(".state.json");
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write .state.json to the store directory
pub fn write_ui_state(store_dir: &Path, state: &UiState) -> Result<(), std::io::Error> {
    let path = store_dir.join(".state.json");
    let content = serde_json::to_string_pretty(state)?;
    fs::write(&path, content)
}
