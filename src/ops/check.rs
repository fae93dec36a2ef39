use std::collections::HashSet;

use serde::Serialize;

use crate::model::Board;

/// Structured result from `spot check`, suitable for --json output.
#[derive(Debug, Default, Serialize)]
pub struct CheckResult {
    pub valid: bool,
    pub errors: Vec<CheckError>,
}

/// A validation error in stored board data.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum CheckError {
    /// An item references a location id that doesn't exist
    #[serde(rename = "dangling_location")]
    DanglingLocation { item_id: String, location_id: String },
    /// Duplicate location id
    #[serde(rename = "duplicate_location_id")]
    DuplicateLocationId { id: String },
    /// Duplicate item id
    #[serde(rename = "duplicate_item_id")]
    DuplicateItemId { id: String },
    /// A location with an empty name
    #[serde(rename = "empty_location_name")]
    EmptyLocationName { id: String },
    /// An item with an empty name
    #[serde(rename = "empty_item_name")]
    EmptyItemName { id: String },
}

impl std::fmt::Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckError::DanglingLocation {
                item_id,
                location_id,
            } => write!(f, "item {} references missing location {}", item_id, location_id),
            CheckError::DuplicateLocationId { id } => write!(f, "duplicate location id {}", id),
            CheckError::DuplicateItemId { id } => write!(f, "duplicate item id {}", id),
            CheckError::EmptyLocationName { id } => write!(f, "location {} has an empty name", id),
            CheckError::EmptyItemName { id } => write!(f, "item {} has an empty name", id),
        }
    }
}

/// Validate stored board data and return structured results.
///
/// Read-only. The in-app mutation paths cannot produce any of these states
/// (the committer refuses unknown locations, add rejects empty names), so
/// errors here point at hand-edited or foreign JSON.
pub fn check_board(board: &Board) -> CheckResult {
    let mut result = CheckResult::default();

    let mut seen_locations = HashSet::new();
    for location in &board.locations {
        if !seen_locations.insert(location.id.as_str()) {
            result.errors.push(CheckError::DuplicateLocationId {
                id: location.id.clone(),
            });
        }
        if location.name.trim().is_empty() {
            result.errors.push(CheckError::EmptyLocationName {
                id: location.id.clone(),
            });
        }
    }

    let mut seen_items = HashSet::new();
    for item in &board.items {
        if !seen_items.insert(item.id.as_str()) {
            result
                .errors
                .push(CheckError::DuplicateItemId { id: item.id.clone() });
        }
        if item.name.trim().is_empty() {
            result
                .errors
                .push(CheckError::EmptyItemName { id: item.id.clone() });
        }
        if !board.location_exists(&item.location_id) {
            result.errors.push(CheckError::DanglingLocation {
                item_id: item.id.clone(),
                location_id: item.location_id.clone(),
            });
        }
    }

    result.valid = result.errors.is_empty();
    result
}
