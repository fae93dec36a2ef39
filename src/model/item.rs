use serde::{Deserialize, Serialize};

/// A named, checkable entry associated with exactly one location.
/// `location_id` is the field drag-and-drop reassignment changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Opaque unique id, `item-N`
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub checked: bool,
    pub location_id: String,
}

impl ChecklistItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location_id: impl Into<String>,
    ) -> Self {
        ChecklistItem {
            id: id.into(),
            name: name.into(),
            checked: false,
            location_id: location_id.into(),
        }
    }
}
