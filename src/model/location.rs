use serde::{Deserialize, Serialize};

/// A user-defined grouping that checklist items belong to (a room, a trip
/// stop, a bag). Rendered as a drop-target chip in the TUI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Opaque unique id, `loc-N`
    pub id: String,
    pub name: String,
}

impl Location {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Location {
            id: id.into(),
            name: name.into(),
        }
    }
}
