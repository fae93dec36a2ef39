use crate::model::{ChecklistItem, Location};

/// The application state holder: both top-level lists, in insertion order.
/// Insertion order is load-bearing: it is the render order of chips, the
/// base order of the filtered item view, and the hit-test tie-break.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pub locations: Vec<Location>,
    pub items: Vec<ChecklistItem>,
}

impl Board {
    pub fn new(locations: Vec<Location>, items: Vec<ChecklistItem>) -> Self {
        Board { locations, items }
    }

    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    pub fn location_exists(&self, id: &str) -> bool {
        self.location(id).is_some()
    }

    /// Resolve a location by id, exact name, or case-insensitive name.
    /// Used by the CLI, where locations are addressed by name.
    pub fn resolve_location(&self, id_or_name: &str) -> Option<&Location> {
        self.location(id_or_name)
            .or_else(|| self.locations.iter().find(|l| l.name == id_or_name))
            .or_else(|| {
                self.locations
                    .iter()
                    .find(|l| l.name.eq_ignore_ascii_case(id_or_name))
            })
    }

    pub fn item(&self, id: &str) -> Option<&ChecklistItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn item_mut(&mut self, id: &str) -> Option<&mut ChecklistItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    /// Next free `loc-N` id (max existing N + 1, so deletions never recycle
    /// a live id's number downward).
    pub fn next_location_id(&self) -> String {
        format!("loc-{}", next_id_number(self.locations.iter().map(|l| l.id.as_str()), "loc-"))
    }

    /// Next free `item-N` id.
    pub fn next_item_id(&self) -> String {
        format!(
            "item-{}",
            next_id_number(self.items.iter().map(|i| i.id.as_str()), "item-")
        )
    }
}

fn next_id_number<'a>(ids: impl Iterator<Item = &'a str>, prefix: &str) -> u64 {
    ids.filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|n| n.parse::<u64>().ok())
        .max()
        .map_or(1, |max| max + 1)
}
