use serde::Serialize;

use crate::model::{Board, ChecklistItem, Location};
use crate::ops;
use crate::util::unicode::display_width;

// ---------------------------------------------------------------------------
// JSON output structures
// ---------------------------------------------------------------------------

/// JSON shape for one location in `spot locations --json`
#[derive(Serialize)]
pub struct LocationJson {
    pub id: String,
    pub name: String,
    pub unchecked: usize,
    pub total: usize,
}

/// JSON shape for one item in `spot items --json`
#[derive(Serialize)]
pub struct ItemJson {
    pub id: String,
    pub name: String,
    pub checked: bool,
    pub location: String,
}

pub fn location_to_json(board: &Board, location: &Location) -> LocationJson {
    let (unchecked, total) = ops::item_counts(board, &location.id);
    LocationJson {
        id: location.id.clone(),
        name: location.name.clone(),
        unchecked,
        total,
    }
}

pub fn item_to_json(item: &ChecklistItem) -> ItemJson {
    ItemJson {
        id: item.id.clone(),
        name: item.name.clone(),
        checked: item.checked,
        location: item.location_id.clone(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a single item as a one-line summary
pub fn format_item_line(item: &ChecklistItem) -> String {
    let checkbox = if item.checked { 'x' } else { ' ' };
    format!("[{}] {} {}", checkbox, item.id, item.name)
}

/// Format a location header for the items listing
pub fn format_location_header(location: &Location, unchecked: usize, total: usize) -> String {
    format!("== {} ({}) {}/{} ==", location.name, location.id, unchecked, total)
}

/// Format the locations listing with aligned columns
pub fn format_location_listing(board: &Board) -> Vec<String> {
    let mut lines = Vec::new();
    if board.locations.is_empty() {
        return lines;
    }

    let name_w = board
        .locations
        .iter()
        .map(|l| display_width(&l.name))
        .max()
        .unwrap_or(0)
        .max(4); // "name"
    let id_w = board
        .locations
        .iter()
        .map(|l| display_width(&l.id))
        .max()
        .unwrap_or(0)
        .max(2); // "id"

    lines.push(format!(
        " {:<name_w$}  {:<id_w$}  todo",
        "name",
        "id",
        name_w = name_w,
        id_w = id_w,
    ));
    for location in &board.locations {
        let (unchecked, total) = ops::item_counts(board, &location.id);
        lines.push(format!(
            " {:<name_w$}  {:<id_w$}  {}/{}",
            location.name,
            location.id,
            unchecked,
            total,
            name_w = name_w,
            id_w = id_w,
        ));
    }
    lines
}

/// Format one location's items, header first, unchecked before checked
pub fn format_location_items(
    board: &Board,
    location: &Location,
    include_checked: bool,
) -> Vec<String> {
    let (unchecked, total) = ops::item_counts(board, &location.id);
    let mut lines = Vec::new();
    lines.push(format_location_header(location, unchecked, total));
    for item in ops::visible_items(board, &location.id) {
        if item.checked && !include_checked {
            continue;
        }
        lines.push(format!("  {}", format_item_line(item)));
    }
    lines
}
