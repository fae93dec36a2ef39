use crate::model::{Board, ChecklistItem, Location};

/// Error type for board operations
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("name is empty")]
    EmptyName,
    #[error("item not found: {0}")]
    UnknownItem(String),
    #[error("location not found: {0}")]
    UnknownLocation(String),
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

/// Add a location. The name is trimmed; whitespace-only names are rejected.
/// Returns the assigned id.
pub fn add_location(board: &mut Board, name: &str) -> Result<String, BoardError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BoardError::EmptyName);
    }
    let id = board.next_location_id();
    board.locations.push(Location::new(id.clone(), name));
    Ok(id)
}

/// (unchecked, total) item counts for a location, shown on its chip.
pub fn item_counts(board: &Board, location_id: &str) -> (usize, usize) {
    let mut unchecked = 0;
    let mut total = 0;
    for item in &board.items {
        if item.location_id == location_id {
            total += 1;
            if !item.checked {
                unchecked += 1;
            }
        }
    }
    (unchecked, total)
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// Add an unchecked item under a location. The name is trimmed;
/// whitespace-only names are rejected. Returns the assigned id.
pub fn add_item(board: &mut Board, location_id: &str, name: &str) -> Result<String, BoardError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BoardError::EmptyName);
    }
    if !board.location_exists(location_id) {
        return Err(BoardError::UnknownLocation(location_id.to_string()));
    }
    let id = board.next_item_id();
    board
        .items
        .push(ChecklistItem::new(id.clone(), name, location_id));
    Ok(id)
}

/// Flip an item's checked state. Returns the new value.
pub fn toggle_item(board: &mut Board, item_id: &str) -> Result<bool, BoardError> {
    let item = board
        .item_mut(item_id)
        .ok_or_else(|| BoardError::UnknownItem(item_id.to_string()))?;
    item.checked = !item.checked;
    Ok(item.checked)
}

/// Outcome of a reassignment commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reassign {
    /// The item's location changed; the caller should persist the item list.
    Moved,
    /// The item was already at the target location; nothing was mutated.
    Unchanged,
}

/// Commit a drop: move `item_id` to `location_id`.
///
/// The target location must exist; a drop cannot create a dangling
/// reference. Reassigning an item to its current location is a no-op
/// (`Unchanged`), so redundant drops never trigger a persistence write.
/// Otherwise exactly that item's `location_id` is replaced; item order and
/// every other field stay untouched.
pub fn reassign_item(
    board: &mut Board,
    item_id: &str,
    location_id: &str,
) -> Result<Reassign, BoardError> {
    if !board.location_exists(location_id) {
        return Err(BoardError::UnknownLocation(location_id.to_string()));
    }
    let item = board
        .item_mut(item_id)
        .ok_or_else(|| BoardError::UnknownItem(item_id.to_string()))?;
    if item.location_id == location_id {
        return Ok(Reassign::Unchanged);
    }
    item.location_id = location_id.to_string();
    Ok(Reassign::Moved)
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// The filtered item view for one location: unchecked items before checked
/// items, each group preserving insertion order.
pub fn visible_items<'a>(board: &'a Board, location_id: &str) -> Vec<&'a ChecklistItem> {
    let mut out: Vec<&ChecklistItem> = Vec::new();
    out.extend(
        board
            .items
            .iter()
            .filter(|i| i.location_id == location_id && !i.checked),
    );
    out.extend(
        board
            .items
            .iter()
            .filter(|i| i.location_id == location_id && i.checked),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_board() -> Board {
        let mut board = Board::default();
        add_location(&mut board, "Kitchen").unwrap();
        add_location(&mut board, "Garage").unwrap();
        add_item(&mut board, "loc-1", "sponges").unwrap();
        add_item(&mut board, "loc-1", "dish soap").unwrap();
        add_item(&mut board, "loc-2", "jack stands").unwrap();
        board
    }

    // ── add ────────────────────────────────────────────────────────────────

    #[test]
    fn test_add_location_trims_and_allocates() {
        let mut board = Board::default();
        let id = add_location(&mut board, "  Kitchen  ").unwrap();
        assert_eq!(id, "loc-1");
        assert_eq!(board.locations[0].name, "Kitchen");
    }

    #[test]
    fn test_add_location_whitespace_only_rejected() {
        let mut board = sample_board();
        let before = board.clone();
        let err = add_location(&mut board, "  ").unwrap_err();
        assert!(matches!(err, BoardError::EmptyName));
        assert_eq!(board, before);
    }

    #[test]
    fn test_add_item_requires_location() {
        let mut board = sample_board();
        let err = add_item(&mut board, "loc-9", "ghost").unwrap_err();
        assert!(matches!(err, BoardError::UnknownLocation(_)));
        assert_eq!(board.items.len(), 3);
    }

    #[test]
    fn test_add_item_empty_name_rejected() {
        let mut board = sample_board();
        let err = add_item(&mut board, "loc-1", "\t ").unwrap_err();
        assert!(matches!(err, BoardError::EmptyName));
        assert_eq!(board.items.len(), 3);
    }

    #[test]
    fn test_add_item_starts_unchecked() {
        let mut board = sample_board();
        let id = add_item(&mut board, "loc-2", "oil filter").unwrap();
        let item = board.item(&id).unwrap();
        assert!(!item.checked);
        assert_eq!(item.location_id, "loc-2");
    }

    // ── toggle ─────────────────────────────────────────────────────────────

    #[test]
    fn test_toggle_twice_restores() {
        let mut board = sample_board();
        let original = board.item("item-1").unwrap().checked;
        assert_eq!(toggle_item(&mut board, "item-1").unwrap(), !original);
        assert_eq!(toggle_item(&mut board, "item-1").unwrap(), original);
    }

    #[test]
    fn test_toggle_unknown_item() {
        let mut board = sample_board();
        assert!(matches!(
            toggle_item(&mut board, "item-99"),
            Err(BoardError::UnknownItem(_))
        ));
    }

    // ── reassign ───────────────────────────────────────────────────────────

    #[test]
    fn test_reassign_moves_exactly_one_field() {
        let mut board = sample_board();
        let before = board.clone();

        let result = reassign_item(&mut board, "item-1", "loc-2").unwrap();
        assert_eq!(result, Reassign::Moved);

        assert_eq!(board.items.len(), before.items.len());
        for (after, orig) in board.items.iter().zip(before.items.iter()) {
            assert_eq!(after.id, orig.id, "order must be unchanged");
            assert_eq!(after.name, orig.name);
            assert_eq!(after.checked, orig.checked);
            if after.id == "item-1" {
                assert_eq!(after.location_id, "loc-2");
            } else {
                assert_eq!(after.location_id, orig.location_id);
            }
        }
    }

    #[test]
    fn test_reassign_same_location_is_noop() {
        let mut board = sample_board();
        let before = board.clone();
        let result = reassign_item(&mut board, "item-1", "loc-1").unwrap();
        assert_eq!(result, Reassign::Unchanged);
        assert_eq!(board, before);
    }

    #[test]
    fn test_reassign_rejects_unknown_location() {
        let mut board = sample_board();
        let before = board.clone();
        let err = reassign_item(&mut board, "item-1", "loc-9").unwrap_err();
        assert!(matches!(err, BoardError::UnknownLocation(_)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_reassign_rejects_unknown_item() {
        let mut board = sample_board();
        assert!(matches!(
            reassign_item(&mut board, "item-99", "loc-1"),
            Err(BoardError::UnknownItem(_))
        ));
    }

    // ── views ──────────────────────────────────────────────────────────────

    #[test]
    fn test_visible_items_unchecked_first_insertion_order() {
        let mut board = sample_board();
        add_item(&mut board, "loc-1", "towels").unwrap(); // item-4
        toggle_item(&mut board, "item-1").unwrap(); // sponges → checked

        let ids: Vec<&str> = visible_items(&board, "loc-1")
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ids, vec!["item-2", "item-4", "item-1"]);
    }

    #[test]
    fn test_visible_items_resort_after_double_toggle() {
        let mut board = sample_board();
        toggle_item(&mut board, "item-1").unwrap();
        toggle_item(&mut board, "item-1").unwrap();

        let ids: Vec<&str> = visible_items(&board, "loc-1")
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        // Back to the unchecked group, in original insertion order
        assert_eq!(ids, vec!["item-1", "item-2"]);
    }

    #[test]
    fn test_visible_items_other_locations_excluded() {
        let board = sample_board();
        let ids: Vec<&str> = visible_items(&board, "loc-2")
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ids, vec!["item-3"]);
    }

    #[test]
    fn test_item_counts() {
        let mut board = sample_board();
        toggle_item(&mut board, "item-1").unwrap();
        assert_eq!(item_counts(&board, "loc-1"), (1, 2));
        assert_eq!(item_counts(&board, "loc-2"), (1, 1));
        assert_eq!(item_counts(&board, "loc-9"), (0, 0));
    }
}
