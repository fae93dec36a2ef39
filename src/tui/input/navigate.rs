use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Clear any transient status message on keypress
    app.status_message = None;
    app.status_is_error = false;

    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
        }

        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }

        // Cursor movement within the visible checklist
        (KeyModifiers::NONE, KeyCode::Down | KeyCode::Char('j')) => {
            move_cursor(app, 1);
        }
        (KeyModifiers::NONE, KeyCode::Up | KeyCode::Char('k')) => {
            move_cursor(app, -1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) | (_, KeyCode::Home) => {
            jump_to_top(app);
        }
        (KeyModifiers::SHIFT, KeyCode::Char('G')) | (_, KeyCode::End) => {
            jump_to_bottom(app);
        }

        // Location switching
        (KeyModifiers::NONE, KeyCode::Tab | KeyCode::Char(']')) => {
            app.select_next_location();
            app.clamp_cursor();
        }
        (KeyModifiers::SHIFT, KeyCode::BackTab) | (KeyModifiers::NONE, KeyCode::Char('[')) => {
            app.select_prev_location();
            app.clamp_cursor();
        }

        // Toggle the item under the cursor
        (KeyModifiers::NONE, KeyCode::Char(' ') | KeyCode::Enter) => {
            if let Some(item_id) = app.current_item_id() {
                toggle_item(app, &item_id);
            }
        }

        (KeyModifiers::NONE, KeyCode::Char('a')) => {
            enter_edit(app, EditTarget::NewItem);
        }
        (KeyModifiers::NONE, KeyCode::Char('o')) => {
            enter_edit(app, EditTarget::NewLocation);
        }

        (KeyModifiers::NONE, KeyCode::Char('m')) => {
            enter_move_mode(app);
        }

        _ => {}
    }
}

pub(super) fn move_cursor(app: &mut App, delta: i64) {
    let len = app.visible_items().len();
    if len == 0 {
        return;
    }
    let Some(selected) = app.selected.clone() else {
        return;
    };
    let state = app.location_state(&selected);
    let cursor = state.cursor as i64 + delta;
    state.cursor = cursor.clamp(0, len as i64 - 1) as usize;
}

pub(super) fn jump_to_top(app: &mut App) {
    let Some(selected) = app.selected.clone() else {
        return;
    };
    let state = app.location_state(&selected);
    state.cursor = 0;
    state.scroll_offset = 0;
}

pub(super) fn jump_to_bottom(app: &mut App) {
    let len = app.visible_items().len();
    if len == 0 {
        return;
    }
    let Some(selected) = app.selected.clone() else {
        return;
    };
    app.location_state(&selected).cursor = len - 1;
}

/// Enter Move mode for the item under the cursor, starting on the
/// location after the selected one
pub(super) fn enter_move_mode(app: &mut App) {
    let Some(item_id) = app.current_item_id() else {
        return;
    };
    if app.board.locations.len() < 2 {
        app.set_status("nowhere to move to");
        return;
    }
    let selected = app.selected.clone().unwrap_or_default();
    let idx = app
        .board
        .locations
        .iter()
        .position(|l| l.id == selected)
        .unwrap_or(0);
    let next = (idx + 1) % app.board.locations.len();
    app.move_item = Some(item_id);
    app.move_target = Some(app.board.locations[next].id.clone());
    app.mode = Mode::Move;
}
