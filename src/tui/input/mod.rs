mod edit;
mod move_mode;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::ops::{self, Reassign};

use super::app::{App, EditTarget, Mode};
use super::drag::{DragEvent, DragOutcome};
use super::targets;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // An active drag owns the keyboard: Esc cancels it, everything else waits
    if app.drag.is_dragging() {
        if key.code == KeyCode::Esc {
            let _ = app.drag.apply(DragEvent::Cancel, &app.targets);
        }
        return;
    }

    // Help overlay intercepts all input
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Edit => edit::handle_edit(app, key),
        Mode::Move => move_mode::handle_move(app, key),
    }
}

/// Handle a mouse event. Only Navigate mode reacts to the mouse; an item
/// press arms a potential drag that begins once the pointer travels past
/// the configured threshold, and resolves as a click (toggle) otherwise.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.mode != Mode::Navigate || app.show_help {
        return;
    }

    let point = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_left_down(app, point),
        MouseEventKind::Drag(MouseButton::Left) => handle_left_drag(app, point),
        MouseEventKind::Up(MouseButton::Left) => handle_left_up(app, point),
        _ => {}
    }
}

fn handle_left_down(app: &mut App, point: Position) {
    if let Some(rect) = app.add_chip_rect
        && rect.contains(point)
    {
        enter_edit(app, EditTarget::NewLocation);
        return;
    }

    // A click on a chip selects that location
    if let Some(location_id) = targets::locate(point, &app.targets) {
        app.selected = Some(location_id.to_string());
        app.clamp_cursor();
        return;
    }

    if let Some(row) = app
        .item_rows
        .iter()
        .position(|(_, rect)| rect.contains(point))
    {
        let item_id = app.item_rows[row].0.clone();
        if let Some(selected) = app.selected.clone() {
            let state = app.location_state(&selected);
            state.cursor = state.scroll_offset + row;
        }
        app.pending_press = Some((item_id, point));
    }
}

fn handle_left_drag(app: &mut App, point: Position) {
    if app.drag.is_dragging() {
        let _ = app.drag.apply(DragEvent::Update(point), &app.targets);
        return;
    }

    if let Some((item_id, origin)) = app.pending_press.clone()
        && chebyshev(origin, point) >= app.drag_threshold
    {
        app.pending_press = None;
        let _ = app.drag.apply(
            DragEvent::Begin {
                item_id,
                at: origin,
            },
            &app.targets,
        );
        let _ = app.drag.apply(DragEvent::Update(point), &app.targets);
    }
}

fn handle_left_up(app: &mut App, point: Position) {
    if app.drag.is_dragging() {
        if let Some(outcome) = app.drag.apply(DragEvent::End(point), &app.targets) {
            resolve_drag(app, outcome);
        }
        return;
    }

    // Press and release without crossing the threshold: a plain click toggles
    if let Some((item_id, _)) = app.pending_press.take() {
        toggle_item(app, &item_id);
    }
}

fn resolve_drag(app: &mut App, outcome: DragOutcome) {
    match outcome {
        DragOutcome::Dropped {
            item_id,
            location_id,
        } => commit_reassign(app, &item_id, &location_id),
        DragOutcome::Cancelled => {}
    }
}

/// Chebyshev distance in cells between two pointer positions
fn chebyshev(a: Position, b: Position) -> u16 {
    a.x.abs_diff(b.x).max(a.y.abs_diff(b.y))
}

/// Reassign an item and persist, reporting the outcome in the status row.
/// A drop onto the item's own location changes nothing and writes nothing.
pub(super) fn commit_reassign(app: &mut App, item_id: &str, location_id: &str) {
    match ops::reassign_item(&mut app.board, item_id, location_id) {
        Ok(Reassign::Moved) => {
            let name = app.location_name(location_id).to_string();
            app.set_status(format!("moved to {}", name));
            app.clamp_cursor();
            app.save_items();
        }
        Ok(Reassign::Unchanged) => {}
        Err(e) => app.set_error(e.to_string()),
    }
}

/// Toggle an item's checked state and persist
pub(super) fn toggle_item(app: &mut App, item_id: &str) {
    match ops::toggle_item(&mut app.board, item_id) {
        Ok(_) => {
            app.clamp_cursor();
            app.save_items();
        }
        Err(e) => app.set_error(e.to_string()),
    }
}

/// Switch to Edit mode with an empty buffer
pub(super) fn enter_edit(app: &mut App, target: EditTarget) {
    if target == EditTarget::NewItem && app.selected.is_none() {
        app.set_error("create a location first");
        return;
    }
    app.mode = Mode::Edit;
    app.edit_target = target;
    app.edit_buffer.clear();
    app.edit_cursor = 0;
    app.status_message = None;
}
