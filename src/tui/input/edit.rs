use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::{self, BoardError};
use crate::util::unicode;

use super::*;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => {
            confirm_edit(app);
        }
        (_, KeyCode::Esc) => {
            cancel_edit(app);
        }
        (KeyModifiers::NONE, KeyCode::Backspace) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.drain(prev..app.edit_cursor);
                app.edit_cursor = prev;
            }
        }
        (_, KeyCode::Left) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = next;
            }
        }
        // Kill to start of line: Ctrl+U
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            app.edit_buffer.drain(..app.edit_cursor);
            app.edit_cursor = 0;
        }
        (_, KeyCode::Home) => {
            app.edit_cursor = 0;
        }
        (_, KeyCode::End) => {
            app.edit_cursor = app.edit_buffer.len();
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.edit_buffer.insert(app.edit_cursor, c);
            app.edit_cursor += c.len_utf8();
        }
        _ => {}
    }
}

pub(super) fn confirm_edit(app: &mut App) {
    let name = app.edit_buffer.clone();
    match app.edit_target {
        EditTarget::NewItem => {
            let Some(selected) = app.selected.clone() else {
                cancel_edit(app);
                return;
            };
            match ops::add_item(&mut app.board, &selected, &name) {
                Ok(id) => {
                    app.save_items();
                    // Land the cursor on the item that was just added
                    let pos = app.visible_items().iter().position(|i| i.id == id);
                    if let Some(pos) = pos {
                        app.location_state(&selected).cursor = pos;
                    }
                }
                // A blank name quietly abandons the edit
                Err(BoardError::EmptyName) => {}
                Err(e) => app.set_error(e.to_string()),
            }
        }
        EditTarget::NewLocation => match ops::add_location(&mut app.board, &name) {
            Ok(id) => {
                app.selected = Some(id);
                app.clamp_cursor();
                app.save_locations();
            }
            Err(BoardError::EmptyName) => {}
            Err(e) => app.set_error(e.to_string()),
        },
    }
    cancel_edit(app);
}

pub(super) fn cancel_edit(app: &mut App) {
    app.edit_buffer.clear();
    app.edit_cursor = 0;
    app.mode = Mode::Navigate;
}
