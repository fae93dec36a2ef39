use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;

pub(super) fn handle_move(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Commit: drop the item on the highlighted location
        (KeyModifiers::NONE, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('m')) => {
            let (Some(item_id), Some(target)) = (app.move_item.take(), app.move_target.take())
            else {
                app.mode = Mode::Navigate;
                return;
            };
            app.mode = Mode::Navigate;
            commit_reassign(app, &item_id, &target);
        }

        (_, KeyCode::Esc) => {
            app.move_item = None;
            app.move_target = None;
            app.mode = Mode::Navigate;
        }

        // Cycle the candidate target
        (KeyModifiers::NONE, KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab) => {
            cycle_target(app, 1);
        }
        (KeyModifiers::NONE, KeyCode::Left | KeyCode::Char('h'))
        | (KeyModifiers::SHIFT, KeyCode::BackTab) => {
            cycle_target(app, -1);
        }

        _ => {}
    }
}

pub(super) fn cycle_target(app: &mut App, delta: i64) {
    let len = app.board.locations.len();
    if len == 0 {
        return;
    }
    let Some(target) = app.move_target.clone() else {
        return;
    };
    let idx = app
        .board
        .locations
        .iter()
        .position(|l| l.id == target)
        .unwrap_or(0) as i64;
    let next = (idx + delta).rem_euclid(len as i64) as usize;
    app.move_target = Some(app.board.locations[next].id.clone());
}
