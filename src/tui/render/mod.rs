pub mod checklist;
pub mod chips;
pub mod drag_ghost;
pub mod help_overlay;
mod helpers;
pub mod location_popup;
pub mod status_row;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, EditTarget, Mode};

/// Main render function. Dispatches to sub-renderers.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: chip row + separator | checklist | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // location chips + separator
            Constraint::Min(1),    // checklist
            Constraint::Length(1), // status row
        ])
        .split(area);

    chips::render_chips(frame, app, chunks[0]);
    checklist::render_checklist(frame, app, chunks[1]);

    // Overlays, painted over the content
    if app.mode == Mode::Edit && app.edit_target == EditTarget::NewLocation {
        location_popup::render_location_popup(frame, app, area);
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
    if app.drag.is_dragging() {
        drag_ghost::render_drag_ghost(frame, app, area);
    }

    status_row::render_status_row(frame, app, chunks[2]);
}
