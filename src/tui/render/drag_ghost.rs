use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;

/// Floating label that follows the pointer while an item is in flight
pub fn render_drag_ghost(frame: &mut Frame, app: &App, area: Rect) {
    let Some(item_id) = app.drag.item_id() else {
        return;
    };
    let Some(pointer) = app.drag.pointer() else {
        return;
    };
    let Some(item) = app.board.item(item_id) else {
        return;
    };

    let label = format!(" {} ", unicode::truncate_to_width(&item.name, 24));
    let width = (unicode::display_width(&label) as u16).min(area.width);
    if width == 0 || area.height == 0 {
        return;
    }

    // One cell right and below the pointer so the pointer cell stays
    // visible, pulled back inside the frame at the edges
    let x = (pointer.x + 1).min(area.width - width);
    let y = (pointer.y + 1).min(area.height - 1);
    let rect = Rect::new(area.x + x, area.y + y, width, 1);

    frame.render_widget(Clear, rect);
    let ghost = Paragraph::new(label).style(
        Style::default()
            .fg(app.theme.selected_fg)
            .bg(app.theme.selected_bg)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(ghost, rect);
}
