use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers;

/// Centered one-line input box for naming a new location
pub fn render_location_popup(frame: &mut Frame, app: &App, area: Rect) {
    let popup = helpers::centered_box(36, 3, area);
    frame.render_widget(Clear, popup);

    let bg = app.theme.background;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" new location ")
        .border_style(Style::default().fg(app.theme.border).bg(bg))
        .style(Style::default().bg(bg));

    let spans = helpers::input_spans(&app.edit_buffer, app.edit_cursor, &app.theme);
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, popup);
}
