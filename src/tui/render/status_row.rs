use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, EditTarget, Mode};

use super::helpers;

/// Render the status row (bottom of screen): transient messages on the
/// left, key hints for the current mode on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = Vec::new();
    let hint: &str;

    if app.drag.is_dragging() {
        let name = app
            .drag
            .item_id()
            .and_then(|id| app.board.item(id))
            .map(|i| i.name.as_str())
            .unwrap_or("?");
        spans.push(Span::styled(
            format!(" moving {}", name),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
        hint = "drop on a location  Esc cancel";
    } else {
        match app.mode {
            Mode::Navigate => {
                if let Some(ref message) = app.status_message {
                    let fg = if app.status_is_error {
                        app.theme.error
                    } else {
                        app.theme.dim
                    };
                    spans.push(Span::styled(
                        format!(" {}", message),
                        Style::default().fg(fg).bg(bg),
                    ));
                }
                hint = "space toggle  a add  o location  m move  ? help  q quit";
            }
            Mode::Edit => {
                hint = match app.edit_target {
                    EditTarget::NewItem => "Enter add item  Esc cancel",
                    EditTarget::NewLocation => "Enter add location  Esc cancel",
                };
            }
            Mode::Move => {
                let item = app
                    .move_item
                    .as_deref()
                    .and_then(|id| app.board.item(id))
                    .map(|i| i.name.as_str())
                    .unwrap_or("?");
                let target = app
                    .move_target
                    .as_deref()
                    .map(|id| app.location_name(id))
                    .unwrap_or("?");
                spans.push(Span::styled(
                    format!(" move {} \u{2192} {}", item, target),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ));
                hint = "\u{2190}\u{2192} pick  Enter drop  Esc cancel";
            }
        }
    }

    let content_width = helpers::spans_width(&spans);
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        spans.push(Span::styled(
            " ".repeat(width - content_width - hint_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
