use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay = helpers::centered_box(50, 19, area);
    frame.render_widget(Clear, overlay);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));
    add_binding(
        &mut lines,
        " \u{2191}\u{2193}/jk",
        "Move cursor",
        key_style,
        desc_style,
    );
    add_binding(&mut lines, " g/G", "Jump to top/bottom", key_style, desc_style);
    add_binding(&mut lines, " Tab/]", "Next location", key_style, desc_style);
    add_binding(
        &mut lines,
        " Shift+Tab/[",
        "Previous location",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " Space/Enter",
        "Toggle item",
        key_style,
        desc_style,
    );
    add_binding(&mut lines, " a", "Add item", key_style, desc_style);
    add_binding(&mut lines, " o", "Add location", key_style, desc_style);
    add_binding(
        &mut lines,
        " m",
        "Move item to another location",
        key_style,
        desc_style,
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Mouse", header_style)));
    add_binding(
        &mut lines,
        " click",
        "Toggle item / select location",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " drag",
        "Drop an item on a location chip",
        key_style,
        desc_style,
    );
    lines.push(Line::from(""));
    add_binding(&mut lines, " ?", "Toggle this help", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let padded = format!("{:<16}", key);
    lines.push(Line::from(vec![
        Span::styled(padded, key_style),
        Span::styled(desc, desc_style),
    ]));
}
