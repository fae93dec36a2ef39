use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops;
use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the location chip row plus the separator line below it, and
/// register each chip's on-screen rect as a drop target. Registrations are
/// rebuilt from scratch on every pass so hit testing always sees the layout
/// that is actually on screen.
pub fn render_chips(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // chips
            Constraint::Length(1), // separator
        ])
        .split(area);

    let sep_cols = render_chip_row(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1], &sep_cols);
}

/// Render the chips and return the column positions of each separator character.
fn render_chip_row(frame: &mut Frame, app: &mut App, area: Rect) -> Vec<usize> {
    app.targets.clear();
    app.add_chip_rect = None;

    // The chip to paint as the drop candidate
    let hovered: Option<String> = match app.mode {
        Mode::Move => app.move_target.clone(),
        _ => app.drag.hovered().map(str::to_string),
    };

    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);
    let sep = Span::styled("\u{2502}", Style::default().fg(app.theme.dim).bg(bg));

    let mut spans: Vec<Span> = Vec::new();
    let mut sep_cols: Vec<usize> = Vec::new();

    spans.push(Span::styled(" ", bg_style));
    let mut col: u16 = 1;

    for location in &app.board.locations {
        let (unchecked, total) = ops::item_counts(&app.board, &location.id);
        let label = format!(" {} {}/{} ", location.name, unchecked, total);
        let width = unicode::display_width(&label) as u16;

        let is_selected = app.selected.as_deref() == Some(location.id.as_str());
        let is_hovered = hovered.as_deref() == Some(location.id.as_str());
        spans.push(Span::styled(label, chip_style(app, is_selected, is_hovered)));

        if col < area.width {
            let visible = width.min(area.width - col);
            app.targets
                .update(&location.id, Rect::new(area.x + col, area.y, visible, 1));
        }
        col += width;

        sep_cols.push(col as usize);
        spans.push(sep.clone());
        col += 1;
    }

    // Trailing chip for creating a location
    let add_label = " + ";
    spans.push(Span::styled(
        add_label,
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    if col < area.width {
        let width = (add_label.len() as u16).min(area.width - col);
        app.add_chip_rect = Some(Rect::new(area.x + col, area.y, width, 1));
    }

    let chips = Paragraph::new(Line::from(spans)).style(bg_style);
    frame.render_widget(chips, area);
    sep_cols
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect, sep_cols: &[usize]) {
    let width = area.width as usize;
    let mut line = String::with_capacity(width * 3);
    for col in 0..width {
        if sep_cols.contains(&col) {
            line.push('\u{2534}');
        } else {
            line.push('\u{2500}');
        }
    }
    let sep_widget =
        Paragraph::new(line).style(Style::default().fg(app.theme.dim).bg(app.theme.background));
    frame.render_widget(sep_widget, area);
}

/// Style for a chip: drop candidate beats selected, selected beats plain
fn chip_style(app: &App, is_selected: bool, is_hovered: bool) -> Style {
    if is_hovered {
        Style::default()
            .fg(app.theme.selected_fg)
            .bg(app.theme.drop_hover)
            .add_modifier(Modifier::BOLD)
    } else if is_selected {
        Style::default()
            .fg(app.theme.selected_fg)
            .bg(app.theme.selected_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(app.theme.background)
    }
}
