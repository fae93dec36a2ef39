use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops;
use crate::tui::app::{App, EditTarget, Mode};
use crate::util::unicode;

use super::helpers;

/// Render the checklist for the selected location and register each visible
/// row's rect for mouse hit testing. Unchecked items come first, checked
/// items trail in a struck-out style.
pub fn render_checklist(frame: &mut Frame, app: &mut App, area: Rect) {
    app.item_rows.clear();

    let bg = app.theme.background;
    let Some(selected) = app.selected.clone() else {
        let empty = Paragraph::new(" No locations yet")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    };

    let editing = app.mode == Mode::Edit && app.edit_target == EditTarget::NewItem;
    // The inline editor occupies the last row while a new item is being typed
    let visible_height = if editing {
        (area.height as usize).saturating_sub(1)
    } else {
        area.height as usize
    };

    let rows: Vec<(String, String, bool)> = ops::visible_items(&app.board, &selected)
        .iter()
        .map(|i| (i.id.clone(), i.name.clone(), i.checked))
        .collect();

    // Clamp cursor and keep it inside the scroll window
    {
        let state = app.location_state(&selected);
        let cursor = state.cursor.min(rows.len().saturating_sub(1));
        state.cursor = cursor;
        if visible_height > 0 {
            if cursor < state.scroll_offset {
                state.scroll_offset = cursor;
            } else if cursor >= state.scroll_offset + visible_height {
                state.scroll_offset = cursor.saturating_sub(visible_height - 1);
            }
        }
    }

    if rows.is_empty() && !editing {
        let empty = Paragraph::new(" No items").style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let cursor = app
        .location_states
        .get(&selected)
        .map_or(0, |s| s.cursor);
    let scroll = app
        .location_states
        .get(&selected)
        .map_or(0, |s| s.scroll_offset);
    let dragging = app.drag.item_id().map(str::to_string);
    let width = area.width as usize;

    let end = rows.len().min(scroll + visible_height);
    let mut lines: Vec<Line> = Vec::with_capacity(visible_height);
    for (item, row) in rows[scroll..end].iter().zip(scroll..end) {
        let (id, name, checked) = item;
        let is_cursor = row == cursor;
        let in_hand = dragging.as_deref() == Some(id.as_str());

        let symbol = if *checked { "[x]" } else { "[ ]" };
        let mut style = if in_hand {
            Style::default().fg(app.theme.dim).bg(bg)
        } else if *checked {
            Style::default()
                .fg(app.theme.checked)
                .bg(bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        if is_cursor {
            style = style.bg(app.theme.cursor_bg);
            if !*checked && !in_hand {
                style = style.fg(app.theme.text_bright);
            }
        }

        let text = unicode::truncate_to_width(&format!(" {} {}", symbol, name), width);
        let pad = width.saturating_sub(unicode::display_width(&text));
        lines.push(Line::from(Span::styled(
            format!("{}{}", text, " ".repeat(pad)),
            style,
        )));

        app.item_rows.push((
            id.clone(),
            Rect::new(area.x, area.y + (row - scroll) as u16, area.width, 1),
        ));
    }

    if editing {
        let mut spans = vec![Span::styled(
            " + ",
            Style::default().fg(app.theme.dim).bg(bg),
        )];
        spans.extend(helpers::input_spans(
            &app.edit_buffer,
            app.edit_cursor,
            &app.theme,
        ));
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
