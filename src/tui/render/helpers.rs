use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;

use crate::tui::theme::Theme;
use crate::util::unicode;

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Center a fixed-size box inside `area`, clamping to fit
pub(super) fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Spans for an input buffer with an inverted cell at the cursor position.
/// `cursor` is a byte offset on a grapheme boundary.
pub(super) fn input_spans<'a>(buffer: &'a str, cursor: usize, theme: &Theme) -> Vec<Span<'a>> {
    let cursor = cursor.min(buffer.len());
    let text_style = Style::default().fg(theme.text_bright).bg(theme.background);
    let cell_style = Style::default().fg(theme.background).bg(theme.text_bright);

    let before = &buffer[..cursor];
    let (at, after): (&str, &str) = match unicode::next_grapheme_boundary(buffer, cursor) {
        Some(next) => (&buffer[cursor..next], &buffer[next..]),
        None => (" ", ""),
    };

    vec![
        Span::styled(before, text_style),
        Span::styled(at, cell_style),
        Span::styled(after, text_style),
    ]
}
