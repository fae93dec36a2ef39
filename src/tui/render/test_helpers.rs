use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::io::store::Store;
use crate::model::{AppConfig, Board, ChecklistItem, Location};
use crate::tui::app::App;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Two locations, three items, nothing checked.
pub fn test_board() -> Board {
    Board {
        locations: vec![
            Location::new("loc-1", "Kitchen"),
            Location::new("loc-2", "Garage"),
        ],
        items: vec![
            ChecklistItem::new("item-1", "Sponge", "loc-1"),
            ChecklistItem::new("item-2", "Soap", "loc-1"),
            ChecklistItem::new("item-3", "Wrench", "loc-2"),
        ],
    }
}

/// Build an App over a throwaway store directory.
pub fn test_app() -> (App, TempDir) {
    let tmp = TempDir::new().unwrap();
    let store = Store::new(tmp.path());
    let app = App::new(test_board(), store, &AppConfig::default());
    (app, tmp)
}
