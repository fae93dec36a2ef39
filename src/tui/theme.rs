use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub border: Color,
    /// Chip background for the selected location, and the drag ghost.
    pub selected_bg: Color,
    pub selected_fg: Color,
    /// Text color for checked-off items.
    pub checked: Color,
    /// Chip background while a dragged item hovers over it.
    pub drop_hover: Color,
    /// Row background under the list cursor.
    pub cursor_bg: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x10, 0x14),
            text: Color::Rgb(0xE6, 0xE6, 0xE6),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x6A, 0x6A, 0x72),
            border: Color::Rgb(0x3A, 0x3A, 0x44),
            selected_bg: Color::Rgb(0x00, 0x7B, 0xFF),
            selected_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
            checked: Color::Rgb(0x88, 0x88, 0x88),
            drop_hover: Color::Rgb(0x28, 0xA7, 0x45),
            cursor_bg: Color::Rgb(0x2A, 0x2A, 0x33),
            error: Color::Rgb(0xFF, 0x44, 0x44),
        }
    }
}

/// Parse a hex color string like "#007BFF" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        // Apply color overrides from [ui.colors]
        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "border" => theme.border = color,
                    "selected_bg" => theme.selected_bg = color,
                    "selected_fg" => theme.selected_fg = color,
                    "checked" => theme.checked = color,
                    "drop_hover" => theme.drop_hover = color,
                    "cursor_bg" => theme.cursor_bg = color,
                    "error" => theme.error = color,
                    _ => {}
                }
            }
        }

        theme
    }
}
