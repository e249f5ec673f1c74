use ratatui::style::Color;

use crate::model::palette::{Palette, priority_color};
use crate::model::settings::Settings;
use crate::model::task::Priority;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub dark_mode: bool,
    pub background: Color,
    pub text: Color,
    pub entry_bg: Color,
    pub button_bg: Color,
    pub dim: Color,
    pub highlight: Color,
    pub normal_row: Color,
    pub medium_row: Color,
    pub high_row: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::for_mode(false)
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
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

fn hex(value: &str) -> Color {
    parse_hex_color(value).unwrap_or(Color::Reset)
}

impl Theme {
    pub fn for_mode(dark_mode: bool) -> Self {
        let palette = Palette::for_mode(dark_mode);
        Theme {
            dark_mode,
            background: hex(palette.bg),
            text: hex(palette.fg),
            entry_bg: hex(palette.entry_bg),
            button_bg: hex(palette.button_bg),
            dim: if dark_mode {
                Color::Rgb(0x8A, 0x8A, 0x8A)
            } else {
                Color::Rgb(0x70, 0x70, 0x70)
            },
            highlight: if dark_mode {
                Color::Rgb(0x6C, 0xA8, 0xFF)
            } else {
                Color::Rgb(0x1A, 0x5F, 0xD0)
            },
            normal_row: hex(priority_color(Priority::Normal, dark_mode)),
            medium_row: hex(priority_color(Priority::Medium, dark_mode)),
            high_row: hex(priority_color(Priority::High, dark_mode)),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Theme::for_mode(settings.dark_mode)
    }

    /// Row background for a priority
    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::Normal => self.normal_row,
            Priority::Medium => self.medium_row,
            Priority::High => self.high_row,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#ffe4e4"),
            Some(Color::Rgb(0xFF, 0xE4, 0xE4))
        );
        assert_eq!(parse_hex_color("ffe4e4"), None);
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }

    #[test]
    fn light_normal_rows_use_background() {
        let theme = Theme::for_mode(false);
        assert_eq!(theme.priority_color(Priority::Normal), theme.background);
        assert_eq!(
            theme.priority_color(Priority::High),
            Color::Rgb(0xFF, 0xE4, 0xE4)
        );
    }

    #[test]
    fn dark_theme_colors() {
        let theme = Theme::from_settings(&Settings {
            dark_mode: true,
            ..Settings::default()
        });
        assert_eq!(theme.background, Color::Rgb(0x1E, 0x1E, 0x1E));
        assert_eq!(theme.text, Color::Rgb(0xFF, 0xFF, 0xFF));
        assert_eq!(
            theme.priority_color(Priority::Normal),
            Color::Rgb(0x2B, 0x2B, 0x2B)
        );
        assert_eq!(
            theme.priority_color(Priority::Medium),
            Color::Rgb(0x4A, 0x44, 0x20)
        );
    }
}
