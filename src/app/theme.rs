//! Colour theme, persisted as `theme.conf`.

use std::fmt::Write as _;
use std::path::Path;

use ratatui::style::Color;
use tracing::{info, warn};

use crate::config;
use crate::error::Result;

/// Color palette for theming the TUI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub title: Color,
    pub border: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub success: Color,
    pub error: Color,
}

impl Theme {
    /// Catppuccin Mocha.
    pub fn mocha() -> Self {
        Self {
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            muted: Color::Rgb(0x6c, 0x70, 0x86),
            title: Color::Rgb(0x89, 0xb4, 0xfa),
            border: Color::Rgb(0x58, 0x5b, 0x70),
            header_bg: Color::Rgb(0x31, 0x32, 0x44),
            header_fg: Color::Rgb(0xb4, 0xbe, 0xfe),
            status_bg: Color::Rgb(0x45, 0x47, 0x5a),
            status_fg: Color::Rgb(0xcd, 0xd6, 0xf4),
            highlight_fg: Color::Rgb(0xf9, 0xe2, 0xaf),
            highlight_bg: Color::Rgb(0x45, 0x47, 0x5a),
            success: Color::Rgb(0xa6, 0xe3, 0xa1),
            error: Color::Rgb(0xf3, 0x8b, 0xa8),
        }
    }

    /// Load from a key=value file. Unknown keys and unparsable colours keep the `mocha` value.
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut theme = Self::mocha();
        for (key, value) in config::read_pairs(path)? {
            let Some(color) = parse_color(&value) else {
                warn!(%key, %value, "ignoring unparsable theme colour");
                continue;
            };
            match key.as_str() {
                "text" => theme.text = color,
                "muted" => theme.muted = color,
                "title" => theme.title = color,
                "border" => theme.border = color,
                "header_bg" => theme.header_bg = color,
                "header_fg" => theme.header_fg = color,
                "status_bg" => theme.status_bg = color,
                "status_fg" => theme.status_fg = color,
                "highlight_fg" => theme.highlight_fg = color,
                "highlight_bg" => theme.highlight_bg = color,
                "success" => theme.success = color,
                "error" => theme.error = color,
                _ => {}
            }
        }
        Ok(theme)
    }

    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut buf = String::new();
        buf.push_str("# cw-careers theme configuration\n");
        buf.push_str("# Colors: hex as #RRGGBB or RRGGBB, or 'reset'\n\n");
        for (key, color) in [
            ("text", self.text),
            ("muted", self.muted),
            ("title", self.title),
            ("border", self.border),
            ("header_bg", self.header_bg),
            ("header_fg", self.header_fg),
            ("status_bg", self.status_bg),
            ("status_fg", self.status_fg),
            ("highlight_fg", self.highlight_fg),
            ("highlight_bg", self.highlight_bg),
            ("success", self.success),
            ("error", self.error),
        ] {
            let _ = writeln!(&mut buf, "{key} = {}", color_to_str(color));
        }
        config::write_file(path, &buf)
    }

    /// Load `path`, or write the default theme there when it doesn't exist yet.
    pub fn load_or_init(path: &Path) -> Self {
        if path.exists() {
            return Self::from_file(path).unwrap_or_else(|err| {
                warn!(error = %err, "falling back to default theme");
                Self::mocha()
            });
        }
        let theme = Self::mocha();
        match theme.write_file(path) {
            Ok(()) => info!(path = %path.display(), "wrote default theme"),
            Err(err) => warn!(error = %err, "could not write default theme"),
        }
        theme
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

/// Parse "#RRGGBB", "RRGGBB" or "reset".
fn parse_color(s: &str) -> Option<Color> {
    let lower = s.trim().to_ascii_lowercase();
    if lower == "reset" {
        return Some(Color::Reset);
    }
    let hex = lower.strip_prefix('#').unwrap_or(&lower);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn color_to_str(c: Color) -> String {
    match c {
        Color::Rgb(r, g, b) => format!("#{r:02X}{g:02X}{b:02X}"),
        Color::Reset => "reset".to_string(),
        Color::Black => "#000000".to_string(),
        Color::Red => "#FF0000".to_string(),
        Color::Green => "#00FF00".to_string(),
        Color::Yellow => "#FFFF00".to_string(),
        Color::Blue => "#0000FF".to_string(),
        Color::Magenta => "#FF00FF".to_string(),
        Color::Cyan => "#00FFFF".to_string(),
        Color::Gray => "#B3B3B3".to_string(),
        Color::DarkGray => "#4D4D4D".to_string(),
        Color::White => "#FFFFFF".to_string(),
        // Light and indexed variants have no stable hex; persist as reset.
        _ => "reset".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(parse_color("#FF8000"), Some(Color::Rgb(0xff, 0x80, 0x00)));
        assert_eq!(parse_color("ff8000"), Some(Color::Rgb(0xff, 0x80, 0x00)));
        assert_eq!(parse_color("Reset"), Some(Color::Reset));
    }

    #[test]
    fn rejects_malformed_colours() {
        assert_eq!(parse_color("#FFF"), None);
        assert_eq!(parse_color("zzzzzz"), None);
        assert_eq!(parse_color("#ééé"), None);
    }

    #[test]
    fn named_colours_survive_a_write() {
        assert_eq!(color_to_str(Color::Gray), "#B3B3B3");
        assert_eq!(parse_color(&color_to_str(Color::Rgb(1, 2, 3))), Some(Color::Rgb(1, 2, 3)));
    }
}
