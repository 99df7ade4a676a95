//! Accent-driven color theme.

use coolor::{Hsl, Rgb};
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

const FALLBACK_ACCENT: Color = Color::Rgb(0xff, 0x6b, 0x00);

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    /// Accent-tinted background for the table cursor row.
    pub selection_style: Style,
    /// Accent-tinted background for key hints.
    pub key_style: Style,
    pub header_style: Style,
    pub dimmed_style: Style,
    pub error_style: Style,
    pub success_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color(FALLBACK_ACCENT)
    }
}

impl Theme {
    #[must_use]
    pub fn new(accent_color: &str) -> Self {
        Self::from_color(parse_color(accent_color))
    }

    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        let selection_bg = shade(accent, 0.2, 0.35);
        let key_bg = shade(accent, 0.08, 0.5);

        Self {
            accent,
            selection_style: Style::default().bg(selection_bg).fg(Color::White),
            key_style: Style::default().bg(key_bg).fg(Color::White),
            header_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            dimmed_style: Style::default().fg(Color::DarkGray),
            error_style: Style::default().fg(Color::Red),
            success_style: Style::default().fg(Color::Green),
        }
    }

    /// Style for an accent-filled label.
    #[must_use]
    pub fn accent_label(&self) -> Style {
        Style::default()
            .bg(self.accent)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }
}

/// Re-derives `color` with fixed lightness and saturation, keeping its hue.
fn shade(color: Color, lightness: f32, saturation: f32) -> Color {
    let (r, g, b) = approximate_rgb(color);
    let mut hsl: Hsl = Rgb::new(r, g, b).to_hsl();
    hsl.l = lightness;
    hsl.s = saturation;
    let rgb = hsl.to_rgb();
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Best-effort RGB for a terminal color. Named colors use the VGA palette.
fn approximate_rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black => (0, 0, 0),
        Color::Red => (170, 0, 0),
        Color::Green => (0, 170, 0),
        Color::Yellow => (170, 85, 0),
        Color::Blue => (0, 0, 170),
        Color::Magenta => (170, 0, 170),
        Color::Cyan => (0, 170, 170),
        Color::Gray => (170, 170, 170),
        Color::DarkGray => (85, 85, 85),
        Color::Indexed(i @ 16..=231) => {
            let i = i - 16;
            let level = |c: u8| if c == 0 { 0 } else { c * 40 + 55 };
            (level(i / 36), level((i / 6) % 6), level(i % 6))
        }
        Color::Indexed(i @ 232..=255) => {
            let v = (i - 232) * 10 + 8;
            (v, v, v)
        }
        _ => (255, 255, 255),
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if let Some((r, g, b)) = parse_hex_color(s) {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        _ => FALLBACK_ACCENT,
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }

    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        3 => {
            let doubled: String = hex.chars().flat_map(|c| [c, c]).collect();
            parse_hex_color(&format!("#{doubled}"))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("#ff6b00"), Color::Rgb(255, 107, 0));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Orange"), Color::Indexed(208));
        assert_eq!(parse_color("Invalid"), FALLBACK_ACCENT);
    }

    #[test]
    fn test_shade_keeps_hue_family() {
        let Color::Rgb(r, g, b) = shade(Color::Rgb(255, 107, 0), 0.2, 0.35) else {
            panic!("expected rgb");
        };
        assert!(r > g && g > b, "orange hue expected, got ({r}, {g}, {b})");
    }

    #[test]
    fn test_indexed_cube_lookup() {
        assert_eq!(approximate_rgb(Color::Indexed(208)), (255, 135, 0));
        assert_eq!(approximate_rgb(Color::Indexed(16)), (0, 0, 0));
        assert_eq!(approximate_rgb(Color::Indexed(232)), (8, 8, 8));
    }
}
