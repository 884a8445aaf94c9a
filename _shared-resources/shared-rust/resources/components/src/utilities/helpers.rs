// Helper utilities for TUI components
use ratatui::style::Color;
use thiserror::Error;

/// Errors raised while parsing style values from configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("Unknown color '{0}'")]
    UnknownColor(String),

    #[error("Invalid hex color '{0}' (expected #RRGGBB)")]
    InvalidHex(String),
}

/// Convert hex color to ratatui Color
pub fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Parse a color name or `#RRGGBB` string
pub fn try_parse_color(color: &str) -> Result<Color, StyleError> {
    let lowered = color.trim().to_lowercase();

    if let Some(hex) = lowered.strip_prefix('#') {
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(StyleError::InvalidHex(color.to_string()));
        }
        return u32::from_str_radix(hex, 16)
            .map(hex_color)
            .map_err(|_| StyleError::InvalidHex(color.to_string()));
    }

    let parsed = match lowered.as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Color::DarkGray,
        // ratatui has no Dark* variants for these
        "dark_red" | "darkred" => Color::Rgb(139, 0, 0),
        "dark_green" | "darkgreen" => Color::Rgb(0, 100, 0),
        "dark_yellow" | "darkyellow" => Color::Rgb(184, 134, 11),
        "dark_blue" | "darkblue" => Color::Rgb(0, 0, 139),
        "dark_magenta" | "darkmagenta" => Color::Rgb(139, 0, 139),
        "dark_cyan" | "darkcyan" => Color::Rgb(0, 139, 139),
        _ => return Err(StyleError::UnknownColor(color.to_string())),
    };
    Ok(parsed)
}

/// Parse a color, falling back to cyan for anything unrecognised
pub fn parse_color(color: &str) -> Color {
    try_parse_color(color).unwrap_or(Color::Cyan)
}
