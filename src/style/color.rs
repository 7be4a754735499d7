//! Color definitions and utilities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents a color for plotting elements.
///
/// Colors are forwarded to the painting backend as-is; the only resolution
/// done here is parsing hex strings and well-known color names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Color {
    /// RGB color with values 0-255
    Rgb(u8, u8, u8),
    /// RGBA color with alpha 0.0-1.0
    Rgba(u8, u8, u8, f64),
    /// Named color (e.g., "red", "navy", "C0")
    Named(String),
}

impl Color {
    /// Create a new RGB color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    /// Create a new RGBA color.
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color::Rgba(r, g, b, a.clamp(0.0, 1.0))
    }

    /// Create a color from a hex string (e.g., "#FF0000" or "FF0000").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        } else if hex.len() == 8 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
            Some(Color::Rgba(r, g, b, a as f64 / 255.0))
        } else {
            None
        }
    }

    /// Get the alpha value (opacity) of the color.
    pub fn alpha(&self) -> f64 {
        match self {
            Color::Rgba(_, _, _, a) => *a,
            _ => 1.0,
        }
    }

    /// Convert to an RGB tuple, resolving named colors.
    ///
    /// Unknown names fall back to black.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Rgb(r, g, b) => (*r, *g, *b),
            Color::Rgba(r, g, b, _) => (*r, *g, *b),
            Color::Named(name) => resolve_named_color(name).unwrap_or((0, 0, 0)),
        }
    }

    // Predefined colors
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const GREEN: Color = Color::Rgb(0, 128, 0);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const MAGENTA: Color = Color::Rgb(255, 0, 255);
    pub const GRAY: Color = Color::Rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::Rgb(211, 211, 211);
    pub const TRANSPARENT: Color = Color::Rgba(0, 0, 0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Color::BLUE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Color::Rgba(r, g, b, a) => {
                write!(f, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, (a * 255.0) as u8)
            }
            Color::Named(name) => write!(f, "{}", name),
        }
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            Color::from_hex(s).unwrap_or_else(|| Color::Named(s.to_string()))
        } else {
            Color::Named(s.to_string())
        }
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::from(s.as_str())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}

/// Resolve a well-known color name to its RGB value.
fn resolve_named_color(name: &str) -> Option<(u8, u8, u8)> {
    let rgb = match name.to_lowercase().as_str() {
        "black" | "k" => (0, 0, 0),
        "white" | "w" => (255, 255, 255),
        "red" | "r" => (255, 0, 0),
        "green" | "g" => (0, 128, 0),
        "blue" | "b" => (0, 0, 255),
        "yellow" | "y" => (255, 255, 0),
        "cyan" | "c" | "aqua" => (0, 255, 255),
        "magenta" | "m" | "fuchsia" => (255, 0, 255),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "gray" | "grey" => (128, 128, 128),
        "navy" => (0, 0, 128),
        "olive" => (128, 128, 0),
        "teal" => (0, 128, 128),
        "firebrick" => (178, 34, 34),
        "c0" => (0x1f, 0x77, 0xb4),
        "c1" => (0xff, 0x7f, 0x0e),
        "c2" => (0x2c, 0xa0, 0x2c),
        "c3" => (0xd6, 0x27, 0x28),
        "c4" => (0x94, 0x67, 0xbd),
        "c5" => (0x8c, 0x56, 0x4b),
        "c6" => (0xe3, 0x77, 0xc2),
        "c7" => (0x7f, 0x7f, 0x7f),
        "c8" => (0xbc, 0xbd, 0x22),
        "c9" => (0x17, 0xbe, 0xcf),
        _ => return None,
    };
    Some(rgb)
}

/// Default color cycle for plot series (matplotlib's tab10).
const COLOR_CYCLE: [Color; 10] = [
    Color::Rgb(0x1f, 0x77, 0xb4),
    Color::Rgb(0xff, 0x7f, 0x0e),
    Color::Rgb(0x2c, 0xa0, 0x2c),
    Color::Rgb(0xd6, 0x27, 0x28),
    Color::Rgb(0x94, 0x67, 0xbd),
    Color::Rgb(0x8c, 0x56, 0x4b),
    Color::Rgb(0xe3, 0x77, 0xc2),
    Color::Rgb(0x7f, 0x7f, 0x7f),
    Color::Rgb(0xbc, 0xbd, 0x22),
    Color::Rgb(0x17, 0xbe, 0xcf),
];

/// Get a color from the default color cycle by index.
pub fn cycle_color(index: usize) -> Color {
    COLOR_CYCLE[index % COLOR_CYCLE.len()].clone()
}
