//! Line styling options.

use super::color::Color;

/// Dash pattern for lines.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashPattern {
    /// Solid line
    #[default]
    Solid,
    /// Dashed line (default dash length)
    Dashed,
    /// Dotted line
    Dotted,
    /// Alternating dash-dot pattern
    DashDot,
    /// Custom dash array [dash_length, gap_length, ...]
    Custom(Vec<f64>),
}

impl DashPattern {
    /// Dash/gap lengths for the painting backend, `None` for a solid line.
    pub fn dash_array(&self) -> Option<Vec<f64>> {
        match self {
            DashPattern::Solid => None,
            DashPattern::Dashed => Some(vec![8.0, 4.0]),
            DashPattern::Dotted => Some(vec![2.0, 2.0]),
            DashPattern::DashDot => Some(vec![8.0, 4.0, 2.0, 4.0]),
            DashPattern::Custom(arr) => {
                if arr.is_empty() {
                    None
                } else {
                    Some(arr.clone())
                }
            }
        }
    }

    /// Parse from a matplotlib-style format string (prefix match).
    pub fn from_format_str(s: &str) -> Option<Self> {
        // Check longest patterns first
        if s.starts_with("--") {
            Some(DashPattern::Dashed)
        } else if s.starts_with("-.") {
            Some(DashPattern::DashDot)
        } else if s.starts_with(':') {
            Some(DashPattern::Dotted)
        } else if s.starts_with('-') {
            Some(DashPattern::Solid)
        } else {
            None
        }
    }
}

/// Line cap styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Flat end at the exact endpoint
    Butt,
    /// Rounded end
    #[default]
    Round,
    /// Square end extending past the endpoint
    Square,
}

/// Line join styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    /// Sharp corner
    Miter,
    /// Rounded corner
    #[default]
    Round,
    /// Beveled corner
    Bevel,
}

/// Style configuration for lines.
#[derive(Debug, Clone)]
pub struct LineStyle {
    /// Line color
    pub color: Color,
    /// Line width in pixels
    pub width: f64,
    /// Dash pattern
    pub dash: DashPattern,
    /// Line cap style
    pub cap: LineCap,
    /// Line join style
    pub join: LineJoin,
    /// Opacity (0.0 - 1.0)
    pub opacity: f64,
}

impl LineStyle {
    /// Create a new line style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the line width.
    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Set the dash pattern.
    pub fn dash(mut self, dash: DashPattern) -> Self {
        self.dash = dash;
        self
    }

    /// Set the opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle {
            color: Color::default(),
            width: 1.5,
            dash: DashPattern::Solid,
            cap: LineCap::Round,
            join: LineJoin::Round,
            opacity: 1.0,
        }
    }
}
