//! Axis entities and their side/family classification.

use std::fmt;

use crate::style::{LineStyle, TextStyle};

/// Side of the plot area an axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPosition {
    Bottom,
    Top,
    Left,
    Right,
}

impl AxisPosition {
    /// The logical family this side belongs to.
    pub fn family(&self) -> AxisFamily {
        match self {
            AxisPosition::Bottom | AxisPosition::Top => AxisFamily::X,
            AxisPosition::Left | AxisPosition::Right => AxisFamily::Y,
        }
    }
}

/// Logical axis family: horizontal (bottom+top) or vertical (left+right).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisFamily {
    X,
    Y,
}

impl fmt::Display for AxisFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisFamily::X => write!(f, "x"),
            AxisFamily::Y => write!(f, "y"),
        }
    }
}

/// A single axis attached to a figure.
///
/// The attachment side is assigned by the owning figure when the axis is
/// attached and cannot be changed afterwards; everything else is an
/// ordinary mutable property.
#[derive(Debug, Clone)]
pub struct Axis {
    /// Side the axis is attached to (fixed at attach time)
    position: AxisPosition,
    /// Axis label text
    pub label: Option<String>,
    /// Whether the axis is drawn at all
    pub visible: bool,
    /// Axis line style
    pub line_style: LineStyle,
    /// Whether to show tick marks
    pub show_ticks: bool,
    /// Number of ticks to generate
    pub num_ticks: usize,
    /// Length of tick marks in pixels
    pub tick_length: f64,
    /// Style for tick labels
    pub tick_label_style: TextStyle,
    /// Format string for tick labels (printf-style)
    pub tick_format: Option<String>,
}

impl Axis {
    /// Create a new axis with default settings.
    ///
    /// The side is assigned when the axis is attached to a figure; until
    /// then it defaults to `Bottom`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Side this axis is attached to.
    pub fn position(&self) -> AxisPosition {
        self.position
    }

    /// Family of the side this axis is attached to.
    pub fn family(&self) -> AxisFamily {
        self.position.family()
    }

    pub(crate) fn set_position(&mut self, position: AxisPosition) {
        self.position = position;
    }

    /// Set the axis label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set axis visibility.
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set the axis line style.
    pub fn line_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self
    }

    /// Set whether to show tick marks.
    pub fn show_ticks(mut self, show: bool) -> Self {
        self.show_ticks = show;
        self
    }

    /// Set the number of ticks.
    pub fn num_ticks(mut self, num: usize) -> Self {
        self.num_ticks = num;
        self
    }

    /// Set the tick label format.
    pub fn tick_format(mut self, format: impl Into<String>) -> Self {
        self.tick_format = Some(format.into());
        self
    }

    /// Format a tick value as a label.
    pub fn format_tick(&self, value: f64) -> String {
        if let Some(ref format) = self.tick_format {
            if format.contains("%e") || format.contains("%E") {
                format!("{:e}", value)
            } else {
                let precision = format
                    .find('.')
                    .and_then(|i| format[i + 1..].chars().next())
                    .and_then(|c| c.to_digit(10))
                    .unwrap_or(2) as usize;
                format!("{:.prec$}", value, prec = precision)
            }
        } else if value == 0.0 {
            "0".to_string()
        } else if value.abs() >= 1000.0 || value.abs() < 0.01 {
            format!("{:.2e}", value)
        } else if value.fract() == 0.0 {
            format!("{:.0}", value)
        } else {
            format!("{:.2}", value)
        }
    }
}

impl Default for Axis {
    fn default() -> Self {
        Axis {
            position: AxisPosition::Bottom,
            label: None,
            visible: true,
            line_style: LineStyle::default(),
            show_ticks: true,
            num_ticks: 5,
            tick_length: 5.0,
            tick_label_style: TextStyle::new().font_size(10.0),
            tick_format: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_families() {
        assert_eq!(AxisPosition::Bottom.family(), AxisFamily::X);
        assert_eq!(AxisPosition::Top.family(), AxisFamily::X);
        assert_eq!(AxisPosition::Left.family(), AxisFamily::Y);
        assert_eq!(AxisPosition::Right.family(), AxisFamily::Y);
    }

    #[test]
    fn test_builder_chain() {
        let axis = Axis::new().label("depth (m)").visible(false).num_ticks(8);
        assert_eq!(axis.label.as_deref(), Some("depth (m)"));
        assert!(!axis.visible);
        assert_eq!(axis.num_ticks, 8);
    }

    #[test]
    fn test_format_tick_auto() {
        let axis = Axis::new();
        assert_eq!(axis.format_tick(0.0), "0");
        assert_eq!(axis.format_tick(5.0), "5");
        assert_eq!(axis.format_tick(2.5), "2.50");
        assert_eq!(axis.format_tick(12345.0), "1.23e4");
    }

    #[test]
    fn test_format_tick_with_precision() {
        let axis = Axis::new().tick_format("%.1f");
        assert_eq!(axis.format_tick(2.55), "2.5");
        assert_eq!(axis.format_tick(3.0), "3.0");
    }
}
