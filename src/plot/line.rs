//! Line plot implementation.

use crate::data::Bounds;
use crate::plot::{data_bounds, Plot};
use crate::style::{Color, DashPattern, LineStyle, Marker, MarkerStyle};

/// A line plot connecting data points.
#[derive(Debug, Clone)]
pub struct LinePlot {
    /// X coordinates
    pub x: Vec<f64>,
    /// Y coordinates
    pub y: Vec<f64>,
    /// Line style
    pub line_style: LineStyle,
    /// Marker style (optional)
    pub marker_style: Option<MarkerStyle>,
    /// Label for legend
    pub label: Option<String>,
}

impl LinePlot {
    /// Create a new line plot from x and y data.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        LinePlot {
            x,
            y,
            line_style: LineStyle::default(),
            marker_style: None,
            label: None,
        }
    }

    /// Set the line color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.line_style.color = color.into();
        if let Some(ref mut marker) = self.marker_style {
            marker.fill = self.line_style.color.clone();
            marker.edge_color = self.line_style.color.clone();
        }
        self
    }

    /// Set the line width.
    pub fn linewidth(mut self, width: f64) -> Self {
        self.line_style.width = width;
        self
    }

    /// Set the line style (dash pattern).
    pub fn linestyle(mut self, dash: DashPattern) -> Self {
        self.line_style.dash = dash;
        self
    }

    /// Add markers to the line plot.
    pub fn marker(mut self, marker: Marker) -> Self {
        let color = self.line_style.color.clone();
        self.marker_style = Some(MarkerStyle {
            marker,
            fill: color.clone(),
            edge_color: color,
            ..Default::default()
        });
        self
    }

    /// Set marker size.
    pub fn markersize(mut self, size: f64) -> Self {
        if let Some(ref mut marker) = self.marker_style {
            marker.size = size;
        }
        self
    }

    /// Set the label for the legend.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Parse matplotlib-style format string (e.g., "r-", "b--o", "g:s")
    pub fn format(mut self, fmt: &str) -> Self {
        let mut chars = fmt.chars().peekable();

        // Parse color (single letter)
        if let Some(&c) = chars.peek() {
            if let Some(color) = parse_color_char(c) {
                self.line_style.color = color.clone();
                if let Some(ref mut marker) = self.marker_style {
                    marker.fill = color.clone();
                    marker.edge_color = color;
                }
                chars.next();
            }
        }

        // Parse line style
        let remaining: String = chars.clone().collect();
        if let Some(dash) = DashPattern::from_format_str(&remaining) {
            self.line_style.dash = dash;
            // Skip the line style characters
            if remaining.starts_with("--") || remaining.starts_with("-.") {
                chars.next();
                chars.next();
            } else if remaining.starts_with('-') || remaining.starts_with(':') {
                chars.next();
            }
        }

        // Parse marker
        for c in chars {
            if let Some(marker) = Marker::from_format_char(c) {
                let color = self.line_style.color.clone();
                self.marker_style = Some(MarkerStyle {
                    marker,
                    fill: color.clone(),
                    edge_color: color,
                    ..Default::default()
                });
                break;
            }
        }

        self
    }
}

fn parse_color_char(c: char) -> Option<Color> {
    match c {
        'b' => Some(Color::BLUE),
        'g' => Some(Color::GREEN),
        'r' => Some(Color::RED),
        'c' => Some(Color::CYAN),
        'm' => Some(Color::MAGENTA),
        'y' => Some(Color::YELLOW),
        'k' => Some(Color::BLACK),
        'w' => Some(Color::WHITE),
        _ => None,
    }
}

impl Plot for LinePlot {
    fn bounds(&self) -> Option<Bounds> {
        data_bounds(&self.x, &self.y)
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn line_style(&self) -> Option<LineStyle> {
        Some(self.line_style.clone())
    }

    fn marker_style(&self) -> Option<MarkerStyle> {
        self.marker_style.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_string() {
        let plot = LinePlot::new(vec![0.0], vec![0.0]).format("r--o");
        assert_eq!(plot.line_style.color, Color::RED);
        assert_eq!(plot.line_style.dash, DashPattern::Dashed);
        assert_eq!(plot.marker_style.as_ref().unwrap().marker, Marker::Circle);
    }

    #[test]
    fn test_format_marker_only() {
        let plot = LinePlot::new(vec![0.0], vec![0.0]).format("s");
        assert_eq!(plot.marker_style.as_ref().unwrap().marker, Marker::Square);
        assert_eq!(plot.line_style.dash, DashPattern::Solid);
    }

    #[test]
    fn test_bounds() {
        let plot = LinePlot::new(vec![0.0, 10.0], vec![-1.0, 1.0]);
        assert_eq!(
            Plot::bounds(&plot).unwrap(),
            Bounds::new(0.0, 10.0, -1.0, 1.0)
        );
    }

    #[test]
    fn test_legend_entry_carries_line_style() {
        let plot = LinePlot::new(vec![0.0], vec![0.0])
            .color(Color::GREEN)
            .label("growth");
        let entry = plot.legend_entry().unwrap();
        assert_eq!(entry.label, "growth");
        assert_eq!(entry.line_style.unwrap().color, Color::GREEN);
    }
}
