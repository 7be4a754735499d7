//! Scatter plot implementation.

use crate::data::Bounds;
use crate::plot::{data_bounds, Plot};
use crate::style::{Color, Marker, MarkerStyle};

/// A scatter plot showing individual data points.
#[derive(Debug, Clone)]
pub struct ScatterPlot {
    /// X coordinates
    pub x: Vec<f64>,
    /// Y coordinates
    pub y: Vec<f64>,
    /// Marker style
    pub marker_style: MarkerStyle,
    /// Label for legend
    pub label: Option<String>,
    /// Optional sizes for each point (for bubble charts)
    pub sizes: Option<Vec<f64>>,
    /// Alpha/opacity value
    pub alpha: f64,
}

impl ScatterPlot {
    /// Create a new scatter plot from x and y data.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        ScatterPlot {
            x,
            y,
            marker_style: MarkerStyle::default(),
            label: None,
            sizes: None,
            alpha: 1.0,
        }
    }

    /// Set the marker color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        let c = color.into();
        self.marker_style.fill = c.clone();
        self.marker_style.edge_color = c;
        self
    }

    /// Set the marker type.
    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker_style.marker = marker;
        self
    }

    /// Set the marker size.
    pub fn size(mut self, size: f64) -> Self {
        self.marker_style.size = size;
        self
    }

    /// Set individual sizes for each point (bubble chart).
    pub fn sizes(mut self, sizes: Vec<f64>) -> Self {
        self.sizes = Some(sizes);
        self
    }

    /// Set the alpha/opacity value.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self.marker_style.fill_opacity = self.alpha;
        self
    }

    /// Set the label for the legend.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Plot for ScatterPlot {
    fn bounds(&self) -> Option<Bounds> {
        data_bounds(&self.x, &self.y)
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn marker_style(&self) -> Option<MarkerStyle> {
        Some(self.marker_style.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_clamped() {
        let plot = ScatterPlot::new(vec![], vec![]).alpha(1.8);
        assert_eq!(plot.alpha, 1.0);
    }

    #[test]
    fn test_legend_entry_carries_marker_style() {
        let plot = ScatterPlot::new(vec![0.0], vec![0.0])
            .marker(Marker::Diamond)
            .label("samples");
        let entry = plot.legend_entry().unwrap();
        assert_eq!(entry.marker_style.unwrap().marker, Marker::Diamond);
        assert!(entry.line_style.is_none());
    }
}
