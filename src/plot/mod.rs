//! Plot payloads carried by renderers.
//!
//! The composition layer treats a plot as opaque: it only touches the
//! surface below (data bounds, label, legend styles). Drawing belongs to
//! the painting backend, which walks the figure's renderers itself.

mod line;
mod scatter;

pub use line::LinePlot;
pub use scatter::ScatterPlot;

use crate::data::Bounds;
use crate::legend::LegendEntry;
use crate::style::{FillStyle, LineStyle, MarkerStyle};

/// Trait for drawable plot payloads.
pub trait Plot {
    /// Get the data bounds for this plot.
    fn bounds(&self) -> Option<Bounds>;

    /// Get the label for this plot (for legend).
    fn label(&self) -> Option<&str>;

    /// Get the line style for legend display.
    fn line_style(&self) -> Option<LineStyle> {
        None
    }

    /// Get the marker style for legend display.
    fn marker_style(&self) -> Option<MarkerStyle> {
        None
    }

    /// Get the fill style for legend display.
    fn fill_style(&self) -> Option<FillStyle> {
        None
    }

    /// Create a legend entry for this plot.
    fn legend_entry(&self) -> Option<LegendEntry> {
        self.label().map(|label| {
            let mut entry = LegendEntry::new(label);
            if let Some(style) = self.line_style() {
                entry = entry.line_style(style);
            }
            if let Some(style) = self.marker_style() {
                entry = entry.marker_style(style);
            }
            if let Some(style) = self.fill_style() {
                entry = entry.fill_style(style);
            }
            entry
        })
    }
}

/// Compute finite data bounds from paired coordinates.
///
/// Non-finite pairs are skipped; returns `None` when nothing remains.
pub(crate) fn data_bounds(x: &[f64], y: &[f64]) -> Option<Bounds> {
    if x.is_empty() || y.is_empty() {
        return None;
    }

    let mut bounds = Bounds::empty();
    for (&px, &py) in x.iter().zip(y.iter()) {
        if px.is_finite() && py.is_finite() {
            bounds.include_point(px, py);
        }
    }

    if bounds.is_degenerate() {
        None
    } else {
        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_bounds_skips_non_finite() {
        let x = vec![0.0, f64::NAN, 2.0];
        let y = vec![1.0, 5.0, 3.0];
        let bounds = data_bounds(&x, &y).unwrap();
        assert_eq!(bounds, Bounds::new(0.0, 2.0, 1.0, 3.0));
    }

    #[test]
    fn test_data_bounds_empty() {
        assert!(data_bounds(&[], &[]).is_none());
        assert!(data_bounds(&[f64::NAN], &[1.0]).is_none());
    }
}
