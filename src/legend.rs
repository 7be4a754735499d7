//! Legend configuration and assembly.

use indexmap::IndexMap;

use crate::style::{Color, FillStyle, LineStyle, MarkerStyle, TextStyle};

/// Position of the legend.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LegendPosition {
    /// Top-left corner
    TopLeft,
    /// Top-right corner
    #[default]
    TopRight,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom-right corner
    BottomRight,
    /// Custom position (x, y in normalized axes coordinates)
    Custom(f64, f64),
}

impl LegendPosition {
    /// Get the anchor point for this position (in normalized coordinates).
    pub fn anchor(&self) -> (f64, f64) {
        match self {
            LegendPosition::TopLeft => (0.02, 0.98),
            LegendPosition::TopRight => (0.98, 0.98),
            LegendPosition::BottomLeft => (0.02, 0.02),
            LegendPosition::BottomRight => (0.98, 0.02),
            LegendPosition::Custom(x, y) => (*x, *y),
        }
    }
}

/// A single entry in the legend.
#[derive(Debug, Clone)]
pub struct LegendEntry {
    /// Label text
    pub label: String,
    /// Line style (if applicable)
    pub line_style: Option<LineStyle>,
    /// Marker style (if applicable)
    pub marker_style: Option<MarkerStyle>,
    /// Fill style (for bar charts, etc.)
    pub fill_style: Option<FillStyle>,
}

impl LegendEntry {
    /// Create a new legend entry with just a label.
    pub fn new(label: impl Into<String>) -> Self {
        LegendEntry {
            label: label.into(),
            line_style: None,
            marker_style: None,
            fill_style: None,
        }
    }

    /// Set the line style.
    pub fn line_style(mut self, style: LineStyle) -> Self {
        self.line_style = Some(style);
        self
    }

    /// Set the marker style.
    pub fn marker_style(mut self, style: MarkerStyle) -> Self {
        self.marker_style = Some(style);
        self
    }

    /// Set the fill style.
    pub fn fill_style(mut self, style: FillStyle) -> Self {
        self.fill_style = Some(style);
        self
    }
}

/// Legend configuration.
#[derive(Debug, Clone)]
pub struct Legend {
    /// Legend entries
    pub entries: Vec<LegendEntry>,
    /// Position of the legend
    pub position: LegendPosition,
    /// Whether the legend is visible
    pub visible: bool,
    /// Background fill style
    pub background: FillStyle,
    /// Text style for labels
    pub text_style: TextStyle,
    /// Padding inside the legend box
    pub padding: f64,
}

impl Legend {
    /// Create a new empty legend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a legend from renderer entries, merging duplicates.
    ///
    /// Several renderers may share one label (e.g. a line and its marker
    /// overlay); they collapse into a single entry that keeps the
    /// first-seen position and picks up styles from later contributors
    /// that the first one lacked.
    pub fn from_entries(entries: impl IntoIterator<Item = LegendEntry>) -> Self {
        // IndexMap keeps first-seen label order while merging.
        let mut merged: IndexMap<String, LegendEntry> = IndexMap::new();
        for entry in entries {
            match merged.get_mut(&entry.label) {
                Some(existing) => {
                    if existing.line_style.is_none() {
                        existing.line_style = entry.line_style;
                    }
                    if existing.marker_style.is_none() {
                        existing.marker_style = entry.marker_style;
                    }
                    if existing.fill_style.is_none() {
                        existing.fill_style = entry.fill_style;
                    }
                }
                None => {
                    merged.insert(entry.label.clone(), entry);
                }
            }
        }

        Legend {
            entries: merged.into_values().collect(),
            ..Self::default()
        }
    }

    /// Add an entry to the legend.
    pub fn add_entry(&mut self, entry: LegendEntry) {
        self.entries.push(entry);
    }

    /// Set the position.
    pub fn position(mut self, position: LegendPosition) -> Self {
        self.position = position;
        self
    }

    /// Set visibility.
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

impl Default for Legend {
    fn default() -> Self {
        Legend {
            entries: Vec::new(),
            position: LegendPosition::TopRight,
            visible: true,
            background: FillStyle::new(Color::WHITE)
                .opacity(0.9)
                .stroke(Color::GRAY)
                .stroke_width(0.5),
            text_style: TextStyle::new().font_size(10.0),
            padding: 8.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Marker;

    #[test]
    fn test_merge_keeps_first_seen_order() {
        let legend = Legend::from_entries([
            LegendEntry::new("b"),
            LegendEntry::new("a"),
            LegendEntry::new("b"),
            LegendEntry::new("c"),
        ]);
        let labels: Vec<&str> = legend.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_merge_combines_styles() {
        let legend = Legend::from_entries([
            LegendEntry::new("series").line_style(LineStyle::new()),
            LegendEntry::new("series").marker_style(MarkerStyle::new(Marker::Circle)),
        ]);
        assert_eq!(legend.entries.len(), 1);
        let entry = &legend.entries[0];
        assert!(entry.line_style.is_some());
        assert!(entry.marker_style.is_some());
    }

    #[test]
    fn test_merge_does_not_overwrite_first_style() {
        let first = LineStyle::new().width(3.0);
        let legend = Legend::from_entries([
            LegendEntry::new("series").line_style(first),
            LegendEntry::new("series").line_style(LineStyle::new().width(1.0)),
        ]);
        assert_eq!(legend.entries[0].line_style.as_ref().unwrap().width, 3.0);
    }
}
