//! Interactive tools and their renderer targeting.
//!
//! Tools do not hold renderers; they hold a [`RendererSelection`] that the
//! figure resolves against its current collection whenever the tool fires.
//! A hover tool created with the default `Auto` selection therefore picks
//! up renderers added long after the tool itself.

use std::fmt;

use crate::selection::RendererSelection;

/// Kinds of interactive tools a figure can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    /// Shows values of the hovered glyph
    Hover,
    /// Selects the tapped glyph
    Tap,
    /// Crosshair following the pointer
    Crosshair,
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolKind::Hover => write!(f, "hover"),
            ToolKind::Tap => write!(f, "tap"),
            ToolKind::Crosshair => write!(f, "crosshair"),
        }
    }
}

/// An interactive tool attached to a figure.
#[derive(Debug, Clone)]
pub struct Tool {
    kind: ToolKind,
    renderers: RendererSelection,
}

impl Tool {
    /// Create a tool targeting every renderer on the figure.
    pub fn new(kind: ToolKind) -> Self {
        Tool {
            kind,
            renderers: RendererSelection::Auto,
        }
    }

    /// Create a hover tool.
    pub fn hover() -> Self {
        Self::new(ToolKind::Hover)
    }

    /// Create a tap tool.
    pub fn tap() -> Self {
        Self::new(ToolKind::Tap)
    }

    /// Restrict (or widen) which renderers the tool targets.
    pub fn renderers(mut self, selection: RendererSelection) -> Self {
        self.renderers = selection;
        self
    }

    /// Kind of this tool.
    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    /// The tool's renderer selection policy.
    pub fn selection(&self) -> &RendererSelection {
        &self.renderers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_is_auto() {
        assert_eq!(Tool::hover().selection(), &RendererSelection::Auto);
    }

    #[test]
    fn test_selection_override() {
        let tool = Tool::tap().renderers(RendererSelection::None);
        assert_eq!(tool.selection(), &RendererSelection::None);
        assert_eq!(tool.kind(), ToolKind::Tap);
    }
}
