//! Predefined themes and theme configuration forwarding.
//!
//! The figure does not interpret the theme; it stores a [`ThemeConfig`]
//! and hands it to the painting backend untouched. Configurations can be
//! loaded from JSON files so deployments can restyle plots without code
//! changes.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use super::color::{cycle_color, Color};
use super::text_style::TextStyle;
use crate::error::{PlotError, PlotResult};

/// Predefined plot themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Default theme with white background
    #[default]
    Default,
    /// Dark theme with dark background
    Dark,
    /// Minimal theme with reduced visual elements
    Minimal,
}

impl Theme {
    /// Get the configuration for this theme.
    pub fn config(&self) -> ThemeConfig {
        match self {
            Theme::Default => ThemeConfig::default_theme(),
            Theme::Dark => ThemeConfig::dark_theme(),
            Theme::Minimal => ThemeConfig::minimal_theme(),
        }
    }
}

/// Theme configuration containing all style settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Background color for the figure
    pub background: Color,
    /// Background color for the plot area
    pub plot_background: Color,
    /// Color for axis lines
    pub axis_color: Color,
    /// Color for grid lines
    pub grid_color: Color,
    /// Whether to show grid by default
    pub show_grid: bool,
    /// Color for text
    pub text_color: Color,
    /// Default title style
    pub title_style: TextStyle,
    /// Default label style
    pub label_style: TextStyle,
    /// Default tick label style
    pub tick_style: TextStyle,
    /// Color cycle for plot series
    pub color_cycle: Vec<Color>,
    /// Default line width
    pub line_width: f64,
    /// Default marker size
    pub marker_size: f64,
}

impl ThemeConfig {
    /// Load a theme configuration from a JSON file.
    ///
    /// Missing fields fall back to the default theme, so partial override
    /// files are accepted.
    pub fn load(path: impl AsRef<Path>) -> PlotResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: ThemeConfig = serde_json::from_reader(reader)
            .map_err(|e| PlotError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        info!("loaded theme configuration from {}", path.display());
        Ok(config)
    }

    fn default_theme() -> Self {
        ThemeConfig {
            background: Color::WHITE,
            plot_background: Color::WHITE,
            axis_color: Color::BLACK,
            grid_color: Color::LIGHT_GRAY,
            show_grid: true,
            text_color: Color::BLACK,
            title_style: TextStyle::new().font_size(14.0).bold(),
            label_style: TextStyle::new().font_size(12.0),
            tick_style: TextStyle::new().font_size(10.0),
            color_cycle: (0..10).map(cycle_color).collect(),
            line_width: 1.5,
            marker_size: 6.0,
        }
    }

    fn dark_theme() -> Self {
        let text_color = Color::rgb(220, 220, 220);
        ThemeConfig {
            background: Color::rgb(30, 30, 30),
            plot_background: Color::rgb(40, 40, 40),
            axis_color: Color::rgb(180, 180, 180),
            grid_color: Color::rgb(80, 80, 80),
            show_grid: true,
            text_color: text_color.clone(),
            title_style: TextStyle::new()
                .font_size(14.0)
                .bold()
                .color(text_color.clone()),
            label_style: TextStyle::new().font_size(12.0).color(text_color.clone()),
            tick_style: TextStyle::new().font_size(10.0).color(text_color),
            color_cycle: (0..10).map(cycle_color).collect(),
            line_width: 1.5,
            marker_size: 6.0,
        }
    }

    fn minimal_theme() -> Self {
        ThemeConfig {
            show_grid: false,
            axis_color: Color::GRAY,
            ..Self::default_theme()
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::default_theme()
    }
}
