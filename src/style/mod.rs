//! Styling module for rustplot.
//!
//! Style values are configuration carried by the composition layer and
//! forwarded to the painting backend; nothing in here draws.

pub mod color;
pub mod fill_style;
pub mod line_style;
pub mod marker;
pub mod text_style;
pub mod theme;

pub use color::{cycle_color, Color};
pub use fill_style::FillStyle;
pub use line_style::{DashPattern, LineCap, LineJoin, LineStyle};
pub use marker::{Marker, MarkerStyle};
pub use text_style::{FontStyle, FontWeight, TextStyle};
pub use theme::{Theme, ThemeConfig};
