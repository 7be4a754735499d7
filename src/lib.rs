//! # rustplot - figure composition for plotting
//!
//! This crate is the composition layer of a plotting stack: it decides
//! *which* renderers participate in shared behaviors and gives callers a
//! single handle over a figure's many axes. Painting, layout, and data
//! transformation live behind stable interfaces elsewhere.
//!
//! ## Overview
//!
//! - **Renderer selection**: tools and legends hold a
//!   [`RendererSelection`] (`None`, `Auto`, or an explicit list) that is
//!   resolved against the figure's live collection with
//!   [`compute_renderers`] at the moment of use.
//! - **Axis proxies**: [`Figure::xaxis`]/[`Figure::yaxis`] return a fresh
//!   [`AxisProxy`] over the family's current members. Writes broadcast to
//!   every member, reads succeed only for a single-member family, and
//!   members can always be enumerated in attachment order.
//!
//! ## Example
//!
//! ```
//! use rustplot::prelude::*;
//!
//! let mut fig = Figure::new().title("signal");
//! fig.line(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0])
//!     .label("power")
//!     .build();
//! fig.attach_axis(Axis::new(), AxisPosition::Bottom);
//!
//! fig.xaxis().set_label("time (s)");
//! assert_eq!(fig.xaxis().label().unwrap().as_deref(), Some("time (s)"));
//!
//! // A second bottom axis makes the singular read ambiguous...
//! fig.attach_axis(Axis::new(), AxisPosition::Bottom);
//! assert!(fig.xaxis().label().is_err());
//! // ...while broadcast and enumeration keep working.
//! fig.xaxis().set_label("shared");
//! assert_eq!(fig.xaxis().len(), 2);
//! ```

pub mod axis;
pub mod data;
pub mod error;
pub mod figure;
pub mod legend;
pub mod plot;
pub mod proxy;
pub mod renderer;
pub mod selection;
pub mod style;
pub mod tool;

pub use axis::{Axis, AxisFamily, AxisPosition};
pub use data::{Bounds, IntoPlotData};
pub use error::{PlotError, PlotResult};
pub use figure::Figure;
pub use legend::{Legend, LegendEntry, LegendPosition};
pub use plot::{LinePlot, Plot, ScatterPlot};
pub use proxy::AxisProxy;
pub use renderer::{Renderer, RendererId};
pub use selection::{compute_renderers, RendererSelection};
pub use style::{
    Color, DashPattern, FillStyle, LineStyle, Marker, MarkerStyle, TextStyle, Theme, ThemeConfig,
};
pub use tool::{Tool, ToolKind};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::axis::{Axis, AxisFamily, AxisPosition};
    pub use crate::data::IntoPlotData;
    pub use crate::error::{PlotError, PlotResult};
    pub use crate::figure::Figure;
    pub use crate::legend::{Legend, LegendEntry, LegendPosition};
    pub use crate::plot::{LinePlot, Plot, ScatterPlot};
    pub use crate::proxy::AxisProxy;
    pub use crate::renderer::RendererId;
    pub use crate::selection::{compute_renderers, RendererSelection};
    pub use crate::style::{Color, DashPattern, Marker, Theme};
    pub use crate::tool::{Tool, ToolKind};
}
