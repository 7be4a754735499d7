//! Figure implementation: the owner of renderers, axes, and tools.

use log::{debug, warn};

use crate::axis::{Axis, AxisFamily, AxisPosition};
use crate::data::{Bounds, IntoPlotData};
use crate::legend::Legend;
use crate::plot::{LinePlot, Plot, ScatterPlot};
use crate::proxy::AxisProxy;
use crate::renderer::{Renderer, RendererId};
use crate::selection::{compute_renderers, RendererSelection};
use crate::style::{cycle_color, Color, DashPattern, Marker, Theme, ThemeConfig};
use crate::tool::Tool;

/// A figure owning an ordered renderer collection and an ordered axis
/// collection.
///
/// The figure is the single owner of both collections; shared behaviors
/// (tool targeting, legend assembly, axis-family access) are resolved
/// against the live collections at the moment they are asked for, never
/// cached.
pub struct Figure {
    /// Figure title
    pub title: Option<String>,
    /// Theme configuration, forwarded to the painting backend
    pub theme: ThemeConfig,
    renderers: Vec<Renderer>,
    axes: Vec<Axis>,
    tools: Vec<Tool>,
    next_renderer_id: u32,
    color_index: usize,
}

impl Figure {
    /// Create a new empty figure: no renderers, no axes, no tools.
    pub fn new() -> Self {
        Figure {
            title: None,
            theme: Theme::Default.config(),
            renderers: Vec::new(),
            axes: Vec::new(),
            tools: Vec::new(),
            next_renderer_id: 1,
            color_index: 0,
        }
    }

    /// Create a figure with the conventional starter axes: one bottom
    /// x axis and one left y axis.
    pub fn with_default_axes() -> Self {
        let mut fig = Self::new();
        fig.attach_axis(Axis::new(), AxisPosition::Bottom);
        fig.attach_axis(Axis::new(), AxisPosition::Left);
        fig
    }

    /// Set the figure title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme.config();
        self
    }

    /// Set a full theme configuration (e.g. loaded from a file).
    pub fn theme_config(mut self, config: ThemeConfig) -> Self {
        self.theme = config;
        self
    }

    // ------------------------------------------------------------------
    // Renderers
    // ------------------------------------------------------------------

    /// Attach a plot payload as a new renderer and return its identity.
    pub fn add_renderer(&mut self, plot: impl Plot + 'static) -> RendererId {
        let id = RendererId::new(self.next_renderer_id);
        self.next_renderer_id += 1;
        debug!("figure: attach renderer {}", id.as_u32());
        self.renderers.push(Renderer::new(id, Box::new(plot)));
        id
    }

    /// Add a line plot.
    pub fn line(&mut self, x: impl IntoPlotData, y: impl IntoPlotData) -> LineBuilder<'_> {
        LineBuilder {
            figure: self,
            x: x.into_plot_data(),
            y: y.into_plot_data(),
            color: None,
            linewidth: None,
            linestyle: None,
            marker: None,
            label: None,
            format: None,
        }
    }

    /// Add a scatter plot.
    pub fn scatter(&mut self, x: impl IntoPlotData, y: impl IntoPlotData) -> ScatterBuilder<'_> {
        ScatterBuilder {
            figure: self,
            x: x.into_plot_data(),
            y: y.into_plot_data(),
            color: None,
            size: None,
            marker: None,
            alpha: None,
            label: None,
        }
    }

    /// All renderers, in attachment order.
    pub fn renderers(&self) -> &[Renderer] {
        &self.renderers
    }

    /// Identities of all renderers, in attachment order.
    pub fn renderer_ids(&self) -> Vec<RendererId> {
        self.renderers.iter().map(|r| r.id()).collect()
    }

    /// Look up a renderer by identity.
    pub fn renderer(&self, id: RendererId) -> Option<&Renderer> {
        self.renderers.iter().find(|r| r.id() == id)
    }

    /// Look up a renderer by identity, mutably.
    pub fn renderer_mut(&mut self, id: RendererId) -> Option<&mut Renderer> {
        self.renderers.iter_mut().find(|r| r.id() == id)
    }

    /// Resolve a selection against the current renderer collection.
    pub fn select_renderers(&self, selection: &RendererSelection) -> Vec<RendererId> {
        compute_renderers(selection, &self.renderer_ids())
    }

    /// Union of the data bounds of all visible renderers.
    pub fn data_bounds(&self) -> Option<Bounds> {
        let mut union: Option<Bounds> = None;
        for renderer in self.renderers.iter().filter(|r| r.visible()) {
            if let Some(bounds) = renderer.plot().bounds() {
                match union {
                    Some(ref mut u) => u.include_bounds(&bounds),
                    None => union = Some(bounds),
                }
            }
        }
        union
    }

    /// Get the next color from the theme's color cycle.
    pub(crate) fn next_color(&mut self) -> Color {
        let color = if self.theme.color_cycle.is_empty() {
            cycle_color(self.color_index)
        } else {
            self.theme.color_cycle[self.color_index % self.theme.color_cycle.len()].clone()
        };
        self.color_index += 1;
        color
    }

    // ------------------------------------------------------------------
    // Axes
    // ------------------------------------------------------------------

    /// Attach an axis to the given side.
    ///
    /// Axes accumulate; attaching a second bottom axis does not replace
    /// the first. The attachment order defines the iteration order of the
    /// side's family.
    pub fn attach_axis(&mut self, mut axis: Axis, position: AxisPosition) {
        axis.set_position(position);
        debug!(
            "figure: attach {:?} axis to {} family (now {} axes total)",
            position,
            position.family(),
            self.axes.len() + 1
        );
        self.axes.push(axis);
    }

    /// The ordered axis group of one family, as shared references.
    pub fn axis_group(&self, family: AxisFamily) -> Vec<&Axis> {
        self.axes
            .iter()
            .filter(|axis| axis.family() == family)
            .collect()
    }

    /// A fresh proxy over one axis family.
    ///
    /// The proxy is re-derived from the live collection on every call, so
    /// axes attached between two calls are visible to the second one.
    pub fn axis_proxy(&mut self, family: AxisFamily) -> AxisProxy<'_> {
        let members: Vec<&mut Axis> = self
            .axes
            .iter_mut()
            .filter(|axis| axis.family() == family)
            .collect();
        AxisProxy::new(family, members)
    }

    /// Proxy over the x family (bottom + top axes).
    pub fn xaxis(&mut self) -> AxisProxy<'_> {
        self.axis_proxy(AxisFamily::X)
    }

    /// Proxy over the y family (left + right axes).
    pub fn yaxis(&mut self) -> AxisProxy<'_> {
        self.axis_proxy(AxisFamily::Y)
    }

    // ------------------------------------------------------------------
    // Tools
    // ------------------------------------------------------------------

    /// Attach an interactive tool.
    pub fn add_tool(&mut self, tool: Tool) {
        debug!("figure: attach {} tool", tool.kind());
        self.tools.push(tool);
    }

    /// All tools, in attachment order.
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// The renderers a tool currently targets.
    ///
    /// Resolved against the live collection, so an `Auto` tool sees
    /// renderers attached after the tool was.
    pub fn tool_targets(&self, tool: &Tool) -> Vec<RendererId> {
        self.select_renderers(tool.selection())
    }

    // ------------------------------------------------------------------
    // Legend
    // ------------------------------------------------------------------

    /// Assemble a legend from the renderers a selection picks.
    ///
    /// Renderers without a label contribute nothing. Explicit ids that are
    /// not attached to this figure cannot contribute either; they are
    /// skipped with a warning since the selection itself is allowed to
    /// name them.
    pub fn assemble_legend(&self, selection: &RendererSelection) -> Legend {
        let entries = self
            .select_renderers(selection)
            .into_iter()
            .filter_map(|id| match self.renderer(id) {
                Some(renderer) => renderer.legend_entry(),
                None => {
                    warn!(
                        "legend selection names renderer {} which is not attached to this figure",
                        id.as_u32()
                    );
                    None
                }
            });
        Legend::from_entries(entries)
    }

    /// Assemble a legend from every renderer on the figure.
    pub fn legend(&self) -> Legend {
        self.assemble_legend(&RendererSelection::Auto)
    }
}

impl Default for Figure {
    fn default() -> Self {
        Self::new()
    }
}

// Builder types for the fluent plot API

/// Builder for line plot renderers.
pub struct LineBuilder<'a> {
    figure: &'a mut Figure,
    x: Vec<f64>,
    y: Vec<f64>,
    color: Option<Color>,
    linewidth: Option<f64>,
    linestyle: Option<DashPattern>,
    marker: Option<Marker>,
    label: Option<String>,
    format: Option<String>,
}

impl<'a> LineBuilder<'a> {
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn linewidth(mut self, width: f64) -> Self {
        self.linewidth = Some(width);
        self
    }

    pub fn linestyle(mut self, style: DashPattern) -> Self {
        self.linestyle = Some(style);
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn format(mut self, fmt: impl Into<String>) -> Self {
        self.format = Some(fmt.into());
        self
    }

    /// Attach the plot to the figure and return the renderer's identity.
    pub fn build(self) -> RendererId {
        let color = self.color.unwrap_or_else(|| self.figure.next_color());

        let mut plot = LinePlot::new(self.x, self.y).color(color);

        if let Some(fmt) = self.format {
            plot = plot.format(&fmt);
        }
        if let Some(width) = self.linewidth {
            plot = plot.linewidth(width);
        }
        if let Some(style) = self.linestyle {
            plot = plot.linestyle(style);
        }
        if let Some(marker) = self.marker {
            plot = plot.marker(marker);
        }
        if let Some(label) = self.label {
            plot = plot.label(label);
        }

        self.figure.add_renderer(plot)
    }
}

/// Builder for scatter plot renderers.
pub struct ScatterBuilder<'a> {
    figure: &'a mut Figure,
    x: Vec<f64>,
    y: Vec<f64>,
    color: Option<Color>,
    size: Option<f64>,
    marker: Option<Marker>,
    alpha: Option<f64>,
    label: Option<String>,
}

impl<'a> ScatterBuilder<'a> {
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attach the plot to the figure and return the renderer's identity.
    pub fn build(self) -> RendererId {
        let color = self.color.unwrap_or_else(|| self.figure.next_color());

        let mut plot = ScatterPlot::new(self.x, self.y).color(color);

        if let Some(size) = self.size {
            plot = plot.size(size);
        }
        if let Some(marker) = self.marker {
            plot = plot.marker(marker);
        }
        if let Some(alpha) = self.alpha {
            plot = plot.alpha(alpha);
        }
        if let Some(label) = self.label {
            plot = plot.label(label);
        }

        self.figure.add_renderer(plot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_ids_in_attachment_order() {
        let mut fig = Figure::new();
        let a = fig.line(vec![0.0], vec![0.0]).build();
        let b = fig.scatter(vec![1.0], vec![1.0]).build();
        let c = fig.line(vec![2.0], vec![2.0]).build();
        assert_eq!(fig.renderer_ids(), vec![a, b, c]);
    }

    #[test]
    fn test_renderer_lookup() {
        let mut fig = Figure::new();
        let id = fig.line(vec![0.0], vec![0.0]).label("l").build();
        assert!(fig.renderer(id).is_some());
        assert_eq!(fig.renderer(id).unwrap().plot().label(), Some("l"));
    }

    #[test]
    fn test_select_renderers_wraps_current_collection() {
        let mut fig = Figure::new();
        assert!(fig.select_renderers(&RendererSelection::Auto).is_empty());

        let a = fig.line(vec![0.0], vec![0.0]).build();
        let b = fig.line(vec![1.0], vec![1.0]).build();
        assert_eq!(fig.select_renderers(&RendererSelection::Auto), vec![a, b]);
        assert_eq!(
            fig.select_renderers(&RendererSelection::explicit([b])),
            vec![b]
        );
        assert!(fig.select_renderers(&RendererSelection::None).is_empty());
    }

    #[test]
    fn test_tool_targets_track_later_renderers() {
        let mut fig = Figure::new();
        fig.add_tool(Tool::hover());
        let a = fig.line(vec![0.0], vec![0.0]).build();

        let tool = fig.tools()[0].clone();
        assert_eq!(fig.tool_targets(&tool), vec![a]);

        let b = fig.scatter(vec![1.0], vec![1.0]).build();
        assert_eq!(fig.tool_targets(&tool), vec![a, b]);
    }

    #[test]
    fn test_explicit_tool_keeps_fixed_targets() {
        let mut fig = Figure::new();
        let a = fig.line(vec![0.0], vec![0.0]).build();
        let tool = Tool::tap().renderers(RendererSelection::explicit([a]));
        fig.add_tool(tool.clone());

        fig.line(vec![1.0], vec![1.0]).build();
        assert_eq!(fig.tool_targets(&tool), vec![a]);
    }

    #[test]
    fn test_legend_from_labeled_renderers() {
        let mut fig = Figure::new();
        fig.line(vec![0.0], vec![0.0]).label("first").build();
        fig.line(vec![1.0], vec![1.0]).build(); // unlabeled
        fig.scatter(vec![2.0], vec![2.0]).label("second").build();

        let legend = fig.legend();
        let labels: Vec<&str> = legend.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second"]);
    }

    #[test]
    fn test_legend_respects_selection() {
        let mut fig = Figure::new();
        let a = fig.line(vec![0.0], vec![0.0]).label("a").build();
        fig.line(vec![1.0], vec![1.0]).label("b").build();

        let legend = fig.assemble_legend(&RendererSelection::explicit([a]));
        assert_eq!(legend.entries.len(), 1);
        assert_eq!(legend.entries[0].label, "a");

        assert!(fig
            .assemble_legend(&RendererSelection::None)
            .entries
            .is_empty());
    }

    #[test]
    fn test_legend_skips_dangling_ids() {
        let mut fig = Figure::new();
        let a = fig.line(vec![0.0], vec![0.0]).label("a").build();

        let mut other = Figure::new();
        let foreign = other.line(vec![0.0], vec![0.0]).label("x").build();

        // The selection may name unattached renderers; the legend just
        // cannot draw them.
        let legend = fig.assemble_legend(&RendererSelection::explicit([a, foreign, a]));
        assert_eq!(legend.entries.len(), 1);
        assert_eq!(legend.entries[0].label, "a");
    }

    #[test]
    fn test_with_default_axes() {
        let mut fig = Figure::with_default_axes();
        assert_eq!(fig.xaxis().len(), 1);
        assert_eq!(fig.yaxis().len(), 1);
        assert_eq!(
            fig.axis_group(AxisFamily::X)[0].position(),
            AxisPosition::Bottom
        );
    }

    #[test]
    fn test_axis_group_is_ordered_and_family_scoped() {
        let mut fig = Figure::new();
        fig.attach_axis(Axis::new().label("x0"), AxisPosition::Bottom);
        fig.attach_axis(Axis::new().label("y0"), AxisPosition::Left);
        fig.attach_axis(Axis::new().label("x1"), AxisPosition::Top);

        let group = fig.axis_group(AxisFamily::X);
        let labels: Vec<_> = group.iter().map(|a| a.label.as_deref().unwrap()).collect();
        assert_eq!(labels, vec!["x0", "x1"]);
    }

    #[test]
    fn test_data_bounds_union_skips_hidden() {
        let mut fig = Figure::new();
        fig.line(vec![0.0, 1.0], vec![0.0, 1.0]).build();
        let far = fig.line(vec![100.0, 101.0], vec![100.0, 101.0]).build();

        let all = fig.data_bounds().unwrap();
        assert_eq!(all.x_max, 101.0);

        fig.renderer_mut(far).unwrap().set_visible(false);
        let shown = fig.data_bounds().unwrap();
        assert_eq!(shown.x_max, 1.0);
    }

    #[test]
    fn test_color_cycle_advances() {
        let mut fig = Figure::new();
        let a = fig.line(vec![0.0], vec![0.0]).build();
        let b = fig.line(vec![1.0], vec![1.0]).build();

        let first = fig.renderer(a).unwrap().plot().line_style().unwrap().color;
        let second = fig.renderer(b).unwrap().plot().line_style().unwrap().color;
        assert_ne!(first, second);
    }
}
