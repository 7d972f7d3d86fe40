use tracing::{debug, trace, warn};

use crate::axis::AxisPanel;
use crate::core::{Axes, AxisLimits, AxisRange, Edge, PixelRect, Viewport};
use crate::error::PlotResult;
use crate::plottables::{LegendItem, Plottable, RenderContext};
use crate::render::{RenderFrame, Renderer};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::PlotConfig;
use super::layout::{PlotLayout, compute_layout};

/// Range used on an axis when no visible plottable reports limits.
pub const DEFAULT_AUTOSCALE_RANGE: AxisRange = AxisRange::from_ordered(-10.0, 10.0);

/// Main facade consumed by host applications.
///
/// `Plot` owns the four axis panels and the plottables, resolves ranges and
/// layout for each pass, and hands the resulting frame to its renderer.
pub struct Plot<R: Renderer> {
    renderer: R,
    config: PlotConfig,
    bottom: AxisPanel,
    left: AxisPanel,
    top: AxisPanel,
    right: AxisPanel,
    plottables: Vec<Box<dyn Plottable>>,
}

impl<R: Renderer> Plot<R> {
    pub fn new(renderer: R, config: PlotConfig) -> PlotResult<Self> {
        config.validate()?;

        let mut plot = Self {
            renderer,
            bottom: AxisPanel::new(Edge::Bottom),
            left: AxisPanel::new(Edge::Left),
            top: AxisPanel::unlabeled(Edge::Top),
            right: AxisPanel::unlabeled(Edge::Right),
            plottables: Vec::new(),
            config,
        };
        for edge in Edge::ALL {
            let hidden = plot.config.hidden_edges.contains(&edge);
            let font_size = plot.config.tick_label_font_size;
            let panel = plot.axis_mut(edge);
            panel.visible = !hidden;
            panel.tick_label_style.font_size = font_size;
        }
        if let Some(range) = plot.config.x_range {
            plot.bottom.set_axis_range(range);
        }
        if let Some(range) = plot.config.y_range {
            plot.left.set_axis_range(range);
        }

        debug!(
            width = plot.config.viewport.width,
            height = plot.config.viewport.height,
            "plot initialized"
        );
        Ok(plot)
    }

    #[must_use]
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Adds a plottable and returns its index.
    pub fn add(&mut self, plottable: impl Plottable + 'static) -> usize {
        self.add_boxed(Box::new(plottable))
    }

    pub fn add_boxed(&mut self, plottable: Box<dyn Plottable>) -> usize {
        self.plottables.push(plottable);
        trace!(count = self.plottables.len(), "add plottable");
        self.plottables.len() - 1
    }

    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Plottable>> {
        (index < self.plottables.len()).then(|| self.plottables.remove(index))
    }

    pub fn clear(&mut self) {
        self.plottables.clear();
    }

    #[must_use]
    pub fn plottables(&self) -> &[Box<dyn Plottable>] {
        &self.plottables
    }

    #[must_use]
    pub fn axis(&self, edge: Edge) -> &AxisPanel {
        match edge {
            Edge::Bottom => &self.bottom,
            Edge::Left => &self.left,
            Edge::Top => &self.top,
            Edge::Right => &self.right,
        }
    }

    pub fn axis_mut(&mut self, edge: Edge) -> &mut AxisPanel {
        match edge {
            Edge::Bottom => &mut self.bottom,
            Edge::Left => &mut self.left,
            Edge::Top => &mut self.top,
            Edge::Right => &mut self.right,
        }
    }

    /// Pins both primary ranges.
    pub fn set_limits(&mut self, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> PlotResult<()> {
        let x = AxisRange::new(x_min, x_max)?;
        let y = AxisRange::new(y_min, y_max)?;
        self.bottom.set_axis_range(x);
        self.left.set_axis_range(y);
        Ok(())
    }

    /// Returns both primary axes to auto-scaling.
    pub fn clear_limits(&mut self) {
        self.bottom.clear_range();
        self.left.clear_range();
    }

    /// Union of the limits reported by visible plottables.
    #[must_use]
    pub fn axis_limits(&self) -> AxisLimits {
        self.plottables
            .iter()
            .filter(|plottable| plottable.is_visible())
            .fold(AxisLimits::no_limits(), |limits, plottable| {
                limits.union(plottable.axis_limits())
            })
    }

    /// Pins the primary ranges to the padded data limits.
    pub fn autoscale(&mut self) {
        let (x, y) = self.autoscaled_ranges();
        self.bottom.set_axis_range(x);
        self.left.set_axis_range(y);
        debug!(
            x_min = x.min(),
            x_max = x.max(),
            y_min = y.min(),
            y_max = y.max(),
            "autoscale"
        );
    }

    fn autoscaled_ranges(&self) -> (AxisRange, AxisRange) {
        let limits = self.axis_limits();
        let margin = self.config.autoscale_margin;
        (
            limits
                .x
                .map_or(DEFAULT_AUTOSCALE_RANGE, |range| range.with_margin(margin)),
            limits
                .y
                .map_or(DEFAULT_AUTOSCALE_RANGE, |range| range.with_margin(margin)),
        )
    }

    /// Range each panel uses this pass: its own, else mirrored from the
    /// primary axis of the same orientation, else auto-scaled.
    fn resolved_ranges(&self) -> [(Edge, AxisRange); 4] {
        let (auto_x, auto_y) = match (self.bottom.range(), self.left.range()) {
            (Some(x), Some(y)) => (x, y),
            _ => self.autoscaled_ranges(),
        };
        let x = self.bottom.range().unwrap_or(auto_x);
        let y = self.left.range().unwrap_or(auto_y);
        [
            (Edge::Bottom, x),
            (Edge::Left, y),
            (Edge::Top, self.top.range().unwrap_or(x)),
            (Edge::Right, self.right.range().unwrap_or(y)),
        ]
    }

    #[must_use]
    pub fn layout(&self) -> PlotLayout {
        let panels: Vec<(&AxisPanel, AxisRange)> = self
            .resolved_ranges()
            .into_iter()
            .map(|(edge, range)| (self.axis(edge), range))
            .collect();
        compute_layout(self.config.viewport, self.config.outer_padding_px, &panels)
    }

    #[must_use]
    pub fn data_rect(&self) -> PixelRect {
        self.layout().data_rect
    }

    /// Transform shared by all plottables for the current layout.
    #[must_use]
    pub fn axes(&self) -> Axes {
        let layout = self.layout();
        let [(_, x), (_, y), ..] = self.resolved_ranges();
        Axes::new(x, y, layout.data_rect)
    }

    pub fn build_render_frame(&self) -> PlotResult<RenderFrame> {
        let layout = self.layout();
        let [(_, x), (_, y), ..] = self.resolved_ranges();
        let axes = Axes::new(x, y, layout.data_rect);
        let mut frame = RenderFrame::new(self.config.viewport);

        if axes.is_mappable() {
            let mut context = RenderContext::new(&mut frame, axes);
            for plottable in self.plottables.iter().filter(|p| p.is_visible()) {
                plottable.render(&mut context)?;
            }
        } else {
            warn!(
                x_min = x.min(),
                x_max = x.max(),
                y_min = y.min(),
                y_max = y.max(),
                "degenerate axis range, skipping plottables"
            );
        }

        for panel in &layout.panels {
            self.axis(panel.edge).render(
                &mut frame,
                layout.data_rect,
                panel.size,
                panel.range,
                &panel.ticks,
            )?;
        }

        debug!(
            plottables = self.plottables.len(),
            primitives = frame.primitive_count(),
            "build render frame"
        );
        Ok(frame)
    }

    pub fn render(&mut self) -> PlotResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> PlotResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    /// Legend entries of the visible plottables, in insertion order.
    #[must_use]
    pub fn legend_items(&self) -> Vec<LegendItem> {
        self.plottables
            .iter()
            .filter(|plottable| plottable.is_visible())
            .flat_map(|plottable| plottable.legend_items())
            .collect()
    }
}
