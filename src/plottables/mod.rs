//! Things that can be drawn on a plot.
//!
//! Every plottable reports the data-space bounds it occupies and renders
//! itself into the shared frame through a read-only [`Axes`] transform.

mod fill_y;
mod text;
mod vector_field;

pub use fill_y::FillY;
pub use text::Text;
pub use vector_field::{
    MAX_ARROW_LENGTH_PX, VectorField, color_buckets, normalize_magnitudes, project_origins,
};

use std::fmt;

use crate::core::{Axes, AxisLimits};
use crate::error::PlotResult;
use crate::render::RenderFrame;
use crate::style::{FillStyle, LineStyle, MarkerStyle};

/// Per-pass drawing state handed to every plottable.
#[derive(Debug)]
pub struct RenderContext<'a> {
    frame: &'a mut RenderFrame,
    axes: Axes,
}

impl<'a> RenderContext<'a> {
    pub fn new(frame: &'a mut RenderFrame, axes: Axes) -> Self {
        Self { frame, axes }
    }

    #[must_use]
    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    pub fn frame_mut(&mut self) -> &mut RenderFrame {
        self.frame
    }
}

/// Entry a legend collector can display for one plottable.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LegendItem {
    pub label: Option<String>,
    pub line: Option<LineStyle>,
    pub marker: Option<MarkerStyle>,
    pub fill: Option<FillStyle>,
    pub has_arrow: bool,
}

pub trait Plottable: fmt::Debug {
    fn is_visible(&self) -> bool;

    /// Data-space bounds used for auto-scaling.
    fn axis_limits(&self) -> AxisLimits;

    fn render(&self, context: &mut RenderContext<'_>) -> PlotResult<()>;

    fn legend_items(&self) -> Vec<LegendItem> {
        Vec::new()
    }
}
