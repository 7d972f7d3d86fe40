mod arrow_path;
mod frame;
mod null_renderer;
mod primitives;

pub use arrow_path::{ArrowAnchor, ArrowShape, arrow_endpoints};
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, FillPaint, HatchPaint, HatchPattern, LinePattern, LinePrimitive, PathCommand,
    PathPrimitive, RectPrimitive, StrokeStyle, TextHAlign, TextPrimitive, TextVAlign,
};

use crate::error::PlotResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from axis math and plottable state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
