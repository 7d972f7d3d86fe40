//! Owned style structs attached to axes and plottables.
//!
//! Styles are plain data; they resolve into render paints (`StrokeStyle`,
//! `FillPaint`) or emit primitives at render time.

mod arrow;
mod fill;
mod label;
mod line;
mod marker;
mod tick_mark;

pub use arrow::ArrowStyle;
pub use fill::FillStyle;
pub use label::{Alignment, LabelStyle, estimate_text_width_px};
pub use line::LineStyle;
pub use marker::{MarkerShape, MarkerStyle};
pub use tick_mark::TickMarkStyle;

pub use crate::render::{HatchPattern, LinePattern};
