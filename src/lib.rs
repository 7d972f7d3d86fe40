//! plot-rs: 2D plotting primitives and plottables.
//!
//! Data coordinates are mapped into pixel space through axis panels, and each
//! plottable emits backend-agnostic draw primitives into a `RenderFrame` that a
//! `Renderer` backend turns into pixels.

pub mod api;
pub mod axis;
pub mod colormap;
pub mod core;
pub mod error;
pub mod plottables;
pub mod render;
pub mod style;
pub mod telemetry;

pub use api::{Plot, PlotConfig};
pub use error::{PlotError, PlotResult};
