use thiserror::Error;

use crate::core::Edge;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid axis range: min={min}, max={max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("degenerate axis range cannot be mapped to pixels: min={min}, max={max}")]
    DegenerateRange { min: f64, max: f64 },

    #[error("unknown axis edge `{0}`")]
    UnknownEdge(String),

    #[error("{renderer} tick renderer cannot draw on the {edge} edge")]
    EdgeMismatch { renderer: &'static str, edge: Edge },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("render backend failure: {0}")]
    Backend(String),
}
