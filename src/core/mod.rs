pub mod edge;
pub mod limits;
pub mod polygon;
pub mod range;
pub mod tick;
pub mod transform;
pub mod types;
pub mod vector;

pub use edge::Edge;
pub use limits::AxisLimits;
pub use polygon::{BandPoint, Polygon, band_polygon, series_band_polygon};
pub use range::AxisRange;
pub use tick::{FixedTickGenerator, NumericTickGenerator, Tick, TickGenerator, format_tick_label};
pub use transform::{Axes, pixel_to_value, value_to_pixel};
pub use types::{Coordinates, Pixel, PixelRect, Viewport};
pub use vector::{
    RootedPixelVector, RootedVector, Vector2, VectorFieldDataSource, VectorFieldSource,
};
