use crate::core::{AxisRange, Coordinates, Edge, Pixel, PixelRect};
use crate::error::{PlotError, PlotResult};

/// Maps a data-space value onto the pixel axis selected by `edge`.
///
/// Horizontal edges grow rightward from `rect.left`; vertical edges are
/// inverted so data grows upward from `rect.bottom`.
pub fn value_to_pixel(value: f64, range: AxisRange, rect: PixelRect, edge: Edge) -> PlotResult<f64> {
    if !value.is_finite() {
        return Err(PlotError::InvalidData("value must be finite".to_owned()));
    }
    let span = mappable_span(range)?;
    let fraction = (value - range.min()) / span;

    if edge.is_horizontal() {
        Ok(rect.left + fraction * rect.width())
    } else {
        Ok(rect.bottom - fraction * rect.height())
    }
}

/// Inverse of [`value_to_pixel`].
pub fn pixel_to_value(pixel: f64, range: AxisRange, rect: PixelRect, edge: Edge) -> PlotResult<f64> {
    if !pixel.is_finite() {
        return Err(PlotError::InvalidData("pixel must be finite".to_owned()));
    }
    let span = mappable_span(range)?;
    let (offset, extent) = if edge.is_horizontal() {
        (pixel - rect.left, rect.width())
    } else {
        (rect.bottom - pixel, rect.height())
    };
    if extent <= 0.0 {
        return Err(PlotError::InvalidData(
            "pixel rectangle must have a positive extent".to_owned(),
        ));
    }
    Ok(range.min() + offset / extent * span)
}

fn mappable_span(range: AxisRange) -> PlotResult<f64> {
    let span = range.span();
    if span == 0.0 || !span.is_finite() {
        return Err(PlotError::DegenerateRange {
            min: range.min(),
            max: range.max(),
        });
    }
    Ok(span)
}

/// Read-only transform context shared by every plottable during a render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axes {
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub data_rect: PixelRect,
}

impl Axes {
    #[must_use]
    pub const fn new(x_range: AxisRange, y_range: AxisRange, data_rect: PixelRect) -> Self {
        Self {
            x_range,
            y_range,
            data_rect,
        }
    }

    pub fn x_pixel(&self, x: f64) -> PlotResult<f64> {
        value_to_pixel(x, self.x_range, self.data_rect, Edge::Bottom)
    }

    pub fn y_pixel(&self, y: f64) -> PlotResult<f64> {
        value_to_pixel(y, self.y_range, self.data_rect, Edge::Left)
    }

    pub fn pixel(&self, coordinates: Coordinates) -> PlotResult<Pixel> {
        Ok(Pixel::new(
            self.x_pixel(coordinates.x)?,
            self.y_pixel(coordinates.y)?,
        ))
    }

    pub fn coordinates(&self, pixel: Pixel) -> PlotResult<Coordinates> {
        Ok(Coordinates::new(
            pixel_to_value(pixel.x, self.x_range, self.data_rect, Edge::Bottom)?,
            pixel_to_value(pixel.y, self.y_range, self.data_rect, Edge::Left)?,
        ))
    }

    /// True when both ranges can be mapped to pixels.
    #[must_use]
    pub fn is_mappable(&self) -> bool {
        !self.x_range.is_degenerate() && !self.y_range.is_degenerate()
    }
}
