use serde::{Deserialize, Serialize};

use crate::core::{AxisLimits, Coordinates};

/// One sample of a vertical band: the band spans `bottom..top` at `x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandPoint {
    pub x: f64,
    pub top: f64,
    pub bottom: f64,
}

impl BandPoint {
    #[must_use]
    pub const fn new(x: f64, top: f64, bottom: f64) -> Self {
        Self { x, top, bottom }
    }
}

impl From<(f64, f64, f64)> for BandPoint {
    fn from((x, top, bottom): (f64, f64, f64)) -> Self {
        Self::new(x, top, bottom)
    }
}

/// Closed outline in data space; the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    coordinates: Vec<Coordinates>,
}

impl Polygon {
    #[must_use]
    pub fn new(coordinates: Vec<Coordinates>) -> Self {
        Self { coordinates }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn coordinates(&self) -> &[Coordinates] {
        &self.coordinates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    #[must_use]
    pub fn axis_limits(&self) -> AxisLimits {
        AxisLimits::from_coordinates(&self.coordinates)
    }
}

/// Builds the outline of a band: bottoms in input order, then tops reversed.
#[must_use]
pub fn band_polygon(points: &[BandPoint]) -> Polygon {
    let count = points.len();
    let mut coordinates = Vec::with_capacity(count * 2);
    coordinates.extend(
        points
            .iter()
            .map(|point| Coordinates::new(point.x, point.bottom)),
    );
    coordinates.extend(
        points
            .iter()
            .rev()
            .map(|point| Coordinates::new(point.x, point.top)),
    );
    Polygon::new(coordinates)
}

/// Outline enclosed between two series: `first` as given, then `second` reversed.
#[must_use]
pub fn series_band_polygon(first: &[Coordinates], second: &[Coordinates]) -> Polygon {
    let mut coordinates = Vec::with_capacity(first.len() + second.len());
    coordinates.extend_from_slice(first);
    coordinates.extend(second.iter().rev().copied());
    Polygon::new(coordinates)
}
