use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{AxisLimits, Coordinates, Pixel};

/// Direction and magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector of length `magnitude` pointing at `angle` radians.
    #[must_use]
    pub fn from_polar(angle: f64, magnitude: f64) -> Self {
        Self::new(angle.cos() * magnitude, angle.sin() * magnitude)
    }

    #[must_use]
    pub fn magnitude_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle in radians measured from the positive x axis.
    #[must_use]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }
}

/// Vector anchored at a data-space origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RootedVector {
    pub origin: Coordinates,
    pub vector: Vector2,
}

impl RootedVector {
    #[must_use]
    pub const fn new(origin: Coordinates, vector: Vector2) -> Self {
        Self { origin, vector }
    }
}

/// Render-time form of a [`RootedVector`]: origin already in pixel space.
///
/// `vector` keeps data orientation (positive y points up) so its angle survives
/// rescaling; arrow paths flip it when emitting pixel geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootedPixelVector {
    pub pixel: Pixel,
    pub vector: Vector2,
}

impl RootedPixelVector {
    #[must_use]
    pub const fn new(pixel: Pixel, vector: Vector2) -> Self {
        Self { pixel, vector }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.vector.magnitude_squared()
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.vector.magnitude()
    }

    #[must_use]
    pub fn angle(&self) -> f64 {
        self.vector.angle()
    }
}

/// Live source of rooted vectors, queried on every render pass.
pub trait VectorFieldSource: fmt::Debug {
    fn rooted_vectors(&self) -> Vec<RootedVector>;

    fn limits(&self) -> AxisLimits;
}

/// In-memory vector field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VectorFieldDataSource {
    vectors: Vec<RootedVector>,
}

impl VectorFieldDataSource {
    #[must_use]
    pub fn new(vectors: Vec<RootedVector>) -> Self {
        Self { vectors }
    }

    /// Samples `field` on a regular grid of `xs` x `ys` origins.
    #[must_use]
    pub fn from_grid(xs: &[f64], ys: &[f64], field: impl Fn(Coordinates) -> Vector2) -> Self {
        let mut vectors = Vec::with_capacity(xs.len() * ys.len());
        for &y in ys {
            for &x in xs {
                let origin = Coordinates::new(x, y);
                vectors.push(RootedVector::new(origin, field(origin)));
            }
        }
        Self { vectors }
    }

    #[must_use]
    pub fn vectors(&self) -> &[RootedVector] {
        &self.vectors
    }

    pub fn push(&mut self, vector: RootedVector) {
        self.vectors.push(vector);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

impl VectorFieldSource for VectorFieldDataSource {
    fn rooted_vectors(&self) -> Vec<RootedVector> {
        self.vectors.clone()
    }

    fn limits(&self) -> AxisLimits {
        let origins: Vec<Coordinates> = self.vectors.iter().map(|v| v.origin).collect();
        AxisLimits::from_coordinates(&origins)
    }
}
