use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, Coordinates};

/// Data-space bounding box reported by plottables for auto-scaling.
///
/// Either dimension may be absent; `AxisLimits::no_limits()` reports neither.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisLimits {
    pub x: Option<AxisRange>,
    pub y: Option<AxisRange>,
}

impl AxisLimits {
    #[must_use]
    pub const fn no_limits() -> Self {
        Self { x: None, y: None }
    }

    #[must_use]
    pub const fn new(x: Option<AxisRange>, y: Option<AxisRange>) -> Self {
        Self { x, y }
    }

    /// Limits of a single point; non-finite coordinates are dropped.
    #[must_use]
    pub fn from_point(point: Coordinates) -> Self {
        Self::from_coordinates(&[point])
    }

    #[must_use]
    pub fn from_coordinates(points: &[Coordinates]) -> Self {
        Self {
            x: AxisRange::covering(points.iter().map(|point| point.x)),
            y: AxisRange::covering(points.iter().map(|point| point.y)),
        }
    }

    #[must_use]
    pub fn has_limits(self) -> bool {
        self.x.is_some() || self.y.is_some()
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            x: merge(self.x, other.x),
            y: merge(self.y, other.y),
        }
    }
}

fn merge(left: Option<AxisRange>, right: Option<AxisRange>) -> Option<AxisRange> {
    match (left, right) {
        (Some(left), Some(right)) => Some(left.union(right)),
        (range, None) | (None, range) => range,
    }
}
