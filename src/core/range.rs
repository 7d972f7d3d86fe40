use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Closed interval in data space with `min <= max`.
///
/// Equal bounds are allowed; mapping such a range to pixels is rejected by the
/// transform and [`AxisRange::normalize`] falls back to a zero-based range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAxisRange", into = "RawAxisRange")]
pub struct AxisRange {
    min: f64,
    max: f64,
}

#[derive(Serialize, Deserialize)]
struct RawAxisRange {
    min: f64,
    max: f64,
}

impl TryFrom<RawAxisRange> for AxisRange {
    type Error = PlotError;

    fn try_from(raw: RawAxisRange) -> PlotResult<Self> {
        Self::new(raw.min, raw.max)
    }
}

impl From<AxisRange> for RawAxisRange {
    fn from(range: AxisRange) -> Self {
        Self {
            min: range.min,
            max: range.max,
        }
    }
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> PlotResult<Self> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(PlotError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Const constructor for bounds already known to be ordered and finite.
    pub(crate) const fn from_ordered(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Builds a range from two bounds in any order.
    pub fn spanning(a: f64, b: f64) -> PlotResult<Self> {
        Self::new(a.min(b), a.max(b))
    }

    /// Zero-width range at `value`.
    pub fn point(value: f64) -> PlotResult<Self> {
        Self::new(value, value)
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    pub fn set_min(&mut self, min: f64) -> PlotResult<()> {
        *self = Self::new(min, self.max)?;
        Ok(())
    }

    pub fn set_max(&mut self, max: f64) -> PlotResult<()> {
        *self = Self::new(self.min, max)?;
        Ok(())
    }

    pub fn set(&mut self, min: f64, max: f64) -> PlotResult<()> {
        *self = Self::new(min, max)?;
        Ok(())
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn center(self) -> f64 {
        (self.min + self.max) / 2.0
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.min == self.max
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Position of `value` inside the range as a fraction (`min -> 0`, `max -> 1`).
    ///
    /// A degenerate range is treated as `[0, max]`; a range that is still empty
    /// after that substitution maps everything to 0.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        let (low, high) = if self.is_degenerate() {
            (0.0, self.max)
        } else {
            (self.min, self.max)
        };
        let span = high - low;
        if span == 0.0 {
            return 0.0;
        }
        (value - low) / span
    }

    /// Same as [`AxisRange::normalize`] clamped into `[0, 1]`.
    #[must_use]
    pub fn normalize_clamped(self, value: f64) -> f64 {
        self.normalize(value).clamp(0.0, 1.0)
    }

    /// Smallest range containing both `self` and `value`. Non-finite values are ignored.
    #[must_use]
    pub fn expanded_to(self, value: f64) -> Self {
        if !value.is_finite() {
            return self;
        }
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Pads the range by `fraction` of its span on both sides.
    ///
    /// Zero-span ranges are padded by `fraction * |value|`, or by 1 when the
    /// value itself is zero, so the result can always be mapped to pixels.
    #[must_use]
    pub fn with_margin(self, fraction: f64) -> Self {
        let fraction = if fraction.is_finite() {
            fraction.max(0.0)
        } else {
            0.0
        };
        let pad = if self.is_degenerate() {
            let magnitude = self.min.abs();
            if magnitude == 0.0 || fraction == 0.0 {
                1.0
            } else {
                magnitude * fraction
            }
        } else {
            self.span() * fraction
        };
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }

    /// Builds the smallest range covering all finite values, or `None`.
    #[must_use]
    pub fn covering(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values
            .into_iter()
            .filter(|value| value.is_finite())
            .fold(None, |range: Option<Self>, value| {
                Some(match range {
                    Some(range) => range.expanded_to(value),
                    None => Self {
                        min: value,
                        max: value,
                    },
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_maps_bounds_to_unit_interval() {
        let range = AxisRange::new(-4.0, 6.0).expect("range");
        assert_eq!(range.normalize(-4.0), 0.0);
        assert_eq!(range.normalize(6.0), 1.0);
        assert_eq!(range.normalize(1.0), 0.5);
    }

    #[test]
    fn normalize_on_degenerate_range_uses_zero_as_min() {
        let range = AxisRange::point(8.0).expect("range");
        assert_eq!(range.normalize(8.0), 1.0);
        assert_eq!(range.normalize(4.0), 0.5);
        assert_eq!(AxisRange::point(0.0).expect("range").normalize(0.0), 0.0);
    }

    #[test]
    fn zero_span_margin_stays_mappable() {
        let padded = AxisRange::point(0.0).expect("range").with_margin(0.1);
        assert!(!padded.is_degenerate());
        assert_eq!(padded.min(), -1.0);
        assert_eq!(padded.max(), 1.0);
    }
}
