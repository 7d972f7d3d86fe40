//! Scalar-to-color mapping used by magnitude-colored plottables.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::AxisRange;
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Maps a scalar within a range to a color.
pub trait Colormap: fmt::Debug {
    fn name(&self) -> &str;

    /// Color at `fraction` in `[0, 1]`.
    fn color_at(&self, fraction: f64) -> Color;

    /// Color of `value` relative to `range`; values outside the range clamp.
    fn color(&self, value: f64, range: AxisRange) -> Color {
        self.color_at(range.normalize_clamped(value))
    }
}

/// Piecewise-linear gradient through evenly spaced color stops.
///
/// With `steps` set, fractions snap to that many discrete levels first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGradient", into = "RawGradient")]
pub struct Gradient {
    name: String,
    stops: Vec<Color>,
    steps: Option<usize>,
}

#[derive(Serialize, Deserialize)]
struct RawGradient {
    name: String,
    stops: Vec<Color>,
    steps: Option<usize>,
}

impl TryFrom<RawGradient> for Gradient {
    type Error = PlotError;

    fn try_from(raw: RawGradient) -> PlotResult<Self> {
        let gradient = Self::new(raw.name, raw.stops).ok_or_else(|| {
            PlotError::InvalidConfig("gradient needs at least two color stops".to_owned())
        })?;
        Ok(match raw.steps {
            Some(steps) => gradient.with_steps(steps),
            None => gradient,
        })
    }
}

impl From<Gradient> for RawGradient {
    fn from(gradient: Gradient) -> Self {
        Self {
            name: gradient.name,
            stops: gradient.stops,
            steps: gradient.steps,
        }
    }
}

impl Gradient {
    /// Returns `None` when fewer than two stops are given.
    #[must_use]
    pub fn new(name: impl Into<String>, stops: Vec<Color>) -> Option<Self> {
        (stops.len() >= 2).then(|| Self {
            name: name.into(),
            stops,
            steps: None,
        })
    }

    #[must_use]
    pub fn viridis() -> Self {
        Self {
            name: "Viridis".to_owned(),
            stops: vec![
                Color::from_rgb8(68, 1, 84),
                Color::from_rgb8(59, 82, 139),
                Color::from_rgb8(33, 145, 140),
                Color::from_rgb8(94, 201, 98),
                Color::from_rgb8(253, 231, 37),
            ],
            steps: None,
        }
    }

    #[must_use]
    pub fn grayscale() -> Self {
        Self {
            name: "Grayscale".to_owned(),
            stops: vec![Color::BLACK, Color::WHITE],
            steps: None,
        }
    }

    /// Diverging blue, white, red.
    #[must_use]
    pub fn blue_white_red() -> Self {
        Self {
            name: "BlueWhiteRed".to_owned(),
            stops: vec![Color::rgb(0.0, 0.0, 1.0), Color::WHITE, Color::rgb(1.0, 0.0, 0.0)],
            steps: None,
        }
    }

    /// Quantizes the output into `steps` discrete colors (`0` disables).
    #[must_use]
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = (steps > 0).then_some(steps);
        self
    }

    #[must_use]
    pub fn stops(&self) -> &[Color] {
        &self.stops
    }
}

impl Colormap for Gradient {
    fn name(&self) -> &str {
        &self.name
    }

    fn color_at(&self, fraction: f64) -> Color {
        let mut fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        if let Some(steps) = self.steps {
            let levels = steps as f64;
            fraction = if steps == 1 {
                0.0
            } else {
                ((fraction * levels).floor().min(levels - 1.0)) / (levels - 1.0)
            };
        }

        let segments = (self.stops.len() - 1) as f64;
        let position = fraction * segments;
        let index = (position.floor() as usize).min(self.stops.len() - 2);
        let local = position - index as f64;
        self.stops[index].lerp(self.stops[index + 1], local)
    }
}
