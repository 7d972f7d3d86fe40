use serde::{Deserialize, Serialize};

use crate::render::{Color, LinePattern, LinePrimitive, StrokeStyle};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub width: f64,
    pub color: Color,
    pub pattern: LinePattern,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: Color::BLACK,
            pattern: LinePattern::Solid,
        }
    }
}

impl LineStyle {
    #[must_use]
    pub fn new(width: f64, color: Color) -> Self {
        Self {
            width,
            color,
            pattern: LinePattern::Solid,
        }
    }

    /// False when the line would not produce visible pixels.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.width.is_finite() && self.width > 0.0 && !self.color.is_transparent()
    }

    #[must_use]
    pub fn stroke(&self) -> Option<StrokeStyle> {
        self.is_visible().then_some(StrokeStyle {
            width: self.width,
            color: self.color,
            pattern: self.pattern,
        })
    }

    #[must_use]
    pub fn segment(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> LinePrimitive {
        LinePrimitive::new(x1, y1, x2, y2, self.width, self.color).with_pattern(self.pattern)
    }
}
