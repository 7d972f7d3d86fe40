use serde::{Deserialize, Serialize};

use crate::render::{Color, FillPaint, HatchPaint, HatchPattern};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillStyle {
    pub color: Color,
    pub hatch: Option<HatchPattern>,
    pub hatch_color: Color,
}

impl Default for FillStyle {
    fn default() -> Self {
        Self {
            color: Color::rgba(0.12, 0.47, 0.71, 0.5),
            hatch: None,
            hatch_color: Color::BLACK.with_alpha(0.5),
        }
    }
}

impl FillStyle {
    #[must_use]
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// Resolved paint, or `None` when nothing would be drawn.
    #[must_use]
    pub fn paint(&self) -> Option<FillPaint> {
        let hatch = self
            .hatch
            .filter(|_| !self.hatch_color.is_transparent())
            .map(|pattern| HatchPaint {
                pattern,
                color: self.hatch_color,
            });
        if self.color.is_transparent() && hatch.is_none() {
            return None;
        }
        Some(FillPaint {
            color: self.color,
            hatch,
        })
    }
}
