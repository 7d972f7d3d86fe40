use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Length, width and color of one class of tick marks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickMarkStyle {
    pub length: f64,
    pub width: f64,
    pub color: Color,
}

impl TickMarkStyle {
    #[must_use]
    pub const fn major() -> Self {
        Self {
            length: 4.0,
            width: 1.0,
            color: Color::BLACK,
        }
    }

    #[must_use]
    pub const fn minor() -> Self {
        Self {
            length: 2.0,
            width: 1.0,
            color: Color::BLACK,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.length > 0.0 && self.width > 0.0 && !self.color.is_transparent()
    }
}
