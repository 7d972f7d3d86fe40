use serde::{Deserialize, Serialize};

use crate::render::{ArrowAnchor, ArrowShape, Color};
use crate::style::LineStyle;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrowStyle {
    pub line_style: LineStyle,
    pub anchor: ArrowAnchor,
    pub shape: ArrowShape,
    /// Distance from the tip to the base of the head, in pixels.
    pub arrowhead_length: f64,
    /// Full width of the head across the shaft, in pixels.
    pub arrowhead_width: f64,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            line_style: LineStyle::new(1.0, Color::BLACK),
            anchor: ArrowAnchor::Base,
            shape: ArrowShape::Lines,
            arrowhead_length: 6.0,
            arrowhead_width: 6.0,
        }
    }
}
