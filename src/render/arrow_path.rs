use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Pixel, RootedPixelVector};
use crate::render::PathCommand;
use crate::style::ArrowStyle;

/// Which part of the arrow sits on the vector's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ArrowAnchor {
    /// Tail on the origin; the arrow points away from it.
    #[default]
    Base,
    Center,
    /// Tip on the origin; the arrow points at it.
    Tip,
}

/// Path construction strategy for one arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ArrowShape {
    /// Shaft plus two open blades.
    #[default]
    Lines,
    /// Shaft plus a closed triangular head.
    Filled,
}

/// Per-arrow command buffer; both shapes fit inline.
pub(crate) type ArrowCommands = SmallVec<[PathCommand; 6]>;

impl ArrowShape {
    /// Outline of one arrow. Zero-length vectors produce no commands.
    #[must_use]
    pub(crate) fn commands(self, vector: &RootedPixelVector, style: &ArrowStyle) -> ArrowCommands {
        let mut commands = ArrowCommands::new();
        let (tail, tip) = arrow_endpoints(vector, style.anchor);
        let dx = tip.x - tail.x;
        let dy = tip.y - tail.y;
        let length = dx.hypot(dy);
        if !length.is_finite() || length <= f64::EPSILON {
            return commands;
        }

        let (ux, uy) = (dx / length, dy / length);
        let head_length = style.arrowhead_length.clamp(0.0, length);
        let half_width = style.arrowhead_width.max(0.0) / 2.0;
        let neck = Pixel::new(tip.x - ux * head_length, tip.y - uy * head_length);
        let blade_a = neck.offset(-uy * half_width, ux * half_width);
        let blade_b = neck.offset(uy * half_width, -ux * half_width);

        match self {
            Self::Lines => {
                commands.push(PathCommand::MoveTo(tail));
                commands.push(PathCommand::LineTo(tip));
                commands.push(PathCommand::MoveTo(blade_a));
                commands.push(PathCommand::LineTo(tip));
                commands.push(PathCommand::LineTo(blade_b));
            }
            Self::Filled => {
                commands.push(PathCommand::MoveTo(tail));
                commands.push(PathCommand::LineTo(neck));
                commands.push(PathCommand::MoveTo(tip));
                commands.push(PathCommand::LineTo(blade_a));
                commands.push(PathCommand::LineTo(blade_b));
                commands.push(PathCommand::Close);
            }
        }
        commands
    }
}

/// Tail and tip of an arrow in pixel space.
///
/// The vector is in data orientation, so its y component is flipped.
#[must_use]
pub fn arrow_endpoints(vector: &RootedPixelVector, anchor: ArrowAnchor) -> (Pixel, Pixel) {
    let dx = vector.vector.x;
    let dy = -vector.vector.y;
    let origin = vector.pixel;
    match anchor {
        ArrowAnchor::Base => (origin, origin.offset(dx, dy)),
        ArrowAnchor::Center => (
            origin.offset(-dx / 2.0, -dy / 2.0),
            origin.offset(dx / 2.0, dy / 2.0),
        ),
        ArrowAnchor::Tip => (origin.offset(-dx, -dy), origin),
    }
}
