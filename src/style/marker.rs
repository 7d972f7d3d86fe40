use serde::{Deserialize, Serialize};

use crate::core::Pixel;
use crate::render::{Color, FillPaint, PathCommand, PathPrimitive};
use crate::style::LineStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarkerShape {
    #[default]
    None,
    FilledCircle,
    OpenCircle,
    FilledSquare,
    OpenSquare,
}

impl MarkerShape {
    #[must_use]
    pub fn is_filled(self) -> bool {
        matches!(self, Self::FilledCircle | Self::FilledSquare)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub shape: MarkerShape,
    /// Diameter (circles) or side length (squares) in pixels.
    pub size: f64,
    pub fill_color: Color,
    pub outline: LineStyle,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            shape: MarkerShape::None,
            size: 5.0,
            fill_color: Color::BLACK,
            outline: LineStyle::new(1.0, Color::BLACK),
        }
    }
}

impl MarkerStyle {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.shape != MarkerShape::None && self.size.is_finite() && self.size > 0.0
    }

    /// One path holding a marker at every center, or `None` when markers are off.
    #[must_use]
    pub fn path(&self, centers: &[Pixel]) -> Option<PathPrimitive> {
        if !self.is_visible() || centers.is_empty() {
            return None;
        }

        let half = self.size / 2.0;
        let mut commands = Vec::with_capacity(centers.len() * 5);
        for center in centers {
            match self.shape {
                MarkerShape::FilledCircle | MarkerShape::OpenCircle => {
                    commands.push(PathCommand::Circle {
                        center: *center,
                        radius: half,
                    });
                }
                MarkerShape::FilledSquare | MarkerShape::OpenSquare => {
                    commands.push(PathCommand::MoveTo(center.offset(-half, -half)));
                    commands.push(PathCommand::LineTo(center.offset(half, -half)));
                    commands.push(PathCommand::LineTo(center.offset(half, half)));
                    commands.push(PathCommand::LineTo(center.offset(-half, half)));
                    commands.push(PathCommand::Close);
                }
                MarkerShape::None => {}
            }
        }

        let mut path = PathPrimitive::new(commands);
        if self.shape.is_filled() && !self.fill_color.is_transparent() {
            path = path.with_fill(FillPaint::solid(self.fill_color));
        }
        if let Some(stroke) = self.outline.stroke() {
            path = path.with_stroke(stroke);
        }
        (path.fill.is_some() || path.stroke.is_some()).then_some(path)
    }
}
