use crate::core::{AxisLimits, Coordinates};
use crate::error::PlotResult;
use crate::render::Color;
use crate::style::{Alignment, LabelStyle};

use super::{Plottable, RenderContext};

/// Label placed at a data-space location, optionally nudged in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub location: Coordinates,
    pub label_style: LabelStyle,
    pub offset_x: f64,
    pub offset_y: f64,
    pub visible: bool,
}

impl Text {
    #[must_use]
    pub fn new(location: Coordinates, text: impl Into<String>) -> Self {
        Self {
            location,
            label_style: LabelStyle::default().with_text(text),
            offset_x: 0.0,
            offset_y: 0.0,
            visible: true,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.label_style.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.label_style.text = text.into();
    }

    #[must_use]
    pub fn font_color(&self) -> Color {
        self.label_style.font_color
    }

    pub fn set_font_color(&mut self, color: Color) {
        self.label_style.font_color = color;
    }

    #[must_use]
    pub fn font_size(&self) -> f64 {
        self.label_style.font_size
    }

    pub fn set_font_size(&mut self, size: f64) {
        self.label_style.font_size = size;
    }

    #[must_use]
    pub fn font_name(&self) -> &str {
        &self.label_style.font_name
    }

    pub fn set_font_name(&mut self, name: impl Into<String>) {
        self.label_style.font_name = name.into();
    }

    #[must_use]
    pub fn bold(&self) -> bool {
        self.label_style.bold
    }

    pub fn set_bold(&mut self, bold: bool) {
        self.label_style.bold = bold;
    }

    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.label_style.rotation
    }

    pub fn set_rotation(&mut self, degrees: f64) {
        self.label_style.rotation = degrees;
    }

    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.label_style.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.label_style.alignment = alignment;
    }

    #[must_use]
    pub fn background_color(&self) -> Color {
        self.label_style.background_color
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.label_style.background_color = color;
    }

    #[must_use]
    pub fn border_color(&self) -> Color {
        self.label_style.border_color
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.label_style.border_color = color;
    }

    #[must_use]
    pub fn border_width(&self) -> f64 {
        self.label_style.border_width
    }

    pub fn set_border_width(&mut self, width: f64) {
        self.label_style.border_width = width;
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.label_style.padding
    }

    pub fn set_padding(&mut self, padding: f64) {
        self.label_style.padding = padding;
    }

    #[must_use]
    pub fn line_spacing(&self) -> Option<f64> {
        self.label_style.line_spacing
    }

    pub fn set_line_spacing(&mut self, spacing: Option<f64>) {
        self.label_style.line_spacing = spacing;
    }
}

impl Plottable for Text {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn axis_limits(&self) -> AxisLimits {
        AxisLimits::from_point(self.location)
    }

    fn render(&self, context: &mut RenderContext<'_>) -> PlotResult<()> {
        if !self.visible {
            return Ok(());
        }
        let pixel = context
            .axes()
            .pixel(self.location)?
            .offset(self.offset_x, self.offset_y);
        self.label_style.render(context.frame_mut(), pixel);
        Ok(())
    }
}
