use serde::{Deserialize, Serialize};

use crate::core::Pixel;
use crate::render::{Color, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive, TextVAlign};

/// Anchor of a label relative to its pixel location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    UpperLeft,
    UpperCenter,
    UpperRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    LowerLeft,
    LowerCenter,
    LowerRight,
}

impl Alignment {
    #[must_use]
    pub fn h_align(self) -> TextHAlign {
        match self {
            Self::UpperLeft | Self::MiddleLeft | Self::LowerLeft => TextHAlign::Left,
            Self::UpperCenter | Self::MiddleCenter | Self::LowerCenter => TextHAlign::Center,
            Self::UpperRight | Self::MiddleRight | Self::LowerRight => TextHAlign::Right,
        }
    }

    #[must_use]
    pub fn v_align(self) -> TextVAlign {
        match self {
            Self::UpperLeft | Self::UpperCenter | Self::UpperRight => TextVAlign::Top,
            Self::MiddleLeft | Self::MiddleCenter | Self::MiddleRight => TextVAlign::Middle,
            Self::LowerLeft | Self::LowerCenter | Self::LowerRight => TextVAlign::Bottom,
        }
    }
}

/// Text appearance plus an optional background box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    pub visible: bool,
    pub text: String,
    pub font_name: String,
    pub font_size: f64,
    pub font_color: Color,
    pub bold: bool,
    /// Degrees, clockwise.
    pub rotation: f64,
    pub alignment: Alignment,
    pub background_color: Color,
    pub border_color: Color,
    pub border_width: f64,
    /// Space between the text and the background edge, in pixels.
    pub padding: f64,
    pub line_spacing: Option<f64>,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            visible: true,
            text: String::new(),
            font_name: "Sans".to_owned(),
            font_size: 12.0,
            font_color: Color::BLACK,
            bold: false,
            rotation: 0.0,
            alignment: Alignment::UpperLeft,
            background_color: Color::TRANSPARENT,
            border_color: Color::TRANSPARENT,
            border_width: 0.0,
            padding: 0.0,
            line_spacing: None,
        }
    }
}

impl LabelStyle {
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Estimated unrotated text size in pixels, excluding padding.
    #[must_use]
    pub fn measure(&self, text: &str) -> (f64, f64) {
        let line_height = self.line_spacing.unwrap_or(self.font_size * 1.2);
        let mut line_count = 0usize;
        let mut width: f64 = 0.0;
        for line in text.lines() {
            line_count += 1;
            width = width.max(estimate_text_width_px(line, self.font_size));
        }
        let line_count = line_count.max(1);
        let height = self.font_size + (line_count - 1) as f64 * line_height;
        (width, height)
    }

    /// Emits `self.text` anchored at `pixel`.
    pub fn render(&self, frame: &mut RenderFrame, pixel: Pixel) {
        self.render_text(frame, &self.text, pixel);
    }

    /// Emits `text` with this style, ignoring `self.text`.
    ///
    /// Blank text and hidden styles emit nothing.
    pub fn render_text(&self, frame: &mut RenderFrame, text: &str, pixel: Pixel) {
        if !self.visible || text.trim().is_empty() {
            return;
        }

        let has_border = self.border_width > 0.0 && !self.border_color.is_transparent();
        if !self.background_color.is_transparent() || has_border {
            let (width, height) = self.measure(text);
            let box_width = width + 2.0 * self.padding;
            let box_height = height + 2.0 * self.padding;
            let x = match self.alignment.h_align() {
                TextHAlign::Left => pixel.x - self.padding,
                TextHAlign::Center => pixel.x - box_width / 2.0,
                TextHAlign::Right => pixel.x - width - self.padding,
            };
            let y = match self.alignment.v_align() {
                TextVAlign::Top => pixel.y - self.padding,
                TextVAlign::Middle => pixel.y - box_height / 2.0,
                TextVAlign::Bottom => pixel.y - height - self.padding,
            };
            let mut rect = RectPrimitive::new(x, y, box_width, box_height, self.background_color);
            if has_border {
                rect = rect.with_border(self.border_width, self.border_color);
            }
            frame.push_rect(rect);
        }

        frame.push_text(
            TextPrimitive::new(
                text,
                pixel.x,
                pixel.y,
                self.font_size,
                self.font_color,
                self.alignment.h_align(),
            )
            .with_v_align(self.alignment.v_align())
            .with_font(self.font_name.clone(), self.bold)
            .with_rotation(self.rotation)
            .with_line_spacing(self.line_spacing),
        );
    }
}

/// Backend-independent text width estimate.
#[must_use]
pub fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    units * font_size_px
}
