use crate::core::{
    AxisRange, Edge, FixedTickGenerator, NumericTickGenerator, Pixel, PixelRect, Tick,
    TickGenerator, pixel_to_value, value_to_pixel,
};
use crate::error::{PlotError, PlotResult};
use crate::render::{Color, RenderFrame};
use crate::style::{Alignment, LabelStyle, LineStyle, TickMarkStyle, estimate_text_width_px};

use super::ticks::{
    HORIZONTAL_LABEL_PADDING_PX, TickStyles, VERTICAL_LABEL_PADDING_PX, draw_frame, draw_ticks,
};

const AXIS_LABEL_PADDING_PX: f64 = 5.0;

/// One axis on a side of the data area: range, tick source and styling.
#[derive(Debug)]
pub struct AxisPanel {
    edge: Edge,
    range: Option<AxisRange>,
    tick_generator: Box<dyn TickGenerator>,
    pub visible: bool,
    pub minimum_size: f64,
    pub maximum_size: f64,
    /// Thickness used when the panel has neither ticks nor a label.
    pub size_when_no_data: f64,
    pub label: LabelStyle,
    pub major_tick_style: TickMarkStyle,
    pub minor_tick_style: TickMarkStyle,
    pub tick_label_style: LabelStyle,
    pub frame_line_style: LineStyle,
}

impl AxisPanel {
    /// Panel with numeric ticks.
    #[must_use]
    pub fn new(edge: Edge) -> Self {
        Self::with_tick_generator(edge, Box::new(NumericTickGenerator::default()))
    }

    /// Panel that draws only its frame until ticks or a label are configured.
    #[must_use]
    pub fn unlabeled(edge: Edge) -> Self {
        Self::with_tick_generator(edge, Box::new(FixedTickGenerator::empty()))
    }

    #[must_use]
    pub fn with_tick_generator(edge: Edge, tick_generator: Box<dyn TickGenerator>) -> Self {
        let rotation = match edge {
            Edge::Left => -90.0,
            Edge::Right => 90.0,
            Edge::Top | Edge::Bottom => 0.0,
        };
        Self {
            edge,
            range: None,
            tick_generator,
            visible: true,
            minimum_size: 0.0,
            maximum_size: f64::MAX,
            size_when_no_data: 15.0,
            label: LabelStyle {
                font_size: 16.0,
                bold: true,
                rotation,
                ..LabelStyle::default()
            },
            major_tick_style: TickMarkStyle::major(),
            minor_tick_style: TickMarkStyle::minor(),
            tick_label_style: LabelStyle {
                alignment: Alignment::MiddleCenter,
                ..LabelStyle::default()
            },
            frame_line_style: LineStyle::default(),
        }
    }

    #[must_use]
    pub fn edge(&self) -> Edge {
        self.edge
    }

    #[must_use]
    pub fn range(&self) -> Option<AxisRange> {
        self.range
    }

    pub fn set_range(&mut self, min: f64, max: f64) -> PlotResult<()> {
        self.range = Some(AxisRange::new(min, max)?);
        Ok(())
    }

    pub fn set_axis_range(&mut self, range: AxisRange) {
        self.range = Some(range);
    }

    pub fn clear_range(&mut self) {
        self.range = None;
    }

    pub fn set_tick_generator(&mut self, tick_generator: Box<dyn TickGenerator>) {
        self.tick_generator = tick_generator;
    }

    pub fn set_label_text(&mut self, text: impl Into<String>) {
        self.label.text = text.into();
    }

    /// Applies one color to the axis label, tick labels, tick marks and frame.
    pub fn set_color(&mut self, color: Color) {
        self.label.font_color = color;
        self.tick_label_style.font_color = color;
        self.major_tick_style.color = color;
        self.minor_tick_style.color = color;
        self.frame_line_style.color = color;
    }

    /// Pixel position of `value` along this axis.
    pub fn get_pixel(&self, value: f64, data_rect: PixelRect) -> PlotResult<f64> {
        value_to_pixel(value, self.mapped_range()?, data_rect, self.edge)
    }

    /// Data value at `pixel` along this axis.
    pub fn get_coordinate(&self, pixel: f64, data_rect: PixelRect) -> PlotResult<f64> {
        pixel_to_value(pixel, self.mapped_range()?, data_rect, self.edge)
    }

    fn mapped_range(&self) -> PlotResult<AxisRange> {
        self.range.ok_or_else(|| {
            PlotError::InvalidData(format!("{} axis range has not been set", self.edge))
        })
    }

    /// Ticks for `range` drawn across `data_rect`; empty for a degenerate range.
    ///
    /// `range` is passed explicitly so a panel without a configured range can
    /// follow an auto-scaled or mirrored one.
    #[must_use]
    pub fn ticks(&self, range: AxisRange, data_rect: PixelRect) -> Vec<Tick> {
        if range.is_degenerate() {
            return Vec::new();
        }
        let span_px = if self.edge.is_horizontal() {
            data_rect.width()
        } else {
            data_rect.height()
        };
        self.tick_generator.generate(range, self.edge, span_px)
    }

    /// Estimated panel thickness needed for `ticks` and the axis label.
    #[must_use]
    pub fn measure(&self, ticks: &[Tick]) -> f64 {
        if !self.visible {
            return 0.0;
        }
        let has_axis_label = self.label.visible && !self.label.text.trim().is_empty();
        if ticks.is_empty() && !has_axis_label {
            return self.clamp_size(self.size_when_no_data);
        }

        let tick_length = ticks
            .iter()
            .map(|tick| {
                if tick.is_major {
                    self.major_tick_style.length
                } else {
                    self.minor_tick_style.length
                }
            })
            .fold(0.0, f64::max);

        let labeled: Vec<&Tick> = ticks
            .iter()
            .filter(|tick| tick.has_label() && self.tick_label_style.visible)
            .collect();
        let mut size = tick_length;
        if !labeled.is_empty() {
            let font_size = self.tick_label_style.font_size;
            size += if self.edge.is_horizontal() {
                // Labels are centered on `tickLength + padding`.
                HORIZONTAL_LABEL_PADDING_PX + font_size / 2.0
            } else {
                let widest = labeled
                    .iter()
                    .map(|tick| estimate_text_width_px(&tick.label, font_size))
                    .fold(0.0, f64::max);
                VERTICAL_LABEL_PADDING_PX + widest
            };
        }
        if has_axis_label {
            size += AXIS_LABEL_PADDING_PX + self.label.font_size;
        }
        self.clamp_size(size)
    }

    fn clamp_size(&self, size: f64) -> f64 {
        let maximum = self.maximum_size.max(self.minimum_size);
        size.clamp(self.minimum_size, maximum)
    }

    /// Rectangle of a panel `size` px thick placed against `data_rect`.
    #[must_use]
    pub fn panel_rect(&self, data_rect: PixelRect, size: f64) -> PixelRect {
        let d = data_rect;
        match self.edge {
            Edge::Bottom => PixelRect::new(d.left, d.right, d.bottom, d.bottom + size),
            Edge::Top => PixelRect::new(d.left, d.right, d.top - size, d.top),
            Edge::Left => PixelRect::new(d.left - size, d.left, d.top, d.bottom),
            Edge::Right => PixelRect::new(d.right, d.right + size, d.top, d.bottom),
        }
    }

    /// Draws frame, ticks and axis label for a panel `size` px thick.
    pub fn render(
        &self,
        frame: &mut RenderFrame,
        data_rect: PixelRect,
        size: f64,
        range: AxisRange,
        ticks: &[Tick],
    ) -> PlotResult<()> {
        if !self.visible {
            return Ok(());
        }
        let panel_rect = self.panel_rect(data_rect, size);
        draw_frame(frame, panel_rect, self.edge, &self.frame_line_style);

        if !range.is_degenerate() {
            let styles = TickStyles {
                label: &self.tick_label_style,
                major: self.major_tick_style,
                minor: self.minor_tick_style,
            };
            draw_ticks(frame, panel_rect, self.edge, range, ticks, &styles)?;
        }

        self.render_axis_label(frame, panel_rect);
        Ok(())
    }

    fn render_axis_label(&self, frame: &mut RenderFrame, panel_rect: PixelRect) {
        let center = panel_rect.center();
        let (alignment, anchor) = match self.edge {
            Edge::Bottom => (Alignment::LowerCenter, Pixel::new(center.x, panel_rect.bottom)),
            Edge::Top => (Alignment::UpperCenter, Pixel::new(center.x, panel_rect.top)),
            Edge::Left => (Alignment::UpperCenter, Pixel::new(panel_rect.left, center.y)),
            Edge::Right => (Alignment::UpperCenter, Pixel::new(panel_rect.right, center.y)),
        };
        let mut label = self.label.clone();
        label.alignment = alignment;
        label.render(frame, anchor);
    }
}
