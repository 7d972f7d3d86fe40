use tracing::trace;

use crate::core::{AxisRange, Edge, Pixel, PixelRect, Tick, value_to_pixel};
use crate::error::{PlotError, PlotResult};
use crate::render::{LinePrimitive, RenderFrame};
use crate::style::{Alignment, LabelStyle, LineStyle, TickMarkStyle};

/// Gap between a tick mark's end and its label on top/bottom axes.
pub const HORIZONTAL_LABEL_PADDING_PX: f64 = 10.0;
/// Gap between a tick mark's end and its label on left/right axes.
pub const VERTICAL_LABEL_PADDING_PX: f64 = 5.0;

/// Styles consumed by the tick renderers.
#[derive(Debug, Clone, Copy)]
pub struct TickStyles<'a> {
    pub label: &'a LabelStyle,
    pub major: TickMarkStyle,
    pub minor: TickMarkStyle,
}

impl TickStyles<'_> {
    fn mark(&self, tick: &Tick) -> TickMarkStyle {
        if tick.is_major { self.major } else { self.minor }
    }
}

/// Draws the panel edge that touches the data area.
pub fn draw_frame(frame: &mut RenderFrame, panel_rect: PixelRect, edge: Edge, line_style: &LineStyle) {
    if !line_style.is_visible() {
        return;
    }
    let r = panel_rect;
    let line = match edge {
        Edge::Left => line_style.segment(r.right, r.bottom, r.right, r.top),
        Edge::Right => line_style.segment(r.left, r.bottom, r.left, r.top),
        Edge::Bottom => line_style.segment(r.left, r.top, r.right, r.top),
        Edge::Top => line_style.segment(r.left, r.bottom, r.right, r.bottom),
    };
    frame.push_line(line);
}

/// Draws ticks along a top or bottom panel.
///
/// Labels sit `tickLength + 10` px outward from the data-side edge and are centered.
pub fn draw_ticks_horizontal(
    frame: &mut RenderFrame,
    panel_rect: PixelRect,
    edge: Edge,
    range: AxisRange,
    ticks: &[Tick],
    styles: &TickStyles<'_>,
) -> PlotResult<()> {
    if !edge.is_horizontal() {
        return Err(PlotError::EdgeMismatch {
            renderer: "horizontal",
            edge,
        });
    }

    let mut label = styles.label.clone();
    label.alignment = Alignment::MiddleCenter;

    let y = if edge == Edge::Bottom {
        panel_rect.top
    } else {
        panel_rect.bottom
    };
    let outward = if edge == Edge::Bottom { 1.0 } else { -1.0 };

    for tick in ticks {
        let mark = styles.mark(tick);
        let x = value_to_pixel(tick.position, range, panel_rect, edge)?;
        if mark.is_visible() {
            frame.push_line(LinePrimitive::new(
                x,
                y,
                x,
                y + outward * mark.length,
                mark.width,
                mark.color,
            ));
        }

        if !tick.has_label() || !label.visible {
            continue;
        }
        let distance = mark.length + HORIZONTAL_LABEL_PADDING_PX;
        label.render_text(frame, &tick.label, Pixel::new(x, y + outward * distance));
    }

    trace!(edge = %edge, count = ticks.len(), "draw horizontal ticks");
    Ok(())
}

/// Draws ticks along a left or right panel.
///
/// Labels sit `tickLength + 5` px outward, right-aligned on the left edge and
/// left-aligned on the right edge.
pub fn draw_ticks_vertical(
    frame: &mut RenderFrame,
    panel_rect: PixelRect,
    edge: Edge,
    range: AxisRange,
    ticks: &[Tick],
    styles: &TickStyles<'_>,
) -> PlotResult<()> {
    if !edge.is_vertical() {
        return Err(PlotError::EdgeMismatch {
            renderer: "vertical",
            edge,
        });
    }

    let mut label = styles.label.clone();
    label.alignment = if edge == Edge::Left {
        Alignment::MiddleRight
    } else {
        Alignment::MiddleLeft
    };

    let x = if edge == Edge::Left {
        panel_rect.right
    } else {
        panel_rect.left
    };
    let outward = if edge == Edge::Left { -1.0 } else { 1.0 };

    for tick in ticks {
        let mark = styles.mark(tick);
        let y = value_to_pixel(tick.position, range, panel_rect, edge)?;
        if mark.is_visible() {
            frame.push_line(LinePrimitive::new(
                x,
                y,
                x + outward * mark.length,
                y,
                mark.width,
                mark.color,
            ));
        }

        if !tick.has_label() || !label.visible {
            continue;
        }
        let distance = mark.length + VERTICAL_LABEL_PADDING_PX;
        label.render_text(frame, &tick.label, Pixel::new(x + outward * distance, y));
    }

    trace!(edge = %edge, count = ticks.len(), "draw vertical ticks");
    Ok(())
}

/// Dispatches to the horizontal or vertical renderer by edge.
pub fn draw_ticks(
    frame: &mut RenderFrame,
    panel_rect: PixelRect,
    edge: Edge,
    range: AxisRange,
    ticks: &[Tick],
    styles: &TickStyles<'_>,
) -> PlotResult<()> {
    if edge.is_vertical() {
        draw_ticks_vertical(frame, panel_rect, edge, range, ticks, styles)
    } else {
        draw_ticks_horizontal(frame, panel_rect, edge, range, ticks, styles)
    }
}
