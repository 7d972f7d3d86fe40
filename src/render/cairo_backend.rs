use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;

use crate::error::{PlotError, PlotResult};
use crate::render::{
    Color, FillPaint, HatchPattern, LinePattern, LinePrimitive, PathCommand, PathPrimitive,
    RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive, TextVAlign,
};

const HATCH_SPACING_PX: f64 = 6.0;
const HATCH_LINE_WIDTH_PX: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub paths_drawn: usize,
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can draw into an external Cairo context (for example a
/// widget draw callback owned by the host toolkit).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, frame: &RenderFrame)
    -> PlotResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Offscreen rendering goes to an owned image surface through
/// `Renderer::render`; `CairoContextRenderer` draws in place on a caller
/// context instead.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> PlotResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(PlotError::InvalidViewport {
                width: width.max(0).unsigned_abs(),
                height: height.max(0).unsigned_abs(),
            });
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> PlotResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the offscreen surface as PNG.
    pub fn write_png(&self, writer: &mut impl std::io::Write) -> PlotResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| PlotError::Backend(format!("failed to write png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for path in &frame.paths {
            draw_path(context, path)?;
            stats.paths_drawn += 1;
        }

        for rect in &frame.rects {
            draw_rect(context, *rect)?;
            stats.rects_drawn += 1;
        }

        for line in &frame.lines {
            draw_line(context, *line)?;
            stats.lines_drawn += 1;
        }

        for text in &frame.texts {
            draw_text(context, text)?;
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> PlotResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn apply_pattern(context: &Context, pattern: LinePattern, width: f64) {
    let dashes: Vec<f64> = pattern
        .dash_array()
        .iter()
        .map(|length| length * width.max(1.0))
        .collect();
    context.set_dash(&dashes, 0.0);
}

fn append_path(context: &Context, commands: &[PathCommand]) {
    context.new_path();
    for command in commands {
        match *command {
            PathCommand::MoveTo(point) => context.move_to(point.x, point.y),
            PathCommand::LineTo(point) => context.line_to(point.x, point.y),
            PathCommand::Circle { center, radius } => {
                context.new_sub_path();
                context.arc(center.x, center.y, radius, 0.0, TAU);
                context.close_path();
            }
            PathCommand::Close => context.close_path(),
        }
    }
}

fn draw_path(context: &Context, path: &PathPrimitive) -> PlotResult<()> {
    if let Some(fill) = path.fill {
        append_path(context, &path.commands);
        apply_color(context, fill.color);
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill path", err))?;
        draw_hatch(context, fill)?;
    }

    if let Some(stroke) = path.stroke {
        append_path(context, &path.commands);
        apply_color(context, stroke.color);
        context.set_line_width(stroke.width);
        apply_pattern(context, stroke.pattern, stroke.width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke path", err))?;
        context.set_dash(&[], 0.0);
    }

    context.new_path();
    Ok(())
}

/// Draws hatch lines clipped to the current path; the path is consumed.
fn draw_hatch(context: &Context, fill: FillPaint) -> PlotResult<()> {
    let Some(hatch) = fill.hatch else {
        return Ok(());
    };
    let (x1, y1, x2, y2) = context
        .fill_extents()
        .map_err(|err| map_backend_error("failed to measure hatch extents", err))?;

    context
        .save()
        .map_err(|err| map_backend_error("failed to save cairo state", err))?;
    context.clip();
    apply_color(context, hatch.color);
    context.set_line_width(HATCH_LINE_WIDTH_PX);

    match hatch.pattern {
        HatchPattern::Striped => {
            let height = y2 - y1;
            let mut x = x1 - height;
            while x <= x2 {
                context.move_to(x, y2);
                context.line_to(x + height, y1);
                x += HATCH_SPACING_PX;
            }
        }
        HatchPattern::Grid => {
            let mut x = x1;
            while x <= x2 {
                context.move_to(x, y1);
                context.line_to(x, y2);
                x += HATCH_SPACING_PX;
            }
            let mut y = y1;
            while y <= y2 {
                context.move_to(x1, y);
                context.line_to(x2, y);
                y += HATCH_SPACING_PX;
            }
        }
    }

    let stroked = context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke hatch", err));
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
    stroked
}

fn draw_rect(context: &Context, rect: RectPrimitive) -> PlotResult<()> {
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    apply_color(context, rect.fill_color);
    if rect.border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        apply_color(context, rect.border_color);
        context.set_line_width(rect.border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke rectangle border", err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))
    }
}

fn draw_line(context: &Context, line: LinePrimitive) -> PlotResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    apply_pattern(context, line.pattern, line.stroke_width);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    let stroked = context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err));
    context.set_dash(&[], 0.0);
    stroked
}

fn draw_text(context: &Context, text: &TextPrimitive) -> PlotResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    let weight = if text.bold { " Bold" } else { "" };
    let font_description = FontDescription::from_string(&format!(
        "{}{weight} {}",
        text.font_family, text.font_size_px
    ));
    layout.set_font_description(Some(&font_description));
    if let Some(spacing) = text.line_spacing_px {
        layout.set_spacing((spacing * f64::from(pango::SCALE)) as i32);
    }
    layout.set_text(&text.text);

    let (width, height) = layout.pixel_size();
    let (width, height) = (f64::from(width), f64::from(height));
    let dx = match text.h_align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => -width / 2.0,
        TextHAlign::Right => -width,
    };
    let dy = match text.v_align {
        TextVAlign::Top => 0.0,
        TextVAlign::Middle => -height / 2.0,
        TextVAlign::Bottom => -height,
    };

    context
        .save()
        .map_err(|err| map_backend_error("failed to save cairo state", err))?;
    context.translate(text.x, text.y);
    if text.rotation_deg != 0.0 {
        context.rotate(text.rotation_deg.to_radians());
    }
    apply_color(context, text.color);
    context.move_to(dx, dy);
    pangocairo::functions::show_layout(context, &layout);
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore cairo state", err))
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PlotError {
    PlotError::Backend(format!("{prefix}: {err}"))
}
