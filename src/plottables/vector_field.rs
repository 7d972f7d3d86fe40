use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use tracing::{trace, warn};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::colormap::Colormap;
use crate::core::{
    Axes, AxisLimits, AxisRange, RootedPixelVector, RootedVector, Vector2, VectorFieldSource,
};
use crate::error::PlotResult;
use crate::render::{ArrowAnchor, Color, FillPaint, PathPrimitive, StrokeStyle};
use crate::style::ArrowStyle;

use super::{LegendItem, Plottable, RenderContext};

/// Pixel length of the longest arrow in a field.
pub const MAX_ARROW_LENGTH_PX: f64 = 25.0;

type ColorKey = [OrderedFloat<f64>; 4];

fn color_key(color: Color) -> ColorKey {
    [
        OrderedFloat(color.red),
        OrderedFloat(color.green),
        OrderedFloat(color.blue),
        OrderedFloat(color.alpha),
    ]
}

/// Arrows at data-space origins, rescaled so the strongest is 25 px long.
#[derive(Debug)]
pub struct VectorField {
    pub label: Option<String>,
    pub visible: bool,
    pub arrow_style: ArrowStyle,
    source: Box<dyn VectorFieldSource>,
    colormap: Option<Box<dyn Colormap>>,
}

impl VectorField {
    #[must_use]
    pub fn new(source: Box<dyn VectorFieldSource>) -> Self {
        Self {
            label: None,
            visible: true,
            arrow_style: ArrowStyle::default(),
            source,
            colormap: None,
        }
    }

    #[must_use]
    pub fn with_colormap(mut self, colormap: Box<dyn Colormap>) -> Self {
        self.colormap = Some(colormap);
        self
    }

    pub fn set_colormap(&mut self, colormap: Option<Box<dyn Colormap>>) {
        self.colormap = colormap;
    }

    #[must_use]
    pub fn colormap(&self) -> Option<&dyn Colormap> {
        self.colormap.as_deref()
    }

    #[must_use]
    pub fn source(&self) -> &dyn VectorFieldSource {
        self.source.as_ref()
    }

    pub fn set_source(&mut self, source: Box<dyn VectorFieldSource>) {
        self.source = source;
    }

    #[must_use]
    pub fn arrow_anchor(&self) -> ArrowAnchor {
        self.arrow_style.anchor
    }

    pub fn set_arrow_anchor(&mut self, anchor: ArrowAnchor) {
        self.arrow_style.anchor = anchor;
    }

    #[must_use]
    pub fn arrow_color(&self) -> Color {
        self.arrow_style.line_style.color
    }

    pub fn set_arrow_color(&mut self, color: Color) {
        self.arrow_style.line_style.color = color;
    }

    #[must_use]
    pub fn arrow_line_width(&self) -> f64 {
        self.arrow_style.line_style.width
    }

    pub fn set_arrow_line_width(&mut self, width: f64) {
        self.arrow_style.line_style.width = width;
    }

    fn arrow_path<'v>(
        &self,
        vectors: impl IntoIterator<Item = &'v RootedPixelVector>,
        color: Color,
    ) -> Option<PathPrimitive> {
        let mut commands = Vec::new();
        for vector in vectors {
            commands.extend(self.arrow_style.shape.commands(vector, &self.arrow_style));
        }
        if commands.is_empty() {
            return None;
        }

        let line = self.arrow_style.line_style;
        let mut path = PathPrimitive::new(commands).with_fill(FillPaint::solid(color));
        if line.width.is_finite() && line.width > 0.0 {
            path = path.with_stroke(StrokeStyle {
                width: line.width,
                color,
                pattern: line.pattern,
            });
        }
        Some(path)
    }
}

/// Maps every origin into pixel space; direction and magnitude are untouched.
pub fn project_origins(vectors: &[RootedVector], axes: &Axes) -> PlotResult<Vec<RootedPixelVector>> {
    #[cfg(feature = "parallel-projection")]
    {
        let projected: Vec<PlotResult<RootedPixelVector>> = vectors
            .par_iter()
            .map(|rooted| {
                axes.pixel(rooted.origin)
                    .map(|pixel| RootedPixelVector::new(pixel, rooted.vector))
            })
            .collect();
        projected.into_iter().collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        vectors
            .iter()
            .map(|rooted| {
                axes.pixel(rooted.origin)
                    .map(|pixel| RootedPixelVector::new(pixel, rooted.vector))
            })
            .collect()
    }
}

/// Rescales every vector to `normalize(magnitude) * max_length`, keeping its angle.
///
/// The normalization range spans the smallest and largest magnitude; a uniform
/// field uses `[0, magnitude]` so its arrows keep full length. Returns the range
/// used, or `None` for an empty slice or magnitudes that overflow `f64`.
pub fn normalize_magnitudes(
    vectors: &mut [RootedPixelVector],
    max_length: f64,
) -> Option<AxisRange> {
    if vectors.is_empty() {
        return None;
    }

    // Magnitudes come from `hypot`, so squares above f64::MAX never appear.
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for vector in vectors.iter() {
        let magnitude = vector.magnitude();
        min = min.min(magnitude);
        max = max.max(magnitude);
    }
    if !min.is_finite() || !max.is_finite() {
        return None;
    }

    let mut range = AxisRange::new(min, max).ok()?;
    if range.is_degenerate() {
        range = AxisRange::new(0.0, range.max()).ok()?;
    }

    for vector in vectors.iter_mut() {
        let magnitude = range.normalize_clamped(vector.magnitude()) * max_length;
        vector.vector = Vector2::from_polar(vector.angle(), magnitude);
    }
    Some(range)
}

/// Groups vector indices by the exact color `colormap` gives their magnitude.
///
/// Buckets keep first-seen order so output is deterministic.
#[must_use]
pub fn color_buckets(
    vectors: &[RootedPixelVector],
    colormap: &dyn Colormap,
) -> Vec<(Color, Vec<usize>)> {
    let Some(range) = AxisRange::covering(vectors.iter().map(RootedPixelVector::magnitude)) else {
        return Vec::new();
    };

    let mut buckets: IndexMap<ColorKey, (Color, Vec<usize>)> = IndexMap::new();
    for (index, vector) in vectors.iter().enumerate() {
        let color = colormap.color(vector.magnitude(), range);
        buckets
            .entry(color_key(color))
            .or_insert_with(|| (color, Vec::new()))
            .1
            .push(index);
    }
    buckets.into_values().collect()
}

impl Plottable for VectorField {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn axis_limits(&self) -> AxisLimits {
        self.source.limits()
    }

    fn render(&self, context: &mut RenderContext<'_>) -> PlotResult<()> {
        if !self.visible {
            return Ok(());
        }

        let rooted: Vec<RootedVector> = self
            .source
            .rooted_vectors()
            .into_iter()
            .filter(|rooted| {
                rooted.origin.is_finite()
                    && rooted.vector.x.is_finite()
                    && rooted.vector.y.is_finite()
            })
            .collect();
        let mut vectors = project_origins(&rooted, context.axes())?;
        if vectors.is_empty() {
            return Ok(());
        }
        if normalize_magnitudes(&mut vectors, MAX_ARROW_LENGTH_PX).is_none() {
            warn!(count = vectors.len(), "vector field magnitudes could not be normalized");
            return Ok(());
        }

        let frame = context.frame_mut();
        match self.colormap.as_deref() {
            Some(colormap) => {
                let buckets = color_buckets(&vectors, colormap);
                trace!(
                    vectors = vectors.len(),
                    buckets = buckets.len(),
                    colormap = colormap.name(),
                    "render colored vector field"
                );
                for (color, indices) in buckets {
                    if let Some(path) =
                        self.arrow_path(indices.iter().map(|&index| &vectors[index]), color)
                    {
                        frame.push_path(path);
                    }
                }
            }
            None => {
                trace!(vectors = vectors.len(), "render vector field");
                if let Some(path) = self.arrow_path(&vectors, self.arrow_style.line_style.color) {
                    frame.push_path(path);
                }
            }
        }
        Ok(())
    }

    fn legend_items(&self) -> Vec<LegendItem> {
        vec![LegendItem {
            label: self.label.clone(),
            line: Some(self.arrow_style.line_style),
            marker: None,
            fill: None,
            has_arrow: true,
        }]
    }
}
