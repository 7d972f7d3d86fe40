use tracing::{debug, trace};

use crate::core::{AxisLimits, BandPoint, Coordinates, Pixel, Polygon, band_polygon, series_band_polygon};
use crate::error::PlotResult;
use crate::render::{Color, PathPrimitive};
use crate::style::{FillStyle, HatchPattern, LinePattern, LineStyle, MarkerShape, MarkerStyle};

use super::{LegendItem, Plottable, RenderContext};

/// Filled band between a lower and an upper boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct FillY {
    pub label: Option<String>,
    pub visible: bool,
    polygon: Polygon,
    fill_style: FillStyle,
    line_style: LineStyle,
    marker_style: MarkerStyle,
}

impl Default for FillY {
    fn default() -> Self {
        Self::new()
    }
}

impl FillY {
    /// Empty band; call [`FillY::set_data_source`] to give it coordinates.
    #[must_use]
    pub fn new() -> Self {
        Self {
            label: None,
            visible: true,
            polygon: Polygon::empty(),
            fill_style: FillStyle::default(),
            line_style: LineStyle::new(0.0, Color::BLACK),
            marker_style: MarkerStyle::default(),
        }
    }

    /// Band enclosed between two point series (`second` is walked backwards).
    #[must_use]
    pub fn from_scatter_series(first: &[Coordinates], second: &[Coordinates]) -> Self {
        Self {
            polygon: series_band_polygon(first, second),
            ..Self::new()
        }
    }

    /// Replaces the outline with one built from `(x, top, bottom)` samples.
    pub fn set_data_source<I, P>(&mut self, items: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<BandPoint>,
    {
        let points: Vec<BandPoint> = items.into_iter().map(Into::into).collect();
        self.polygon = band_polygon(&points);
        debug!(samples = points.len(), "fill band data source replaced");
    }

    /// Replaces the outline using `solver` to extract `(x, top, bottom)` from each item.
    pub fn set_data_source_with<T, F>(&mut self, items: &[T], solver: F)
    where
        F: Fn(&T) -> (f64, f64, f64),
    {
        self.set_data_source(items.iter().map(solver));
    }

    #[must_use]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    #[must_use]
    pub fn fill_style(&self) -> &FillStyle {
        &self.fill_style
    }

    pub fn fill_style_mut(&mut self) -> &mut FillStyle {
        &mut self.fill_style
    }

    #[must_use]
    pub fn fill_color(&self) -> Color {
        self.fill_style.color
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_style.color = color;
    }

    #[must_use]
    pub fn fill_hatch(&self) -> Option<HatchPattern> {
        self.fill_style.hatch
    }

    pub fn set_fill_hatch(&mut self, hatch: Option<HatchPattern>) {
        self.fill_style.hatch = hatch;
    }

    #[must_use]
    pub fn fill_hatch_color(&self) -> Color {
        self.fill_style.hatch_color
    }

    pub fn set_fill_hatch_color(&mut self, color: Color) {
        self.fill_style.hatch_color = color;
    }

    #[must_use]
    pub fn line_style(&self) -> &LineStyle {
        &self.line_style
    }

    pub fn line_style_mut(&mut self) -> &mut LineStyle {
        &mut self.line_style
    }

    #[must_use]
    pub fn line_width(&self) -> f64 {
        self.line_style.width
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.line_style.width = width;
    }

    #[must_use]
    pub fn line_pattern(&self) -> LinePattern {
        self.line_style.pattern
    }

    pub fn set_line_pattern(&mut self, pattern: LinePattern) {
        self.line_style.pattern = pattern;
    }

    #[must_use]
    pub fn line_color(&self) -> Color {
        self.line_style.color
    }

    pub fn set_line_color(&mut self, color: Color) {
        self.line_style.color = color;
    }

    #[must_use]
    pub fn marker_style(&self) -> &MarkerStyle {
        &self.marker_style
    }

    pub fn marker_style_mut(&mut self) -> &mut MarkerStyle {
        &mut self.marker_style
    }

    #[must_use]
    pub fn marker_shape(&self) -> MarkerShape {
        self.marker_style.shape
    }

    pub fn set_marker_shape(&mut self, shape: MarkerShape) {
        self.marker_style.shape = shape;
    }

    #[must_use]
    pub fn marker_size(&self) -> f64 {
        self.marker_style.size
    }

    pub fn set_marker_size(&mut self, size: f64) {
        self.marker_style.size = size;
    }

    #[must_use]
    pub fn marker_fill_color(&self) -> Color {
        self.marker_style.fill_color
    }

    pub fn set_marker_fill_color(&mut self, color: Color) {
        self.marker_style.fill_color = color;
    }

    #[must_use]
    pub fn marker_line_color(&self) -> Color {
        self.marker_style.outline.color
    }

    pub fn set_marker_line_color(&mut self, color: Color) {
        self.marker_style.outline.color = color;
    }

    #[must_use]
    pub fn marker_line_width(&self) -> f64 {
        self.marker_style.outline.width
    }

    pub fn set_marker_line_width(&mut self, width: f64) {
        self.marker_style.outline.width = width;
    }
}

impl Plottable for FillY {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn axis_limits(&self) -> AxisLimits {
        self.polygon.axis_limits()
    }

    fn render(&self, context: &mut RenderContext<'_>) -> PlotResult<()> {
        if !self.visible || self.polygon.is_empty() {
            return Ok(());
        }

        let axes = *context.axes();
        let pixels = self
            .polygon
            .coordinates()
            .iter()
            .filter(|coordinates| coordinates.is_finite())
            .map(|coordinates| axes.pixel(*coordinates))
            .collect::<PlotResult<Vec<Pixel>>>()?;
        if pixels.is_empty() {
            return Ok(());
        }

        let frame = context.frame_mut();
        let mut outline = PathPrimitive::polygon(&pixels);
        if let Some(fill) = self.fill_style.paint() {
            outline = outline.with_fill(fill);
        }
        if let Some(stroke) = self.line_style.stroke() {
            outline = outline.with_stroke(stroke);
        }
        if outline.fill.is_some() || outline.stroke.is_some() {
            frame.push_path(outline);
        }
        if let Some(markers) = self.marker_style.path(&pixels) {
            frame.push_path(markers);
        }

        trace!(vertices = pixels.len(), "render fill band");
        Ok(())
    }

    fn legend_items(&self) -> Vec<LegendItem> {
        vec![LegendItem {
            label: self.label.clone(),
            line: Some(LineStyle::new(10.0, self.fill_style.color)),
            marker: Some(self.marker_style),
            fill: Some(self.fill_style),
            has_arrow: false,
        }]
    }
}
