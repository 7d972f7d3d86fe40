use crate::axis::AxisPanel;
use crate::core::{AxisRange, Edge, PixelRect, Tick, Viewport};

/// Resolved geometry of one axis panel for a render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    pub edge: Edge,
    /// Panel thickness in pixels.
    pub size: f64,
    pub range: AxisRange,
    pub ticks: Vec<Tick>,
}

/// Data area plus the panels arranged around it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLayout {
    pub data_rect: PixelRect,
    pub panels: Vec<PanelLayout>,
}

impl PlotLayout {
    #[must_use]
    pub fn panel(&self, edge: Edge) -> Option<&PanelLayout> {
        self.panels.iter().find(|panel| panel.edge == edge)
    }
}

/// Sizes each panel from ticks generated over the padded viewport, then shrinks
/// the data area by those sizes and regenerates ticks for the final span.
pub(super) fn compute_layout(
    viewport: Viewport,
    outer_padding_px: f64,
    panels: &[(&AxisPanel, AxisRange)],
) -> PlotLayout {
    let outer = viewport.rect().contract(
        outer_padding_px,
        outer_padding_px,
        outer_padding_px,
        outer_padding_px,
    );

    let sizes: Vec<f64> = panels
        .iter()
        .map(|(panel, range)| panel.measure(&panel.ticks(*range, outer)))
        .collect();
    let size_of = |edge: Edge| -> f64 {
        panels
            .iter()
            .zip(&sizes)
            .filter(|((panel, _), _)| panel.edge() == edge)
            .map(|(_, size)| *size)
            .sum()
    };

    let data_rect = outer.contract(
        size_of(Edge::Left),
        size_of(Edge::Right),
        size_of(Edge::Top),
        size_of(Edge::Bottom),
    );

    let panels = panels
        .iter()
        .zip(sizes)
        .map(|((panel, range), size)| PanelLayout {
            edge: panel.edge(),
            size,
            range: *range,
            ticks: panel.ticks(*range, data_rect),
        })
        .collect();

    PlotLayout { data_rect, panels }
}
