use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, Edge};

pub const HORIZONTAL_TICK_TARGET_SPACING_PX: f64 = 80.0;
pub const VERTICAL_TICK_TARGET_SPACING_PX: f64 = 40.0;
const MIN_MAJOR_TICKS: usize = 2;
const MAX_MAJOR_TICKS: usize = 20;
const MAX_GENERATED_TICKS: usize = 1_000;

/// Labeled position along an axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub position: f64,
    pub label: String,
    pub is_major: bool,
}

impl Tick {
    #[must_use]
    pub fn major(position: f64, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
            is_major: true,
        }
    }

    #[must_use]
    pub fn minor(position: f64) -> Self {
        Self {
            position,
            label: String::new(),
            is_major: false,
        }
    }

    /// True when the label carries visible characters.
    #[must_use]
    pub fn has_label(&self) -> bool {
        !self.label.trim().is_empty()
    }
}

/// Produces the ordered ticks for one axis.
pub trait TickGenerator: fmt::Debug {
    fn generate(&self, range: AxisRange, edge: Edge, axis_span_px: f64) -> Vec<Tick>;
}

/// Evenly spaced ticks on a 1/2/5 x 10^n step picked from a pixel spacing target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericTickGenerator {
    pub horizontal_spacing_px: f64,
    pub vertical_spacing_px: f64,
    /// Minor ticks inserted between consecutive major ticks.
    pub minor_ticks_per_major: usize,
}

impl Default for NumericTickGenerator {
    fn default() -> Self {
        Self {
            horizontal_spacing_px: HORIZONTAL_TICK_TARGET_SPACING_PX,
            vertical_spacing_px: VERTICAL_TICK_TARGET_SPACING_PX,
            minor_ticks_per_major: 4,
        }
    }
}

impl NumericTickGenerator {
    #[must_use]
    pub fn with_minor_ticks_per_major(mut self, count: usize) -> Self {
        self.minor_ticks_per_major = count;
        self
    }

    /// Major tick step for `range` drawn across `axis_span_px`.
    #[must_use]
    pub fn major_step(&self, range: AxisRange, edge: Edge, axis_span_px: f64) -> Option<f64> {
        let span = range.span();
        if span <= 0.0 || !span.is_finite() {
            return None;
        }
        let spacing = if edge.is_horizontal() {
            self.horizontal_spacing_px
        } else {
            self.vertical_spacing_px
        };
        let count = tick_target_count(axis_span_px, spacing, MIN_MAJOR_TICKS, MAX_MAJOR_TICKS);
        Some(nice_step(span / count as f64))
    }
}

impl TickGenerator for NumericTickGenerator {
    fn generate(&self, range: AxisRange, edge: Edge, axis_span_px: f64) -> Vec<Tick> {
        let Some(step) = self.major_step(range, edge, axis_span_px) else {
            return Vec::new();
        };
        let tolerance = step * 1e-9;

        let mut ticks = Vec::new();
        let first_index = (range.min() / step).ceil();
        let mut index = first_index;
        let mut previous = f64::NEG_INFINITY;
        while ticks.len() < MAX_GENERATED_TICKS {
            let position = index * step;
            // Past 2^53 the index or the product stops advancing.
            if position > range.max() + tolerance || position <= previous {
                break;
            }
            ticks.push(Tick::major(position, format_tick_label(position, step)));
            previous = position;
            index += 1.0;
        }

        if self.minor_ticks_per_major > 0 {
            let minor_step = step / (self.minor_ticks_per_major + 1) as f64;
            let mut base = (first_index - 1.0) * step;
            while base <= range.max() && ticks.len() < MAX_GENERATED_TICKS {
                for slot in 1..=self.minor_ticks_per_major {
                    let position = base + slot as f64 * minor_step;
                    if range.contains(position) {
                        ticks.push(Tick::minor(position));
                    }
                }
                let next = base + step;
                if next <= base {
                    break;
                }
                base = next;
            }
        }

        // Stable sort keeps a major ahead of a minor at the same position.
        ticks.sort_by(|left, right| left.position.total_cmp(&right.position));
        ticks.dedup_by(|later, earlier| later.position == earlier.position);
        ticks
    }
}

/// Caller-supplied ticks, filtered to the visible range.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FixedTickGenerator {
    ticks: Vec<Tick>,
}

impl FixedTickGenerator {
    #[must_use]
    pub fn new(ticks: Vec<Tick>) -> Self {
        Self { ticks }
    }

    /// Generator that never emits ticks.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn add_major(&mut self, position: f64, label: impl Into<String>) {
        self.ticks.push(Tick::major(position, label));
    }

    pub fn add_minor(&mut self, position: f64) {
        self.ticks.push(Tick::minor(position));
    }
}

impl TickGenerator for FixedTickGenerator {
    fn generate(&self, range: AxisRange, _edge: Edge, _axis_span_px: f64) -> Vec<Tick> {
        let mut ticks: Vec<Tick> = self
            .ticks
            .iter()
            .filter(|tick| range.contains(tick.position))
            .cloned()
            .collect();
        ticks.sort_by(|left, right| left.position.total_cmp(&right.position));
        ticks
    }
}

pub(crate) fn tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize;
    raw.clamp(min_ticks, max_ticks)
}

/// Rounds `raw_step` up to the next 1, 2 or 5 times a power of ten.
pub(crate) fn nice_step(raw_step: f64) -> f64 {
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    let factor = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// Formats `value` with just enough decimals to distinguish ticks `step` apart.
#[must_use]
pub fn format_tick_label(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 {
        (-step.log10().floor()).clamp(0.0, 12.0) as usize
    } else {
        0
    };
    let text = format!("{value:.decimals$}");
    // `-0`, `-0.0`, ... read as noise on an axis.
    if text.trim_start_matches('-').chars().all(|ch| ch == '0' || ch == '.') {
        text.trim_start_matches('-').to_owned()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_step_snaps_to_one_two_five() {
        assert_eq!(nice_step(0.7), 1.0);
        assert_eq!(nice_step(1.5), 2.0);
        assert_eq!(nice_step(3.2), 5.0);
        assert_eq!(nice_step(7.0), 10.0);
        assert_eq!(nice_step(130.0), 200.0);
    }

    #[test]
    fn ticks_stay_distinct_where_the_step_underflows_the_magnitude() {
        let range = AxisRange::new(1e20, 1e20 + 32_768.0).expect("range");
        let ticks = NumericTickGenerator::default().generate(range, Edge::Bottom, 800.0);

        assert!(!ticks.is_empty());
        assert!(ticks.len() < 10, "{} ticks", ticks.len());
        assert!(ticks[0].is_major);
        assert!(ticks.windows(2).all(|pair| pair[0].position < pair[1].position));
        assert!(ticks.iter().all(|tick| range.contains(tick.position)));
    }

    #[test]
    fn numeric_ticks_with_minors_are_strictly_increasing() {
        let range = AxisRange::new(0.0, 10.0).expect("range");
        let ticks = NumericTickGenerator::default().generate(range, Edge::Left, 400.0);
        assert!(ticks.windows(2).all(|pair| pair[0].position < pair[1].position));
        assert!(ticks.iter().any(|tick| !tick.is_major));
    }

    #[test]
    fn negative_zero_labels_are_normalized() {
        assert_eq!(format_tick_label(-0.0, 0.5), "0.0");
        assert_eq!(format_tick_label(-1e-17, 1.0), "0");
        assert_eq!(format_tick_label(-2.5, 0.5), "-2.5");
    }
}
