use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, Edge, Viewport};
use crate::error::{PlotError, PlotResult};

pub const PLOT_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Public plot bootstrap configuration.
///
/// Serializable so host applications can persist and reload plot setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    pub viewport: Viewport,
    /// Fixed horizontal range; auto-scaled from the plottables when absent.
    #[serde(default)]
    pub x_range: Option<AxisRange>,
    /// Fixed vertical range; auto-scaled from the plottables when absent.
    #[serde(default)]
    pub y_range: Option<AxisRange>,
    /// Fraction of the data span added on each side when auto-scaling.
    #[serde(default = "default_autoscale_margin")]
    pub autoscale_margin: f64,
    /// Empty space between the outermost axis panels and the viewport edge.
    #[serde(default = "default_outer_padding_px")]
    pub outer_padding_px: f64,
    #[serde(default = "default_tick_label_font_size")]
    pub tick_label_font_size: f64,
    #[serde(default)]
    pub hidden_edges: Vec<Edge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct PlotConfigJsonContractV1 {
    schema_version: u32,
    config: PlotConfig,
}

fn default_autoscale_margin() -> f64 {
    0.1
}

fn default_outer_padding_px() -> f64 {
    10.0
}

fn default_tick_label_font_size() -> f64 {
    12.0
}

impl PlotConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            x_range: None,
            y_range: None,
            autoscale_margin: default_autoscale_margin(),
            outer_padding_px: default_outer_padding_px(),
            tick_label_font_size: default_tick_label_font_size(),
            hidden_edges: Vec::new(),
        }
    }

    /// Pins the horizontal range.
    #[must_use]
    pub fn with_x_range(mut self, range: AxisRange) -> Self {
        self.x_range = Some(range);
        self
    }

    /// Pins the vertical range.
    #[must_use]
    pub fn with_y_range(mut self, range: AxisRange) -> Self {
        self.y_range = Some(range);
        self
    }

    #[must_use]
    pub fn with_autoscale_margin(mut self, margin: f64) -> Self {
        self.autoscale_margin = margin;
        self
    }

    #[must_use]
    pub fn with_outer_padding_px(mut self, padding: f64) -> Self {
        self.outer_padding_px = padding;
        self
    }

    #[must_use]
    pub fn with_tick_label_font_size(mut self, font_size: f64) -> Self {
        self.tick_label_font_size = font_size;
        self
    }

    /// Hides the axis panel on `edge`.
    #[must_use]
    pub fn with_hidden_edge(mut self, edge: Edge) -> Self {
        if !self.hidden_edges.contains(&edge) {
            self.hidden_edges.push(edge);
        }
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.autoscale_margin.is_finite() || self.autoscale_margin < 0.0 {
            return Err(PlotError::InvalidConfig(
                "autoscale margin must be finite and >= 0".to_owned(),
            ));
        }
        if !self.outer_padding_px.is_finite() || self.outer_padding_px < 0.0 {
            return Err(PlotError::InvalidConfig(
                "outer padding must be finite and >= 0".to_owned(),
            ));
        }
        if !self.tick_label_font_size.is_finite() || self.tick_label_font_size <= 0.0 {
            return Err(PlotError::InvalidConfig(
                "tick label font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        let payload = PlotConfigJsonContractV1 {
            schema_version: PLOT_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload)
            .map_err(|e| PlotError::InvalidConfig(format!("failed to serialize plot config: {e}")))
    }

    /// Accepts both the bare config and the versioned contract payload.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidConfig(format!("failed to parse plot config json: {e}")))?;

        let config = if value.get("schema_version").is_some() {
            let payload: PlotConfigJsonContractV1 = serde_json::from_value(value).map_err(|e| {
                PlotError::InvalidConfig(format!("failed to parse plot config contract: {e}"))
            })?;
            if payload.schema_version != PLOT_CONFIG_JSON_SCHEMA_V1 {
                return Err(PlotError::InvalidConfig(format!(
                    "unsupported plot config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value(value).map_err(|e| {
                PlotError::InvalidConfig(format!("failed to parse plot config: {e}"))
            })?
        };
        config.validate()?;
        Ok(config)
    }
}
