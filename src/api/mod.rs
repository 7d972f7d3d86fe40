mod layout;
mod plot;
mod plot_config;

pub use layout::{PanelLayout, PlotLayout};
pub use plot::{DEFAULT_AUTOSCALE_RANGE, Plot};
pub use plot_config::{PLOT_CONFIG_JSON_SCHEMA_V1, PlotConfig};
