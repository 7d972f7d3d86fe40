//! Axis panels and the tick/frame drawing they delegate to.

mod panel;
mod ticks;

pub use panel::AxisPanel;
pub use ticks::{
    HORIZONTAL_LABEL_PADDING_PX, TickStyles, VERTICAL_LABEL_PADDING_PX, draw_frame, draw_ticks,
    draw_ticks_horizontal, draw_ticks_vertical,
};
