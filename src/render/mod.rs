//! Rasterization primitives and text rendering.

mod primitives;
mod text;

pub use primitives::{
    draw_arrow, draw_circle, draw_circle_outline, draw_dashed_vline, draw_line, draw_line_aa,
    draw_marker_outline, draw_thick_line,
};
pub use text::{draw_text, draw_text_vertical, text_height, text_width};
