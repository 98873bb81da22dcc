//! The four diagnostic plot generators.
//!
//! Each generator is an independent builder consuming a subset of the
//! parsed sample blocks plus a shared read-only [`crate::style::PlotStyle`].
//! Generators never interact and share no mutable state.

mod histogram;
mod mixture;
mod phase;
mod quiver;

pub use histogram::{BinStrategy, Histogram};
pub use mixture::MixtureScatter;
pub use phase::PhasePortrait;
pub use quiver::{TrajectoryQuiver, ARROW_STRIDE};

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::Bounds;
use crate::render::{draw_circle, draw_marker_outline, draw_text, text_height, text_width};
use crate::scale::LinearScale;
use crate::style::PlotStyle;

/// Panel inset in pixels; leaves room for titles and axis labels.
pub(crate) const MARGIN: u32 = 60;

/// Fractional breathing room added to each side of autoscaled axes.
pub(crate) const AXIS_MARGIN_FRAC: f32 = 0.05;

/// Diameter of reference-mean overlay markers, in pixels.
pub(crate) const MEAN_MARKER_SIZE: f32 = 20.0;

/// Axis frame color.
const FRAME_COLOR: Rgba = Rgba::rgb(50, 50, 50);

/// Clear the figure background, draw the panel frame and the (possibly
/// multi-line) centered title.
pub(crate) fn draw_chrome(fb: &mut Framebuffer, style: &PlotStyle, title: &str) {
    fb.clear(style.background);

    let w = fb.width();
    let h = fb.height();

    // Panel frame
    let x0 = MARGIN.min(w);
    let y0 = MARGIN.min(h);
    let x1 = w.saturating_sub(MARGIN);
    let y1 = h.saturating_sub(MARGIN);
    if x1 > x0 && y1 > y0 {
        fb.fill_rect(x0, y0, x1 - x0, 1, FRAME_COLOR);
        fb.fill_rect(x0, y1 - 1, x1 - x0, 1, FRAME_COLOR);
        fb.fill_rect(x0, y0, 1, y1 - y0, FRAME_COLOR);
        fb.fill_rect(x1 - 1, y0, 1, y1 - y0, FRAME_COLOR);
    }

    // Title block, centered above the panel
    let scale = style.glyph_scale();
    let lines: Vec<&str> = title.lines().collect();
    if lines.is_empty() {
        return;
    }
    let line_h = text_height(scale) as i32 + 4;
    let block_h = line_h * lines.len() as i32;
    let mut y = (MARGIN as i32 - block_h) / 2;
    for line in lines {
        let x = (w as i32 - text_width(line, scale) as i32) / 2;
        draw_text(fb, x, y.max(0), line, scale, Rgba::BLACK);
        y += line_h;
    }
}

/// Build the pair of data-to-pixel scales for the panel area.
pub(crate) fn panel_scales(
    bounds: &Bounds,
    width: u32,
    height: u32,
) -> Result<(LinearScale, LinearScale)> {
    let x = LinearScale::new(
        (bounds.x_min, bounds.x_max),
        (MARGIN as f32, (width - MARGIN) as f32),
    )?;
    // Pixel rows grow downward, so the y range is inverted
    let y = LinearScale::new(
        (bounds.y_min, bounds.y_max),
        ((height - MARGIN) as f32, MARGIN as f32),
    )?;
    Ok((x, y))
}

/// Draw a filled marker with a contrasting rim.
pub(crate) fn draw_filled_marker(
    fb: &mut Framebuffer,
    cx: i32,
    cy: i32,
    radius: i32,
    fill: Rgba,
    edge: Rgba,
    edge_width: i32,
) {
    draw_circle(fb, cx, cy, radius, fill);
    draw_marker_outline(fb, cx, cy, radius, edge_width.max(1), edge);
}

/// Draw one reference-mean overlay marker: a large disc in the second cycle
/// color with a white rim.
pub(crate) fn draw_reference_mean(fb: &mut Framebuffer, cx: i32, cy: i32, style: &PlotStyle) {
    draw_filled_marker(
        fb,
        cx,
        cy,
        (MEAN_MARKER_SIZE / 2.0).round() as i32,
        style.cycle(1),
        Rgba::WHITE,
        style.marker_edge_width.round() as i32,
    );
}
