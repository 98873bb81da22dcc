//! Trajectory quiver generator (plot 8).
//!
//! Draws each 2D chain's position path as a thin line, overlays momentum
//! arrows at a fixed timestep stride, and accents the known cluster
//! centers plus the 2D samples on top.

use super::{
    draw_chrome, draw_filled_marker, draw_reference_mean, panel_scales, AXIS_MARGIN_FRAC, MARGIN,
};
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::{Bounds, Point};
use crate::render::{draw_arrow, draw_line_aa};
use crate::samples::{PointCloud, PointTrajectory};
use crate::scale::Scale;
use crate::style::{PlotStyle, REFERENCE_MEANS};

/// Momentum arrows are drawn every this many timesteps, starting at the
/// first. A fixed visualization constant, never derived from trajectory
/// length.
pub const ARROW_STRIDE: usize = 20;

/// Data units of momentum spanning the full panel width.
const ARROW_SCALE: f32 = 100.0;
/// Arrow head length in pixels.
const ARROW_HEAD_LENGTH: f32 = 7.0;
/// Arrow head width in pixels.
const ARROW_HEAD_WIDTH: f32 = 6.0;
/// Arrow opacity.
const ARROW_ALPHA: f32 = 0.8;

/// Builder for the trajectory quiver plot.
#[derive(Debug, Clone)]
pub struct TrajectoryQuiver {
    cloud: PointCloud,
    positions: Vec<PointTrajectory>,
    momenta: Vec<PointTrajectory>,
    means: Vec<Point>,
    style: PlotStyle,
    title: String,
}

impl Default for TrajectoryQuiver {
    fn default() -> Self {
        Self::new()
    }
}

impl TrajectoryQuiver {
    /// Create a new quiver builder with the fixed reference means.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cloud: Vec::new(),
            positions: Vec::new(),
            momenta: Vec::new(),
            means: REFERENCE_MEANS.to_vec(),
            style: PlotStyle::default(),
            title: String::new(),
        }
    }

    /// Set the 2D sample cloud accent.
    #[must_use]
    pub fn cloud(mut self, cloud: &[Point]) -> Self {
        self.cloud = cloud.to_vec();
        self
    }

    /// Set the paired position/momentum paths, zipped by index.
    #[must_use]
    pub fn trajectories(
        mut self,
        positions: &[PointTrajectory],
        momenta: &[PointTrajectory],
    ) -> Self {
        self.positions = positions.to_vec();
        self.momenta = momenta.to_vec();
        self
    }

    /// Substitute the overlay means (test fixtures, alternative targets).
    #[must_use]
    pub fn means(mut self, means: &[Point]) -> Self {
        self.means = means.to_vec();
        self
    }

    /// Set the style record.
    #[must_use]
    pub fn style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Build and validate the plot.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no trajectories or the paired sets
    /// have different counts.
    pub fn build(self) -> Result<Self> {
        if self.positions.is_empty() {
            return Err(Error::EmptyData);
        }
        if self.positions.len() != self.momenta.len() {
            return Err(Error::DataLengthMismatch {
                x_len: self.positions.len(),
                y_len: self.momenta.len(),
            });
        }
        Ok(self)
    }

    /// Render to a new framebuffer.
    pub fn to_framebuffer(&self) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(self.style.figure_width, self.style.figure_height)?;
        self.render(&mut fb)?;
        Ok(fb)
    }

    /// Render into an existing framebuffer.
    pub fn render(&self, fb: &mut Framebuffer) -> Result<()> {
        draw_chrome(fb, &self.style, &self.title);

        let bounds = self.data_bounds().ok_or(Error::EmptyData)?;
        let (x_scale, y_scale) = panel_scales(&bounds, fb.width(), fb.height())?;

        for m in &self.means {
            draw_reference_mean(
                fb,
                x_scale.scale(m.x).round() as i32,
                y_scale.scale(m.y).round() as i32,
                &self.style,
            );
        }

        // Momentum magnitudes map to pixels relative to the panel width
        let panel_width = (fb.width() - 2 * MARGIN) as f32;
        let arrow_color = Rgba::BLACK.with_opacity(ARROW_ALPHA);

        for (q, p) in self.positions.iter().zip(self.momenta.iter()) {
            // Thin path first, arrows over it
            for t in 1..q.len() {
                draw_line_aa(
                    fb,
                    x_scale.scale(q[t - 1].x),
                    y_scale.scale(q[t - 1].y),
                    x_scale.scale(q[t].x),
                    y_scale.scale(q[t].y),
                    Rgba::BLACK,
                );
            }

            for t in arrow_indices(q.len().min(p.len())) {
                let base_x = x_scale.scale(q[t].x);
                let base_y = y_scale.scale(q[t].y);
                // Pixel y grows downward, so the y component flips
                let tip_x = base_x + p[t].x / ARROW_SCALE * panel_width;
                let tip_y = base_y - p[t].y / ARROW_SCALE * panel_width;
                draw_arrow(
                    fb,
                    base_x,
                    base_y,
                    tip_x,
                    tip_y,
                    ARROW_HEAD_LENGTH,
                    ARROW_HEAD_WIDTH,
                    arrow_color,
                );
            }
        }

        // Sample accents on top of everything
        let radius = self.style.marker_radius();
        let edge = self.style.marker_edge_width.round() as i32;
        for s in &self.cloud {
            draw_filled_marker(
                fb,
                x_scale.scale(s.x).round() as i32,
                y_scale.scale(s.y).round() as i32,
                radius,
                self.style.cycle(2),
                Rgba::WHITE,
                edge,
            );
        }

        Ok(())
    }

    /// Extent covers every position timestep, the sample cloud and the
    /// overlay means.
    fn data_bounds(&self) -> Option<Bounds> {
        let mut bounds = Bounds::EMPTY;
        for q in &self.positions {
            bounds.include_all(q);
        }
        bounds.include_all(&self.cloud);
        bounds.include_all(&self.means);

        bounds
            .is_valid()
            .then(|| bounds.with_margin(AXIS_MARGIN_FRAC))
    }
}

/// Timesteps that receive a momentum arrow.
fn arrow_indices(len: usize) -> impl Iterator<Item = usize> {
    (0..len).step_by(ARROW_STRIDE)
}
