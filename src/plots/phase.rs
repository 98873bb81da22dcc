//! Phase-portrait generator (plot 2).
//!
//! Draws each (position, momentum) chain as a continuous line in phase
//! space, then anchors the 1D samples as open markers along the plot's
//! minimum-momentum row.

use super::{draw_chrome, panel_scales, AXIS_MARGIN_FRAC, MARGIN};
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::Bounds;
use crate::render::{
    draw_marker_outline, draw_text, draw_text_vertical, draw_thick_line, text_height, text_width,
};
use crate::samples::ScalarTrajectory;
use crate::scale::Scale;
use crate::style::PlotStyle;

/// Builder for the phase-space trajectory plot.
#[derive(Debug, Clone)]
pub struct PhasePortrait {
    samples: Vec<f32>,
    positions: Vec<ScalarTrajectory>,
    momenta: Vec<ScalarTrajectory>,
    style: PlotStyle,
    title: String,
    x_label: String,
    y_label: String,
}

impl Default for PhasePortrait {
    fn default() -> Self {
        Self::new()
    }
}

impl PhasePortrait {
    /// Create a new phase-portrait builder with Position/Momentum axis
    /// labels.
    #[must_use]
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            positions: Vec::new(),
            momenta: Vec::new(),
            style: PlotStyle::default(),
            title: String::new(),
            x_label: "Position".to_string(),
            y_label: "Momentum".to_string(),
        }
    }

    /// Set the 1D samples anchored along the bottom of the plot.
    #[must_use]
    pub fn samples(mut self, samples: &[f32]) -> Self {
        self.samples = samples.to_vec();
        self
    }

    /// Set the paired position/momentum trajectories, zipped by index.
    #[must_use]
    pub fn trajectories(
        mut self,
        positions: &[ScalarTrajectory],
        momenta: &[ScalarTrajectory],
    ) -> Self {
        self.positions = positions.to_vec();
        self.momenta = momenta.to_vec();
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

        // One continuous line per chain, cycling colors by chain index
        for (i, (q, p)) in self.positions.iter().zip(self.momenta.iter()).enumerate() {
            let color = self.style.cycle(i);
            let steps = q.len().min(p.len());
            for t in 1..steps {
                draw_thick_line(
                    fb,
                    x_scale.scale(q[t - 1]),
                    y_scale.scale(p[t - 1]),
                    x_scale.scale(q[t]),
                    y_scale.scale(p[t]),
                    self.style.line_width,
                    color,
                );
            }
        }

        // Sample anchors sit on the minimum-momentum row, marking where the
        // 1D draws landed relative to the trajectories
        let anchor_y = y_scale.scale(bounds.y_min).round() as i32;
        let radius = self.style.marker_radius();
        let edge = self.style.marker_edge_width.round() as i32;
        for &s in &self.samples {
            let cx = x_scale.scale(s).round() as i32;
            draw_marker_outline(fb, cx, anchor_y, radius, edge, Rgba::BLACK);
        }

        self.draw_axis_labels(fb);
        Ok(())
    }

    fn draw_axis_labels(&self, fb: &mut Framebuffer) {
        let scale = self.style.glyph_scale();
        let w = fb.width() as i32;
        let h = fb.height() as i32;

        // X label centered under the panel
        let x = (w - text_width(&self.x_label, scale) as i32) / 2;
        let y = h - (MARGIN as i32 + text_height(scale) as i32) / 2;
        draw_text(fb, x, y, &self.x_label, scale, Rgba::BLACK);

        // Y label rotated, centered along the left edge
        let lx = (MARGIN as i32 - text_height(scale) as i32) / 2;
        let ly = (h + text_width(&self.y_label, scale) as i32) / 2;
        draw_text_vertical(fb, lx, ly, &self.y_label, scale, Rgba::BLACK);
    }

    /// X extent covers trajectory positions and the anchored samples;
    /// y extent covers momenta only.
    fn data_bounds(&self) -> Option<Bounds> {
        let mut bounds = Bounds::EMPTY;
        for q in &self.positions {
            for &x in q {
                bounds.include_x(x);
            }
        }
        for &s in &self.samples {
            bounds.include_x(s);
        }
        for p in &self.momenta {
            for &y in p {
                bounds.include_y(y);
            }
        }

        bounds
            .is_valid()
            .then(|| bounds.with_margin(AXIS_MARGIN_FRAC))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_chains() -> (Vec<ScalarTrajectory>, Vec<ScalarTrajectory>) {
        (
            vec![vec![0.0, 0.5, 1.0], vec![-1.0, -0.5, 0.0]],
            vec![vec![1.0, 0.5, 0.0], vec![0.0, 0.5, 1.0]],
        )
    }

    #[test]
    fn test_build_requires_trajectories() {
        assert!(PhasePortrait::new().build().is_err());
    }

    #[test]
    fn test_build_rejects_mismatched_pairs() {
        let (q, _) = two_chains();
        let err = PhasePortrait::new()
            .trajectories(&q, &[vec![0.0]])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::DataLengthMismatch { x_len: 2, y_len: 1 }
        ));
    }

    #[test]
    fn test_render_smoke() {
        let (q, p) = two_chains();
        let plot = PhasePortrait::new()
            .samples(&[0.1, -0.3])
            .trajectories(&q, &p)
            .style(PlotStyle::default().dimensions(300, 220))
            .title("1D Gaussian trajectories in phase space!")
            .build()
            .unwrap();
        assert!(plot.to_framebuffer().is_ok());
    }

    #[test]
    fn test_trajectories_colored_by_cycle() {
        let (q, p) = two_chains();
        let style = PlotStyle::default().dimensions(400, 300);
        let plot = PhasePortrait::new()
            .trajectories(&q, &p)
            .style(style.clone())
            .build()
            .unwrap();
        let fb = plot.to_framebuffer().unwrap();

        // Second chain's stroke color (cycle 1) appears somewhere; strokes
        // are anti-aliased, so compare channels with tolerance
        let c1 = style.cycle(1);
        let near = |a: u8, b: u8| a.abs_diff(b) <= 60;
        let mut found = false;
        for y in 0..300 {
            for x in 0..400 {
                if let Some(p) = fb.get_pixel(x, y) {
                    if near(p.r, c1.r) && near(p.g, c1.g) && near(p.b, c1.b) {
                        found = true;
                    }
                }
            }
        }
        assert!(found);
    }

    #[test]
    fn test_anchor_markers_near_bottom_row() {
        let (q, p) = two_chains();
        let style = PlotStyle::default().dimensions(400, 300);
        let plot = PhasePortrait::new()
            .samples(&[0.0])
            .trajectories(&q, &p)
            .style(style)
            .build()
            .unwrap();
        let fb = plot.to_framebuffer().unwrap();

        // Open black markers sit at the panel's bottom edge; scan the
        // bottom quarter of the panel for pure black pixels
        let mut found = false;
        for y in 200..240 {
            for x in MARGIN..340 {
                if fb.get_pixel(x, y) == Some(Rgba::BLACK) {
                    found = true;
                }
            }
        }
        assert!(found);
    }

    #[test]
    fn test_render_deterministic() {
        let (q, p) = two_chains();
        let plot = PhasePortrait::new()
            .samples(&[0.2])
            .trajectories(&q, &p)
            .style(PlotStyle::default().dimensions(300, 220))
            .build()
            .unwrap();

        let a = plot.to_framebuffer().unwrap();
        let b = plot.to_framebuffer().unwrap();
        assert_eq!(a.to_compact_pixels(), b.to_compact_pixels());
    }
}
