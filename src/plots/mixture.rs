//! Mixture scatter generator (plot 7).
//!
//! Scatters the 2D mixture samples with partial transparency and overlays
//! the known cluster centers as large accent markers, showing how the
//! sampler concentrated around the mixture components.

use super::{draw_chrome, draw_reference_mean, panel_scales, AXIS_MARGIN_FRAC};
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::{Bounds, Point};
use crate::render::draw_marker_outline;
use crate::samples::PointCloud;
use crate::scale::Scale;
use crate::style::{PlotStyle, REFERENCE_MEANS};

/// Opacity of the sample cloud.
const CLOUD_ALPHA: f32 = 0.5;

/// Builder for the mixture scatter plot.
#[derive(Debug, Clone)]
pub struct MixtureScatter {
    cloud: PointCloud,
    means: Vec<Point>,
    style: PlotStyle,
    title: String,
}

impl Default for MixtureScatter {
    fn default() -> Self {
        Self::new()
    }
}

impl MixtureScatter {
    /// Create a new scatter builder with the fixed reference means.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cloud: Vec::new(),
            means: REFERENCE_MEANS.to_vec(),
            style: PlotStyle::default(),
            title: String::new(),
        }
    }

    /// Set the sample cloud.
    #[must_use]
    pub fn cloud(mut self, cloud: &[Point]) -> Self {
        self.cloud = cloud.to_vec();
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
    /// Returns an error if the cloud is empty.
    pub fn build(self) -> Result<Self> {
        if self.cloud.is_empty() {
            return Err(Error::EmptyData);
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

        let mut bounds = Bounds::EMPTY;
        bounds.include_all(&self.cloud);
        bounds.include_all(&self.means);
        let bounds = bounds.with_margin(AXIS_MARGIN_FRAC);

        let (x_scale, y_scale) = panel_scales(&bounds, fb.width(), fb.height())?;

        // Translucent cloud first, means on top
        let cloud_color = self.style.cycle(0).with_opacity(CLOUD_ALPHA);
        let radius = self.style.marker_radius();
        let edge = self.style.marker_edge_width.round() as i32;
        for p in &self.cloud {
            draw_marker_outline(
                fb,
                x_scale.scale(p.x).round() as i32,
                y_scale.scale(p.y).round() as i32,
                radius,
                edge,
                cloud_color,
            );
        }

        for m in &self.means {
            draw_reference_mean(
                fb,
                x_scale.scale(m.x).round() as i32,
                y_scale.scale(m.y).round() as i32,
                &self.style,
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cloud() -> Vec<Point> {
        vec![
            Point::new(1.0, 2.0),
            Point::new(-1.0, -1.0),
            Point::new(-1.0, 2.0),
        ]
    }

    #[test]
    fn test_build_requires_cloud() {
        assert!(MixtureScatter::new().build().is_err());
    }

    #[test]
    fn test_default_means_are_reference() {
        let plot = MixtureScatter::new().cloud(&cloud()).build().unwrap();
        assert_eq!(plot.means, REFERENCE_MEANS.to_vec());
    }

    #[test]
    fn test_means_substitutable() {
        let alt = [Point::new(0.0, 0.0)];
        let plot = MixtureScatter::new()
            .cloud(&cloud())
            .means(&alt)
            .build()
            .unwrap();
        assert_eq!(plot.means.len(), 1);
    }

    #[test]
    fn test_mean_markers_drawn() {
        let style = PlotStyle::default().dimensions(400, 300);
        let plot = MixtureScatter::new()
            .cloud(&cloud())
            .style(style.clone())
            .title("Multivariate Mixtures!")
            .build()
            .unwrap();
        let fb = plot.to_framebuffer().unwrap();

        // Mean discs are filled with the second cycle color via fill_rect,
        // so the match is exact
        let c1 = style.cycle(1);
        let mut count = 0;
        for y in 0..300 {
            for x in 0..400 {
                if fb.get_pixel(x, y) == Some(c1) {
                    count += 1;
                }
            }
        }
        // Three discs of radius 10 cover well over 300 pixels
        assert!(count > 300, "expected mean discs, found {count} pixels");
    }

    #[test]
    fn test_cloud_is_translucent() {
        let style = PlotStyle::default().dimensions(400, 300);
        let plot = MixtureScatter::new()
            .cloud(&cloud())
            .means(&[])
            .style(style.clone())
            .build()
            .unwrap();
        let fb = plot.to_framebuffer().unwrap();

        // A 50% black rim over the off-white background lands mid-gray;
        // no pure-black pixel should exist
        let mut grays = 0;
        for y in 0..300 {
            for x in 0..400 {
                let p = fb.get_pixel(x, y).unwrap();
                assert_ne!(p, crate::color::Rgba::BLACK);
                if p.r > 100 && p.r < 160 {
                    grays += 1;
                }
            }
        }
        assert!(grays > 0);
    }

    #[test]
    fn test_render_deterministic() {
        let plot = MixtureScatter::new()
            .cloud(&cloud())
            .style(PlotStyle::default().dimensions(300, 220))
            .build()
            .unwrap();

        let a = plot.to_framebuffer().unwrap();
        let b = plot.to_framebuffer().unwrap();
        assert_eq!(a.to_compact_pixels(), b.to_compact_pixels());
    }
}
