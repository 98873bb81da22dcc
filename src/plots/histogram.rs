//! Histogram generator (plot 1).
//!
//! Buckets a scalar series with automatic binning and overlays a dashed
//! vertical rule at the known true mean.

use super::{draw_chrome, MARGIN};
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::render::draw_dashed_vline;
use crate::scale::{data_extent, LinearScale, Scale};
use crate::style::PlotStyle;

/// Dash/gap pattern of the reference rule, in pixels.
const DASH: u32 = 8;
const GAP: u32 = 6;

/// Binning strategy for histograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinStrategy {
    /// Larger of Sturges and Freedman-Diaconis, adapting to both small and
    /// heavy-tailed samples.
    #[default]
    Auto,
    /// Sturges' rule: `ceil(log2(n)) + 1`.
    Sturges,
    /// Freedman-Diaconis rule: bin width `2 * IQR / n^(1/3)`.
    FreedmanDiaconis,
    /// Fixed number of bins.
    Fixed(usize),
}

/// Builder for the histogram plot.
#[derive(Debug, Clone)]
pub struct Histogram {
    data: Vec<f32>,
    style: PlotStyle,
    bins: Option<BinStrategy>,
    reference: Option<f32>,
    title: String,
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Histogram {
    /// Create a new histogram builder.
    ///
    /// The reference rule defaults to x = 0, the known true mean of the 1D
    /// Gaussian target.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            style: PlotStyle::default(),
            bins: None,
            reference: Some(0.0),
            title: String::new(),
        }
    }

    /// Set the data.
    #[must_use]
    pub fn data(mut self, data: &[f32]) -> Self {
        self.data = data.to_vec();
        self
    }

    /// Set the style record.
    #[must_use]
    pub fn style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    /// Override the style's binning strategy.
    #[must_use]
    pub fn bins(mut self, strategy: BinStrategy) -> Self {
        self.bins = Some(strategy);
        self
    }

    /// Place the vertical reference rule, or remove it with `None`.
    #[must_use]
    pub fn reference(mut self, at: Option<f32>) -> Self {
        self.reference = at;
        self
    }

    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Build and validate the histogram.
    ///
    /// # Errors
    ///
    /// Returns an error if data is empty.
    pub fn build(self) -> Result<Self> {
        if self.data.is_empty() {
            return Err(Error::EmptyData);
        }
        Ok(self)
    }

    /// Number of bins the active strategy yields for the current data.
    #[must_use]
    pub fn bin_count(&self) -> usize {
        let strategy = self.bins.unwrap_or(self.style.bin_strategy);
        bin_count(&self.data, strategy)
    }

    /// Render to a new framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the figure dimensions are invalid or the scale
    /// domain degenerates.
    pub fn to_framebuffer(&self) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(self.style.figure_width, self.style.figure_height)?;
        self.render(&mut fb)?;
        Ok(fb)
    }

    /// Render into an existing framebuffer.
    pub fn render(&self, fb: &mut Framebuffer) -> Result<()> {
        draw_chrome(fb, &self.style, &self.title);

        let (counts, min, max) = self.bin_data().ok_or(Error::EmptyData)?;
        let max_count = counts.iter().copied().max().unwrap_or(1).max(1);

        let width = fb.width();
        let height = fb.height();
        let x_scale = LinearScale::new((min, max), (MARGIN as f32, (width - MARGIN) as f32))?;
        let panel_bottom = height - MARGIN;
        let panel_height = height - 2 * MARGIN;

        let bin_width = (max - min) / counts.len() as f32;
        let bar_color = self.style.cycle(0);

        for (i, &count) in counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let left = x_scale.scale(min + i as f32 * bin_width);
            let right = x_scale.scale(min + (i + 1) as f32 * bin_width);
            let bar_height =
                ((count as f32 / max_count as f32) * panel_height as f32).round() as u32;

            let x = left.round() as u32;
            // 1px gap keeps adjacent bars distinguishable
            let w = (right.round() as u32).saturating_sub(x).saturating_sub(1).max(1);
            fb.fill_rect(x, panel_bottom - bar_height, w, bar_height, bar_color);
        }

        if let Some(at) = self.reference {
            let px = x_scale.scale(at).round() as i32;
            if px >= MARGIN as i32 && px <= (width - MARGIN) as i32 {
                draw_dashed_vline(
                    fb,
                    px,
                    MARGIN as i32,
                    panel_bottom as i32,
                    DASH,
                    GAP,
                    self.style.cycle(1),
                );
            }
        }

        Ok(())
    }

    /// Bucket the data; returns per-bin counts and the data extent.
    ///
    /// A degenerate extent (all values equal) is widened by half a unit per
    /// side so a single spike still renders.
    fn bin_data(&self) -> Option<(Vec<usize>, f32, f32)> {
        let (mut min, mut max) = data_extent(&self.data)?;
        if (max - min).abs() < f32::EPSILON {
            min -= 0.5;
            max += 0.5;
        }

        let bins = self.bin_count();
        let bin_width = (max - min) / bins as f32;

        let mut counts = vec![0usize; bins];
        for &value in &self.data {
            let bin = ((value - min) / bin_width).floor() as usize;
            counts[bin.min(bins - 1)] += 1;
        }

        Some((counts, min, max))
    }
}

/// Number of bins a strategy yields for a data array.
fn bin_count(data: &[f32], strategy: BinStrategy) -> usize {
    let n = data.len();
    if n == 0 {
        return 1;
    }

    match strategy {
        BinStrategy::Auto => bin_count(data, BinStrategy::Sturges)
            .max(bin_count(data, BinStrategy::FreedmanDiaconis)),
        BinStrategy::Sturges => ((n as f32).log2().ceil() + 1.0) as usize,
        BinStrategy::FreedmanDiaconis => {
            let width = 2.0 * iqr(data) / (n as f32).powf(1.0 / 3.0);
            let range = data_extent(data).map_or(0.0, |(min, max)| max - min);
            if width > 0.0 && range > 0.0 {
                (range / width).ceil() as usize
            } else {
                bin_count(data, BinStrategy::Sturges)
            }
        }
        BinStrategy::Fixed(bins) => bins,
    }
    .max(1)
}

/// Interquartile range; falls back to the full range for tiny samples.
fn iqr(data: &[f32]) -> f32 {
    if data.len() < 4 {
        return data_extent(data).map_or(0.0, |(min, max)| max - min);
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted[3 * sorted.len() / 4] - sorted[sorted.len() / 4]
}
