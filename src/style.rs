//! Plot style configuration.
//!
//! One immutable [`PlotStyle`] value is constructed at startup and passed
//! into every generator; nothing here is global or mutated during
//! rendering.

use crate::color::Rgba;
use crate::geometry::Point;
use crate::plots::BinStrategy;

/// Known cluster centers of the 2D mixture target, overlaid as markers on
/// the mixture plots. These are fixed constants of the target distribution,
/// never estimated from the samples.
pub const REFERENCE_MEANS: [Point; 3] = [
    Point::new(1.0, 2.0),
    Point::new(-1.0, -1.0),
    Point::new(-1.0, 2.0),
];

/// Style record applied uniformly to all four generators.
#[derive(Debug, Clone)]
pub struct PlotStyle {
    /// Ordered color cycle; generators index into it modulo its length.
    pub color_cycle: [Rgba; 8],
    /// Output image width in pixels.
    pub figure_width: u32,
    /// Output image height in pixels.
    pub figure_height: u32,
    /// Serif face preference list, most preferred first.
    pub font_families: &'static [&'static str],
    /// Figure and axes background color.
    pub background: Rgba,
    /// Default histogram binning strategy.
    pub bin_strategy: BinStrategy,
    /// Default stroke width for data lines, in pixels.
    pub line_width: f32,
    /// Marker diameter in pixels.
    pub marker_size: f32,
    /// Marker edge (rim) width in pixels.
    pub marker_edge_width: f32,
    /// Base font size in points; glyphs render at the nearest integer scale.
    pub font_size: f32,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            color_cycle: [
                Rgba::rgb(0x00, 0x00, 0x00),
                Rgba::rgb(0x1b, 0x69, 0x89),
                Rgba::rgb(0xe6, 0x9f, 0x00),
                Rgba::rgb(0x00, 0x9e, 0x73),
                Rgba::rgb(0xf0, 0xe4, 0x42),
                Rgba::rgb(0x50, 0xb4, 0xe9),
                Rgba::rgb(0xd5, 0x5e, 0x00),
                Rgba::rgb(0xcc, 0x79, 0xa7),
            ],
            figure_width: 1000,
            figure_height: 700,
            font_families: &[
                "Palatino",
                "Palatino Linotype",
                "Palatino LT STD",
                "Book Antiqua",
                "Georgia",
                "DejaVu Serif",
            ],
            background: Rgba::rgb(0xff, 0xff, 0xf8),
            bin_strategy: BinStrategy::Auto,
            line_width: 3.0,
            marker_size: 8.0,
            marker_edge_width: 2.0,
            font_size: 14.0,
        }
    }
}

impl PlotStyle {
    /// Color cycle entry, wrapping past the end.
    #[must_use]
    pub fn cycle(&self, index: usize) -> Rgba {
        self.color_cycle[index % self.color_cycle.len()]
    }

    /// Integer glyph scale for the embedded 5x7 face at this font size.
    #[must_use]
    pub fn glyph_scale(&self) -> u32 {
        ((self.font_size / 7.0).round() as u32).max(1)
    }

    /// Marker radius in pixels.
    #[must_use]
    pub fn marker_radius(&self) -> i32 {
        (self.marker_size / 2.0).round() as i32
    }

    /// Set the output dimensions.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.figure_width = width;
        self.figure_height = height;
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn background(mut self, color: Rgba) -> Self {
        self.background = color;
        self
    }

    /// Set the default histogram binning strategy.
    #[must_use]
    pub fn bin_strategy(mut self, strategy: BinStrategy) -> Self {
        self.bin_strategy = strategy;
        self
    }
}
