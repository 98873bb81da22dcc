//! Scale functions for data-to-pixel mappings.
//!
//! Scales transform data values to framebuffer coordinates. Extent
//! computation over sample arrays uses trueno's SIMD-accelerated
//! reductions.

use crate::error::{Error, Result};
use trueno::Vector;

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the domain extent.
    fn domain(&self) -> (D, D);

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

/// Compute `(min, max)` of a sample array.
///
/// Returns `None` for empty input. Uses trueno's vector reductions so large
/// trace blocks get SIMD-dispatched min/max.
#[must_use]
pub fn data_extent(data: &[f32]) -> Option<(f32, f32)> {
    if data.is_empty() {
        return None;
    }

    let vec = Vector::from_vec(data.to_vec());
    let min = vec.min().unwrap_or(f32::INFINITY);
    let max = vec.max().unwrap_or(f32::NEG_INFINITY);

    (min <= max).then_some((min, max))
}

/// Linear scale for continuous-to-continuous mapping.
///
/// Pixel ranges are typically inverted on the y axis (`range.0 > range.1`)
/// since framebuffer rows grow downward.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain_min: f32,
    domain_max: f32,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// # Errors
    ///
    /// Returns an error if `domain` is degenerate.
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Result<Self> {
        if (domain.0 - domain.1).abs() < f32::EPSILON {
            return Err(Error::ScaleDomain(
                "Domain min and max cannot be equal".to_string(),
            ));
        }

        Ok(Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        })
    }

    /// Create a scale from the extent of a data array.
    #[must_use]
    pub fn from_data(data: &[f32], range: (f32, f32)) -> Option<Self> {
        let (min, max) = data_extent(data)?;
        Self::new((min, max), range).ok()
    }

    /// Invert the scale (range to domain).
    #[must_use]
    pub fn invert(&self, value: f32) -> f32 {
        let t = (value - self.range_min) / (self.range_max - self.range_min);
        self.domain_min + t * (self.domain_max - self.domain_min)
    }
}

impl Scale<f32, f32> for LinearScale {
    fn scale(&self, value: f32) -> f32 {
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + t * (self.range_max - self.range_min)
    }

    fn domain(&self) -> (f32, f32) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f32, f32) {
        (self.range_min, self.range_max)
    }
}
