//! # Sampler-Viz
//!
//! Turns a text dump of MCMC/HMC sampler output into four diagnostic PNG
//! images comparing sampling behavior on 1D and 2D Gaussian/mixture
//! targets.
//!
//! The crate is a pure-Rust software rasterizer around two pieces of real
//! logic: a layered parser for the eight-block sample file, and four
//! independent plot generators (histogram, phase portrait, mixture
//! scatter, trajectory quiver) that each consume a subset of the parsed
//! blocks plus one shared immutable style record.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sampler_viz::prelude::*;
//! use std::path::Path;
//!
//! let text = std::fs::read_to_string("samples.txt")?;
//! let samples = SampleFile::parse(&text)?;
//! let style = PlotStyle::default();
//! sampler_viz::pipeline::render_all(&samples, &style, Path::new("plots"))?;
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// RGBA color type.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, extents).
pub mod geometry;

/// Scale functions for data-to-pixel mappings.
pub mod scale;

// ============================================================================
// Data Modules
// ============================================================================

/// Sample-file parsing into typed blocks.
pub mod samples;

/// Shared plot style configuration.
pub mod style;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization primitives and bitmap text.
pub mod render;

/// The four diagnostic plot generators.
pub mod plots;

/// PNG output encoding.
pub mod output;

/// Parse-once, render-four batch pipeline.
pub mod pipeline;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for sampler-viz operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```rust,ignore
/// use sampler_viz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Bounds, Point};
    pub use crate::output::PngEncoder;
    pub use crate::plots::{
        BinStrategy, Histogram, MixtureScatter, PhasePortrait, TrajectoryQuiver,
    };
    pub use crate::samples::SampleFile;
    pub use crate::scale::{LinearScale, Scale};
    pub use crate::style::{PlotStyle, REFERENCE_MEANS};
}

// ============================================================================
// Tests
// ============================================================================
