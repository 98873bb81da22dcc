//! Error types for sampler-viz operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing a sample file or rendering plots.
///
/// There is no recovery path anywhere in the crate: every error propagates
/// to the caller and the run terminates with a non-zero exit code.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// The sample file does not contain the required number of sections.
    #[error("Expected {expected} blank-line-delimited blocks, found {found}")]
    BlockCount {
        /// Number of blocks the format requires.
        expected: usize,
        /// Number of non-blank blocks actually present.
        found: usize,
    },

    /// A token that should be a number failed to parse.
    #[error("Block {block}, line {line}: '{token}' is not a number")]
    InvalidNumber {
        /// Zero-based block index.
        block: usize,
        /// One-based line number within the block.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// A token that should be an `x y` coordinate pair is malformed.
    #[error("Block {block}, line {line}: '{token}' is not an 'x y' pair")]
    MalformedPoint {
        /// Zero-based block index.
        block: usize,
        /// One-based line number within the block.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// Paired position/momentum blocks disagree on trajectory count.
    #[error(
        "Blocks {position_block}/{momentum_block}: {positions} position trajectories \
         but {momenta} momentum trajectories"
    )]
    TrajectoryCountMismatch {
        /// Block index holding positions.
        position_block: usize,
        /// Block index holding momenta.
        momentum_block: usize,
        /// Trajectory count in the position block.
        positions: usize,
        /// Trajectory count in the momentum block.
        momenta: usize,
    },

    /// Data length mismatch between paired arrays handed to a generator.
    #[error("Data length mismatch: {x_len} elements paired with {y_len}")]
    DataLengthMismatch {
        /// Length of the first array.
        x_len: usize,
        /// Length of the second array.
        y_len: usize,
    },

    /// Invalid dimensions for a framebuffer or plot.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Empty data provided where non-empty is required.
    #[error("Empty data provided")]
    EmptyData,

    /// Scale domain error (e.g., degenerate extent).
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),
}
