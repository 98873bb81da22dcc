//! Sample-file parsing.
//!
//! A sampler dump is one UTF-8 text file holding exactly eight
//! blank-line-delimited sections. Parsing is layered by delimiter, one
//! container type per level: blank lines split sections, newlines split
//! trajectories or cloud points, commas split timesteps, and whitespace
//! splits the two coordinates of a point. Each layer is independently
//! testable.
//!
//! Parsing contract for edge cases the format leaves open: CRLF line
//! endings are accepted, runs of blank lines count as one delimiter, and
//! leading/trailing blank lines are ignored. After that normalization the
//! section count must be exactly eight — fewer or more is a format error.

use crate::error::{Error, Result};
use crate::geometry::Point;

/// Number of sections a sampler dump must contain.
pub const BLOCK_COUNT: usize = 8;

/// Ordered floating-point values (blocks 0 and 1).
pub type ScalarSeries = Vec<f32>;
/// One chain's scalar states across sampling steps (blocks 2 and 3).
pub type ScalarTrajectory = Vec<f32>;
/// One chain's 2D states across sampling steps (blocks 6 and 7).
pub type PointTrajectory = Vec<Point>;
/// Unordered-looking but order-preserving set of 2D samples (blocks 4 and 5).
pub type PointCloud = Vec<Point>;

/// The eight typed blocks of a sampler dump, built once and immutable.
///
/// Blocks 2/3 and 6/7 are validated to hold matching trajectory counts at
/// parse time; [`SampleFile::phase_pairs`] and [`SampleFile::flow_pairs`]
/// zip them by index.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleFile {
    /// Block 0: 1D Gaussian samples (histogram input).
    pub gaussian_samples: ScalarSeries,
    /// Block 1: 1D samples overlaid on the phase portrait.
    pub phase_samples: ScalarSeries,
    /// Block 2: per-chain position traces.
    pub phase_positions: Vec<ScalarTrajectory>,
    /// Block 3: per-chain momentum traces, paired with block 2.
    pub phase_momenta: Vec<ScalarTrajectory>,
    /// Block 4: 2D mixture samples (scatter input).
    pub mixture_samples: PointCloud,
    /// Block 5: 2D samples overlaid on the quiver plot.
    pub flow_samples: PointCloud,
    /// Block 6: per-chain 2D position paths.
    pub flow_positions: Vec<PointTrajectory>,
    /// Block 7: per-chain 2D momentum paths, paired with block 6.
    pub flow_momenta: Vec<PointTrajectory>,
}

impl SampleFile {
    /// Parse the full text content of a sample file.
    ///
    /// # Errors
    ///
    /// Returns a format error if the section count is not exactly eight,
    /// any numeric token fails conversion, a coordinate pair is malformed,
    /// or paired blocks disagree on trajectory count.
    pub fn parse(text: &str) -> Result<Self> {
        let sections = split_sections(text);
        if sections.len() != BLOCK_COUNT {
            return Err(Error::BlockCount {
                expected: BLOCK_COUNT,
                found: sections.len(),
            });
        }

        let gaussian_samples = parse_scalar_series(&sections[0], 0)?;
        let phase_samples = parse_scalar_series(&sections[1], 1)?;
        let phase_positions = parse_scalar_trajectories(&sections[2], 2)?;
        let phase_momenta = parse_scalar_trajectories(&sections[3], 3)?;
        let mixture_samples = parse_point_cloud(&sections[4], 4)?;
        let flow_samples = parse_point_cloud(&sections[5], 5)?;
        let flow_positions = parse_point_trajectories(&sections[6], 6)?;
        let flow_momenta = parse_point_trajectories(&sections[7], 7)?;

        check_paired(2, 3, phase_positions.len(), phase_momenta.len())?;
        check_paired(6, 7, flow_positions.len(), flow_momenta.len())?;

        Ok(Self {
            gaussian_samples,
            phase_samples,
            phase_positions,
            phase_momenta,
            mixture_samples,
            flow_samples,
            flow_positions,
            flow_momenta,
        })
    }

    /// Zipped (position, momentum) chains for the phase portrait.
    pub fn phase_pairs(
        &self,
    ) -> impl Iterator<Item = (&ScalarTrajectory, &ScalarTrajectory)> {
        self.phase_positions.iter().zip(self.phase_momenta.iter())
    }

    /// Zipped (position path, momentum path) chains for the quiver plot.
    pub fn flow_pairs(&self) -> impl Iterator<Item = (&PointTrajectory, &PointTrajectory)> {
        self.flow_positions.iter().zip(self.flow_momenta.iter())
    }
}

fn check_paired(
    position_block: usize,
    momentum_block: usize,
    positions: usize,
    momenta: usize,
) -> Result<()> {
    if positions == momenta {
        Ok(())
    } else {
        Err(Error::TrajectoryCountMismatch {
            position_block,
            momentum_block,
            positions,
            momenta,
        })
    }
}

// ============================================================================
// Layered parsers, outermost delimiter first
// ============================================================================

/// Split raw text into sections: maximal runs of non-blank lines.
///
/// `str::lines` strips `\r` from CRLF endings, so the split is
/// line-ending-agnostic.
fn split_sections(text: &str) -> Vec<Vec<&str>> {
    let mut sections = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                sections.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        sections.push(current);
    }

    sections
}

/// One float per line.
fn parse_scalar_series(lines: &[&str], block: usize) -> Result<ScalarSeries> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| parse_float(line, block, i + 1))
        .collect()
}

/// One trajectory per line; comma-separated scalar timesteps.
fn parse_scalar_trajectories(lines: &[&str], block: usize) -> Result<Vec<ScalarTrajectory>> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            line.split(',')
                .map(|token| parse_float(token, block, i + 1))
                .collect()
        })
        .collect()
}

/// One point per line; whitespace-separated `x y`.
fn parse_point_cloud(lines: &[&str], block: usize) -> Result<PointCloud> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| parse_point(line, block, i + 1))
        .collect()
}

/// One trajectory per line; comma-separated timesteps, each an `x y` pair.
fn parse_point_trajectories(lines: &[&str], block: usize) -> Result<Vec<PointTrajectory>> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            line.split(',')
                .map(|token| parse_point(token, block, i + 1))
                .collect()
        })
        .collect()
}

/// Innermost level: a single `x y` coordinate pair.
fn parse_point(token: &str, block: usize, line: usize) -> Result<Point> {
    let mut fields = token.split_whitespace();
    let (Some(x), Some(y), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(Error::MalformedPoint {
            block,
            line,
            token: token.trim().to_string(),
        });
    };

    Ok(Point::new(
        parse_float(x, block, line)?,
        parse_float(y, block, line)?,
    ))
}

fn parse_float(token: &str, block: usize, line: usize) -> Result<f32> {
    let trimmed = token.trim();
    trimmed.parse::<f32>().map_err(|_| Error::InvalidNumber {
        block,
        line,
        token: trimmed.to_string(),
    })
}
