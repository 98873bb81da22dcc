//! Two-phase batch pipeline: parse once, then dispatch the four
//! independent generators.
//!
//! Generators read only their immutable blocks plus the shared style
//! record, so they could run in parallel; sequential execution is the safe
//! default and output-identical. Failure is fail-fast: images already
//! written stay on disk, later ones are skipped.

use std::path::Path;

use log::info;

use crate::error::Result;
use crate::output::PngEncoder;
use crate::plots::{Histogram, MixtureScatter, PhasePortrait, TrajectoryQuiver};
use crate::samples::SampleFile;
use crate::style::PlotStyle;

/// Output file name of the 1D Gaussian histogram.
pub const HISTOGRAM_FILE: &str = "plot1.png";
/// Output file name of the phase portrait.
pub const PHASE_FILE: &str = "plot2.png";
/// Output file name of the mixture scatter.
pub const MIXTURE_FILE: &str = "plot7.png";
/// Output file name of the trajectory quiver.
pub const QUIVER_FILE: &str = "plot8.png";

/// Render all four diagnostic images into `out_dir`.
///
/// The directory is created if missing. Plots are written in numeric
/// order; the first failure aborts the run.
///
/// # Errors
///
/// Returns an error on any render or I/O failure.
pub fn render_all(samples: &SampleFile, style: &PlotStyle, out_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(out_dir)?;

    let histogram = Histogram::new()
        .data(&samples.gaussian_samples)
        .style(style.clone())
        .title("1D Gaussians!")
        .build()?
        .to_framebuffer()?;
    write(&histogram, out_dir, HISTOGRAM_FILE)?;

    let phase = PhasePortrait::new()
        .samples(&samples.phase_samples)
        .trajectories(&samples.phase_positions, &samples.phase_momenta)
        .style(style.clone())
        .title("1D Gaussian trajectories in phase space!")
        .build()?
        .to_framebuffer()?;
    write(&phase, out_dir, PHASE_FILE)?;

    let mixture = MixtureScatter::new()
        .cloud(&samples.mixture_samples)
        .style(style.clone())
        .title("Multivariate Mixtures!")
        .build()?
        .to_framebuffer()?;
    write(&mixture, out_dir, MIXTURE_FILE)?;

    let quiver = TrajectoryQuiver::new()
        .cloud(&samples.flow_samples)
        .trajectories(&samples.flow_positions, &samples.flow_momenta)
        .style(style.clone())
        .title("Multivariate mixture trajectories!\nArrows show momentum!")
        .build()?
        .to_framebuffer()?;
    write(&quiver, out_dir, QUIVER_FILE)?;

    Ok(())
}

fn write(fb: &crate::framebuffer::Framebuffer, out_dir: &Path, name: &str) -> Result<()> {
    let path = out_dir.join(name);
    PngEncoder::write_to_file(fb, &path)?;
    info!("wrote {}", path.display());
    Ok(())
}
