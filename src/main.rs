//! Batch entrypoint: read the sampler dump, render the four diagnostic
//! images, exit non-zero on any failure.
//!
//! Input and output paths are fixed relative paths; there are no flags or
//! environment variables beyond the standard `RUST_LOG` filter.

use std::path::Path;
use std::process::ExitCode;

use log::{error, info};

use sampler_viz::prelude::*;

/// Fixed relative path of the sampler dump.
const SAMPLE_FILE: &str = "samples.txt";
/// Fixed relative directory receiving the four images.
const PLOT_DIR: &str = "plots";

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let text = std::fs::read_to_string(SAMPLE_FILE)?;
    let samples = SampleFile::parse(&text)?;
    info!(
        "parsed {}: {} gaussian samples, {} phase chains, {} mixture samples, {} flow chains",
        SAMPLE_FILE,
        samples.gaussian_samples.len(),
        samples.phase_positions.len(),
        samples.mixture_samples.len(),
        samples.flow_positions.len(),
    );

    let style = PlotStyle::default();
    sampler_viz::pipeline::render_all(&samples, &style, Path::new(PLOT_DIR))
}
