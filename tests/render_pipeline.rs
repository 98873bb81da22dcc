//! End-to-end pipeline tests: raw sample text in, PNG files out.

use std::fmt::Write as _;
use std::path::Path;

use sampler_viz::pipeline::{
    render_all, HISTOGRAM_FILE, MIXTURE_FILE, PHASE_FILE, QUIVER_FILE,
};
use sampler_viz::prelude::*;

const PNG_MAGIC: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Build a well-formed eight-block dump with deterministic pseudo-data.
/// Flow chains are 100 steps long so the quiver stride path is exercised.
fn sample_text() -> String {
    let mut blocks: Vec<String> = Vec::with_capacity(8);

    // Block 0: 1D gaussian samples
    blocks.push(
        (0..50)
            .map(|i| format!("{:.4}", ((i * 37) % 101) as f32 / 25.0 - 2.0))
            .collect::<Vec<_>>()
            .join("\n"),
    );

    // Block 1: 1D overlay samples
    blocks.push(
        (0..10)
            .map(|i| format!("{:.4}", i as f32 / 5.0 - 1.0))
            .collect::<Vec<_>>()
            .join("\n"),
    );

    // Blocks 2/3: three scalar chains of 30 steps
    for phase in [0.0f32, 1.0] {
        let mut block = String::new();
        for chain in 0..3 {
            if chain > 0 {
                block.push('\n');
            }
            let row = (0..30)
                .map(|t| format!("{:.4}", (t as f32 * 0.2 + chain as f32 + phase).sin()))
                .collect::<Vec<_>>()
                .join(",");
            block.push_str(&row);
        }
        blocks.push(block);
    }

    // Blocks 4/5: 2D clouds
    for seed in [3usize, 7] {
        blocks.push(
            (0..20)
                .map(|i| {
                    let x = ((i * seed) % 17) as f32 / 4.0 - 2.0;
                    let y = ((i * seed * 5) % 23) as f32 / 5.0 - 1.5;
                    format!("{x:.4} {y:.4}")
                })
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    // Blocks 6/7: two 2D chains of 100 steps
    for flip in [1.0f32, -1.0] {
        let mut block = String::new();
        for chain in 0..2 {
            if chain > 0 {
                block.push('\n');
            }
            for t in 0..100 {
                if t > 0 {
                    block.push(',');
                }
                let a = t as f32 * 0.07 + chain as f32;
                let _ = write!(block, "{:.4} {:.4}", a.cos() * flip, a.sin());
            }
        }
        blocks.push(block);
    }

    blocks.join("\n\n")
}

fn assert_png(path: &Path) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|_| panic!("missing output file {}", path.display()));
    assert_eq!(&bytes[0..8], &PNG_MAGIC, "{} is not a PNG", path.display());
}

#[test]
fn pipeline_writes_four_images() {
    let parsed = SampleFile::parse(&sample_text()).expect("fixture should parse");
    let dir = tempfile::tempdir().expect("tempdir");

    render_all(&parsed, &PlotStyle::default(), dir.path()).expect("pipeline should succeed");

    for name in [HISTOGRAM_FILE, PHASE_FILE, MIXTURE_FILE, QUIVER_FILE] {
        assert_png(&dir.path().join(name));
    }
}

#[test]
fn pipeline_is_deterministic() {
    let parsed = SampleFile::parse(&sample_text()).expect("fixture should parse");
    let style = PlotStyle::default();

    let dir_a = tempfile::tempdir().expect("tempdir");
    let dir_b = tempfile::tempdir().expect("tempdir");
    render_all(&parsed, &style, dir_a.path()).expect("first run");
    render_all(&parsed, &style, dir_b.path()).expect("second run");

    for name in [HISTOGRAM_FILE, PHASE_FILE, MIXTURE_FILE, QUIVER_FILE] {
        let a = std::fs::read(dir_a.path().join(name)).expect("read a");
        let b = std::fs::read(dir_b.path().join(name)).expect("read b");
        assert_eq!(a, b, "{name} differs between identical runs");
    }
}

#[test]
fn pipeline_creates_output_directory() {
    let parsed = SampleFile::parse(&sample_text()).expect("fixture should parse");
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("deep").join("plots");

    render_all(&parsed, &PlotStyle::default(), &nested).expect("pipeline should succeed");
    assert_png(&nested.join(HISTOGRAM_FILE));
}

#[test]
fn pipeline_fails_fast_with_partial_output() {
    let mut parsed = SampleFile::parse(&sample_text()).expect("fixture should parse");
    // An empty mixture cloud makes the third generator fail after the
    // first two images are already on disk
    parsed.mixture_samples.clear();

    let dir = tempfile::tempdir().expect("tempdir");
    let err = render_all(&parsed, &PlotStyle::default(), dir.path());

    assert!(err.is_err());
    assert_png(&dir.path().join(HISTOGRAM_FILE));
    assert_png(&dir.path().join(PHASE_FILE));
    assert!(!dir.path().join(MIXTURE_FILE).exists());
    assert!(!dir.path().join(QUIVER_FILE).exists());
}

#[test]
fn malformed_dump_is_rejected_before_rendering() {
    // Seven blocks only
    let text = sample_text();
    let truncated = text.rsplit_once("\n\n").expect("fixture has blocks").0;

    let err = SampleFile::parse(truncated).expect_err("must reject");
    assert!(matches!(err, Error::BlockCount { found: 7, .. }));
}
