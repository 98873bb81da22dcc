//! PNG output encoding.
//!
//! A thin sink: takes a rendered framebuffer and writes it to disk (or a
//! byte buffer) as an RGBA8 PNG using the pure-Rust `png` crate.

use crate::error::Result;
use crate::framebuffer::Framebuffer;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// PNG encoder for framebuffer output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a framebuffer to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        Self::encode(fb, writer)
    }

    /// Encode a framebuffer to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(fb: &Framebuffer) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(fb, &mut buffer)?;
        Ok(buffer)
    }

    fn encode<W: std::io::Write>(fb: &Framebuffer, writer: W) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, fb.width(), fb.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        // Compact pixels strip the framebuffer's stride padding
        writer.write_image_data(&fb.to_compact_pixels())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_png_magic_bytes() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::WHITE);

        let bytes = PngEncoder::to_bytes(&fb).unwrap();
        assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn test_png_roundtrip_dimensions() {
        let fb = Framebuffer::new(33, 7).unwrap();
        let bytes = PngEncoder::to_bytes(&fb).unwrap();

        // IHDR width/height live at fixed offsets
        let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
        let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
        assert_eq!(width, 33);
        assert_eq!(height, 7);
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.clear(Rgba::BLACK);
        PngEncoder::write_to_file(&fb, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }
}
