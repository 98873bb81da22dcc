//! Embedded bitmap text rendering.
//!
//! Titles and axis labels are rasterized from a 5x7 ASCII face compiled
//! into the binary, so image output needs no system font lookup. The
//! configured font-family preference list describes the intended face for
//! environments that substitute one; the rasterizer itself always uses the
//! embedded glyphs.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;

/// Glyph width in font units.
const GLYPH_W: u32 = 5;
/// Glyph height in font units.
const GLYPH_H: u32 = 7;
/// Horizontal advance per character (glyph + 1 unit spacing).
const CELL_W: u32 = 6;

/// Each glyph: 7 rows, each row's lower 5 bits = pixels (MSB = left).
/// ASCII 32..=126, 95 glyphs.
#[rustfmt::skip]
const FONT_5X7: [[u8; 7]; 95] = [
    [0x00,0x00,0x00,0x00,0x00,0x00,0x00], // 32 ' '
    [0x04,0x04,0x04,0x04,0x04,0x00,0x04], // 33 '!'
    [0x0A,0x0A,0x0A,0x00,0x00,0x00,0x00], // 34 '"'
    [0x0A,0x0A,0x1F,0x0A,0x1F,0x0A,0x0A], // 35 '#'
    [0x04,0x0F,0x14,0x0E,0x05,0x1E,0x04], // 36 '$'
    [0x18,0x19,0x02,0x04,0x08,0x13,0x03], // 37 '%'
    [0x0C,0x12,0x14,0x08,0x15,0x12,0x0D], // 38 '&'
    [0x04,0x04,0x08,0x00,0x00,0x00,0x00], // 39 '''
    [0x02,0x04,0x08,0x08,0x08,0x04,0x02], // 40 '('
    [0x08,0x04,0x02,0x02,0x02,0x04,0x08], // 41 ')'
    [0x00,0x04,0x15,0x0E,0x15,0x04,0x00], // 42 '*'
    [0x00,0x04,0x04,0x1F,0x04,0x04,0x00], // 43 '+'
    [0x00,0x00,0x00,0x00,0x00,0x04,0x08], // 44 ','
    [0x00,0x00,0x00,0x1F,0x00,0x00,0x00], // 45 '-'
    [0x00,0x00,0x00,0x00,0x00,0x00,0x04], // 46 '.'
    [0x00,0x01,0x02,0x04,0x08,0x10,0x00], // 47 '/'
    [0x0E,0x11,0x13,0x15,0x19,0x11,0x0E], // 48 '0'
    [0x04,0x0C,0x04,0x04,0x04,0x04,0x0E], // 49 '1'
    [0x0E,0x11,0x01,0x02,0x04,0x08,0x1F], // 50 '2'
    [0x1F,0x02,0x04,0x02,0x01,0x11,0x0E], // 51 '3'
    [0x02,0x06,0x0A,0x12,0x1F,0x02,0x02], // 52 '4'
    [0x1F,0x10,0x1E,0x01,0x01,0x11,0x0E], // 53 '5'
    [0x06,0x08,0x10,0x1E,0x11,0x11,0x0E], // 54 '6'
    [0x1F,0x01,0x02,0x04,0x08,0x08,0x08], // 55 '7'
    [0x0E,0x11,0x11,0x0E,0x11,0x11,0x0E], // 56 '8'
    [0x0E,0x11,0x11,0x0F,0x01,0x02,0x0C], // 57 '9'
    [0x00,0x00,0x04,0x00,0x00,0x04,0x00], // 58 ':'
    [0x00,0x00,0x04,0x00,0x00,0x04,0x08], // 59 ';'
    [0x02,0x04,0x08,0x10,0x08,0x04,0x02], // 60 '<'
    [0x00,0x00,0x1F,0x00,0x1F,0x00,0x00], // 61 '='
    [0x08,0x04,0x02,0x01,0x02,0x04,0x08], // 62 '>'
    [0x0E,0x11,0x01,0x02,0x04,0x00,0x04], // 63 '?'
    [0x0E,0x11,0x17,0x15,0x17,0x10,0x0E], // 64 '@'
    [0x0E,0x11,0x11,0x1F,0x11,0x11,0x11], // 65 'A'
    [0x1E,0x11,0x11,0x1E,0x11,0x11,0x1E], // 66 'B'
    [0x0E,0x11,0x10,0x10,0x10,0x11,0x0E], // 67 'C'
    [0x1C,0x12,0x11,0x11,0x11,0x12,0x1C], // 68 'D'
    [0x1F,0x10,0x10,0x1E,0x10,0x10,0x1F], // 69 'E'
    [0x1F,0x10,0x10,0x1E,0x10,0x10,0x10], // 70 'F'
    [0x0E,0x11,0x10,0x17,0x11,0x11,0x0F], // 71 'G'
    [0x11,0x11,0x11,0x1F,0x11,0x11,0x11], // 72 'H'
    [0x0E,0x04,0x04,0x04,0x04,0x04,0x0E], // 73 'I'
    [0x07,0x02,0x02,0x02,0x02,0x12,0x0C], // 74 'J'
    [0x11,0x12,0x14,0x18,0x14,0x12,0x11], // 75 'K'
    [0x10,0x10,0x10,0x10,0x10,0x10,0x1F], // 76 'L'
    [0x11,0x1B,0x15,0x15,0x11,0x11,0x11], // 77 'M'
    [0x11,0x11,0x19,0x15,0x13,0x11,0x11], // 78 'N'
    [0x0E,0x11,0x11,0x11,0x11,0x11,0x0E], // 79 'O'
    [0x1E,0x11,0x11,0x1E,0x10,0x10,0x10], // 80 'P'
    [0x0E,0x11,0x11,0x11,0x15,0x12,0x0D], // 81 'Q'
    [0x1E,0x11,0x11,0x1E,0x14,0x12,0x11], // 82 'R'
    [0x0F,0x10,0x10,0x0E,0x01,0x01,0x1E], // 83 'S'
    [0x1F,0x04,0x04,0x04,0x04,0x04,0x04], // 84 'T'
    [0x11,0x11,0x11,0x11,0x11,0x11,0x0E], // 85 'U'
    [0x11,0x11,0x11,0x11,0x11,0x0A,0x04], // 86 'V'
    [0x11,0x11,0x11,0x15,0x15,0x1B,0x11], // 87 'W'
    [0x11,0x11,0x0A,0x04,0x0A,0x11,0x11], // 88 'X'
    [0x11,0x11,0x0A,0x04,0x04,0x04,0x04], // 89 'Y'
    [0x1F,0x01,0x02,0x04,0x08,0x10,0x1F], // 90 'Z'
    [0x0E,0x08,0x08,0x08,0x08,0x08,0x0E], // 91 '['
    [0x00,0x10,0x08,0x04,0x02,0x01,0x00], // 92 '\'
    [0x0E,0x02,0x02,0x02,0x02,0x02,0x0E], // 93 ']'
    [0x04,0x0A,0x11,0x00,0x00,0x00,0x00], // 94 '^'
    [0x00,0x00,0x00,0x00,0x00,0x00,0x1F], // 95 '_'
    [0x08,0x04,0x02,0x00,0x00,0x00,0x00], // 96 '`'
    [0x00,0x00,0x0E,0x01,0x0F,0x11,0x0F], // 97 'a'
    [0x10,0x10,0x16,0x19,0x11,0x11,0x1E], // 98 'b'
    [0x00,0x00,0x0E,0x10,0x10,0x11,0x0E], // 99 'c'
    [0x01,0x01,0x0D,0x13,0x11,0x11,0x0F], // 100 'd'
    [0x00,0x00,0x0E,0x11,0x1F,0x10,0x0E], // 101 'e'
    [0x06,0x09,0x08,0x1C,0x08,0x08,0x08], // 102 'f'
    [0x00,0x00,0x0F,0x11,0x0F,0x01,0x0E], // 103 'g'
    [0x10,0x10,0x16,0x19,0x11,0x11,0x11], // 104 'h'
    [0x04,0x00,0x0C,0x04,0x04,0x04,0x0E], // 105 'i'
    [0x02,0x00,0x06,0x02,0x02,0x12,0x0C], // 106 'j'
    [0x10,0x10,0x12,0x14,0x18,0x14,0x12], // 107 'k'
    [0x0C,0x04,0x04,0x04,0x04,0x04,0x0E], // 108 'l'
    [0x00,0x00,0x1A,0x15,0x15,0x11,0x11], // 109 'm'
    [0x00,0x00,0x16,0x19,0x11,0x11,0x11], // 110 'n'
    [0x00,0x00,0x0E,0x11,0x11,0x11,0x0E], // 111 'o'
    [0x00,0x00,0x1E,0x11,0x1E,0x10,0x10], // 112 'p'
    [0x00,0x00,0x0D,0x13,0x0F,0x01,0x01], // 113 'q'
    [0x00,0x00,0x16,0x19,0x10,0x10,0x10], // 114 'r'
    [0x00,0x00,0x0E,0x10,0x0E,0x01,0x1E], // 115 's'
    [0x08,0x08,0x1C,0x08,0x08,0x09,0x06], // 116 't'
    [0x00,0x00,0x11,0x11,0x11,0x13,0x0D], // 117 'u'
    [0x00,0x00,0x11,0x11,0x11,0x0A,0x04], // 118 'v'
    [0x00,0x00,0x11,0x11,0x15,0x15,0x0A], // 119 'w'
    [0x00,0x00,0x11,0x0A,0x04,0x0A,0x11], // 120 'x'
    [0x00,0x00,0x11,0x11,0x0F,0x01,0x0E], // 121 'y'
    [0x00,0x00,0x1F,0x02,0x04,0x08,0x1F], // 122 'z'
    [0x02,0x04,0x04,0x08,0x04,0x04,0x02], // 123 '{'
    [0x04,0x04,0x04,0x04,0x04,0x04,0x04], // 124 '|'
    [0x08,0x04,0x04,0x02,0x04,0x04,0x08], // 125 '}'
    [0x00,0x00,0x08,0x15,0x02,0x00,0x00], // 126 '~'
];

/// Pixel width of a string at the given integer scale.
#[must_use]
pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * CELL_W * scale
}

/// Pixel height of a line of text at the given integer scale.
#[must_use]
pub fn text_height(scale: u32) -> u32 {
    GLYPH_H * scale
}

/// Draw a line of text with its top-left corner at `(x, y)`.
///
/// Characters outside ASCII 32..=126 are skipped; pixels falling outside
/// the framebuffer are clipped.
pub fn draw_text(fb: &mut Framebuffer, x: i32, y: i32, text: &str, scale: u32, color: Rgba) {
    let scale = scale.max(1);
    for (i, ch) in text.chars().enumerate() {
        let cx = x + (i as u32 * CELL_W * scale) as i32;
        draw_char(fb, cx, y, ch, scale, color);
    }
}

/// Draw text rotated 90 degrees counter-clockwise, reading bottom-to-top.
///
/// `(x, y)` anchors the bottom-left corner of the first character; the
/// string grows upward. Used for vertical axis labels.
pub fn draw_text_vertical(fb: &mut Framebuffer, x: i32, y: i32, text: &str, scale: u32, color: Rgba) {
    let scale = scale.max(1);
    let mut cy = y;
    for ch in text.chars() {
        draw_char_rotated(fb, x, cy, ch, scale, color);
        cy -= (CELL_W * scale) as i32;
    }
}

fn glyph(ch: char) -> Option<&'static [u8; 7]> {
    let code = ch as u32;
    if (32..=126).contains(&code) {
        Some(&FONT_5X7[(code - 32) as usize])
    } else {
        None
    }
}

fn draw_char(fb: &mut Framebuffer, x: i32, y: i32, ch: char, scale: u32, color: Rgba) {
    let Some(rows) = glyph(ch) else {
        return;
    };
    for (row, &bits) in rows.iter().enumerate() {
        for col in 0..GLYPH_W {
            if bits & (0x10 >> col) != 0 {
                let px = x + (col * scale) as i32;
                let py = y + (row as u32 * scale) as i32;
                fill_dot(fb, px, py, scale, color);
            }
        }
    }
}

/// Glyph pixel `(col, row)` maps to `(x + row, y - col)` for the CCW turn.
fn draw_char_rotated(fb: &mut Framebuffer, x: i32, y: i32, ch: char, scale: u32, color: Rgba) {
    let Some(rows) = glyph(ch) else {
        return;
    };
    for (row, &bits) in rows.iter().enumerate() {
        for col in 0..GLYPH_W {
            if bits & (0x10 >> col) != 0 {
                let px = x + (row as u32 * scale) as i32;
                let py = y - (col * scale) as i32;
                fill_dot(fb, px, py, scale, color);
            }
        }
    }
}

#[inline]
fn fill_dot(fb: &mut Framebuffer, x: i32, y: i32, scale: u32, color: Rgba) {
    if x >= 0 && y >= 0 {
        fb.fill_rect(x as u32, y as u32, scale, scale, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_fb() -> Framebuffer {
        let mut fb = Framebuffer::new(200, 100).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);
        fb
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("abc", 1), 18);
        assert_eq!(text_width("abc", 2), 36);
        assert_eq!(text_width("", 1), 0);
    }

    #[test]
    fn test_text_height() {
        assert_eq!(text_height(1), 7);
        assert_eq!(text_height(2), 14);
    }

    #[test]
    fn test_draw_text_sets_pixels() {
        let mut fb = white_fb();
        draw_text(&mut fb, 10, 10, "T", 1, Rgba::BLACK);

        // 'T' top bar spans the glyph width
        assert_eq!(fb.get_pixel(10, 10), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(14, 10), Some(Rgba::BLACK));
        // Stem
        assert_eq!(fb.get_pixel(12, 16), Some(Rgba::BLACK));
    }

    #[test]
    fn test_draw_text_scaled() {
        let mut fb = white_fb();
        draw_text(&mut fb, 10, 10, "T", 2, Rgba::BLACK);

        // Each font unit is a 2x2 block
        assert_eq!(fb.get_pixel(10, 10), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(11, 11), Some(Rgba::BLACK));
    }

    #[test]
    fn test_draw_text_clips() {
        let mut fb = white_fb();
        // Partially offscreen draws must not panic
        draw_text(&mut fb, -3, -3, "W", 1, Rgba::BLACK);
        draw_text(&mut fb, 198, 98, "W", 1, Rgba::BLACK);
    }

    #[test]
    fn test_draw_text_vertical_grows_upward() {
        let mut fb = white_fb();
        draw_text_vertical(&mut fb, 10, 80, "II", 1, Rgba::BLACK);

        let mut darkened_above = 0;
        for y in 60..=80 {
            if fb.get_pixel(12, y) != Some(Rgba::WHITE) {
                darkened_above += 1;
            }
        }
        assert!(darkened_above > 0);
        // Nothing below the anchor
        for y in 82..100 {
            assert_eq!(fb.get_pixel(12, y), Some(Rgba::WHITE));
        }
    }

    #[test]
    fn test_non_ascii_skipped() {
        let mut fb = white_fb();
        draw_text(&mut fb, 10, 10, "\u{00e9}", 1, Rgba::BLACK);
        // Unsupported glyph leaves the buffer untouched
        assert_eq!(fb.get_pixel(10, 10), Some(Rgba::WHITE));
    }
}
