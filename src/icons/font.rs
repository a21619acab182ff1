//! Built-in 5x7 bitmap font for the icon caption.
//!
//! The caption is decorative, so the font covers uppercase ASCII and space
//! only. Glyphs are 5-bit rows, top to bottom, most significant bit on the
//! left. Callers that hand in anything outside the table get
//! [`Error::UnsupportedGlyph`] back and are expected to skip the caption.

use image::{Rgba, RgbaImage};

use crate::error::{Error, Result};

/// Unscaled glyph cell width in pixels.
pub const GLYPH_WIDTH: u32 = 5;
/// Unscaled glyph cell height in pixels.
pub const GLYPH_HEIGHT: u32 = 7;

/// Columns between adjacent glyphs, before scaling.
const LETTER_SPACING: u32 = 1;

/// Measured extent of a piece of caption text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBox {
    pub width: u32,
    pub height: u32,
}

/// Largest integer scale whose glyph height fits `target` pixels, minimum 1.
pub fn scale_for_height(target: u32) -> u32 {
    (target / GLYPH_HEIGHT).max(1)
}

/// Bounding box of `text` at `scale`, or the first unsupported character.
pub fn measure(text: &str, scale: u32) -> Result<TextBox> {
    let mut glyphs = 0u32;
    for c in text.chars() {
        if glyph(c).is_none() {
            return Err(Error::UnsupportedGlyph(c));
        }
        glyphs += 1;
    }
    if glyphs == 0 {
        return Ok(TextBox { width: 0, height: 0 });
    }
    Ok(TextBox {
        width: (glyphs * GLYPH_WIDTH + (glyphs - 1) * LETTER_SPACING) * scale,
        height: GLYPH_HEIGHT * scale,
    })
}

/// Draw `text` with its top-left corner at (`x`, `y`), each font pixel as a
/// `scale` x `scale` block. Pixels falling outside the canvas are dropped.
pub fn draw(img: &mut RgbaImage, text: &str, x: u32, y: u32, scale: u32, color: Rgba<u8>) -> Result<()> {
    let mut pen_x = x;
    for c in text.chars() {
        let rows = glyph(c).ok_or(Error::UnsupportedGlyph(c))?;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (0x10 >> col) == 0 {
                    continue;
                }
                for sy in 0..scale {
                    for sx in 0..scale {
                        let px = pen_x + col * scale + sx;
                        let py = y + row as u32 * scale + sy;
                        if px < img.width() && py < img.height() {
                            img.put_pixel(px, py, color);
                        }
                    }
                }
            }
        }
        pen_x += (GLYPH_WIDTH + LETTER_SPACING) * scale;
    }
    Ok(())
}

fn glyph(c: char) -> Option<&'static [u8; 7]> {
    let rows = match c {
        ' ' => &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        'A' => &[0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => &[0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => &[0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => &[0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => &[0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => &[0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => &[0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => &[0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => &[0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => &[0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => &[0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => &[0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => &[0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => &[0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
        'O' => &[0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => &[0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => &[0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => &[0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => &[0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => &[0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => &[0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => &[0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => &[0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => &[0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => &[0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => &[0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        _ => return None,
    };
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_accounts_for_spacing_and_scale() {
        let text = measure("DEX", 1).unwrap();
        assert_eq!(text.width, 3 * GLYPH_WIDTH + 2 * LETTER_SPACING);
        assert_eq!(text.height, GLYPH_HEIGHT);

        let scaled = measure("DEX", 3).unwrap();
        assert_eq!(scaled.width, text.width * 3);
        assert_eq!(scaled.height, text.height * 3);
    }

    #[test]
    fn measure_rejects_characters_outside_the_table() {
        match measure("dex", 1) {
            Err(Error::UnsupportedGlyph(c)) => assert_eq!(c, 'd'),
            other => panic!("expected UnsupportedGlyph, got {:?}", other),
        }
        assert!(measure("圖", 1).is_err());
    }

    #[test]
    fn draw_marks_glyph_pixels() {
        let mut img = RgbaImage::new(16, 16);
        let ink = Rgba([255, 255, 255, 255]);
        draw(&mut img, "T", 0, 0, 1, ink).unwrap();
        // Top bar of the T
        assert_eq!(img.get_pixel(0, 0), &ink);
        assert_eq!(img.get_pixel(4, 0), &ink);
        // Stem
        assert_eq!(img.get_pixel(2, 6), &ink);
        // Outside the glyph
        assert_eq!(img.get_pixel(0, 6), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn draw_clips_at_the_canvas_edge() {
        let mut img = RgbaImage::new(4, 4);
        let ink = Rgba([255, 255, 255, 255]);
        // Wider than the canvas; must not panic
        draw(&mut img, "WWW", 0, 0, 2, ink).unwrap();
    }

    #[test]
    fn scale_never_drops_below_one() {
        assert_eq!(scale_for_height(3), 1);
        assert_eq!(scale_for_height(12), 1);
        assert_eq!(scale_for_height(14), 2);
        assert_eq!(scale_for_height(32), 4);
    }
}
