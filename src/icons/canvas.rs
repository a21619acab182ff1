//! Circle primitives over an RGBA canvas.
//!
//! Everything the icon renderer draws is a disc, a ring, or a half-disc, so
//! the primitives are plain per-pixel distance tests against the pixel
//! center. No antialiasing: output must be byte-identical across runs and
//! platforms.

use image::{Rgba, RgbaImage};

/// Which half of a disc to fill, split along the horizontal diameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    Upper,
    Lower,
}

/// Fill a disc centered at (`cx`, `cy`), overwriting covered pixels.
pub fn fill_circle(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
    let r2 = radius * radius;
    let (x0, y0, x1, y1) = bounds(img, cx, cy, radius);
    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= r2 {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Draw a ring of the given stroke width along the inside of `radius`.
pub fn stroke_circle(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, width: u32, color: Rgba<u8>) {
    let inner = (radius - width as f32).max(0.0);
    let r2 = radius * radius;
    let inner2 = inner * inner;
    let (x0, y0, x1, y1) = bounds(img, cx, cy, radius);
    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let d2 = dx * dx + dy * dy;
            if d2 <= r2 && d2 > inner2 {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Fill one half of a disc. A pixel row landing exactly on the diameter
/// (odd canvas sizes) belongs to the upper half.
pub fn fill_half_disc(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, half: Half, color: Rgba<u8>) {
    let r2 = radius * radius;
    let (x0, y0, x1, y1) = bounds(img, cx, cy, radius);
    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let in_half = match half {
                Half::Upper => dy <= 0.0,
                Half::Lower => dy > 0.0,
            };
            if in_half && dx * dx + dy * dy <= r2 {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Bounding box of the disc, clamped to the image.
fn bounds(img: &RgbaImage, cx: f32, cy: f32, radius: f32) -> (u32, u32, u32, u32) {
    let x0 = (cx - radius - 1.0).floor().max(0.0) as u32;
    let y0 = (cy - radius - 1.0).floor().max(0.0) as u32;
    let x1 = (((cx + radius + 1.0).ceil()).max(0.0) as u32).min(img.width());
    let y1 = (((cy + radius + 1.0).ceil()).max(0.0) as u32).min(img.height());
    (x0, y0, x1, y1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Rgba<u8> = Rgba([10, 20, 30, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    #[test]
    fn fill_covers_center_but_not_corners() {
        let mut img = RgbaImage::new(16, 16);
        fill_circle(&mut img, 8.0, 8.0, 6.0, INK);
        assert_eq!(img.get_pixel(8, 8), &INK);
        assert_eq!(img.get_pixel(0, 0), &CLEAR);
        assert_eq!(img.get_pixel(15, 15), &CLEAR);
    }

    #[test]
    fn stroke_leaves_the_interior_untouched() {
        let mut img = RgbaImage::new(16, 16);
        stroke_circle(&mut img, 8.0, 8.0, 7.0, 1, INK);
        assert_eq!(img.get_pixel(8, 8), &CLEAR);
        // top of the ring
        assert_eq!(img.get_pixel(8, 1), &INK);
    }

    #[test]
    fn half_discs_split_along_the_diameter() {
        let mut img = RgbaImage::new(12, 12);
        fill_half_disc(&mut img, 6.0, 6.0, 5.0, Half::Upper, INK);
        assert_eq!(img.get_pixel(6, 3), &INK);
        assert_eq!(img.get_pixel(6, 8), &CLEAR);

        let mut img = RgbaImage::new(12, 12);
        fill_half_disc(&mut img, 6.0, 6.0, 5.0, Half::Lower, INK);
        assert_eq!(img.get_pixel(6, 8), &INK);
        assert_eq!(img.get_pixel(6, 3), &CLEAR);
    }

    #[test]
    fn clamps_to_the_canvas() {
        let mut img = RgbaImage::new(8, 8);
        // Disc larger than the canvas and partially off it
        fill_circle(&mut img, 0.0, 0.0, 20.0, INK);
        assert_eq!(img.get_pixel(7, 7), &INK);
    }
}
