//! PWA icon set generation.
//!
//! Renders the app icon at each requested size entirely in code: a backdrop
//! disc, the two-tone ball glyph, the center button, and, on sizes large
//! enough to carry them, a caption and a few sparkle dots. Drawing is
//! deterministic, so re-running over an existing icons directory rewrites
//! identical bytes.

pub mod canvas;
pub mod font;

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use log::warn;
use serde::Serialize;

use crate::error::{Error, Result};
use self::canvas::Half;

/// Sizes the PWA manifest and favicon set ask for, in pixels.
pub const DEFAULT_SIZES: &[u32] = &[16, 32, 72, 96, 128, 144, 152, 192, 384, 512];

/// Caption drawn near the bottom edge of the larger sizes.
const CAPTION: &str = "DEX";

/// Smallest size that gets the caption.
const CAPTION_MIN_SIZE: u32 = 128;
/// Smallest size that gets the sparkle dots.
const SPARKLE_MIN_SIZE: u32 = 96;

const BACKDROP: Rgba<u8> = Rgba([102, 126, 234, 255]);
const BACKDROP_OUTLINE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BALL_UPPER: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BALL_LOWER: Rgba<u8> = Rgba([255, 107, 107, 255]);
const BUTTON_FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BUTTON_RING: Rgba<u8> = Rgba([51, 51, 51, 255]);
const BUTTON_CORE: Rgba<u8> = Rgba([240, 240, 240, 255]);
const CAPTION_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const SPARKLE: Rgba<u8> = Rgba([255, 255, 255, 160]);

/// Sparkle centers as (x, y) fractions of the icon size.
const SPARKLES: [(u32, u32, u32, u32); 3] = [(1, 4, 1, 4), (3, 4, 1, 5), (4, 5, 1, 3)];

/// Configuration for one generation run
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// Directory the PNGs are written into (created if absent)
    pub out_dir: PathBuf,
    /// Pixel sizes to render
    pub sizes: Vec<u32>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("icons"),
            sizes: DEFAULT_SIZES.to_vec(),
        }
    }
}

/// One entry of a web app manifest's `icons` array.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub purpose: String,
}

/// Render and write one PNG per configured size.
///
/// Prints a confirmation per file and a summary count, and returns the
/// written paths in size order. Directory-creation and encode failures
/// abort the run; a caption failure only drops the caption.
pub fn generate(config: &IconConfig) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&config.out_dir)
        .map_err(|e| Error::DirCreate(format!("{}: {}", config.out_dir.display(), e)))?;

    let mut written = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let icon = render_icon(size);
        let path = config.out_dir.join(format!("icon-{size}.png"));
        icon.save(&path)
            .map_err(|e| Error::ImageWrite(format!("{}: {}", path.display(), e)))?;
        println!("Created {} ({size}x{size})", path.display());
        written.push(path);
    }
    println!("Done, {} icon files written", written.len());
    Ok(written)
}

/// Render the icon at `size` into a fresh transparent canvas.
///
/// Pure function of `size`. Geometry follows the shipped icon set's integer
/// ratios, so regenerated files are byte-identical.
pub fn render_icon(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    let center = size as f32 / 2.0;

    // Backdrop disc with a thin white outline.
    let margin = size / 20;
    let backdrop_radius = (size - 2 * margin) as f32 / 2.0;
    canvas::fill_circle(&mut img, center, center, backdrop_radius, BACKDROP);
    canvas::stroke_circle(&mut img, center, center, backdrop_radius, (size / 64).max(1), BACKDROP_OUTLINE);

    // Two-tone ball glyph.
    let ball_radius = (size / 3) as f32;
    canvas::fill_half_disc(&mut img, center, center, ball_radius, Half::Upper, BALL_UPPER);
    canvas::fill_half_disc(&mut img, center, center, ball_radius, Half::Lower, BALL_LOWER);

    // Center button with a dark ring and a small core.
    canvas::fill_circle(&mut img, center, center, (size / 12) as f32, BUTTON_FILL);
    canvas::stroke_circle(&mut img, center, center, (size / 12) as f32, (size / 128).max(1), BUTTON_RING);
    canvas::fill_circle(&mut img, center, center, (size / 24) as f32, BUTTON_CORE);

    if size >= CAPTION_MIN_SIZE {
        if let Err(e) = draw_caption(&mut img, size) {
            warn!("caption omitted on {size}px icon: {e}");
        }
    }

    if size >= SPARKLE_MIN_SIZE {
        draw_sparkles(&mut img, size);
    }

    img
}

fn draw_caption(img: &mut RgbaImage, size: u32) -> Result<()> {
    let scale = font::scale_for_height((size / 16).max(12));
    let text = font::measure(CAPTION, scale)?;
    let x = size.saturating_sub(text.width) / 2;
    let y = size - size / 4;
    font::draw(img, CAPTION, x, y, scale, CAPTION_COLOR)
}

fn draw_sparkles(img: &mut RgbaImage, size: u32) {
    let radius = (size / 40).max(2) as f32;
    for &(xn, xd, yn, yd) in &SPARKLES {
        // Written as-is, not blended: the dots punch translucent holes.
        canvas::fill_circle(img, (size * xn / xd) as f32, (size * yn / yd) as f32, radius, SPARKLE);
    }
}

/// Manifest entries matching the generated files, in size order.
pub fn manifest_entries(config: &IconConfig) -> Vec<ManifestIcon> {
    let dir = config
        .out_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    config
        .sizes
        .iter()
        .map(|&size| ManifestIcon {
            src: if dir.is_empty() {
                format!("icon-{size}.png")
            } else {
                format!("{dir}/icon-{size}.png")
            },
            sizes: format!("{size}x{size}"),
            mime_type: "image/png".to_string(),
            purpose: "any".to_string(),
        })
        .collect()
}

/// Write the manifest `icons` array as pretty-printed JSON.
pub fn write_manifest(config: &IconConfig, path: &Path) -> Result<()> {
    let entries = manifest_entries(config);
    let json = serde_json::to_string_pretty(&entries)
        .map_err(|e| Error::ManifestWrite(e.to_string()))?;
    fs::write(path, json).map_err(|e| Error::ManifestWrite(format!("{}: {}", path.display(), e)))?;
    println!("Created {} ({} entries)", path.display(), entries.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_matches_requested_dimensions() {
        let img = render_icon(72);
        assert_eq!(img.width(), 72);
        assert_eq!(img.height(), 72);
    }

    #[test]
    fn corners_stay_transparent() {
        let img = render_icon(128);
        assert_eq!(img.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
        assert_eq!(img.get_pixel(127, 0), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn ball_halves_use_different_colors() {
        let img = render_icon(96);
        // Just inside the ball, above and below the diameter
        assert_eq!(img.get_pixel(48, 30), &BALL_UPPER);
        assert_eq!(img.get_pixel(48, 66), &BALL_LOWER);
    }

    #[test]
    fn default_config_covers_the_manifest_sizes() {
        let config = IconConfig::default();
        assert_eq!(config.sizes, DEFAULT_SIZES);
        assert_eq!(config.out_dir, PathBuf::from("icons"));
    }
}
