//! Pixel buffer, exposure clamping and PNG export.
//!
//! The tracer produces linear, unclamped RGB. Before quantizing to 8 bits
//! any color brighter than 1 is scaled down uniformly by its largest
//! channel, which keeps hue intact where a plain clamp would wash
//! highlights out to white.

use std::path::Path;

use crate::{error::Result, Color};
use image::{ColorType, ImageFormat};
use tinyray_math::Interval;

/// Scale `color` down so that no channel exceeds 1.
#[inline]
pub fn tone_map(color: Color) -> Color {
    let max = color.max_element();
    if max > 1.0 {
        color / max
    } else {
        color
    }
}

/// Convert a color to 8-bit RGBA.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let c = tone_map(color);
    let quantize = |x: f32| (255.0 * Interval::UNIT.clamp(x)).round() as u8;
    [quantize(c.x), quantize(c.y), quantize(c.z), 255]
}

/// Simple image buffer for storing render output.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width as usize).saturating_mul(height as usize)],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len().saturating_mul(4));
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }

    /// Write the buffer as an 8-bit RGBA PNG.
    ///
    /// The format is always PNG regardless of the file extension.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        image::save_buffer_with_format(
            path,
            &self.to_rgba(),
            self.width,
            self.height,
            ColorType::Rgba8,
            ImageFormat::Png,
        )?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_map_leaves_in_range_colors() {
        let c = Color::new(0.2, 0.7, 0.8);
        assert_eq!(tone_map(c), c);
        assert_eq!(tone_map(Color::ONE), Color::ONE);
    }

    #[test]
    fn test_tone_map_scales_by_max_channel() {
        let c = tone_map(Color::new(4.0, 2.0, 1.0));
        assert_eq!(c, Color::new(1.0, 0.5, 0.25));
    }

    #[test]
    fn test_color_to_rgba_rounds() {
        assert_eq!(color_to_rgba(Color::ZERO), [0, 0, 0, 255]);
        assert_eq!(color_to_rgba(Color::ONE), [255, 255, 255, 255]);
        // 0.5 * 255 = 127.5 rounds up
        assert_eq!(color_to_rgba(Color::splat(0.5)), [128, 128, 128, 255]);
        // Overexposed colors keep their hue
        assert_eq!(color_to_rgba(Color::new(2.0, 1.0, 0.0)), [255, 128, 0, 255]);
    }

    #[test]
    fn test_color_to_rgba_clamps_negative() {
        assert_eq!(color_to_rgba(Color::new(-0.5, 0.0, 0.0)), [0, 0, 0, 255]);
    }

    #[test]
    fn test_image_buffer_get_set() {
        let mut image = ImageBuffer::new(4, 3);
        assert_eq!(image.pixels.len(), 12);

        image.set(3, 2, Color::ONE);
        assert_eq!(image.get(3, 2), Color::ONE);
        assert_eq!(image.get(0, 0), Color::ZERO);

        let bytes = image.to_rgba();
        assert_eq!(bytes.len(), 4 * 3 * 4);
        assert_eq!(&bytes[44..48], &[255, 255, 255, 255]);
    }

    #[test]
    fn test_tall_image_indexing() {
        // A single column: every row starts at its own pixel
        let mut image = ImageBuffer::new(1, 70_000);
        image.set(0, 69_999, Color::ONE);
        assert_eq!(image.pixels[69_999], Color::ONE);
        assert_eq!(image.get(0, 69_998), Color::ZERO);
    }

    #[test]
    fn test_save_png_round_trip() {
        let mut buffer = ImageBuffer::new(2, 2);
        buffer.set(1, 0, Color::new(1.0, 0.0, 0.0));

        let path = std::env::temp_dir().join(format!("tinyray_output_test_{}.png", std::process::id()));
        buffer.save_png(&path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (2, 2));
        assert_eq!(loaded.get_pixel(1, 0).0, [255, 0, 0, 255]);
        assert_eq!(loaded.get_pixel(0, 1).0, [0, 0, 0, 255]);

        let _ = std::fs::remove_file(&path);
    }
}
