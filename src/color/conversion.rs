//! Color space conversion utilities
//!
//! Conversions between 8-bit RGB buffers and hue-saturation-value
//! representations, plus display helpers (hex strings, solid swatch
//! buffers).
//!
//! Convention used throughout the crate: hue in degrees `[0, 360)`,
//! saturation and value normalized to `[0, 1]`.

use image::{Rgb, RgbImage};
use palette::{FromColor, Hsv, Srgb};

/// Convert an 8-bit RGB pixel to HSV
///
/// # Arguments
///
/// * `r`, `g`, `b` - RGB values in range [0, 255]
///
/// # Returns
///
/// HSV color with hue in degrees, saturation and value in [0, 1]
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let srgb: Srgb<f32> = Srgb::new(r, g, b).into_format();
    Hsv::from_color(srgb)
}

/// Convert an HSV color back to an 8-bit RGB triple
pub fn hsv_to_rgb(hsv: Hsv) -> [u8; 3] {
    let srgb = Srgb::from_color(hsv).into_format::<u8>();
    [srgb.red, srgb.green, srgb.blue]
}

/// Convert every pixel of an RGB buffer to HSV, in row-major order
///
/// Row-major order is relied upon by the extractor's reproducible pixel
/// sampling.
pub fn image_to_hsv(image: &RgbImage) -> Vec<Hsv> {
    image
        .pixels()
        .map(|&Rgb([r, g, b])| rgb_to_hsv(r, g, b))
        .collect()
}

/// Hexadecimal representation of an HSV color (e.g. "#FF0000")
pub fn hsv_to_hex(hsv: Hsv) -> String {
    let [r, g, b] = hsv_to_rgb(hsv);
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Render a solid square swatch for an HSV color
///
/// Consumers use this to display detected colors as visual chips next to
/// the classification table.
///
/// # Arguments
///
/// * `hsv` - Color to render
/// * `size` - Side length of the square swatch in pixels
pub fn render_swatch(hsv: Hsv, size: u32) -> RgbImage {
    let [r, g, b] = hsv_to_rgb(hsv);
    RgbImage::from_pixel(size.max(1), size.max(1), Rgb([r, g, b]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hsv_primaries() {
        let red = rgb_to_hsv(255, 0, 0);
        assert!(red.hue.into_positive_degrees() < 0.5);
        assert!((red.saturation - 1.0).abs() < 1e-4);
        assert!((red.value - 1.0).abs() < 1e-4);

        let blue = rgb_to_hsv(0, 0, 255);
        assert!((blue.hue.into_positive_degrees() - 240.0).abs() < 0.5);
    }

    #[test]
    fn test_rgb_to_hsv_white_is_desaturated() {
        let white = rgb_to_hsv(255, 255, 255);
        assert!(white.saturation < 1e-4);
        assert!((white.value - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_rgb_to_hsv_black_has_zero_value() {
        let black = rgb_to_hsv(0, 0, 0);
        assert!(black.value < 1e-4);
    }

    #[test]
    fn test_hsv_rgb_roundtrip() {
        for &(r, g, b) in &[(255u8, 0u8, 0u8), (12, 200, 99), (128, 128, 128)] {
            let [r2, g2, b2] = hsv_to_rgb(rgb_to_hsv(r, g, b));
            assert!((r as i16 - r2 as i16).abs() <= 1);
            assert!((g as i16 - g2 as i16).abs() <= 1);
            assert!((b as i16 - b2 as i16).abs() <= 1);
        }
    }

    #[test]
    fn test_image_to_hsv_row_major() {
        let mut image = RgbImage::new(2, 1);
        image.put_pixel(0, 0, Rgb([255, 0, 0]));
        image.put_pixel(1, 0, Rgb([0, 0, 255]));

        let hsv = image_to_hsv(&image);
        assert_eq!(hsv.len(), 2);
        assert!(hsv[0].hue.into_positive_degrees() < 0.5);
        assert!((hsv[1].hue.into_positive_degrees() - 240.0).abs() < 0.5);
    }

    #[test]
    fn test_hsv_to_hex() {
        assert_eq!(hsv_to_hex(rgb_to_hsv(255, 0, 0)), "#FF0000");
        assert_eq!(hsv_to_hex(rgb_to_hsv(0, 0, 0)), "#000000");
    }

    #[test]
    fn test_render_swatch_is_solid() {
        let swatch = render_swatch(rgb_to_hsv(10, 20, 30), 8);
        assert_eq!(swatch.dimensions(), (8, 8));
        let first = *swatch.get_pixel(0, 0);
        assert!(swatch.pixels().all(|&p| p == first));
    }
}
