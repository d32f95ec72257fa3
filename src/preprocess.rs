//! Image pre-processing before dominant-color extraction
//!
//! Two normalization steps run before clustering: a bounded downscale to
//! keep clustering cost flat across input sizes, and a gray-world white
//! balance to reduce lighting bias between photos of the same garments.

use crate::constants::preprocess::GRAY_WORLD_EPSILON;
use image::{imageops, Rgb, RgbImage};
use tracing::debug;

/// Downscale so the longer side does not exceed `max_side`
///
/// Aspect ratio is preserved and resampling is area-averaging (box
/// filter). Images already within the bound are returned unchanged;
/// upscaling never happens.
pub fn resize_keep_ratio(image: &RgbImage, max_side: u32) -> RgbImage {
    let (width, height) = image.dimensions();
    let longer = width.max(height);
    if longer <= max_side {
        return image.clone();
    }

    let scale = max_side as f32 / longer as f32;
    let new_width = ((width as f32 * scale) as u32).max(1);
    let new_height = ((height as f32 * scale) as u32).max(1);
    debug!(width, height, new_width, new_height, "downscaling before clustering");
    imageops::thumbnail(image, new_width, new_height)
}

/// Gray-world white balance
///
/// Rescales each channel so the three channel means converge on their
/// grand mean, which normalizes a global color cast from the light
/// source. The input buffer is not mutated.
///
/// All-black and all-white images come back unchanged within rounding:
/// the epsilon guard keeps the per-channel gains finite and close to 1.
pub fn gray_world_balance(image: &RgbImage) -> RgbImage {
    let (width, height) = image.dimensions();
    let pixel_count = width as u64 * height as u64;
    if pixel_count == 0 {
        return image.clone();
    }

    let mut sums = [0u64; 3];
    for Rgb(channels) in image.pixels() {
        for (sum, &channel) in sums.iter_mut().zip(channels.iter()) {
            *sum += channel as u64;
        }
    }

    let means = sums.map(|sum| sum as f32 / pixel_count as f32);
    let grand_mean = (means[0] + means[1] + means[2]) / 3.0;
    let gains = means.map(|mean| grand_mean / (mean + GRAY_WORLD_EPSILON));

    let mut balanced = RgbImage::new(width, height);
    for (out, Rgb(channels)) in balanced.pixels_mut().zip(image.pixels()) {
        let mut corrected = [0u8; 3];
        for ((dst, &channel), gain) in corrected.iter_mut().zip(channels.iter()).zip(gains) {
            *dst = (channel as f32 * gain).round().clamp(0.0, 255.0) as u8;
        }
        *out = Rgb(corrected);
    }
    balanced
}

/// Full pre-processing pass: bounded downscale, then gray-world balance
pub fn prepare(image: &RgbImage, max_side: u32) -> RgbImage {
    gray_world_balance(&resize_keep_ratio(image, max_side))
}
