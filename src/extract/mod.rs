//! Dominant-color extraction
//!
//! Reduces a pre-processed photo to a small ranked palette by clustering a
//! reproducible pixel sample in HSV space. Proportions describe the share
//! of sampled pixels per cluster and always sum to 1; results are
//! bit-for-bit identical for a fixed `(image, k, sample_fraction, seed)`.

use crate::color::conversion::image_to_hsv;
use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::preprocess;
use image::RgbImage;
use palette::Hsv;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

mod kmeans;

/// One representative color and its share of the sampled pixels
///
/// Hue is in degrees `[0, 360)`, saturation and value in `[0, 1]`.
/// Extraction returns these ordered by descending proportion; index 0 is
/// always the largest cluster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DominantColor {
    /// Hue in degrees
    pub hue: f32,
    /// Saturation
    pub saturation: f32,
    /// Value (brightness)
    pub value: f32,
    /// Share of sampled pixels assigned to this cluster
    pub proportion: f32,
}

impl DominantColor {
    /// The color as an HSV value for naming, swatch rendering, grouping
    pub fn hsv(&self) -> Hsv {
        Hsv::new(self.hue, self.saturation, self.value)
    }
}

/// Clustering runs in OpenCV-scaled HSV (h/2, s*255, v*255) so hue does
/// not dominate the distance metric; public values stay degrees/normalized
fn to_cluster_space(hsv: Hsv) -> [f32; 3] {
    [
        hsv.hue.into_positive_degrees() / 2.0,
        hsv.saturation * 255.0,
        hsv.value * 255.0,
    ]
}

fn from_cluster_space(center: [f32; 3], proportion: f32) -> DominantColor {
    DominantColor {
        hue: center[0] * 2.0,
        saturation: center[1] / 255.0,
        value: center[2] / 255.0,
        proportion,
    }
}

/// Extract the `config.k` dominant colors of an image
///
/// The image is pre-processed (bounded downscale, gray-world balance),
/// converted to HSV, Bernoulli-sampled in row-major order with probability
/// `config.sample_fraction`, and clustered with seeded k-means. Sampling
/// bounds clustering cost; the proportions are statistical estimates, not
/// exact population shares.
///
/// # Returns
///
/// Exactly `config.k` entries sorted by descending proportion. The sort is
/// stable, so equal proportions keep ascending cluster-index order. When
/// `k` exceeds the number of distinct sampled colors, surplus clusters
/// come back with proportion 0.0.
///
/// # Errors
///
/// [`AnalysisError::InvalidParameter`] for malformed configuration,
/// [`AnalysisError::InvalidImage`] for a zero-sized buffer. Degenerate
/// image content is not an error.
pub fn dominant_colors(image: &RgbImage, config: &AnalysisConfig) -> Result<Vec<DominantColor>> {
    config.validate()?;
    if image.width() == 0 || image.height() == 0 {
        return Err(AnalysisError::invalid_image("zero-sized buffer"));
    }

    let prepared = preprocess::prepare(image, config.max_side);
    let points: Vec<[f32; 3]> = image_to_hsv(&prepared)
        .into_iter()
        .map(to_cluster_space)
        .collect();

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut sampled: Vec<[f32; 3]> = points
        .iter()
        .copied()
        .filter(|_| rng.gen::<f32>() < config.sample_fraction)
        .collect();
    if sampled.is_empty() {
        // Tiny image with a small fraction: cluster everything instead
        sampled = points;
    }
    debug!(
        pixels = prepared.width() * prepared.height(),
        sampled = sampled.len(),
        k = config.k,
        "clustering pixel sample"
    );

    let outcome = kmeans::run(
        &sampled,
        config.k,
        config.kmeans.max_iter,
        config.kmeans.epsilon,
        config.kmeans.restarts,
        &mut rng,
    );

    let total = sampled.len() as f32;
    let mut dominants: Vec<DominantColor> = outcome
        .centers
        .iter()
        .zip(&outcome.counts)
        .map(|(&center, &count)| from_cluster_space(center, count as f32 / total))
        .collect();
    dominants.sort_by(|a, b| b.proportion.total_cmp(&a.proportion));
    Ok(dominants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn two_tone(width: u32, height: u32, split: u32) -> RgbImage {
        // Left band white, right band navy
        RgbImage::from_fn(width, height, |x, _| {
            if x < split {
                Rgb([255, 255, 255])
            } else {
                Rgb([20, 20, 120])
            }
        })
    }

    fn config(k: usize) -> AnalysisConfig {
        AnalysisConfig {
            sample_fraction: 1.0,
            ..AnalysisConfig::with_k(k)
        }
    }

    #[test]
    fn test_proportions_sum_to_one() {
        let image = two_tone(64, 32, 48);
        let dominants = dominant_colors(&image, &config(3)).unwrap();
        let sum: f32 = dominants.iter().map(|d| d.proportion).sum();
        assert!((sum - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_ordered_by_descending_proportion() {
        let image = two_tone(64, 32, 48);
        let dominants = dominant_colors(&image, &config(4)).unwrap();
        for pair in dominants.windows(2) {
            assert!(pair[0].proportion >= pair[1].proportion);
        }
        // Index 0 carries the white band's three-quarter share
        assert!(dominants[0].proportion > 0.5);
        assert!(dominants[0].saturation < 0.2);
    }

    #[test]
    fn test_returns_exactly_k_for_uniform_image() {
        let image = RgbImage::from_pixel(32, 32, Rgb([128, 128, 128]));
        let dominants = dominant_colors(&image, &config(5)).unwrap();

        assert_eq!(dominants.len(), 5);
        let sum: f32 = dominants.iter().map(|d| d.proportion).sum();
        assert!((sum - 1.0).abs() < 1e-4);
        assert_eq!(dominants.iter().filter(|d| d.proportion == 0.0).count(), 4);
    }

    #[test]
    fn test_bitwise_deterministic() {
        let image = two_tone(80, 60, 30);
        let config = AnalysisConfig {
            sample_fraction: 0.25,
            ..AnalysisConfig::with_k(3)
        };
        let a = dominant_colors(&image, &config).unwrap();
        let b = dominant_colors(&image, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_changes_sample() {
        // A gradient makes every pixel distinct, so centroids depend on
        // exactly which pixels the Bernoulli mask selects
        let image = RgbImage::from_fn(80, 60, |x, y| {
            Rgb([(3 * x) as u8, (4 * y) as u8, (2 * x + y) as u8])
        });
        let base = AnalysisConfig {
            sample_fraction: 0.25,
            ..AnalysisConfig::with_k(3)
        };
        let reseeded = AnalysisConfig { seed: 7, ..base.clone() };

        let a = dominant_colors(&image, &base).unwrap();
        let b = dominant_colors(&image, &reseeded).unwrap();
        assert!(a != b);
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let image = two_tone(8, 8, 4);
        let result = dominant_colors(&image, &AnalysisConfig::with_k(0));
        assert!(matches!(result, Err(AnalysisError::InvalidParameter { .. })));
    }

    #[test]
    fn test_empty_image_rejected() {
        let image = RgbImage::new(0, 0);
        let result = dominant_colors(&image, &config(3));
        assert!(matches!(result, Err(AnalysisError::InvalidImage { .. })));
    }

    #[test]
    fn test_tiny_image_small_fraction_falls_back() {
        // 1x1 image with a 1% sample: the Bernoulli draw may select
        // nothing, and the fallback must still produce k entries
        let image = RgbImage::from_pixel(1, 1, Rgb([200, 40, 40]));
        let config = AnalysisConfig {
            sample_fraction: 0.01,
            ..AnalysisConfig::with_k(2)
        };
        let dominants = dominant_colors(&image, &config).unwrap();
        assert_eq!(dominants.len(), 2);
        let sum: f32 = dominants.iter().map(|d| d.proportion).sum();
        assert!((sum - 1.0).abs() < 1e-4);
    }
}
