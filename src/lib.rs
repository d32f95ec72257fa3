//! # Laundry Colors
//!
//! A Rust crate for deciding which garments can be washed together, from a
//! photograph of mixed clothing.
//!
//! This library estimates wash groups by:
//! - Downscaling and gray-world balancing the photo to reduce lighting bias
//! - Clustering a reproducible pixel sample in HSV space (seeded k-means)
//! - Reducing the dominant colors to proportion-weighted statistics
//! - Applying an ordered rule table for a wash-group verdict and a
//!   color-bleed risk score
//!
//! Image decoding and any interactive review of detected colors are the
//! caller's responsibility; the core consumes a decoded 8-bit RGB buffer
//! and performs no I/O.
//!
//! ## Example
//!
//! ```rust,no_run
//! use laundry_colors::{analyze_image, AnalysisConfig};
//!
//! let photo = image::open("basket.jpg")?.into_rgb8();
//! let report = analyze_image(&photo, &AnalysisConfig::default())?;
//! println!("{}: {}", report.classification.group, report.classification.advice);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use image::{DynamicImage, RgbImage};
use serde::{Deserialize, Serialize};

pub mod classify;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod preprocess;
pub mod separation;
pub mod stats;

pub use classify::{classify, Classification, WashGroup};
pub use config::{AnalysisConfig, KmeansConfig};
pub use error::{AnalysisError, Result};
pub use extract::{dominant_colors, DominantColor};
pub use separation::{garment_group, load_decision, GarmentGroup, LoadDecision};
pub use stats::{aggregate, ColorStatistics};

/// Complete analysis result for one image
///
/// Bundles the classification with the underlying dominant colors and
/// statistics so consumers can render swatch tables next to the verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Dominant colors, descending by proportion
    pub dominants: Vec<DominantColor>,
    /// Aggregated statistics the verdict was derived from
    pub statistics: ColorStatistics,
    /// Wash-group verdict
    pub classification: Classification,
}

/// Run the full analysis pipeline on a decoded image
///
/// Pre-processes the buffer, extracts `config.k` dominant colors,
/// aggregates them, and classifies the result. Deterministic for a fixed
/// `(image, config)`.
///
/// # Errors
///
/// Returns [`AnalysisError`] if the configuration is malformed or the
/// buffer is zero-sized. Degenerate content (a uniform photo, fewer
/// distinct colors than `config.k`) still produces a valid report.
pub fn analyze_image(image: &RgbImage, config: &AnalysisConfig) -> Result<AnalysisReport> {
    let dominants = extract::dominant_colors(image, config)?;
    let statistics = stats::aggregate(&dominants).ok_or_else(|| AnalysisError::ProcessingError {
        message: "no dominant colors extracted".to_string(),
    })?;
    let classification = classify::classify(&statistics);

    Ok(AnalysisReport {
        dominants,
        statistics,
        classification,
    })
}

/// Borrow the RGB8 buffer of a decoded image, rejecting other layouts
///
/// Grayscale and alpha-carrying inputs are the loader's job to convert;
/// the core refuses to coerce them silently.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidImage`] for any layout other than
/// 8-bit RGB.
pub fn require_rgb8(image: &DynamicImage) -> Result<&RgbImage> {
    match image {
        DynamicImage::ImageRgb8(rgb) => Ok(rgb),
        other => Err(AnalysisError::invalid_image(format!(
            "expected 8-bit RGB, got {:?}; convert in the loader before analysis",
            other.color()
        ))),
    }
}
