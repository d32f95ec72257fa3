//! Weighted summary statistics over a dominant-color list
//!
//! Reduces the extractor's ranked palette to the scalars the classifier
//! consumes. Pure functions; statistics are recomputed per classification
//! call and never cached.

use crate::constants::hue_ranges;
use crate::extract::DominantColor;
use serde::{Deserialize, Serialize};

/// Decision-relevant summary of one image's dominant colors
///
/// `bleed_score = mean_saturation * (1 - 2*|mean_value - 0.5|)` rewards
/// saturated mid-brightness colors, the riskiest combination for dye
/// transfer. Its natural range is `[-mean_saturation, mean_saturation]`;
/// clamp to `[0, 1]` if you need a probability-like score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStatistics {
    /// Proportion-weighted mean saturation, [0, 1]
    pub mean_saturation: f32,
    /// Proportion-weighted mean value, [0, 1]
    pub mean_value: f32,
    /// Summed proportion of red-like dominant colors
    pub red_ratio: f32,
    /// Summed proportion of blue-like dominant colors
    pub blue_ratio: f32,
    /// Dye-transfer risk estimate
    pub bleed_score: f32,
}

/// Red-like hues sit near the hue-wheel origin on either side
fn is_red_like(hue_deg: f32) -> bool {
    hue_deg < hue_ranges::RED_LOW_MAX_DEG || hue_deg >= hue_ranges::RED_HIGH_MIN_DEG
}

fn is_blue_like(hue_deg: f32) -> bool {
    (hue_ranges::BLUE_MIN_DEG..=hue_ranges::BLUE_MAX_DEG).contains(&hue_deg)
}

/// Reduce a dominant-color list to summary statistics
///
/// Returns `None` for an empty list; consumers check for absence rather
/// than assuming a value. With at least one dominant color the proportions
/// sum to 1 and every field is populated.
pub fn aggregate(dominants: &[DominantColor]) -> Option<ColorStatistics> {
    if dominants.is_empty() {
        return None;
    }

    let mut mean_saturation = 0.0;
    let mut mean_value = 0.0;
    let mut red_ratio = 0.0;
    let mut blue_ratio = 0.0;
    for dominant in dominants {
        mean_saturation += dominant.saturation * dominant.proportion;
        mean_value += dominant.value * dominant.proportion;
        if is_red_like(dominant.hue) {
            red_ratio += dominant.proportion;
        }
        if is_blue_like(dominant.hue) {
            blue_ratio += dominant.proportion;
        }
    }

    let bleed_score = mean_saturation * (1.0 - (mean_value - 0.5).abs() * 2.0);

    Some(ColorStatistics {
        mean_saturation,
        mean_value,
        red_ratio,
        blue_ratio,
        bleed_score,
    })
}
