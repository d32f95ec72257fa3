//! Human-readable color names for detected dominant colors
//!
//! Maps an HSV color to a coarse display name so the review UI can label
//! each detected color ("Red", "Light Gray", ...). The hue boundaries are
//! display heuristics, intentionally narrower than the red/blue ranges the
//! statistics aggregator uses for bleed-risk ratios.

use palette::Hsv;

/// Achromatic cutoffs: white needs high value and low saturation
const WHITE_MIN_VALUE: f32 = 0.9;
const WHITE_MAX_SATURATION: f32 = 0.15;

/// Below this value everything reads as black
const BLACK_MAX_VALUE: f32 = 0.15;

/// Below this saturation a mid-value color reads as gray
const GRAY_MAX_SATURATION: f32 = 0.2;

/// Coarse color name for an HSV color
///
/// # Arguments
///
/// * `hsv` - Color with hue in degrees, saturation/value in [0, 1]
///
/// # Returns
///
/// A static display name; achromatic checks (white, black, gray) run
/// before the hue wheel is consulted.
pub fn color_name(hsv: Hsv) -> &'static str {
    let hue = hsv.hue.into_positive_degrees();
    let sat = hsv.saturation;
    let val = hsv.value;

    if val > WHITE_MIN_VALUE && sat < WHITE_MAX_SATURATION {
        return "White";
    }
    if val < BLACK_MAX_VALUE {
        return "Black";
    }
    if sat < GRAY_MAX_SATURATION {
        return "Gray";
    }

    if !(15.0..345.0).contains(&hue) {
        "Red"
    } else if hue < 45.0 {
        "Orange"
    } else if hue < 70.0 {
        "Yellow"
    } else if hue < 170.0 {
        "Green"
    } else if hue < 200.0 {
        "Cyan"
    } else if hue < 255.0 {
        "Blue"
    } else if hue < 290.0 {
        "Purple"
    } else {
        "Magenta"
    }
}
