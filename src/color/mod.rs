//! Color conversion and naming module
//!
//! This module handles color space conversions between RGB buffers and
//! HSV, display helpers (hex, swatches), and human-readable color names.

pub mod conversion;
pub mod naming;

pub use conversion::{hsv_to_hex, hsv_to_rgb, image_to_hsv, render_swatch, rgb_to_hsv};
pub use naming::color_name;
