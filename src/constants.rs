//! Threshold constants and tunable parameters for laundry color analysis
//!
//! The hue/saturation/value cutoffs below are tuned laundry-sorting
//! heuristics, not perceptually-uniform color science. They are grouped
//! here as named constants so each rule is independently testable.

/// Wash-group classification thresholds
///
/// Evaluated in rule order by [`crate::classify::classify`]; the order is
/// load-bearing (WHITE and LIGHT are checked before BRIGHT).
pub mod rules {
    /// WHITE: minimum weighted mean value
    pub const WHITE_MIN_VALUE: f32 = 0.85;

    /// WHITE: maximum weighted mean saturation
    pub const WHITE_MAX_SATURATION: f32 = 0.18;

    /// LIGHT: minimum weighted mean value
    pub const LIGHT_MIN_VALUE: f32 = 0.70;

    /// LIGHT: maximum weighted mean saturation
    pub const LIGHT_MAX_SATURATION: f32 = 0.35;

    /// BRIGHT: minimum weighted mean saturation
    pub const BRIGHT_MIN_SATURATION: f32 = 0.55;

    /// BRIGHT: minimum proportion of red-like dominant colors
    pub const BRIGHT_MIN_RED_RATIO: f32 = 0.25;

    /// DARK: maximum weighted mean value
    pub const DARK_MAX_VALUE: f32 = 0.45;

    /// Bleed score at or above which a color-bleed warning is attached
    pub const BLEED_WARNING_THRESHOLD: f32 = 0.35;
}

/// Hue ranges (degrees) used by the statistics aggregator
///
/// Canonical set for red/blue ratios; the display color names in
/// [`crate::color::naming`] use their own narrower boundaries.
pub mod hue_ranges {
    /// Red-like: hue below this bound
    pub const RED_LOW_MAX_DEG: f32 = 20.0;

    /// Red-like: hue at or above this bound (wraps toward 360)
    pub const RED_HIGH_MIN_DEG: f32 = 340.0;

    /// Blue-like: inclusive lower bound
    pub const BLUE_MIN_DEG: f32 = 200.0;

    /// Blue-like: inclusive upper bound
    pub const BLUE_MAX_DEG: f32 = 260.0;
}

/// Dominant-color extraction defaults
pub mod extraction {
    /// Default number of dominant colors
    pub const DEFAULT_K: usize = 3;

    /// Default Bernoulli pixel sampling probability
    pub const DEFAULT_SAMPLE_FRACTION: f32 = 0.25;

    /// Default random seed for reproducible sampling and initialization
    pub const DEFAULT_SEED: u64 = 42;

    /// Default resize bound applied before clustering
    pub const DEFAULT_MAX_SIDE: u32 = 512;

    /// Maximum k-means iterations per trial
    pub const KMEANS_MAX_ITER: u32 = 20;

    /// Centroid movement (in cluster space) below which k-means stops
    pub const KMEANS_EPSILON: f32 = 1.0;

    /// Number of k-means trials; best within-cluster variance wins
    pub const KMEANS_RESTARTS: u32 = 3;
}

/// Pre-processing parameters
pub mod preprocess {
    /// Additive guard against near-zero channel means in gray-world balance
    pub const GRAY_WORLD_EPSILON: f32 = 1e-6;
}
