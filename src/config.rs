//! Configuration for the laundry_colors analysis pipeline.
//!
//! All tunable parameters for one analysis run, serializable to JSON for
//! reproducible experiments.
//!
//! # Configuration Loading
//!
//! ```no_run
//! use laundry_colors::AnalysisConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AnalysisConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = AnalysisConfig::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Malformed values fail fast in [`AnalysisConfig::validate`] before any
//! clustering work begins.

use crate::constants::extraction;
use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

/// Complete configuration for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of dominant colors to extract
    pub k: usize,

    /// Bernoulli pixel sampling probability, in (0, 1]
    pub sample_fraction: f32,

    /// Seed for the sampling and initialization random generator
    pub seed: u64,

    /// Longest image side after pre-processing; larger inputs are downscaled
    pub max_side: u32,

    /// k-means clustering parameters
    #[serde(default)]
    pub kmeans: KmeansConfig,
}

/// k-means convergence and restart parameters.
///
/// Bounds worst-case clustering latency together with
/// [`AnalysisConfig::sample_fraction`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KmeansConfig {
    /// Maximum Lloyd iterations per trial
    pub max_iter: u32,

    /// Centroid movement threshold (cluster-space units) for convergence
    pub epsilon: f32,

    /// Number of independent trials; the lowest-variance trial wins
    pub restarts: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            k: extraction::DEFAULT_K,
            sample_fraction: extraction::DEFAULT_SAMPLE_FRACTION,
            seed: extraction::DEFAULT_SEED,
            max_side: extraction::DEFAULT_MAX_SIDE,
            kmeans: KmeansConfig::default(),
        }
    }
}

impl Default for KmeansConfig {
    fn default() -> Self {
        Self {
            max_iter: extraction::KMEANS_MAX_ITER,
            epsilon: extraction::KMEANS_EPSILON,
            restarts: extraction::KMEANS_RESTARTS,
        }
    }
}

impl AnalysisConfig {
    /// Create a configuration with a given cluster count, other fields default
    pub fn with_k(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }

    /// Check all parameters before any clustering work begins
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidParameter`] for the first value found
    /// outside its accepted range.
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(AnalysisError::invalid_parameter("k", self.k));
        }
        if !(self.sample_fraction > 0.0 && self.sample_fraction <= 1.0) {
            return Err(AnalysisError::invalid_parameter(
                "sample_fraction",
                self.sample_fraction,
            ));
        }
        if self.max_side == 0 {
            return Err(AnalysisError::invalid_parameter("max_side", self.max_side));
        }
        if self.kmeans.max_iter == 0 {
            return Err(AnalysisError::invalid_parameter(
                "kmeans.max_iter",
                self.kmeans.max_iter,
            ));
        }
        if !(self.kmeans.epsilon >= 0.0) {
            return Err(AnalysisError::invalid_parameter(
                "kmeans.epsilon",
                self.kmeans.epsilon,
            ));
        }
        if self.kmeans.restarts == 0 {
            return Err(AnalysisError::invalid_parameter(
                "kmeans.restarts",
                self.kmeans.restarts,
            ));
        }
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
