//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON
//! - reloaded later for plotting

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Number of samples drawn when no `--samples` flag is given.
pub const DEFAULT_SAMPLE_COUNT: usize = 10;
/// Standard deviation of the Gaussian noise added to each sample.
pub const DEFAULT_NOISE: f64 = 0.1;
/// Degrees fitted when no `--degrees` flag is given.
pub const DEFAULT_DEGREES: [usize; 4] = [0, 1, 3, 9];
/// Number of evenly spaced x values used to draw each curve.
pub const DEFAULT_RESOLUTION: usize = 100;

/// Noisy observations of the reference function.
///
/// `x` is strictly increasing over `[0, 1]` and `x.len() == y.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl SampleSet {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Samples as `(x, y)` pairs, in order.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }
}

/// Fit quality diagnostics, measured on the training samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitQuality {
    /// Half of the sum of squared residuals.
    pub error: f64,
    pub rmse: f64,
    pub n: usize,
}

/// Fit output for a single polynomial degree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeFit {
    pub degree: usize,
    /// `coefficients[i]` multiplies `x^i`.
    pub coefficients: Vec<f64>,
    pub quality: FitQuality,
}

impl DegreeFit {
    pub fn label(&self) -> String {
        format!("Degree {}", self.degree)
    }
}

/// A labelled series of `(x, y)` points for plotting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub sample_count: usize,
    pub noise: f64,
    /// RNG seed for the noise draw. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub degrees: Vec<usize>,
    /// Number of grid points per plotted curve.
    pub resolution: usize,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
    pub summary: bool,

    pub export_svg: Option<PathBuf>,
    pub export_grid: Option<PathBuf>,
    pub export_curve: Option<PathBuf>,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            noise: DEFAULT_NOISE,
            seed: None,
            degrees: DEFAULT_DEGREES.to_vec(),
            resolution: DEFAULT_RESOLUTION,
            plot: true,
            plot_width: 72,
            plot_height: 20,
            summary: false,
            export_svg: None,
            export_grid: None,
            export_curve: None,
        }
    }
}

impl FitConfig {
    /// Reject settings the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.sample_count == 0 {
            return Err(AppError::usage("Sample count must be > 0."));
        }
        if !(self.noise.is_finite() && self.noise >= 0.0) {
            return Err(AppError::usage("Noise level must be a finite value >= 0."));
        }
        if self.degrees.is_empty() {
            return Err(AppError::usage("At least one polynomial degree is required."));
        }
        if self.resolution < 2 {
            return Err(AppError::usage("Plot resolution must be >= 2."));
        }
        Ok(())
    }
}

/// A saved run (JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub sample_count: usize,
    pub noise: f64,
    pub seed: Option<u64>,
    pub samples: SampleSet,
    pub fits: Vec<DegreeFit>,
    /// Reference curve first, then one curve per fitted degree.
    pub curves: Vec<Curve>,
}
