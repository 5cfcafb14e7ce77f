//! Shared "fit pipeline" logic.
//!
//! Keeping this in one place avoids mixing the core workflow with presentation:
//! sample generation -> per-degree fit -> scoring -> plot curves
//!
//! The CLI then only decides what to print, draw and export.

use log::info;

use crate::data::{generate_noisy_sine, linspace};
use crate::domain::{DegreeFit, FitConfig, SampleSet};
use crate::error::AppError;
use crate::fit::fit_degrees;
use crate::plot::PlotData;

/// All computed outputs of a single `sinefit fit` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub samples: SampleSet,
    /// One entry per configured degree, in configured order.
    pub fits: Vec<DegreeFit>,
    /// Evenly spaced x values the curves are drawn on.
    pub grid: Vec<f64>,
    pub plot: PlotData,
}

/// Execute the full fitting pipeline and return the computed outputs.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    config.validate()?;

    // 1) Draw the noisy samples.
    let samples = generate_noisy_sine(config.sample_count, config.noise, config.seed)?;

    run_fit_with_samples(config, samples)
}

/// Execute the fitting pipeline on pre-drawn samples.
pub fn run_fit_with_samples(config: &FitConfig, samples: SampleSet) -> Result<RunOutput, AppError> {
    // 2) Fit and score every degree on the training samples.
    let fits = fit_degrees(&samples, &config.degrees)?;
    for fit in &fits {
        info!(
            "degree {}: error {:.6e}, rmse {:.6e}",
            fit.degree, fit.quality.error, fit.quality.rmse
        );
    }

    // 3) Sample each polynomial (and the reference) on the plot grid.
    let grid = linspace(0.0, 1.0, config.resolution);
    let plot = PlotData::from_fits(&samples, &fits, &grid);

    Ok(RunOutput {
        samples,
        fits,
        grid,
        plot,
    })
}
