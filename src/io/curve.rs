//! Read/write run JSON files.
//!
//! Run JSON is the "portable" representation of a finished run:
//! - run parameters (sample count, noise, seed)
//! - the samples that were fitted
//! - per-degree coefficients and fit quality
//! - the plotted curves, so `sinefit plot` can redraw without refitting
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;

use crate::domain::{CurveFile, DegreeFit, FitConfig, SampleSet};
use crate::error::AppError;
use crate::plot::PlotData;

/// Assemble the saved form of a run.
pub fn build_curve_file(
    samples: &SampleSet,
    fits: &[DegreeFit],
    plot: &PlotData,
    config: &FitConfig,
) -> CurveFile {
    CurveFile {
        tool: "sinefit".to_string(),
        sample_count: samples.len(),
        noise: config.noise,
        seed: config.seed,
        samples: samples.clone(),
        fits: fits.to_vec(),
        curves: plot.curves.clone(),
    }
}

/// Write a run JSON file.
pub fn write_curve_json(path: &Path, curve: &CurveFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::usage(format!("Failed to create curve JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, curve)
        .map_err(|e| AppError::usage(format!("Failed to write curve JSON: {e}")))?;

    info!("wrote run JSON to {}", path.display());
    Ok(())
}

/// Read a run JSON file.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::usage(format!("Failed to open curve JSON '{}': {e}", path.display())))?;
    let curve: CurveFile = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::usage(format!("Invalid curve JSON: {e}")))?;
    Ok(curve)
}
