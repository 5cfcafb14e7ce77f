//! Renderers for fitted curves.
//!
//! Both renderers consume the same input: a list of named curves plus a
//! scatter set of raw samples (`PlotData`).
//!
//! - `ascii`: fixed-size character grid for the terminal
//! - `svg`: Plotters chart written to an SVG document

pub mod ascii;
pub mod svg;

pub use ascii::*;
pub use svg::*;

use crate::domain::{Curve, CurveFile, DegreeFit, SampleSet};
use crate::models::evaluate;

/// Label of the noiseless reference curve.
pub const REFERENCE_LABEL: &str = "sin(2πx)";

/// Everything a renderer draws.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    pub curves: Vec<Curve>,
    pub scatter: Vec<(f64, f64)>,
}

impl PlotData {
    /// Plot the samples, one curve per fit over `grid`, and the reference curve last.
    pub fn from_fits(samples: &SampleSet, fits: &[DegreeFit], grid: &[f64]) -> Self {
        let mut curves: Vec<Curve> = fits.iter().map(|fit| fit_curve(fit, grid)).collect();
        curves.push(reference_curve(grid));
        Self {
            curves,
            scatter: samples.points(),
        }
    }

    /// Rebuild the plot from a saved run.
    pub fn from_curve_file(file: &CurveFile) -> Self {
        Self {
            curves: file.curves.clone(),
            scatter: file.samples.points(),
        }
    }

    /// `(min, max)` over every x in the curves and the scatter set.
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        let xs = self
            .curves
            .iter()
            .flat_map(|c| c.points.iter().map(|p| p.0))
            .chain(self.scatter.iter().map(|p| p.0));
        bounds(xs)
    }

    /// `(min, max)` of the y values the plot should frame.
    ///
    /// Samples decide the frame when present, so a wildly oscillating
    /// high-degree fit does not flatten everything else. Without samples the
    /// curves are used.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        if !self.scatter.is_empty() {
            return bounds(self.scatter.iter().map(|p| p.1));
        }
        bounds(self.curves.iter().flat_map(|c| c.points.iter().map(|p| p.1)))
    }
}

/// A fitted polynomial sampled over `grid`.
pub fn fit_curve(fit: &DegreeFit, grid: &[f64]) -> Curve {
    Curve {
        label: fit.label(),
        points: grid.iter().map(|&x| (x, evaluate(x, &fit.coefficients))).collect(),
    }
}

/// The reference function sampled over `grid`.
pub fn reference_curve(grid: &[f64]) -> Curve {
    Curve {
        label: REFERENCE_LABEL.to_string(),
        points: grid.iter().map(|&x| (x, crate::data::reference(x))).collect(),
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() && max > min {
        Some((min, max))
    } else {
        None
    }
}

pub(crate) fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}
