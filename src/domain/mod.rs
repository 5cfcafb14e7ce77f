//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - sample and curve containers (`SampleSet`, `Curve`)
//! - fit outputs (`DegreeFit`, `FitQuality`)
//! - run configuration (`FitConfig`) and the saved run schema (`CurveFile`)

pub mod types;

pub use types::*;
