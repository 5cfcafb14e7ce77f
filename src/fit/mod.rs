//! Curve fitting orchestration.
//!
//! Responsibilities:
//!
//! - least-squares polynomial regression for a single degree
//! - fitting and scoring a list of degrees on one sample set

pub mod fitter;

pub use fitter::*;
