//! `sinefit` library crate.
//!
//! Polynomial least-squares fits of a noisy `sin(2πx)` sample. The binary
//! (`sinefit`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the sampler, fitter, evaluator and scorer are reusable on their own

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
