//! Command-line parsing for the sine-wave polynomial fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the fitting/math code.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::{DEFAULT_DEGREES, DEFAULT_NOISE, DEFAULT_RESOLUTION, DEFAULT_SAMPLE_COUNT};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "sinefit", version, about = "Polynomial least-squares fits of a noisy sine wave")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sample the sine wave, fit each degree, print errors, and optionally plot/export.
    Fit(FitArgs),
    /// Re-plot a run JSON written by `sinefit fit --export-curve`.
    Plot(PlotArgs),
}

/// Options for sampling and fitting.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Number of evenly spaced samples on [0, 1].
    #[arg(short = 'n', long = "samples", default_value_t = DEFAULT_SAMPLE_COUNT)]
    pub sample_count: usize,

    /// Standard deviation of the Gaussian noise.
    #[arg(long, default_value_t = DEFAULT_NOISE)]
    pub noise: f64,

    /// Random seed for the noise draw (omit for a fresh draw every run).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Polynomial degrees to fit, comma separated, in output order.
    #[arg(short = 'd', long, value_delimiter = ',', default_values_t = DEFAULT_DEGREES)]
    pub degrees: Vec<usize>,

    /// Number of evenly spaced points used to draw each curve.
    #[arg(long, default_value_t = DEFAULT_RESOLUTION)]
    pub resolution: usize,

    /// Disable the terminal plot (drawn by default).
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Print a per-degree diagnostics table (error, RMSE, coefficients).
    #[arg(long)]
    pub summary: bool,

    /// Write the plot as an SVG file.
    #[arg(long, value_name = "SVG")]
    pub svg: Option<PathBuf>,

    /// Export the plotted curve grid to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export the run (samples, coefficients, curves) to JSON.
    #[arg(long = "export-curve", value_name = "JSON")]
    pub export_curve: Option<PathBuf>,
}

/// Options for plotting a saved run.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Run JSON file produced by `sinefit fit --export-curve`.
    #[arg(long, value_name = "JSON")]
    pub curve: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Also write the plot as an SVG file.
    #[arg(long, value_name = "SVG")]
    pub svg: Option<PathBuf>,
}
