//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - generates samples and fits every degree
//! - prints the per-degree errors and plots
//! - writes optional exports

use clap::Parser;
use log::{LevelFilter, debug};

use crate::cli::{Command, FitArgs, PlotArgs};
use crate::domain::FitConfig;
use crate::error::AppError;
use crate::plot::PlotData;

pub mod pipeline;

/// Pixel size of exported SVG charts.
const SVG_SIZE: (u32, u32) = (800, 600);

/// Entry point for the `sinefit` binary.
pub fn run() -> Result<(), AppError> {
    // We want `sinefit` and `sinefit -n 20` to behave like `sinefit fit ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    init_logging(cli.verbose)?;

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = fit_config_from_args(&args);
    debug!("fit config: {config:?}");
    let run = pipeline::run_fit(&config)?;

    println!("{}", crate::report::format_degree_lines(&run.fits));

    if config.summary {
        println!();
        println!(
            "{}",
            crate::report::format_run_summary(&run.samples, &run.fits, &config)
        );
    }

    if config.plot {
        let plot = crate::plot::render_ascii_plot(&run.plot, config.plot_width, config.plot_height);
        println!();
        print!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &config.export_svg {
        crate::plot::write_svg_plot(path, &run.plot, SVG_SIZE.0, SVG_SIZE.1)?;
    }
    if let Some(path) = &config.export_grid {
        crate::io::export::write_grid_csv(path, &run.grid, &run.fits)?;
    }
    if let Some(path) = &config.export_curve {
        let file = crate::io::curve::build_curve_file(&run.samples, &run.fits, &run.plot, &config);
        crate::io::curve::write_curve_json(path, &file)?;
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let file = crate::io::curve::read_curve_json(&args.curve)?;
    let data = PlotData::from_curve_file(&file);

    for fit in &file.fits {
        println!("{}", crate::report::format_degree_line(fit));
    }
    println!();
    print!("{}", crate::plot::render_ascii_plot(&data, args.width, args.height));

    if let Some(path) = &args.svg {
        crate::plot::write_svg_plot(path, &data, SVG_SIZE.0, SVG_SIZE.1)?;
    }
    Ok(())
}

pub fn fit_config_from_args(args: &FitArgs) -> FitConfig {
    FitConfig {
        sample_count: args.sample_count,
        noise: args.noise,
        seed: args.seed,
        degrees: args.degrees.clone(),
        resolution: args.resolution,
        plot: !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        summary: args.summary,
        export_svg: args.svg.clone(),
        export_grid: args.export.clone(),
        export_curve: args.export_curve.clone(),
    }
}

/// Install the global logger on stderr.
///
/// `-v` flags pick the default level; `RUST_LOG` takes precedence when set.
fn init_logging(verbose: u8) -> Result<(), AppError> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .try_init()
        .map_err(|e| AppError::setup(format!("Failed to initialise logging: {e}")))
}

/// Rewrite argv so `sinefit` defaults to `sinefit fit`.
///
/// Rules:
/// - `sinefit`                      -> `sinefit fit`
/// - `sinefit -n 20 ...`            -> `sinefit fit -n 20 ...`
/// - `sinefit --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("fit".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "fit" | "plot");
    if is_subcommand {
        return argv;
    }

    // A leading verbosity flag is global; look past it for the subcommand.
    if is_verbosity_flag(&arg1) {
        let rest = argv.split_off(2);
        let mut rest = rewrite_args(std::iter::once(argv[0].clone()).chain(rest).collect());
        rest.insert(1, arg1);
        return rest;
    }

    // If the first token is a flag, treat it as "fit flags".
    if arg1.starts_with('-') {
        argv.insert(1, "fit".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

fn is_verbosity_flag(arg: &str) -> bool {
    arg == "--verbose" || (arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c == 'v'))
}
