//! Formatted terminal output.
//!
//! Formatting lives here so the fitting code stays free of presentation and
//! output changes stay localized.

use crate::domain::{DegreeFit, FitConfig, SampleSet};

/// One console line per fitted degree: `Degree: {d}, Error: {value}`.
pub fn format_degree_line(fit: &DegreeFit) -> String {
    format!("Degree: {}, Error: {}", fit.degree, fit.quality.error)
}

/// All degree lines, in fit order.
pub fn format_degree_lines(fits: &[DegreeFit]) -> String {
    fits.iter()
        .map(format_degree_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the run summary (sample parameters + per-degree diagnostics).
pub fn format_run_summary(samples: &SampleSet, fits: &[DegreeFit], config: &FitConfig) -> String {
    let mut out = String::new();

    out.push_str("=== sinefit - polynomial fits of sin(2πx) ===\n");
    out.push_str(&format!(
        "Samples: n={} | noise σ={} | seed={}\n",
        samples.len(),
        config.noise,
        config
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "entropy".to_string()),
    ));

    out.push_str("\nFit diagnostics:\n");
    out.push_str(&format!(
        "  {:<8} {:>14} {:>12}  {}\n",
        "degree", "error", "rmse", "coefficients (x^0..)"
    ));
    for fit in fits {
        let coeffs = fit
            .coefficients
            .iter()
            .map(|c| format!("{c:.4e}"))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "  {:<8} {:>14.6e} {:>12.4e}  [{}]\n",
            fit.degree, fit.quality.error, fit.quality.rmse, coeffs
        ));
    }

    out
}
