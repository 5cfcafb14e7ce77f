//! Polynomial regression.
//!
//! Given:
//! - sample positions `x_i`
//! - observed values `y_i`
//! - a degree `D`
//!
//! we build the monomial design matrix and solve the normal equations with a
//! pseudoinverse, returning `D + 1` coefficients (`w[i]` multiplies `x^i`).
//!
//! A degree at or above the sample count is allowed: the system is then
//! underdetermined and the pseudoinverse picks the least-norm coefficients.

use log::{debug, warn};
use nalgebra::DVector;

use crate::domain::{DegreeFit, FitQuality, SampleSet};
use crate::error::AppError;
use crate::math::{design_matrix, solve_normal_equations};
use crate::models::evaluate_all;
use crate::report::{half_sum_squared_error, rmse};

/// Least-squares polynomial coefficients of the given degree.
pub fn polynomial_regression(x: &[f64], y: &[f64], degree: usize) -> Result<Vec<f64>, AppError> {
    if x.is_empty() {
        return Err(AppError::data("No data points to fit."));
    }
    if x.len() != y.len() {
        return Err(AppError::data(format!(
            "Sample length mismatch: {} x values, {} y values.",
            x.len(),
            y.len()
        )));
    }
    if degree >= x.len() {
        warn!(
            "degree {degree} is not below the sample count {}; using the least-norm solution",
            x.len()
        );
    }

    let design = design_matrix(x, degree);
    let target = DVector::from_column_slice(y);
    let w = solve_normal_equations(&design, &target)?;

    if !w.iter().all(|v| v.is_finite()) {
        return Err(AppError::numeric(format!(
            "Non-finite coefficients for degree {degree}."
        )));
    }

    debug!("degree {degree}: coefficients {:?}", w.as_slice());
    Ok(w.iter().copied().collect())
}

/// Fit one degree and score it on the training samples.
pub fn fit_degree(samples: &SampleSet, degree: usize) -> Result<DegreeFit, AppError> {
    let coefficients = polynomial_regression(&samples.x, &samples.y, degree)?;
    let y_pred = evaluate_all(&samples.x, &coefficients);

    let quality = FitQuality {
        error: half_sum_squared_error(&samples.y, &y_pred),
        rmse: rmse(&samples.y, &y_pred),
        n: samples.len(),
    };

    Ok(DegreeFit {
        degree,
        coefficients,
        quality,
    })
}

/// Fit every degree in order.
pub fn fit_degrees(samples: &SampleSet, degrees: &[usize]) -> Result<Vec<DegreeFit>, AppError> {
    degrees.iter().map(|&d| fit_degree(samples, d)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{generate_noisy_sine, linspace};
    use crate::models::evaluate;

    #[test]
    fn degree_zero_is_the_mean() {
        let x = [0.0, 0.25, 0.5, 0.75, 1.0];
        let y = [1.0, -2.0, 0.5, 4.0, 3.0];
        let w = polynomial_regression(&x, &y, 0).unwrap();
        assert_eq!(w.len(), 1);
        let mean = y.iter().sum::<f64>() / y.len() as f64;
        assert!((w[0] - mean).abs() < 1e-12, "expected {mean}, got {}", w[0]);
    }

    #[test]
    fn recovers_exact_line() {
        let x = linspace(0.0, 1.0, 8);
        let y: Vec<f64> = x.iter().map(|&v| 0.5 - 2.0 * v).collect();
        let w = polynomial_regression(&x, &y, 1).unwrap();
        assert!((w[0] - 0.5).abs() < 1e-10, "got {w:?}");
        assert!((w[1] + 2.0).abs() < 1e-10, "got {w:?}");
    }

    #[test]
    fn interpolates_when_degree_is_n_minus_one() {
        let samples = generate_noisy_sine(4, 0.1, Some(11)).unwrap();
        let fit = fit_degree(&samples, 3).unwrap();
        assert_eq!(fit.coefficients.len(), 4);
        for (&x, &y) in samples.x.iter().zip(&samples.y) {
            let y_hat = evaluate(x, &fit.coefficients);
            assert!((y_hat - y).abs() < 1e-8, "x = {x}: {y_hat} vs {y}");
        }
        assert!(fit.quality.error < 1e-14, "error = {}", fit.quality.error);
    }

    #[test]
    fn repeated_x_gives_least_norm_solution() {
        // Every sample sits at x = 0.5, so only w0 + 0.5 w1 is identified.
        // The least-norm choice is mean * [1, 0.5] / 1.25.
        let x = [0.5, 0.5, 0.5];
        let y = [1.0, 2.0, 3.0];
        let w = polynomial_regression(&x, &y, 1).unwrap();
        assert!((w[0] - 1.6).abs() < 1e-10, "got {w:?}");
        assert!((w[1] - 0.8).abs() < 1e-10, "got {w:?}");
    }

    #[test]
    fn degree_above_sample_count_is_accepted() {
        let samples = generate_noisy_sine(3, 0.1, Some(5)).unwrap();
        let fit = fit_degree(&samples, 6).unwrap();
        assert_eq!(fit.coefficients.len(), 7);
        assert!(fit.coefficients.iter().all(|c| c.is_finite()));
        // Underdetermined: the least-norm solution still passes through every sample.
        assert!(fit.quality.error < 1e-10, "error = {}", fit.quality.error);
    }

    #[test]
    fn degree_nine_nearly_interpolates_ten_samples() {
        // Forming XᵀX squares the Vandermonde condition number, so the
        // degree-9 fit on 10 points is close to, not exactly, interpolating.
        for seed in [1, 7, 42, 2024] {
            let samples = generate_noisy_sine(10, 0.1, Some(seed)).unwrap();
            let constant = fit_degree(&samples, 0).unwrap();
            let fit = fit_degree(&samples, 9).unwrap();
            assert!(fit.quality.error < 1e-4, "seed {seed}: error = {}", fit.quality.error);
            assert!(
                fit.quality.error < 1e-3 * constant.quality.error,
                "seed {seed}: {} vs constant {}",
                fit.quality.error,
                constant.quality.error
            );
        }
    }

    #[test]
    fn rejects_empty_and_mismatched_input() {
        assert_eq!(polynomial_regression(&[], &[], 1).unwrap_err().exit_code(), 3);
        assert_eq!(
            polynomial_regression(&[0.0, 1.0], &[1.0], 1).unwrap_err().exit_code(),
            3
        );
    }

    #[test]
    fn fit_degrees_keeps_requested_order() {
        let samples = generate_noisy_sine(10, 0.1, Some(42)).unwrap();
        let fits = fit_degrees(&samples, &[3, 0, 1]).unwrap();
        let degrees: Vec<usize> = fits.iter().map(|f| f.degree).collect();
        assert_eq!(degrees, vec![3, 0, 1]);
        for f in &fits {
            assert_eq!(f.coefficients.len(), f.degree + 1);
            assert_eq!(f.quality.n, 10);
        }
    }

    #[test]
    fn higher_degree_fits_training_data_better() {
        let samples = generate_noisy_sine(10, 0.1, Some(42)).unwrap();
        let low = fit_degree(&samples, 0).unwrap();
        let high = fit_degree(&samples, 9).unwrap();
        assert!(
            high.quality.error < low.quality.error,
            "degree 9 error {} should be below degree 0 error {}",
            high.quality.error,
            low.quality.error
        );
    }
}
