//! Closed-form least squares via the normal equations.
//!
//! We solve
//!
//! ```text
//! minimize ‖X β - y‖²
//! ```
//!
//! as `β = pinv(XᵀX) · Xᵀ · y`.
//!
//! Implementation choices:
//! - The Moore–Penrose pseudoinverse is built from an SVD, so a singular or
//!   near-singular `XᵀX` (degree ≥ sample count, repeated x values) yields the
//!   least-norm solution instead of failing.
//! - Singular values below `PINV_RCOND · σ_max` are treated as zero, matching
//!   the usual relative cutoff for pseudoinverses.
//! - Forming `XᵀX` squares the condition number. High-degree fits on `[0, 1]`
//!   therefore lose precision; that is accepted, not corrected.

use log::{debug, trace};
use nalgebra::{DMatrix, DVector};

use crate::error::AppError;

/// Relative cutoff for small singular values.
pub const PINV_RCOND: f64 = 1e-15;

/// Moore–Penrose pseudoinverse of `m`.
pub fn pseudo_inverse(m: &DMatrix<f64>) -> Result<DMatrix<f64>, AppError> {
    let svd = m.clone().svd(true, true);
    let sigma_max = svd.singular_values.iter().copied().fold(0.0_f64, f64::max);
    let tol = PINV_RCOND * sigma_max;

    let rank = svd.singular_values.iter().filter(|&&s| s > tol).count();
    if rank < m.nrows().min(m.ncols()) {
        debug!(
            "pseudo-inverse of {}x{} matrix is rank deficient (rank {rank}, tol {tol:e})",
            m.nrows(),
            m.ncols()
        );
    }
    trace!("singular values: {:?}", svd.singular_values.as_slice());

    svd.pseudo_inverse(tol)
        .map_err(|e| AppError::numeric(format!("Pseudo-inverse failed: {e}")))
}

/// Solve the least squares problem through the normal equations.
pub fn solve_normal_equations(x: &DMatrix<f64>, y: &DVector<f64>) -> Result<DVector<f64>, AppError> {
    if x.nrows() != y.len() {
        return Err(AppError::data(format!(
            "Design matrix has {} rows but {} observations were given.",
            x.nrows(),
            y.len()
        )));
    }

    let xt = x.transpose();
    let gram = &xt * x;
    let pinv = pseudo_inverse(&gram)?;
    Ok(pinv * (xt * y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let beta = solve_normal_equations(&x, &y).unwrap();
        assert!((beta[0] - 2.0).abs() < 1e-10, "got {}", beta[0]);
        assert!((beta[1] - 3.0).abs() < 1e-10, "got {}", beta[1]);
    }

    #[test]
    fn pseudo_inverse_of_invertible_matrix_is_inverse() {
        let m = DMatrix::from_row_slice(2, 2, &[4.0, 7.0, 2.0, 6.0]);
        let p = pseudo_inverse(&m).unwrap();
        let id = &m * &p;
        for r in 0..2 {
            for c in 0..2 {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert!((id[(r, c)] - expected).abs() < 1e-12, "I[{r}, {c}] = {}", id[(r, c)]);
            }
        }
    }

    #[test]
    fn pseudo_inverse_of_singular_matrix_is_least_norm() {
        // rank-1: [[1, 1], [1, 1]] has pinv [[0.25, 0.25], [0.25, 0.25]].
        let m = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, 1.0]);
        let p = pseudo_inverse(&m).unwrap();
        for v in p.iter() {
            assert!((v - 0.25).abs() < 1e-12, "got {v}");
        }
    }

    #[test]
    fn mismatched_rows_are_rejected() {
        let x = DMatrix::from_row_slice(2, 1, &[1.0, 1.0]);
        let y = DVector::from_row_slice(&[1.0, 2.0, 3.0]);
        let err = solve_normal_equations(&x, &y).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
