//! Monomial basis for polynomial regression.
//!
//! The design matrix for a degree-`D` fit on `N` samples is the `N × (D+1)`
//! Vandermonde matrix with increasing powers:
//!
//! ```text
//! X[r, c] = x_r^c,   c = 0..=D
//! ```
//!
//! Column 0 is the intercept (all ones, including at `x = 0`).

use nalgebra::DMatrix;

/// Build the increasing-power Vandermonde design matrix.
pub fn design_matrix(x: &[f64], degree: usize) -> DMatrix<f64> {
    DMatrix::from_fn(x.len(), degree + 1, |r, c| monomial(x[r], c))
}

/// `x^power`, with `0^0 = 1`.
pub fn monomial(x: f64, power: usize) -> f64 {
    match i32::try_from(power) {
        Ok(p) => x.powi(p),
        Err(_) => x.powf(power as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn design_matrix_has_increasing_powers() {
        let x = [0.0, 0.5, 2.0];
        let m = design_matrix(&x, 2);
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 3);

        let expected = [[1.0, 0.0, 0.0], [1.0, 0.5, 0.25], [1.0, 2.0, 4.0]];
        for (r, row) in expected.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                assert_eq!(m[(r, c)], v, "X[{r}, {c}]");
            }
        }
    }

    #[test]
    fn degree_zero_is_intercept_only() {
        let m = design_matrix(&[0.1, 0.2], 0);
        assert_eq!(m.ncols(), 1);
        assert!(m.iter().all(|&v| v == 1.0));
    }
}
