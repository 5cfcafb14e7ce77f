//! Polynomial evaluation.
//!
//! Evaluation is a plain power sum:
//!
//! ```text
//! y(x) = Σ w[i] · x^i
//! ```
//!
//! This is not Horner's scheme. It is less stable for high degrees, but each
//! term is the same quantity the design matrix column holds, so predictions
//! line up with what the fitter minimized.

use crate::math::monomial;

/// Evaluate the polynomial with coefficients `w` at `x`.
///
/// An empty coefficient vector is the zero polynomial.
pub fn evaluate(x: f64, w: &[f64]) -> f64 {
    w.iter()
        .enumerate()
        .map(|(i, &c)| c * monomial(x, i))
        .sum()
}

/// Evaluate the polynomial at every value in `xs`, preserving order.
pub fn evaluate_all(xs: &[f64], w: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| evaluate(x, w)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_polynomial_is_constant() {
        let w = [2.5];
        for &x in &[-3.0, 0.0, 0.25, 1.0, 100.0] {
            assert_eq!(evaluate(x, &w), 2.5);
        }
    }

    #[test]
    fn evaluates_power_sum() {
        // 1 - 2x + 3x^2 at x = 2 -> 1 - 4 + 12 = 9
        let w = [1.0, -2.0, 3.0];
        assert!((evaluate(2.0, &w) - 9.0).abs() < 1e-12);
        assert_eq!(evaluate(0.0, &w), 1.0);
    }

    #[test]
    fn evaluate_all_keeps_shape() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = evaluate_all(&xs, &[0.0, 1.0]);
        assert_eq!(ys, vec![0.0, 1.0, 2.0, 3.0]);
        assert!(evaluate_all(&[], &[1.0]).is_empty());
    }

    #[test]
    fn empty_coefficients_are_zero() {
        assert_eq!(evaluate(0.7, &[]), 0.0);
    }
}
