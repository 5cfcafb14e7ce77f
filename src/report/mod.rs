//! Reporting utilities: fit error scores and formatted terminal output.

pub mod format;

pub use format::*;

/// Half of the sum of squared differences between `y` and `y_pred`.
///
/// This is `Σ (y - ŷ)² / 2`, not a mean: it does not divide by the sample count.
/// Extra elements in the longer slice are ignored.
pub fn half_sum_squared_error(y: &[f64], y_pred: &[f64]) -> f64 {
    sum_squared_residuals(y, y_pred) / 2.0
}

/// Root mean squared residual. Empty input scores `0`.
pub fn rmse(y: &[f64], y_pred: &[f64]) -> f64 {
    let n = y.len().min(y_pred.len());
    if n == 0 {
        return 0.0;
    }
    (sum_squared_residuals(y, y_pred) / n as f64).sqrt()
}

fn sum_squared_residuals(y: &[f64], y_pred: &[f64]) -> f64 {
    y.iter()
        .zip(y_pred)
        .map(|(&a, &b)| (a - b) * (a - b))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_score_zero() {
        let y = [0.3, -1.0, 2.5, 7.0];
        assert_eq!(half_sum_squared_error(&y, &y), 0.0);
        assert_eq!(rmse(&y, &y), 0.0);
    }

    #[test]
    fn halves_the_sum_of_squares() {
        // residuals 1, -2, 3 -> (1 + 4 + 9) / 2 = 7
        let y = [1.0, 0.0, 3.0];
        let y_pred = [0.0, 2.0, 0.0];
        assert_eq!(half_sum_squared_error(&y, &y_pred), 7.0);
        assert_eq!(half_sum_squared_error(&y_pred, &y), 7.0);
    }

    #[test]
    fn rmse_divides_by_count() {
        let y = [2.0, 2.0, 2.0, 2.0];
        let y_pred = [0.0, 0.0, 0.0, 0.0];
        assert!((rmse(&y, &y_pred) - 2.0).abs() < 1e-12);
        assert_eq!(rmse(&[], &[]), 0.0);
    }
}
