//! Synthetic sample generation from a noisy sine wave.
//!
//! Each sample is
//!
//! ```text
//! y_i = sin(2π x_i) + ε_i,   ε_i ~ N(0, σ²) independently
//! ```
//!
//! with `x_i` evenly spaced over `[0, 1]` (both ends included).

use std::f64::consts::TAU;

use log::debug;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::SampleSet;
use crate::error::AppError;

/// The noiseless reference function, `sin(2πx)`.
pub fn reference(x: f64) -> f64 {
    (TAU * x).sin()
}

/// `n` evenly spaced values from `start` to `end`, both included.
///
/// `n = 1` yields `[start]`; `n = 0` yields an empty vector.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (n - 1) as f64;
            (0..n)
                .map(|i| {
                    let u = i as f64 / last;
                    start + u * (end - start)
                })
                .collect()
        }
    }
}

/// Generate `n` noisy samples of the reference function.
///
/// A fixed `seed` makes the noise draw reproducible; `None` seeds from entropy.
pub fn generate_noisy_sine(n: usize, noise: f64, seed: Option<u64>) -> Result<SampleSet, AppError> {
    if n == 0 {
        return Err(AppError::usage("Sample count must be > 0."));
    }
    // `Normal::new` accepts a negative std-dev, so the sign is checked here.
    if !(noise.is_finite() && noise >= 0.0) {
        return Err(AppError::usage("Noise level must be a finite value >= 0."));
    }

    let normal = Normal::new(0.0, noise)
        .map_err(|e| AppError::usage(format!("Noise distribution error: {e}")))?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let x = linspace(0.0, 1.0, n);
    let y = x
        .iter()
        .map(|&xi| reference(xi) + normal.sample(&mut rng))
        .collect();

    debug!("generated {n} samples (noise sigma {noise}, seed {seed:?})");
    Ok(SampleSet { x, y })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_ends() {
        let xs = linspace(0.0, 1.0, 5);
        assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn samples_are_evenly_spaced_and_increasing() {
        let s = generate_noisy_sine(10, 0.1, Some(1)).unwrap();
        assert_eq!(s.x.len(), 10);
        assert_eq!(s.y.len(), 10);
        assert_eq!(s.x[0], 0.0);
        assert_eq!(s.x[9], 1.0);
        for w in s.x.windows(2) {
            assert!(w[1] > w[0]);
            assert!((w[1] - w[0] - 1.0 / 9.0).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_noise_is_exact_reference() {
        let s = generate_noisy_sine(25, 0.0, Some(7)).unwrap();
        for (&x, &y) in s.x.iter().zip(&s.y) {
            assert_eq!(y, reference(x), "x = {x}");
        }
    }

    #[test]
    fn same_seed_reproduces_samples() {
        let a = generate_noisy_sine(10, 0.1, Some(42)).unwrap();
        let b = generate_noisy_sine(10, 0.1, Some(42)).unwrap();
        let c = generate_noisy_sine(10, 0.1, Some(43)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.y, c.y);
    }

    #[test]
    fn noise_stays_near_reference() {
        // 200 draws with sigma = 0.1: every residual within 6 sigma.
        let s = generate_noisy_sine(200, 0.1, Some(3)).unwrap();
        for (&x, &y) in s.x.iter().zip(&s.y) {
            assert!((y - reference(x)).abs() < 0.6, "x = {x}, y = {y}");
        }
    }

    #[test]
    fn rejects_invalid_inputs() {
        assert_eq!(generate_noisy_sine(0, 0.1, None).unwrap_err().exit_code(), 2);
        assert_eq!(generate_noisy_sine(5, -1.0, None).unwrap_err().exit_code(), 2);
        assert_eq!(generate_noisy_sine(5, f64::INFINITY, None).unwrap_err().exit_code(), 2);
    }

    #[test]
    fn negative_noise_is_rejected_even_when_seeded() {
        let err = generate_noisy_sine(5, -1.0, Some(1)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains(">= 0"), "{err}");
        assert!(generate_noisy_sine(5, -0.0, Some(1)).is_ok());
    }
}
