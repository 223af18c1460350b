//! Common test utilities
#![allow(dead_code)]

use chebfun_rust::{ChebScalar, Chebfun};
use num_complex::Complex;

/// Trait for computing error magnitude (real value)
pub trait ErrorNorm {
    fn error_norm(self) -> f64;
}

impl ErrorNorm for f64 {
    fn error_norm(self) -> f64 {
        self.abs()
    }
}

impl ErrorNorm for Complex<f64> {
    fn error_norm(self) -> f64 {
        self.norm()
    }
}

/// `n` evenly spaced points strictly inside (-1, 1)
pub fn interior_grid(n: usize) -> Vec<f64> {
    (1..=n).map(|i| -1.0 + 2.0 * i as f64 / (n + 1) as f64).collect()
}

/// Largest deviation between a scalar Chebfun and `f` on an interior grid
pub fn max_deviation<T, F>(chebfun: &Chebfun<T>, f: F) -> f64
where
    T: ChebScalar + ErrorNorm,
    F: Fn(f64) -> T,
{
    interior_grid(101)
        .into_iter()
        .map(|x| (chebfun.eval(x) - f(x)).error_norm())
        .fold(0.0, f64::max)
}
