//! Shared helpers for the unit tests

use crate::numeric::ChebScalar;
use num_complex::Complex;

/// Deterministic linear congruential generator for reproducible test series
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next value in [-1, 1)
    pub fn next_signed(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let unit = ((self.state >> 11) as f64) / ((1u64 << 53) as f64);
        2.0 * unit - 1.0
    }

    pub fn next<T: RandomGenerate>(&mut self) -> T {
        T::generate(self)
    }
}

pub trait RandomGenerate {
    fn generate(rng: &mut SimpleRng) -> Self;
}

impl RandomGenerate for f64 {
    fn generate(rng: &mut SimpleRng) -> Self {
        rng.next_signed()
    }
}

impl RandomGenerate for Complex<f64> {
    fn generate(rng: &mut SimpleRng) -> Self {
        let re = rng.next_signed();
        let im = rng.next_signed();
        Complex::new(re, im)
    }
}

/// `n` random Chebyshev coefficients with `|c_k| <= rate^k`
pub fn decaying_coefficients<T: RandomGenerate + ChebScalar>(seed: u64, n: usize, rate: f64) -> Vec<T> {
    let mut rng = SimpleRng::new(seed);
    (0..n).map(|k| rng.next::<T>() * rate.powi(k as i32)).collect()
}

/// Clenshaw summation of `sum c_k T_k(x)`
pub fn clenshaw<T: ChebScalar>(coeffs: &[T], x: f64) -> T {
    let (mut b1, mut b2) = (T::zero(), T::zero());
    for &c in coeffs.iter().skip(1).rev() {
        let bk = b1 * (2.0 * x) - b2 + c;
        b2 = b1;
        b1 = bk;
    }
    match coeffs.first() {
        Some(&c0) => b1 * x - b2 + c0,
        None => T::zero(),
    }
}

/// Largest modulus of the pointwise difference
pub fn max_error<T: ChebScalar>(a: &[T], b: &[T]) -> f64 {
    assert_eq!(a.len(), b.len(), "length mismatch");
    a.iter()
        .zip(b)
        .map(|(&x, &y)| (x - y).modulus())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_is_reproducible_and_bounded() {
        let a: Vec<f64> = decaying_coefficients(7, 10, 0.5);
        let b: Vec<f64> = decaying_coefficients(7, 10, 0.5);
        assert_eq!(a, b);
        for (k, c) in a.iter().enumerate() {
            assert!(c.abs() <= 0.5_f64.powi(k as i32));
        }
    }

    #[test]
    fn test_clenshaw_basis() {
        // T_3(0.5) = 4 * 0.125 - 3 * 0.5 = -1
        assert!((clenshaw(&[0.0, 0.0, 0.0, 1.0], 0.5) + 1.0).abs() < 1e-15);
        assert_eq!(clenshaw::<f64>(&[], 0.3), 0.0);
    }
}
