//! Differentiation and integration directly on Chebyshev coefficients
//!
//! Coefficient arrays have shape `(n_coeffs, n_components)`; every recurrence
//! acts row-wise so vector-valued series are handled component by component.

use crate::numeric::ChebScalar;
use ndarray::{Array1, Array2};

/// Coefficients of the derivative of a Chebyshev series
///
/// For `m` input coefficients the result has `m - 1` rows (one zero row for a
/// constant). With `s_k = 2k a_k` the recurrence is
/// `b_k = s_{k+1} + b_{k+2}` downwards from `k = m-2`, followed by `b_0 /= 2`.
pub fn differentiator<T: ChebScalar>(coeffs: &Array2<T>) -> Array2<T> {
    let (m, ncomp) = coeffs.dim();
    if m <= 1 {
        return Array2::zeros((1, ncomp));
    }

    // One extra zero row so b[k + 2] is always addressable
    let mut b = Array2::<T>::zeros((m + 1, ncomp));
    for k in (0..m - 1).rev() {
        let factor = 2.0 * (k + 1) as f64;
        for c in 0..ncomp {
            b[[k, c]] = coeffs[[k + 1, c]] * factor + b[[k + 2, c]];
        }
    }
    for c in 0..ncomp {
        b[[0, c]] = b[[0, c]] * 0.5;
    }
    b.slice_move(ndarray::s![..m - 1, ..])
}

/// Coefficients of the `n`-th derivative
pub fn differentiate_coefficients<T: ChebScalar>(coeffs: &Array2<T>, n: usize) -> Array2<T> {
    let mut out = coeffs.clone();
    for _ in 0..n {
        out = differentiator(&out);
    }
    out
}

/// Coefficients of the antiderivative that vanishes at `x = -1`
///
/// Returns `m + 1` rows: `b_1 = a_0 - a_2/2`, `b_k = (a_{k-1} - a_{k+1}) / 2k`
/// for `k >= 2` (out-of-range `a` read as zero), and `b_0` chosen so that
/// `sum_k b_k T_k(-1) = sum_k (-1)^k b_k = 0`.
pub fn integrator<T: ChebScalar>(coeffs: &Array2<T>) -> Array2<T> {
    let (m, ncomp) = coeffs.dim();
    let a = |k: usize, c: usize| -> T {
        if k < m {
            coeffs[[k, c]]
        } else {
            T::zero()
        }
    };

    let mut b = Array2::<T>::zeros((m + 1, ncomp));
    for c in 0..ncomp {
        b[[1, c]] = a(0, c) - a(2, c) * 0.5;
        for k in 2..=m {
            b[[k, c]] = (a(k - 1, c) - a(k + 1, c)) / (2.0 * k as f64);
        }
        // b_0 = -sum_{k>=1} (-1)^k b_k
        let mut at_minus_one = T::zero();
        for k in 1..=m {
            if k % 2 == 0 {
                at_minus_one = at_minus_one + b[[k, c]];
            } else {
                at_minus_one = at_minus_one - b[[k, c]];
            }
        }
        b[[0, c]] = -at_minus_one;
    }
    b
}

/// Definite integral over [-1, 1] of each component (Clenshaw-Curtis)
///
/// Only even coefficients contribute: `int T_k = 2 / (1 - k^2)` for even `k`.
pub fn definite_integral<T: ChebScalar>(coeffs: &Array2<T>) -> Array1<T> {
    let (m, ncomp) = coeffs.dim();
    let mut total = Array1::<T>::zeros(ncomp);
    for k in (0..m).step_by(2) {
        let weight = 2.0 / (1.0 - (k * k) as f64);
        for c in 0..ncomp {
            total[c] = total[c] + coeffs[[k, c]] * weight;
        }
    }
    total
}

#[cfg(test)]
#[path = "calculus_tests.rs"]
mod tests;
