//! Real roots of a Chebyshev series on [-1, 1]
//!
//! With `x = cos(theta)` and `z = exp(i theta)`, `T_k(x) = (z^k + z^-k) / 2`,
//! so `sum a_k T_k(x)` times `2 z^N` is the palindromic polynomial with
//! coefficients `[a_N, ..., a_1, 2 a_0, a_1, ..., a_N]`. Its roots on the unit
//! circle are the real roots of the series. They are found as eigenvalues of
//! the balanced companion matrix.

use crate::error::{ChebfunError, Result};
use crate::numeric::ChebScalar;
use log::trace;
use nalgebra::{DMatrix, Schur};
use num_complex::Complex;

/// Relative part of the unit-modulus test `| |z| - 1 | <= atol + rtol`
pub const ROOT_MODULUS_RTOL: f64 = 1e-5;
/// Absolute part of the unit-modulus test
pub const ROOT_MODULUS_ATOL: f64 = 1e-8;
/// Roots closer than this are merged
pub const ROOT_DEDUP_TOLERANCE: f64 = 1e-10;

const SCHUR_MAX_ITERATIONS: usize = 10_000;

/// Base of the balancing scale factors, so scaling is exact
const BALANCE_RADIX: f64 = 2.0;

/// Coefficients (lowest degree first) of the palindromic companion polynomial
pub fn palindromic_coefficients<T: ChebScalar>(coeffs: &[T]) -> Vec<Complex<f64>> {
    let n = coeffs.len();
    let mut out = Vec::with_capacity(2 * n.saturating_sub(1) + 1);
    out.extend(coeffs.iter().rev().map(|c| c.to_complex()));
    if let Some(middle) = out.last_mut() {
        *middle = *middle * 2.0;
    }
    out.extend(coeffs.iter().skip(1).map(|c| c.to_complex()));
    out
}

/// All complex roots of `sum_k p[k] z^k`
pub fn polynomial_roots(p: &[Complex<f64>]) -> Result<Vec<Complex<f64>>> {
    // Trailing exact zeros lower the degree
    let degree = match p.iter().rposition(|c| c.norm() != 0.0) {
        Some(d) => d,
        None => return Ok(Vec::new()),
    };
    if degree == 0 {
        return Ok(Vec::new());
    }

    let lead = p[degree];
    let companion = DMatrix::<Complex<f64>>::from_fn(degree, degree, |i, j| {
        if j == degree - 1 {
            -p[i] / lead
        } else if i == j + 1 {
            Complex::new(1.0, 0.0)
        } else {
            Complex::new(0.0, 0.0)
        }
    });
    let companion = balance(companion);

    // The complex Schur form is upper triangular: eigenvalues on the diagonal
    let schur = Schur::try_new(companion, f64::EPSILON, SCHUR_MAX_ITERATIONS)
        .ok_or(ChebfunError::EigenSolver { size: degree })?;
    let (_, t) = schur.unpack();
    Ok(t.diagonal().iter().copied().collect())
}

/// Diagonal similarity `D^-1 A D` with power-of-two `D` that equalizes the
/// off-diagonal row and column norms (Parlett-Reinsch)
///
/// Eigenvalues are unchanged. Scale factors are powers of two, so no
/// rounding is introduced.
pub fn balance(mut a: DMatrix<Complex<f64>>) -> DMatrix<Complex<f64>> {
    let n = a.nrows();
    let radix2 = BALANCE_RADIX * BALANCE_RADIX;
    let mut converged = false;
    let mut sweeps = 0;
    while !converged {
        converged = true;
        sweeps += 1;
        for i in 0..n {
            let mut c = 0.0;
            let mut r = 0.0;
            for j in (0..n).filter(|&j| j != i) {
                c += a[(j, i)].norm();
                r += a[(i, j)].norm();
            }
            if c == 0.0 || r == 0.0 || !c.is_finite() || !r.is_finite() {
                continue;
            }

            let s = c + r;
            let mut f = 1.0;
            let mut g = r / BALANCE_RADIX;
            while c < g {
                f *= BALANCE_RADIX;
                c *= radix2;
            }
            g = r * BALANCE_RADIX;
            while c >= g {
                f /= BALANCE_RADIX;
                c /= radix2;
            }

            if (c + r) / f < 0.95 * s {
                converged = false;
                a.column_mut(i).scale_mut(f);
                a.row_mut(i).unscale_mut(f);
            }
        }
    }
    trace!("balance: {}x{} companion in {} sweeps", n, n, sweeps);
    a
}

/// Real roots in [-1, 1] of the series with coefficients `coeffs`, ascending
///
/// Returns an empty vector when no companion root lies near the unit circle.
///
/// A multiple root splits into a cluster about `sqrt(eps)` wide for a double
/// root, which is wider than the merge tolerance. An interior double root is
/// then reported more than once, e.g. `(x - 0.3)^2` gives two roots about
/// `2e-8` apart near `0.3`.
pub fn chebyshev_roots<T: ChebScalar>(coeffs: &[T]) -> Result<Vec<f64>> {
    if coeffs.len() < 2 {
        return Ok(Vec::new());
    }
    let complex_roots = polynomial_roots(&palindromic_coefficients(coeffs))?;

    let mut roots: Vec<f64> = complex_roots
        .iter()
        .filter(|z| is_unit_modulus(z.norm()))
        .map(|&z| joukowski(z).clamp(-1.0, 1.0))
        .collect();
    trace!(
        "roots: {} of {} companion roots on the unit circle",
        roots.len(),
        complex_roots.len()
    );

    roots.sort_by(|a, b| a.total_cmp(b));
    roots.dedup_by(|a, b| (*a - *b).abs() < ROOT_DEDUP_TOLERANCE);
    Ok(roots)
}

fn is_unit_modulus(modulus: f64) -> bool {
    (modulus - 1.0).abs() <= ROOT_MODULUS_ATOL + ROOT_MODULUS_RTOL
}

/// `x = Re((z + 1/z) / 2)`, which is `cos(theta)` for `z = exp(i theta)`
fn joukowski(z: Complex<f64>) -> f64 {
    (0.5 * (z + z.inv())).re
}
