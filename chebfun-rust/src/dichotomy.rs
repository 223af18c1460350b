//! Adaptive degree selection ("dichotomy") and coefficient pruning
//!
//! A function is sampled on `2^k + 1` Chebyshev points for increasing `k`
//! until the two highest Chebyshev coefficients fall below
//! `128 * eps * max|coeffs|`. Each trial resamples from scratch.

use crate::error::ChebfunError;
use crate::numeric::ChebScalar;
use crate::points::chebyshev_points;
use crate::transform::chebpolyfit;
use log::{debug, trace, warn};
use ndarray::{Array1, Array2};

/// Multiplier of machine epsilon in the convergence and pruning threshold
pub const CONVERGENCE_FACTOR: f64 = 128.0;

/// Largest accepted `kmax`; trial degrees `2^k` must fit in a `usize`
pub const MAX_EXPONENT: u32 = usize::BITS - 1;

/// Threshold below which Chebyshev coefficients are deemed negligible
pub fn threshold(scale: f64) -> f64 {
    CONVERGENCE_FACTOR * f64::EPSILON * scale
}

/// Search bounds for the adaptive construction
///
/// Trial exponents run over `kmin..kmax` (exclusive), i.e. `2^k + 1` points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DichotomyConfig {
    /// log2 of the smallest trial degree
    pub kmin: u32,
    /// log2 of the first degree that is not tried
    pub kmax: u32,
    /// Fail with `NoConvergence` instead of returning the last trial
    pub raise_no_convergence: bool,
    /// Expected degree; narrows the search to one or two trials
    pub degree_hint: Option<usize>,
}

impl Default for DichotomyConfig {
    fn default() -> Self {
        Self {
            kmin: 2,
            kmax: 12,
            raise_no_convergence: true,
            degree_hint: None,
        }
    }
}

impl DichotomyConfig {
    pub fn new(kmin: u32, kmax: u32, raise_no_convergence: bool) -> Self {
        Self {
            kmin,
            kmax,
            raise_no_convergence,
            degree_hint: None,
        }
    }

    pub fn with_bounds(mut self, kmin: u32, kmax: u32) -> Self {
        self.kmin = kmin;
        self.kmax = kmax;
        self
    }

    /// Return the last trial instead of failing when the search is exhausted
    pub fn best_effort(mut self) -> Self {
        self.raise_no_convergence = false;
        self
    }

    pub fn with_degree_hint(mut self, degree: usize) -> Self {
        self.degree_hint = Some(degree);
        self
    }

    /// Resolve `(kmin, kmax, raise)` after applying the degree hint
    ///
    /// A hint `N0` tries exactly `k = ceil(log2 N0)` and `k + 1` and never
    /// raises.
    pub fn effective_range(&self) -> (u32, u32, bool) {
        match self.degree_hint {
            Some(hint) => {
                let k = ceil_log2(hint.max(1));
                (k, k + 2, false)
            }
            None => (self.kmin, self.kmax, self.raise_no_convergence),
        }
    }
}

/// `usize::BITS` when the next power of two does not fit
fn ceil_log2(n: usize) -> u32 {
    n.checked_next_power_of_two()
        .map_or(usize::BITS, |p| p.trailing_zeros())
}

/// Evaluate `f` at the `degree + 1` Chebyshev points
///
/// Each call to `f` returns one row of `n_components` values. Errors from
/// `f` are returned as-is.
pub fn sample_function<T, F, E>(f: &mut F, degree: usize, n_components: usize) -> Result<Array2<T>, E>
where
    T: ChebScalar,
    F: FnMut(f64) -> Result<Array1<T>, E>,
    E: From<ChebfunError>,
{
    let points = chebyshev_points(degree);
    let mut samples = Array2::<T>::zeros((points.len(), n_components));
    for (i, &x) in points.iter().enumerate() {
        let row = f(x)?;
        if row.len() != n_components {
            return Err(ChebfunError::InvalidInput(format!(
                "function returned {} components at x = {}, expected {}",
                row.len(),
                x,
                n_components
            ))
            .into());
        }
        samples.row_mut(i).assign(&row);
    }
    Ok(samples)
}

/// Largest modulus in an array (0 for an empty array)
pub fn max_modulus<T: ChebScalar>(data: &Array2<T>) -> f64 {
    data.iter().map(|v| v.modulus()).fold(0.0, f64::max)
}

/// Largest modulus within one coefficient row
fn row_modulus<T: ChebScalar>(data: &Array2<T>, row: usize) -> f64 {
    data.row(row).iter().map(|v| v.modulus()).fold(0.0, f64::max)
}

/// Outcome of an accepted (or best-effort) dichotomy
#[derive(Debug, Clone)]
pub struct Dichotomy<T> {
    /// Chebyshev coefficients of the last trial
    pub coeffs: Array2<T>,
    /// Largest absolute sampled value of the last trial
    pub scale: f64,
    /// Whether the convergence bound was met
    pub converged: bool,
}

/// Compute Chebyshev coefficients of `f` by dichotomy
pub fn dichotomy<T, F, E>(
    f: &mut F,
    n_components: usize,
    config: &DichotomyConfig,
) -> Result<Dichotomy<T>, E>
where
    T: ChebScalar,
    F: FnMut(f64) -> Result<Array1<T>, E>,
    E: From<ChebfunError>,
{
    let (kmin, kmax, raise) = config.effective_range();
    if kmin >= kmax {
        return Err(ChebfunError::InvalidInput(format!(
            "empty dichotomy range: kmin = {}, kmax = {}",
            kmin, kmax
        ))
        .into());
    }
    if kmax > MAX_EXPONENT {
        return Err(ChebfunError::InvalidInput(format!(
            "dichotomy range too large: kmax = {} exceeds {}",
            kmax, MAX_EXPONENT
        ))
        .into());
    }

    let mut last_trial: Option<(Array2<T>, f64, [f64; 2], f64)> = None;
    for k in kmin..kmax {
        let degree = 1usize << k;
        let sampled = sample_function(f, degree, n_components)?;
        let coeffs = chebpolyfit(&sampled);

        let bound = threshold(max_modulus(&coeffs));
        let n = coeffs.nrows();
        let last = [row_modulus(&coeffs, n - 2), row_modulus(&coeffs, n - 1)];
        debug!(
            "dichotomy k={} N={}: bound={:e}, last=[{:e}, {:e}]",
            k, degree, bound, last[0], last[1]
        );

        let scale = max_modulus(&sampled);
        if last.iter().all(|&c| c <= bound) {
            debug!("dichotomy converged at N={}", degree);
            return Ok(Dichotomy {
                coeffs,
                scale,
                converged: true,
            });
        }
        last_trial = Some((coeffs, scale, last, bound));
    }

    // kmin < kmax guarantees at least one trial
    let (coeffs, scale, last, bound) = match last_trial {
        Some(trial) => trial,
        None => unreachable!("dichotomy ran no trial"),
    };
    if raise {
        return Err(ChebfunError::NoConvergence { last, bound }.into());
    }
    warn!(
        "dichotomy did not converge up to N={}, keeping {} coefficients",
        1usize << (kmax - 1),
        coeffs.nrows()
    );
    Ok(Dichotomy {
        coeffs,
        scale,
        converged: false,
    })
}

/// Number of coefficients to keep: one past the last row with a coefficient
/// at or above the threshold, and at least one
///
/// Exact zeros never count, so a zero scale still prunes a zero series.
pub fn cutoff<T: ChebScalar>(coeffs: &Array2<T>, scale: f64) -> usize {
    let bound = threshold(scale);
    let significant = |v: &T| {
        let m = v.modulus();
        m >= bound && m > 0.0
    };
    let last = (0..coeffs.nrows())
        .rev()
        .find(|&i| coeffs.row(i).iter().any(significant))
        .unwrap_or(0);
    trace!("cutoff: keeping {} of {} coefficients", last + 1, coeffs.nrows());
    last + 1
}

/// Drop the trailing negligible coefficients
pub fn prune<T: ChebScalar>(coeffs: &Array2<T>, scale: f64) -> Array2<T> {
    if coeffs.nrows() == 0 {
        return coeffs.clone();
    }
    let n = cutoff(coeffs, scale);
    coeffs.slice(ndarray::s![..n, ..]).to_owned()
}

#[cfg(test)]
#[path = "dichotomy_tests.rs"]
mod tests;
