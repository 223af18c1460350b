//! Transforms between values at Chebyshev points and Chebyshev coefficients
//!
//! Values at the `N+1` Chebyshev extrema are mirrored into an even periodic
//! signal of length `2N`, which turns Chebyshev interpolation into
//! trigonometric interpolation; a DFT of that signal yields the coefficients.
//!
//! Both directions operate column by column on `(n_points, n_components)`
//! arrays, so vector-valued samples are handled in one call.

use crate::fft::{fft, ifft};
use crate::numeric::ChebScalar;
use ndarray::{Array1, Array2, ArrayView1};
use num_complex::Complex;

/// Even extension of a sequence
///
/// Appends the interior entries in reverse, giving length `2(n-1)`:
/// `[0, 1, 2, 3, 4] -> [0, 1, 2, 3, 4, 3, 2, 1]`
pub fn even_data<T: Copy>(data: &[T]) -> Vec<T> {
    let n = data.len();
    let mut out = Vec::with_capacity(2 * n.saturating_sub(1));
    out.extend_from_slice(data);
    if n > 2 {
        out.extend(data[1..n - 1].iter().rev().copied());
    }
    out
}

/// Chebyshev coefficients of the polynomial interpolating `values`
///
/// A single row (constant function) is returned unchanged.
pub fn chebpolyfit<T: ChebScalar>(values: &Array2<T>) -> Array2<T> {
    let (n, ncomp) = values.dim();
    if n <= 1 {
        return values.clone();
    }
    let mut coeffs = Array2::<T>::zeros((n, ncomp));
    for (c, column) in values.columns().into_iter().enumerate() {
        let fitted = fit_column(column);
        coeffs.column_mut(c).assign(&fitted);
    }
    coeffs
}

/// Values at Chebyshev points of the series with coefficients `coeffs`
///
/// A single row (constant function) is returned unchanged.
pub fn chebpolyval<T: ChebScalar>(coeffs: &Array2<T>) -> Array2<T> {
    let (n, ncomp) = coeffs.dim();
    if n <= 1 {
        return coeffs.clone();
    }
    let mut values = Array2::<T>::zeros((n, ncomp));
    for (c, column) in coeffs.columns().into_iter().enumerate() {
        let evaluated = eval_column(column);
        values.column_mut(c).assign(&evaluated);
    }
    values
}

/// Scalar convenience wrapper for [`chebpolyfit`]
pub fn chebpolyfit_1d<T: ChebScalar>(values: &[T]) -> Vec<T> {
    chebpolyfit(&column_matrix(values)).column(0).to_vec()
}

/// Scalar convenience wrapper for [`chebpolyval`]
pub fn chebpolyval_1d<T: ChebScalar>(coeffs: &[T]) -> Vec<T> {
    chebpolyval(&column_matrix(coeffs)).column(0).to_vec()
}

fn column_matrix<T: ChebScalar>(data: &[T]) -> Array2<T> {
    Array2::from_shape_fn((data.len(), 1), |(i, _)| data[i])
}

fn fit_column<T: ChebScalar>(column: ArrayView1<T>) -> Array1<T> {
    let n = column.len();
    let degree = (n - 1) as f64;
    let samples: Vec<Complex<f64>> = column.iter().map(|v| v.to_complex()).collect();
    let spectrum = fft(&even_data(&samples));

    let mut out: Vec<Complex<f64>> = spectrum[..n].iter().map(|&v| v / degree).collect();
    // Endpoint basis functions are counted twice by the periodic extension
    out[0] = out[0] * 0.5;
    out[n - 1] = out[n - 1] * 0.5;
    out.into_iter().map(T::from_complex).collect()
}

fn eval_column<T: ChebScalar>(column: ArrayView1<T>) -> Array1<T> {
    let n = column.len();
    let coeffs: Vec<Complex<f64>> = column.iter().map(|v| v.to_complex()).collect();
    let mut extended: Vec<Complex<f64>> = even_data(&coeffs).into_iter().map(|v| v * 0.5).collect();
    extended[0] = extended[0] * 2.0;
    extended[n - 1] = extended[n - 1] * 2.0;

    let scale = 2.0 * (n - 1) as f64;
    ifft(&extended)[..n]
        .iter()
        .map(|&v| T::from_complex(v * scale))
        .collect()
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
