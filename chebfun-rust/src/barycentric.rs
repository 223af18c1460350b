//! Barycentric evaluation of the interpolant at arbitrary points
//!
//! Uses the second-kind formula
//! `p(x) = sum(w_i y_i / (x - x_i)) / sum(w_i / (x - x_i))`
//! with the shared Chebyshev weights from [`crate::points`]. A query that
//! coincides with a node returns the stored value at that node.

use crate::numeric::ChebScalar;
use crate::points::{grid, ChebyshevGrid};
use ndarray::{Array1, Array2, ArrayView1};
use std::sync::Arc;

/// Interpolating polynomial through values at Chebyshev points
#[derive(Debug, Clone)]
pub struct BarycentricInterpolator<T> {
    grid: Arc<ChebyshevGrid>,
    values: Array2<T>,
}

impl<T: ChebScalar> BarycentricInterpolator<T> {
    /// Bind `values` (shape `(n_points, n_components)`) to the Chebyshev grid
    /// of matching size
    pub fn new(values: Array2<T>) -> Self {
        assert!(values.nrows() > 0, "Cannot interpolate an empty set of values");
        Self {
            grid: grid(values.nrows()),
            values,
        }
    }

    pub fn nodes(&self) -> &[f64] {
        self.grid.nodes()
    }

    pub fn weights(&self) -> &[f64] {
        self.grid.weights()
    }

    pub fn values(&self) -> &Array2<T> {
        &self.values
    }

    /// Number of interpolation points
    pub fn n_points(&self) -> usize {
        self.grid.len()
    }

    pub fn n_components(&self) -> usize {
        self.values.ncols()
    }

    /// Evaluate all components at `x`
    pub fn evaluate(&self, x: f64) -> Array1<T> {
        let mut out = Array1::<T>::zeros(self.n_components());
        self.evaluate_into(x, out.view_mut());
        out
    }

    /// Evaluate at every point of `xs`; row `j` holds the components at `xs[j]`
    pub fn evaluate_many(&self, xs: &[f64]) -> Array2<T> {
        let mut out = Array2::<T>::zeros((xs.len(), self.n_components()));
        for (j, &x) in xs.iter().enumerate() {
            self.evaluate_into(x, out.row_mut(j));
        }
        out
    }

    fn evaluate_into(&self, x: f64, mut out: ndarray::ArrayViewMut1<T>) {
        let nodes = self.grid.nodes();
        let weights = self.grid.weights();

        if let Some(i) = nodes.iter().position(|&xi| xi == x) {
            out.assign(&self.values.row(i));
            return;
        }

        let mut denominator = 0.0;
        out.fill(T::zero());
        for (i, (&xi, &wi)) in nodes.iter().zip(weights.iter()).enumerate() {
            let t = wi / (x - xi);
            denominator += t;
            accumulate(&mut out, self.values.row(i), t);
        }
        out.mapv_inplace(|v| v / denominator);
    }
}

fn accumulate<T: ChebScalar>(out: &mut ndarray::ArrayViewMut1<T>, row: ArrayView1<T>, t: f64) {
    for (o, &y) in out.iter_mut().zip(row.iter()) {
        *o = *o + y * t;
    }
}
