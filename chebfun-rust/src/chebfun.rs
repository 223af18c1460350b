//! The Chebfun: a function on [-1, 1] held as values at Chebyshev points
//!
//! A `Chebfun<T>` stores `N + 1` samples (one row per Chebyshev point, one
//! column per component) together with a scale used as tolerance reference.
//! It never mutates; every operation returns a new Chebfun.
//!
//! Construction goes through one of four explicit factories:
//! - [`Chebfun::from_values`] / [`Chebfun::from_vector_values`]: raw samples
//! - [`Chebfun::from_coefficients`] / [`Chebfun::from_vector_coefficients`]:
//!   a Chebyshev series, optionally pruned
//! - [`Chebfun::from_chebfun`]: copy of another Chebfun's values
//! - [`Chebfun::from_function`] and variants: adaptive sampling of a callable

use crate::barycentric::BarycentricInterpolator;
use crate::calculus::{definite_integral, differentiate_coefficients, integrator};
use crate::dichotomy::{dichotomy, max_modulus, prune, DichotomyConfig};
use crate::error::{ChebfunError, Result};
use crate::numeric::ChebScalar;
use crate::roots::chebyshev_roots;
use crate::transform::{chebpolyfit, chebpolyval};
use ndarray::{s, Array1, Array2};
use once_cell::sync::OnceCell;
use std::fmt;
use std::ops::Range;

/// Absolute tolerance under which all coefficients count as zero
pub const NONZERO_ATOL: f64 = 1e-8;

/// Chebyshev interpolant on [-1, 1]
#[derive(Clone)]
pub struct Chebfun<T = f64> {
    scale: f64,
    interpolator: BarycentricInterpolator<T>,
    // Filled on first use; values never change
    coefficients: OnceCell<Array2<T>>,
}

impl<T: ChebScalar> Chebfun<T> {
    // ------------------------------------------------------------------
    // Factories
    // ------------------------------------------------------------------

    pub(crate) fn from_parts(values: Array2<T>, scale: Option<f64>) -> Self {
        let scale = scale.unwrap_or_else(|| max_modulus(&values));
        Self {
            scale,
            interpolator: BarycentricInterpolator::new(values),
            coefficients: OnceCell::new(),
        }
    }

    /// Scalar Chebfun through `values` at Chebyshev points
    pub fn from_values(values: &[T]) -> Result<Self> {
        if values.is_empty() {
            return Err(ChebfunError::EmptyValues);
        }
        let data = Array2::from_shape_fn((values.len(), 1), |(i, _)| values[i]);
        Ok(Self::from_parts(data, None))
    }

    /// Vector-valued Chebfun; `values` has one row per Chebyshev point
    pub fn from_vector_values(values: Array2<T>) -> Result<Self> {
        if values.nrows() == 0 {
            return Err(ChebfunError::EmptyValues);
        }
        if values.ncols() == 0 {
            return Err(ChebfunError::InvalidInput(
                "values must have at least one component".to_string(),
            ));
        }
        Ok(Self::from_parts(values, None))
    }

    /// Vector-valued Chebfun from one row of components per Chebyshev point
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let ncomp = rows.first().map(Vec::len).ok_or(ChebfunError::EmptyValues)?;
        if let Some(bad) = rows.iter().position(|row| row.len() != ncomp) {
            return Err(ChebfunError::InvalidInput(format!(
                "row {} has {} components, expected {}",
                bad,
                rows[bad].len(),
                ncomp
            )));
        }
        Self::from_vector_values(Array2::from_shape_fn((rows.len(), ncomp), |(i, c)| rows[i][c]))
    }

    /// Scalar Chebfun from Chebyshev coefficients
    ///
    /// With `prune`, trailing coefficients below `128 eps scale` are dropped
    /// before the values are reconstructed.
    pub fn from_coefficients(coeffs: &[T], prune: bool, scale: f64) -> Result<Self> {
        if coeffs.is_empty() {
            return Err(ChebfunError::EmptyValues);
        }
        let data = Array2::from_shape_fn((coeffs.len(), 1), |(i, _)| coeffs[i]);
        Self::from_vector_coefficients(data, prune, scale)
    }

    /// Scalar Chebfun from coefficients, pruned with unit scale
    pub fn from_chebcoeff(coeffs: &[T]) -> Result<Self> {
        Self::from_coefficients(coeffs, true, 1.0)
    }

    /// Vector-valued Chebfun from a coefficient array (one row per degree)
    pub fn from_vector_coefficients(coeffs: Array2<T>, prune: bool, scale: f64) -> Result<Self> {
        if coeffs.nrows() == 0 {
            return Err(ChebfunError::EmptyValues);
        }
        if coeffs.ncols() == 0 {
            return Err(ChebfunError::InvalidInput(
                "coefficients must have at least one component".to_string(),
            ));
        }
        let kept = if prune {
            crate::dichotomy::prune(&coeffs, scale)
        } else {
            coeffs
        };
        Ok(Self::from_parts(chebpolyval(&kept), Some(scale)))
    }

    /// Copy of another Chebfun's values
    pub fn from_chebfun(other: &Chebfun<T>) -> Self {
        Self::from_parts(other.values().clone(), None)
    }

    /// Adaptive construction from a scalar function
    pub fn from_function<F>(mut f: F, config: &DichotomyConfig) -> Result<Self>
    where
        F: FnMut(f64) -> T,
    {
        Self::try_from_vector_function(1, |x| Ok(Array1::from_elem(1, f(x))), config)
    }

    /// Adaptive construction from a fallible scalar function
    ///
    /// An error from `f` aborts construction and is returned unchanged.
    pub fn try_from_function<F, E>(mut f: F, config: &DichotomyConfig) -> std::result::Result<Self, E>
    where
        F: FnMut(f64) -> std::result::Result<T, E>,
        E: From<ChebfunError>,
    {
        Self::try_from_vector_function(1, |x| f(x).map(|v| Array1::from_elem(1, v)), config)
    }

    /// Adaptive construction from a function returning `n_components` values
    pub fn from_vector_function<F>(n_components: usize, mut f: F, config: &DichotomyConfig) -> Result<Self>
    where
        F: FnMut(f64) -> Array1<T>,
    {
        Self::try_from_vector_function(n_components, |x| Ok(f(x)), config)
    }

    /// Adaptive construction from a fallible vector-valued function
    pub fn try_from_vector_function<F, E>(
        n_components: usize,
        mut f: F,
        config: &DichotomyConfig,
    ) -> std::result::Result<Self, E>
    where
        F: FnMut(f64) -> std::result::Result<Array1<T>, E>,
        E: From<ChebfunError>,
    {
        if n_components == 0 {
            return Err(ChebfunError::InvalidInput(
                "a function must have at least one component".to_string(),
            )
            .into());
        }
        let result = dichotomy(&mut f, n_components, config)?;
        let kept = prune(&result.coeffs, result.scale);
        Ok(Self::from_parts(chebpolyval(&kept), Some(result.scale)))
    }

    // ------------------------------------------------------------------
    // Standard Chebfuns
    // ------------------------------------------------------------------

    /// Degree-0 Chebfun; also the promotion of a bare scalar
    pub fn constant(value: T) -> Self {
        Self::from_parts(Array2::from_elem((1, 1), value), None)
    }

    /// The identity `x -> x`
    pub fn identity() -> Self {
        Self::from_parts(
            Array2::from_shape_fn((2, 1), |(i, _)| T::from(if i == 0 { 1.0 } else { -1.0 })),
            None,
        )
    }

    /// Chebyshev polynomial `T_n`
    pub fn basis(n: usize) -> Self {
        if n == 0 {
            return Self::constant(T::from(1.0));
        }
        let values = Array2::from_shape_fn((n + 1, 1), |(i, _)| {
            T::from(if i % 2 == 0 { 1.0 } else { -1.0 })
        });
        Self::from_parts(values, None)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of interpolation points
    pub fn size(&self) -> usize {
        self.interpolator.n_points()
    }

    /// Polynomial degree (`size() - 1`)
    pub fn degree(&self) -> usize {
        self.size() - 1
    }

    pub fn n_components(&self) -> usize {
        self.interpolator.n_components()
    }

    pub fn is_scalar(&self) -> bool {
        self.n_components() == 1
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Values at the Chebyshev points, shape `(size, n_components)`
    pub fn values(&self) -> &Array2<T> {
        self.interpolator.values()
    }

    /// Chebyshev points the values are attached to
    pub fn nodes(&self) -> &[f64] {
        self.interpolator.nodes()
    }

    /// Chebyshev coefficients, shape `(size, n_components)`
    ///
    /// Computed once per Chebfun and cached.
    pub fn chebyshev_coefficients(&self) -> Array2<T> {
        self.coefficient_cache().clone()
    }

    pub(crate) fn coefficient_cache(&self) -> &Array2<T> {
        self.coefficients.get_or_init(|| chebpolyfit(self.values()))
    }

    /// Values of a scalar Chebfun
    ///
    /// # Panics
    /// Panics if the Chebfun has more than one component
    pub fn scalar_values(&self) -> Vec<T> {
        self.assert_scalar();
        self.values().column(0).to_vec()
    }

    /// Chebyshev coefficients of a scalar Chebfun
    ///
    /// # Panics
    /// Panics if the Chebfun has more than one component
    pub fn scalar_coefficients(&self) -> Vec<T> {
        self.assert_scalar();
        self.coefficient_cache().column(0).to_vec()
    }

    /// Chebfun holding component `index` only
    pub fn component(&self, index: usize) -> Result<Self> {
        self.components(index..index + 1)
    }

    /// Chebfun holding the components in `range`
    pub fn components(&self, range: Range<usize>) -> Result<Self> {
        if range.start >= range.end || range.end > self.n_components() {
            return Err(ChebfunError::InvalidInput(format!(
                "component range {:?} out of bounds for {} components",
                range,
                self.n_components()
            )));
        }
        Self::from_vector_values(self.values().slice(s![.., range]).to_owned())
    }

    fn assert_scalar(&self) {
        assert!(
            self.is_scalar(),
            "operation requires a scalar Chebfun, got {} components",
            self.n_components()
        );
    }

    pub(crate) fn require_scalar(&self) -> Result<()> {
        if self.is_scalar() {
            Ok(())
        } else {
            Err(ChebfunError::NotScalar {
                components: self.n_components(),
            })
        }
    }

    // ------------------------------------------------------------------
    // Evaluation
    // ------------------------------------------------------------------

    /// Evaluate a scalar Chebfun at `x`
    ///
    /// # Panics
    /// Panics if the Chebfun has more than one component
    pub fn eval(&self, x: f64) -> T {
        self.assert_scalar();
        self.interpolator.evaluate(x)[0]
    }

    /// Evaluate a scalar Chebfun at every point of `xs`
    ///
    /// # Panics
    /// Panics if the Chebfun has more than one component
    pub fn eval_many(&self, xs: &[f64]) -> Vec<T> {
        self.assert_scalar();
        self.interpolator.evaluate_many(xs).column(0).to_vec()
    }

    /// All components at `x`
    pub fn evaluate(&self, x: f64) -> Array1<T> {
        self.interpolator.evaluate(x)
    }

    /// All components at every point of `xs`; one row per point
    pub fn evaluate_many(&self, xs: &[f64]) -> Array2<T> {
        self.interpolator.evaluate_many(xs)
    }

    // ------------------------------------------------------------------
    // Calculus
    // ------------------------------------------------------------------

    /// Integral over [-1, 1] of each component
    pub fn integral(&self) -> Array1<T> {
        definite_integral(self.coefficient_cache())
    }

    /// Integral over [-1, 1] of a scalar Chebfun
    pub fn sum(&self) -> Result<T> {
        self.require_scalar()?;
        Ok(self.integral()[0])
    }

    /// Primitive vanishing at `x = -1`
    pub fn integrate(&self) -> Self {
        let coeffs = integrator(self.coefficient_cache());
        let kept = prune(&coeffs, self.scale);
        Self::from_parts(chebpolyval(&kept), Some(self.scale))
    }

    /// `n`-th derivative
    pub fn differentiate(&self, n: usize) -> Self {
        let coeffs = differentiate_coefficients(self.coefficient_cache(), n);
        Self::from_parts(chebpolyval(&coeffs), None)
    }

    pub fn derivative(&self) -> Self {
        self.differentiate(1)
    }

    /// Real roots in [-1, 1], ascending
    pub fn roots(&self) -> Result<Vec<f64>> {
        self.require_scalar()?;
        chebyshev_roots(&self.scalar_coefficients())
    }

    // ------------------------------------------------------------------
    // Comparison
    // ------------------------------------------------------------------

    /// Whether any Chebyshev coefficient exceeds [`NONZERO_ATOL`]
    pub fn is_nonzero(&self) -> bool {
        self.coefficient_cache()
            .iter()
            .any(|c| c.modulus() > NONZERO_ATOL)
    }

    /// Equality up to [`NONZERO_ATOL`] on the coefficients of the difference
    pub fn approx_eq(&self, other: &Chebfun<T>) -> Result<bool> {
        Ok(!self.sub(other)?.is_nonzero())
    }
}

impl<T: ChebScalar> fmt::Display for Chebfun<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Chebfun({})>", self.size())
    }
}

impl<T: ChebScalar> fmt::Debug for Chebfun<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chebfun")
            .field("size", &self.size())
            .field("n_components", &self.n_components())
            .field("scale", &self.scale)
            .field("values", &self.values().as_slice_memory_order())
            .finish()
    }
}

#[cfg(test)]
#[path = "chebfun_tests.rs"]
mod tests;
