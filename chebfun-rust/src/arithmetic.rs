//! Algebra between Chebfuns
//!
//! Addition and subtraction are exact in coefficient space: the shorter
//! series is zero-padded and the sum is pruned against the larger scale.
//! Multiplication, division and powers resample the pointwise result through
//! the adaptive construction.
//!
//! Bare scalars enter through [`Operand`], which promotes them to a degree-0
//! Chebfun before the operation runs.

use crate::chebfun::Chebfun;
use crate::dichotomy::DichotomyConfig;
use crate::error::{ChebfunError, Result};
use crate::numeric::ChebScalar;
use ndarray::{Array1, Array2};
use std::borrow::Cow;

/// Right-hand side of a binary operation
#[derive(Debug, Clone)]
pub enum Operand<'a, T: ChebScalar> {
    Scalar(T),
    Chebfun(&'a Chebfun<T>),
}

impl<'a, T: ChebScalar> Operand<'a, T> {
    /// Promote a scalar to a constant Chebfun
    pub fn promote(self) -> Cow<'a, Chebfun<T>> {
        match self {
            Operand::Scalar(value) => Cow::Owned(Chebfun::constant(value)),
            Operand::Chebfun(chebfun) => Cow::Borrowed(chebfun),
        }
    }
}

impl<'a, T: ChebScalar> From<&'a Chebfun<T>> for Operand<'a, T> {
    fn from(chebfun: &'a Chebfun<T>) -> Self {
        Operand::Chebfun(chebfun)
    }
}

impl<'a> From<f64> for Operand<'a, f64> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl<'a> From<num_complex::Complex<f64>> for Operand<'a, num_complex::Complex<f64>> {
    fn from(value: num_complex::Complex<f64>) -> Self {
        Operand::Scalar(value)
    }
}

/// Component count of a binary result; a single component broadcasts
fn broadcast_components(left: usize, right: usize) -> Result<usize> {
    if left == right || right == 1 {
        Ok(left)
    } else if left == 1 {
        Ok(right)
    } else {
        Err(ChebfunError::ComponentMismatch { left, right })
    }
}

/// Pad `coeffs` to `(rows, ncomp)`, repeating a single column if needed
fn pad_coefficients<T: ChebScalar>(coeffs: &Array2<T>, rows: usize, ncomp: usize) -> Array2<T> {
    let single = coeffs.ncols() == 1;
    Array2::from_shape_fn((rows, ncomp), |(k, c)| {
        if k < coeffs.nrows() {
            coeffs[[k, if single { 0 } else { c }]]
        } else {
            T::zero()
        }
    })
}

impl<T: ChebScalar> Chebfun<T> {
    /// `self + other`, exact up to pruning
    pub fn add<'a>(&self, other: impl Into<Operand<'a, T>>) -> Result<Self> {
        let other = other.into().promote();
        let ncomp = broadcast_components(self.n_components(), other.n_components())?;

        let a = self.coefficient_cache();
        let b = other.coefficient_cache();
        let rows = a.nrows().max(b.nrows());
        let sum = pad_coefficients(a, rows, ncomp) + pad_coefficients(b, rows, ncomp);

        let scale = self.scale().max(other.scale());
        Self::from_vector_coefficients(sum, true, scale)
    }

    /// `self - other`, exact up to pruning
    pub fn sub<'a>(&self, other: impl Into<Operand<'a, T>>) -> Result<Self> {
        let other = other.into().promote();
        self.add(&other.neg())
    }

    /// `-self`, negating the values directly
    pub fn neg(&self) -> Self {
        Self::from_parts(self.values().mapv(|v| -v), Some(self.scale()))
    }

    /// `self * other`, resampled
    pub fn mul<'a>(&self, other: impl Into<Operand<'a, T>>, config: &DichotomyConfig) -> Result<Self> {
        self.combine(other, config, |a, b| a * b)
    }

    /// `self / other`, resampled
    pub fn div<'a>(&self, other: impl Into<Operand<'a, T>>, config: &DichotomyConfig) -> Result<Self> {
        self.combine(other, config, |a, b| a / b)
    }

    /// `self ^ other`, resampled
    pub fn pow<'a>(&self, other: impl Into<Operand<'a, T>>, config: &DichotomyConfig) -> Result<Self> {
        self.combine(other, config, |a, b| a.pow(b))
    }

    /// `numerator / self`, resampled
    pub fn rdiv(&self, numerator: T, config: &DichotomyConfig) -> Result<Self> {
        Chebfun::constant(numerator).div(self, config)
    }

    /// Hilbert scalar product `int_{-1}^{1} self * other`
    pub fn dot(&self, other: &Chebfun<T>, config: &DichotomyConfig) -> Result<T> {
        self.mul(other, config)?.sum()
    }

    /// Square root of the scalar product with itself
    pub fn norm(&self, config: &DichotomyConfig) -> Result<T> {
        Ok(self.dot(self, config)?.apply(crate::elementary::ElementaryFunction::Sqrt))
    }

    /// Resample `x -> op(self(x), other(x))` component by component
    pub fn combine<'a, F>(
        &self,
        other: impl Into<Operand<'a, T>>,
        config: &DichotomyConfig,
        op: F,
    ) -> Result<Self>
    where
        F: Fn(T, T) -> T,
    {
        let other = other.into().promote();
        let ncomp = broadcast_components(self.n_components(), other.n_components())?;
        let left_single = self.n_components() == 1;
        let right_single = other.n_components() == 1;

        Self::from_vector_function(
            ncomp,
            |x| {
                let a = self.evaluate(x);
                let b = other.evaluate(x);
                Array1::from_shape_fn(ncomp, |c| {
                    op(
                        a[if left_single { 0 } else { c }],
                        b[if right_single { 0 } else { c }],
                    )
                })
            },
            config,
        )
    }

    /// Resample `x -> op(self(x))` component by component
    pub fn map<F>(&self, config: &DichotomyConfig, op: F) -> Result<Self>
    where
        F: Fn(T) -> T,
    {
        Self::from_vector_function(
            self.n_components(),
            |x| self.evaluate(x).mapv(&op),
            config,
        )
    }
}

#[cfg(test)]
#[path = "arithmetic_tests.rs"]
mod tests;
