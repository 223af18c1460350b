//! # chebfun-rust: Chebyshev spectral approximation on [-1, 1]
//!
//! A function is represented by its values at Chebyshev extrema. The number
//! of points is chosen adaptively so that the Chebyshev series converges to
//! machine precision. The resulting [`Chebfun`] supports evaluation,
//! arithmetic, composition with elementary functions, differentiation,
//! integration and root finding, with real or complex, scalar or
//! vector-valued samples.

pub mod arithmetic; // Sums (exact) and resampled products/quotients/powers
pub mod barycentric;
pub mod calculus; // Differentiation and integration of coefficient series
pub mod chebfun;
pub mod dichotomy; // Adaptive degree selection and pruning
pub mod elementary;
pub mod error;
pub mod fft;
pub mod numeric;
pub mod plot; // Data contract for external renderers
pub mod points;
pub mod roots;
pub mod transform; // Values <-> Chebyshev coefficients

// Re-export commonly used types and traits
pub use arithmetic::Operand;
pub use barycentric::BarycentricInterpolator;
pub use chebfun::{Chebfun, NONZERO_ATOL};
pub use dichotomy::{DichotomyConfig, CONVERGENCE_FACTOR};
pub use elementary::ElementaryFunction;
pub use error::{ChebfunError, Result};
pub use numeric::ChebScalar;
pub use plot::{DimensionKind, PlotData, PLOT_RESOLUTION};
pub use points::{chebyshev_points, interpolation_points};
pub use transform::{chebpolyfit, chebpolyval};

// Test utilities (only available in test mode)
#[cfg(test)]
pub mod test_utils;
