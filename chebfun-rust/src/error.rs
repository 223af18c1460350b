//! Error types for chebfun-rust

/// Errors returned by Chebfun construction and operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChebfunError {
    /// The dichotomy exhausted its range of trial degrees without the last
    /// two Chebyshev coefficients dropping below the bound
    #[error("dichotomy did not converge: last coefficients {last:?} exceed bound {bound:e}")]
    NoConvergence { last: [f64; 2], bound: f64 },

    #[error("cannot build a Chebfun from an empty set of values")]
    EmptyValues,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Binary operation between Chebfuns with incompatible component counts
    #[error("component mismatch: {left} vs {right} components")]
    ComponentMismatch { left: usize, right: usize },

    #[error("operation requires a scalar-valued Chebfun, got {components} components")]
    NotScalar { components: usize },

    /// Schur iteration on the companion matrix did not converge
    #[error("eigenvalue solver failed on companion matrix of size {size}")]
    EigenSolver { size: usize },

    #[error("too many dimensions to plot: {components} components (complex: {complex})")]
    TooManyDimensions { components: usize, complex: bool },
}

/// Convenience alias used throughout chebfun-rust
pub type Result<T> = std::result::Result<T, ChebfunError>;
