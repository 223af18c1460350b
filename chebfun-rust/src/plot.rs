//! Data for an external renderer
//!
//! Nothing here draws. A Chebfun is classified by its dimensionality and
//! sampled on a dense uniform grid, and the samples are handed out together
//! with the interpolation nodes and values.

use crate::chebfun::Chebfun;
use crate::error::{ChebfunError, Result};
use crate::numeric::ChebScalar;

/// Number of uniform samples in [`PlotData`]
pub const PLOT_RESOLUTION: usize = 1000;

/// How a Chebfun maps onto a plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionKind {
    /// `x -> f(x)` for a real scalar
    Real1D,
    /// Parametric curve `(f_0(t), f_1(t))`
    Real2D,
    /// Parametric curve `(Re f(t), Im f(t))`
    Complex1D,
}

/// Aligned arrays for a plot: the dense curve `(xs, ys)` and the
/// interpolation points `(xi, yi)`
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub xi: Vec<f64>,
    pub yi: Vec<f64>,
    pub dimension: DimensionKind,
}

impl PlotData {
    /// Number of coordinates of the plotted curve (1 or 2)
    pub fn plot_dimension(&self) -> usize {
        match self.dimension {
            DimensionKind::Real1D => 1,
            DimensionKind::Real2D | DimensionKind::Complex1D => 2,
        }
    }
}

/// `n` evenly spaced points from -1 to 1 inclusive
pub fn linspace(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![-1.0],
        _ => {
            let step = 2.0 / (n - 1) as f64;
            (0..n).map(|i| -1.0 + i as f64 * step).collect()
        }
    }
}

impl<T: ChebScalar> Chebfun<T> {
    /// Dimensionality class, or `TooManyDimensions` when no planar picture
    /// exists (complex vectors, or more than two real components)
    pub fn dimension_kind(&self) -> Result<DimensionKind> {
        match (self.n_components(), T::IS_COMPLEX) {
            (1, false) => Ok(DimensionKind::Real1D),
            (2, false) => Ok(DimensionKind::Real2D),
            (1, true) => Ok(DimensionKind::Complex1D),
            (components, complex) => Err(ChebfunError::TooManyDimensions { components, complex }),
        }
    }

    /// Samples on [`PLOT_RESOLUTION`] uniform points plus the nodes and values
    pub fn plot_data(&self) -> Result<PlotData> {
        let dimension = self.dimension_kind()?;
        let ts = linspace(PLOT_RESOLUTION);
        let dense = self.evaluate_many(&ts);
        let values = self.values();

        let data = match dimension {
            DimensionKind::Real1D => PlotData {
                ys: dense.column(0).iter().map(|v| v.re()).collect(),
                xs: ts,
                xi: self.nodes().to_vec(),
                yi: values.column(0).iter().map(|v| v.re()).collect(),
                dimension,
            },
            DimensionKind::Real2D => PlotData {
                xs: dense.column(0).iter().map(|v| v.re()).collect(),
                ys: dense.column(1).iter().map(|v| v.re()).collect(),
                xi: values.column(0).iter().map(|v| v.re()).collect(),
                yi: values.column(1).iter().map(|v| v.re()).collect(),
                dimension,
            },
            DimensionKind::Complex1D => PlotData {
                xs: dense.column(0).iter().map(|v| v.re()).collect(),
                ys: dense.column(0).iter().map(|v| v.im()).collect(),
                xi: values.column(0).iter().map(|v| v.re()).collect(),
                yi: values.column(0).iter().map(|v| v.im()).collect(),
                dimension,
            },
        };
        Ok(data)
    }

    /// `log10 |c_k|` of the Chebyshev coefficients, largest over components
    ///
    /// Exact zeros give `-inf`.
    pub fn coefficient_decay(&self) -> Vec<f64> {
        self.coefficient_cache()
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|c| c.modulus()).fold(0.0, f64::max).log10())
            .collect()
    }
}
