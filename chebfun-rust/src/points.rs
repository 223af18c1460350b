//! Chebyshev extrema and the per-size barycentric grid cache
//!
//! Nodes and second-kind barycentric weights depend only on the number of
//! points, so they are computed once per size and shared read-only between
//! every Chebfun of that size.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::{Arc, RwLock};

/// Chebyshev extrema `cos(k*pi/N)` for `k = 0..=N`, decreasing from 1 to -1
///
/// `N = 0` yields the single point `[0]`.
pub fn chebyshev_points(degree: usize) -> Vec<f64> {
    if degree == 0 {
        return vec![0.0];
    }
    let n = degree as f64;
    (0..=degree).map(|k| (k as f64 * PI / n).cos()).collect()
}

/// `n_points` Chebyshev points, boundaries included
pub fn interpolation_points(n_points: usize) -> Vec<f64> {
    assert!(n_points > 0, "at least one interpolation point is required");
    chebyshev_points(n_points - 1)
}

/// Second-kind barycentric weights `(-1)^i c_i` with halved endpoints
pub fn barycentric_weights(n_points: usize) -> Vec<f64> {
    let mut weights: Vec<f64> = (0..n_points)
        .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
        .collect();
    if let Some(first) = weights.first_mut() {
        *first *= 0.5;
    }
    if n_points > 1 {
        weights[n_points - 1] *= 0.5;
    }
    weights
}

/// Nodes and barycentric weights for a fixed number of points
#[derive(Debug, Clone, PartialEq)]
pub struct ChebyshevGrid {
    nodes: Vec<f64>,
    weights: Vec<f64>,
}

impl ChebyshevGrid {
    pub fn new(n_points: usize) -> Self {
        Self {
            nodes: interpolation_points(n_points),
            weights: barycentric_weights(n_points),
        }
    }

    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Polynomial degree (`len() - 1`)
    pub fn degree(&self) -> usize {
        self.nodes.len() - 1
    }
}

static GRID_CACHE: Lazy<RwLock<HashMap<usize, Arc<ChebyshevGrid>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Shared grid for `n_points` points, built on first request
pub fn grid(n_points: usize) -> Arc<ChebyshevGrid> {
    if let Ok(cache) = GRID_CACHE.read() {
        if let Some(grid) = cache.get(&n_points) {
            return Arc::clone(grid);
        }
    }

    let grid = Arc::new(ChebyshevGrid::new(n_points));
    match GRID_CACHE.write() {
        Ok(mut cache) => Arc::clone(cache.entry(n_points).or_insert(grid)),
        // A poisoned cache only costs recomputation
        Err(_) => grid,
    }
}
