//! Gaussian kernel helpers shared by the density engines

use density_core::{Bandwidth, Error, GridSpec, PointSet, Result};
use statrs::distribution::Normal;

/// Zero-mean normal with standard deviation `bandwidth`
pub(crate) fn gaussian(bandwidth: f64) -> Result<Normal> {
    Normal::new(0.0, bandwidth)
        .map_err(|e| Error::InvalidParameter(format!("bandwidth {bandwidth}: {e}")))
}

/// Kernel terms for every (node, sample) pair along one axis.
///
/// The result is row-major with one row of `samples.len()` terms per node,
/// so the product kernel separates into two small tables instead of one
/// `nx * ny * n` evaluation.
pub(crate) fn axis_table<F>(nodes: &[f64], samples: &[f64], term: F) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    nodes
        .iter()
        .flat_map(move |&g| samples.iter().map(move |&s| g - s))
        .map(term)
        .collect()
}

/// Checks every engine performs before touching the grid
pub(crate) fn check_inputs(points: &PointSet, bandwidth: &Bandwidth, grid: &GridSpec) -> Result<()> {
    points.validate(1)?;
    bandwidth.validate()?;
    grid.validate()
}
