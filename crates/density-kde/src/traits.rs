//! Core traits for density engines

use density_core::{Bandwidth, DensityField, Domain, ExecutionEngine, GridSpec, PointSet, Result};

/// Intrinsic properties of a density engine
pub trait DensityEstimatorProperties {
    /// Name of this engine for logging
    fn name(&self) -> &'static str;

    /// Whether densities are accumulated in log space before exponentiating
    fn is_log_space(&self) -> bool;

    /// Whether the two axis bandwidths are collapsed into one
    fn is_isotropic(&self) -> bool;
}

/// Evaluates a kernel density estimate on a regular grid
pub trait DensityEstimator: DensityEstimatorProperties {
    /// Fit on `points` with `bandwidth` and sample the density at the
    /// `grid.nx() × grid.ny()` nodes spanning `domain`.
    ///
    /// Engines accept any non-empty point set, including coincident points.
    fn evaluate<E: ExecutionEngine>(
        &self,
        engine: &E,
        points: &PointSet,
        bandwidth: &Bandwidth,
        domain: &Domain,
        grid: &GridSpec,
    ) -> Result<DensityField>;
}
