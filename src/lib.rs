//! Two-dimensional kernel density estimation over planar point sets
//!
//! This crate re-exports the workspace members:
//!
//! - [`density_core`]: errors, value types, density fields and execution engines
//! - [`density_bandwidth`]: Silverman and Scott bandwidth rules
//! - [`density_kde`]: domain limits, the continuous and binned engines, reshaping
//! - [`density_pipeline`]: the end-to-end [`DensityPipeline`](density_pipeline::DensityPipeline)
//!
//! Most callers only need the [`prelude`].

pub use density_bandwidth;
pub use density_core;
pub use density_kde;
pub use density_pipeline;

pub mod prelude {
    pub use density_bandwidth::{estimate_bandwidth, BandwidthRule, BandwidthSelector};
    pub use density_core::{
        AxisExpansion, Bandwidth, DensityField, Domain, Error, ExecutionStrategy, GridSpec,
        Point, PointSet, Result,
    };
    pub use density_kde::{DensityRow, DensityTable, Method, ReturnGeometry};
    pub use density_pipeline::{
        run_density, Annotated, CrsTag, DensityConfig, DensityOutput, DensityPipeline, Located,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_runs_pipeline() {
        let config = DensityConfig::new()
            .with_bandwidth(Bandwidth::Isotropic(0.5))
            .with_grid_resolution(GridSpec::Square(9));
        let output = run_density(vec![[0.0, 0.0], [1.0, 2.0], [2.0, 1.0]], CrsTag::none(), &config).unwrap();
        assert_eq!(output.len(), 3);
    }
}
