//! Density pipeline orchestration

use crate::config::DensityConfig;
use crate::output::{extract_points, Annotated, CrsTag, DensityOutput, Located};
use density_bandwidth::{estimate_bandwidth, BandwidthSelectorProperties};
use density_core::{engine_for, Bandwidth, PointSet, Result};
use density_kde::{
    compute_limits, default_expansion, reshape, DensityEstimator, DensityEstimatorProperties,
    ReshapeMode,
};
use tracing::{debug, info, instrument};

/// Smallest number of usable points a run accepts
pub const MIN_POINTS: usize = 2;

/// Runs bandwidth selection, limits, density evaluation and reshaping
/// for one configuration.
///
/// A pipeline holds no state between runs; the same instance can be shared
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct DensityPipeline {
    config: DensityConfig,
}

impl DensityPipeline {
    pub fn new(config: DensityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DensityConfig {
        &self.config
    }

    /// Estimate density for `records` and attach it according to the
    /// configured return geometry.
    ///
    /// Every input check runs before any grid evaluation. Point output keeps
    /// the records in their original order; grid output is a table with one
    /// row per node, `x` varying fastest.
    ///
    /// # Errors
    ///
    /// - [`Error::InsufficientData`](density_core::Error::InsufficientData)
    ///   for fewer than two points
    /// - [`Error::InvalidInput`](density_core::Error::InvalidInput) for
    ///   non-finite coordinates or a degenerate axis
    /// - [`Error::InvalidParameter`](density_core::Error::InvalidParameter)
    ///   for out-of-range options
    #[instrument(
        skip(self, records, crs),
        fields(
            n = records.len(),
            method = %self.config.method,
            geometry = %self.config.return_geometry,
        )
    )]
    pub fn run<R: Located>(&self, records: Vec<R>, crs: CrsTag) -> Result<DensityOutput<R>> {
        let config = &self.config;

        let points = extract_points(&records);
        points.validate(MIN_POINTS)?;
        config.validate()?;

        let bandwidth = self.resolve_bandwidth(&points)?;

        let (default_x, default_y) = default_expansion(config.return_geometry, config.method);
        let domain = compute_limits(
            &points,
            config.x_expansion.or(default_x),
            config.y_expansion.or(default_y),
            config.method,
            Some(&bandwidth),
        )?;

        let grid = config.resolved_grid();
        let estimator = config.method.estimator(config.truncate);
        let engine = engine_for(config.execution);
        debug!(
            estimator = estimator.name(),
            nx = grid.nx(),
            ny = grid.ny(),
            %bandwidth,
            "evaluating density"
        );
        let field = estimator.evaluate(&engine, &points, &bandwidth, &domain, &grid)?;

        let mode = config.return_geometry.reshape_mode();
        let table = reshape(&points, &field, mode);

        let output = match mode {
            ReshapeMode::Point => {
                let degenerate = table.is_degenerate();
                let records = records
                    .into_iter()
                    .zip(table.into_rows())
                    .map(|(record, row)| Annotated {
                        record,
                        density: row.density,
                        ndensity: row.ndensity,
                    })
                    .collect();
                DensityOutput::Points {
                    records,
                    crs,
                    degenerate,
                }
            }
            ReshapeMode::Grid => DensityOutput::Grid {
                table,
                geometry: config.return_geometry,
                crs,
            },
        };
        Ok(output)
    }

    fn resolve_bandwidth(&self, points: &PointSet) -> Result<Bandwidth> {
        if let Some(bandwidth) = self.config.bandwidth {
            return Ok(bandwidth);
        }
        let rule = self.config.bandwidth_rule;
        let bandwidth = estimate_bandwidth(points, rule)?;
        info!(
            rule = rule.name(),
            bw_x = bandwidth.x(),
            bw_y = bandwidth.y(),
            "no bandwidth supplied; using {} bandwidth {}",
            rule.name(),
            bandwidth
        );
        Ok(bandwidth)
    }
}

/// Run the pipeline once with `config`
pub fn run_density<R: Located>(
    records: Vec<R>,
    crs: CrsTag,
    config: &DensityConfig,
) -> Result<DensityOutput<R>> {
    DensityPipeline::new(config.clone()).run(records, crs)
}
