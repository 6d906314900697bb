//! Continuous Gaussian kernel density estimation on a grid

use crate::kernel::{axis_table, check_inputs, gaussian};
use crate::traits::{DensityEstimator, DensityEstimatorProperties};
use density_core::{Bandwidth, DensityField, Domain, ExecutionEngine, GridSpec, PointSet, Result};
use statrs::distribution::Continuous;
use tracing::{debug, instrument};

/// Gaussian product-kernel density estimator.
///
/// The density at grid node `g` is
/// `(1/n) Σ φ_{h_x}(g_x − x_i) · φ_{h_y}(g_y − y_i)`
/// where `φ_h` is the normal density with standard deviation `h`. Each axis
/// keeps its own bandwidth.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContinuousKde;

impl ContinuousKde {
    pub fn new() -> Self {
        Self
    }
}

impl DensityEstimatorProperties for ContinuousKde {
    fn name(&self) -> &'static str {
        "continuous"
    }

    fn is_log_space(&self) -> bool {
        false
    }

    fn is_isotropic(&self) -> bool {
        false
    }
}

impl DensityEstimator for ContinuousKde {
    #[instrument(skip(self, engine, points), fields(n = points.len(), nx = grid.nx(), ny = grid.ny()))]
    fn evaluate<E: ExecutionEngine>(
        &self,
        engine: &E,
        points: &PointSet,
        bandwidth: &Bandwidth,
        domain: &Domain,
        grid: &GridSpec,
    ) -> Result<DensityField> {
        check_inputs(points, bandwidth, grid)?;

        let (xs, ys) = DensityField::axes(domain, grid);
        let kx = gaussian(bandwidth.x())?;
        let ky = gaussian(bandwidth.y())?;

        let n = points.len();
        let table_x = axis_table(&xs, &points.xs(), |d| kx.pdf(d));
        let table_y = axis_table(&ys, &points.ys(), |d| ky.pdf(d));
        let inv_n = 1.0 / n as f64;
        let nx = xs.len();

        debug!(strategy = ?engine.strategy(), "evaluating continuous KDE");
        let rows = engine.execute_batch(ys.len(), |iy| {
            let ky_row = &table_y[iy * n..(iy + 1) * n];
            (0..nx)
                .map(|ix| {
                    let kx_row = &table_x[ix * n..(ix + 1) * n];
                    kx_row.iter().zip(ky_row).map(|(a, b)| a * b).sum::<f64>() * inv_n
                })
                .collect::<Vec<f64>>()
        });

        DensityField::new(xs, ys, rows.concat())
    }
}
