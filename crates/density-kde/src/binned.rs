//! Binned (approximate) kernel density estimation
//!
//! Collapses the two axis bandwidths into their mean and accumulates kernel
//! terms in log space, so nodes far from every sample underflow cleanly to
//! zero instead of producing NaN.

use crate::kernel::{axis_table, check_inputs, gaussian};
use crate::traits::{DensityEstimator, DensityEstimatorProperties};
use density_core::{Bandwidth, DensityField, Domain, ExecutionEngine, GridSpec, PointSet, Result};
use statrs::distribution::Continuous;
use tracing::{debug, instrument};

/// Isotropic log-space Gaussian density estimator
#[derive(Debug, Clone, Copy)]
pub struct BinnedKde {
    truncate: bool,
}

impl Default for BinnedKde {
    fn default() -> Self {
        Self { truncate: true }
    }
}

impl BinnedKde {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepted for compatibility; evaluation is the same either way.
    pub fn with_truncate(mut self, truncate: bool) -> Self {
        self.truncate = truncate;
        self
    }

    pub fn truncate(&self) -> bool {
        self.truncate
    }
}

/// `ln Σ exp(t)` without overflow or total underflow
fn log_sum_exp(terms: impl Iterator<Item = f64> + Clone) -> f64 {
    let max = terms.clone().fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return max;
    }
    max + terms.map(|t| (t - max).exp()).sum::<f64>().ln()
}

impl DensityEstimatorProperties for BinnedKde {
    fn name(&self) -> &'static str {
        "binned"
    }

    fn is_log_space(&self) -> bool {
        true
    }

    fn is_isotropic(&self) -> bool {
        true
    }
}

impl DensityEstimator for BinnedKde {
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
        if !self.truncate {
            debug!("truncate=false has no effect on binned evaluation");
        }

        let h = bandwidth.mean();
        let kernel = gaussian(h)?;
        let (xs, ys) = DensityField::axes(domain, grid);

        let n = points.len();
        let log_x = axis_table(&xs, &points.xs(), |d| kernel.ln_pdf(d));
        let log_y = axis_table(&ys, &points.ys(), |d| kernel.ln_pdf(d));
        let log_n = (n as f64).ln();
        let nx = xs.len();

        debug!(h, strategy = ?engine.strategy(), "evaluating binned KDE");
        let rows = engine.execute_batch(ys.len(), |iy| {
            let ly = &log_y[iy * n..(iy + 1) * n];
            (0..nx)
                .map(|ix| {
                    let lx = &log_x[ix * n..(ix + 1) * n];
                    let log_density = log_sum_exp(lx.iter().zip(ly).map(|(a, b)| a + b)) - log_n;
                    log_density.exp()
                })
                .collect::<Vec<f64>>()
        });

        DensityField::new(xs, ys, rows.concat())
    }
}
