//! Bandwidth selection for two-dimensional kernel density estimation
//!
//! When the caller does not pin a bandwidth, one is derived independently
//! for each axis with a closed-form rule of thumb:
//!
//! | Rule | Formula | Notes |
//! |------|---------|-------|
//! | Silverman | `0.9 * min(σ, IQR/1.34) * n^(-1/5)` | default, robust to heavy tails |
//! | Scott | `σ * n^(-1/5)` | oversmooths multimodal samples |
//!
//! σ is the population standard deviation and the IQR uses linearly
//! interpolated percentiles. Neither rule involves randomness.
//!
//! # Example
//!
//! ```rust
//! use density_bandwidth::{estimate_bandwidth, BandwidthRule};
//! use density_core::{Point, PointSet};
//!
//! let points: PointSet = (0..20)
//!     .map(|i| Point::new(i as f64, (i % 5) as f64))
//!     .collect();
//! let bw = estimate_bandwidth(&points, BandwidthRule::Silverman).unwrap();
//! assert!(bw.x() > bw.y());
//! ```

pub mod quantile;
pub mod rules;
pub mod traits;

pub use quantile::{iqr, quantile_sorted};
pub use rules::{BandwidthRule, Scott, Silverman};
pub use traits::{BandwidthSelector, BandwidthSelectorProperties};

use density_core::{Bandwidth, Error, PointSet, Result};
use tracing::debug;

/// Estimate a per-axis bandwidth for a point set.
///
/// Each axis is handled independently; an axis with zero scale fails the
/// whole estimate with an invalid-input error naming that axis.
pub fn estimate_bandwidth<S: BandwidthSelector>(points: &PointSet, selector: S) -> Result<Bandwidth> {
    let axis = |label: char, samples: Vec<f64>| {
        selector.estimate(&samples).map_err(|e| match e {
            Error::InvalidInput(msg) => Error::InvalidInput(format!("{label} axis: {msg}")),
            other => other,
        })
    };
    let bw_x = axis('x', points.xs())?;
    let bw_y = axis('y', points.ys())?;

    debug!(rule = selector.name(), bw_x, bw_y, "estimated bandwidth");
    Ok(Bandwidth::PerAxis(bw_x, bw_y))
}
