//! Gaussian kernel density estimation on regular grids
//!
//! This crate turns a [`PointSet`](density_core::PointSet) and a bandwidth
//! into densities:
//!
//! - **Limits**: [`compute_limits`] sizes the evaluation domain per method
//! - **Engines**: [`ContinuousKde`] (per-axis product kernel) and
//!   [`BinnedKde`] (isotropic, log-space) behind [`DensityEstimator`]
//! - **Reshaping**: [`reshape`] maps a field onto the input points or out to
//!   one row per grid node, producing a normalized [`DensityTable`]
//!
//! # Example
//!
//! ```rust
//! use density_core::{sequential, Bandwidth, Point, PointSet};
//! use density_kde::{compute_limits, reshape, DensityEstimator, Method, ReturnGeometry};
//!
//! let points = PointSet::new(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(1.0, 1.0),
//! ]);
//! let bandwidth = Bandwidth::Isotropic(0.5);
//! let method = Method::Continuous;
//!
//! let domain = compute_limits(&points, None, None, method, Some(&bandwidth)).unwrap();
//! let field = method
//!     .estimator(true)
//!     .evaluate(&sequential(), &points, &bandwidth, &domain, &method.default_grid())
//!     .unwrap();
//! let table = reshape(&points, &field, ReturnGeometry::Point.reshape_mode());
//!
//! assert_eq!(table.len(), 4);
//! assert!(table.ndensities().iter().all(|&v| v > 0.99));
//! ```

pub mod binned;
pub mod continuous;
mod kernel;
pub mod limits;
pub mod method;
pub mod reshape;
pub mod table;
pub mod traits;

pub use binned::BinnedKde;
pub use continuous::ContinuousKde;
pub use limits::{compute_limits, default_expansion, BINNED_PADDING, POLYGON_EXPANSION};
pub use method::{Estimator, Method};
pub use reshape::{expand_density, interpolate_at, interpolate_density, reshape, ReshapeMode, ReturnGeometry};
pub use table::{DensityRow, DensityTable};
pub use traits::{DensityEstimator, DensityEstimatorProperties};
