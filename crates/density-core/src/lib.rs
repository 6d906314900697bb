//! Core types for two-dimensional kernel density estimation
//!
//! This crate holds the pieces every stage of the density pipeline agrees on:
//!
//! - **Errors**: one [`Error`] enum for malformed input, bad parameters,
//!   unsupported options and numerical failures
//! - **Value types**: [`PointSet`], [`Bandwidth`], [`Domain`], [`GridSpec`]
//!   and [`AxisExpansion`]
//! - **Fields**: [`DensityField`], a dense grid of density values with its
//!   axis vectors
//! - **Execution**: sequential and Rayon-backed engines for grid evaluation
//!
//! # Example
//!
//! ```rust
//! use density_core::{Domain, DensityField, GridSpec};
//!
//! let domain = Domain::new(0.0, 10.0, 0.0, 5.0).unwrap();
//! let (xs, ys) = DensityField::axes(&domain, &GridSpec::PerAxis(11, 6));
//! assert_eq!(xs.len(), 11);
//! assert_eq!(ys[5], 5.0);
//! ```

pub mod error;
pub mod execution;
pub mod field;
pub mod types;

pub use error::{Error, Result};
pub use execution::{
    engine_for, sequential, AutoEngine, ExecutionEngine, ExecutionStrategy, SequentialEngine,
};
#[cfg(feature = "parallel")]
pub use execution::ParallelEngine;
pub use field::{linspace, DensityField};
pub use types::{AxisExpansion, Bandwidth, Domain, GridSpec, Point, PointSet};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
