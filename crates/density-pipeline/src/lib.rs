//! Point density estimation pipeline
//!
//! [`DensityPipeline`] ties the other density crates together. For each run
//! it:
//!
//! 1. reads the caller's records into a [`PointSet`](density_core::PointSet)
//!    through [`Located`] and checks there are at least two finite points
//! 2. uses the configured bandwidth, or estimates one per axis
//! 3. sizes the evaluation domain for the method and return geometry
//! 4. evaluates the continuous or binned engine on the grid
//! 5. interpolates back onto the records, or expands the grid into rows
//!
//! # Example
//!
//! ```rust
//! use density_pipeline::{CrsTag, DensityConfig, DensityPipeline};
//! use density_core::{Bandwidth, GridSpec};
//!
//! let records = vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)];
//! let config = DensityConfig::new()
//!     .with_bandwidth(Bandwidth::Isotropic(0.5))
//!     .with_grid_resolution(GridSpec::Square(5));
//!
//! let output = DensityPipeline::new(config)
//!     .run(records, CrsTag::new("EPSG:4326"))
//!     .unwrap();
//! assert_eq!(output.len(), 4);
//! assert!(!output.is_degenerate());
//! ```

pub mod config;
pub mod output;
pub mod pipeline;

pub use config::DensityConfig;
pub use output::{extract_points, Annotated, CrsTag, DensityOutput, Located};
pub use pipeline::{run_density, DensityPipeline, MIN_POINTS};
