//! Density estimation methods

use crate::binned::BinnedKde;
use crate::continuous::ContinuousKde;
use crate::traits::{DensityEstimator, DensityEstimatorProperties};
use density_core::{Bandwidth, DensityField, Domain, Error, ExecutionEngine, GridSpec, PointSet, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which density backend to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Gaussian KDE evaluated on a grid with per-axis bandwidths
    #[default]
    #[serde(alias = "kde2d")]
    Continuous,
    /// Isotropic log-space KDE on a bandwidth-padded grid
    #[serde(alias = "bkde2D", alias = "bkde2d")]
    Binned,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continuous => "continuous",
            Self::Binned => "binned",
        }
    }

    /// Grid resolution used when the caller supplies none
    pub fn default_grid(&self) -> GridSpec {
        match self {
            Self::Continuous => GridSpec::Square(200),
            Self::Binned => GridSpec::PerAxis(51, 51),
        }
    }

    /// Build the estimator for this method
    pub fn estimator(&self, truncate: bool) -> Estimator {
        match self {
            Self::Continuous => Estimator::Continuous(ContinuousKde::new()),
            Self::Binned => Estimator::Binned(BinnedKde::new().with_truncate(truncate)),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "continuous" | "kde2d" => Ok(Self::Continuous),
            "binned" | "bkde2d" => Ok(Self::Binned),
            _ => Err(Error::unsupported("method", s)),
        }
    }
}

/// Estimator selected by [`Method`]
#[derive(Debug, Clone)]
pub enum Estimator {
    Continuous(ContinuousKde),
    Binned(BinnedKde),
}

impl DensityEstimatorProperties for Estimator {
    fn name(&self) -> &'static str {
        match self {
            Self::Continuous(kde) => kde.name(),
            Self::Binned(kde) => kde.name(),
        }
    }

    fn is_log_space(&self) -> bool {
        match self {
            Self::Continuous(kde) => kde.is_log_space(),
            Self::Binned(kde) => kde.is_log_space(),
        }
    }

    fn is_isotropic(&self) -> bool {
        match self {
            Self::Continuous(kde) => kde.is_isotropic(),
            Self::Binned(kde) => kde.is_isotropic(),
        }
    }
}

impl DensityEstimator for Estimator {
    fn evaluate<E: ExecutionEngine>(
        &self,
        engine: &E,
        points: &PointSet,
        bandwidth: &Bandwidth,
        domain: &Domain,
        grid: &GridSpec,
    ) -> Result<DensityField> {
        match self {
            Self::Continuous(kde) => kde.evaluate(engine, points, bandwidth, domain, grid),
            Self::Binned(kde) => kde.evaluate(engine, points, bandwidth, domain, grid),
        }
    }
}
