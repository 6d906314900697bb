//! Rule-of-thumb bandwidth selectors

use crate::quantile::{iqr_sorted, sorted_finite};
use crate::traits::{BandwidthSelector, BandwidthSelectorProperties};
use density_core::{Error, Result};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use std::str::FromStr;

/// Scale of the IQR that matches the standard deviation of a normal sample
const IQR_NORMAL_SCALE: f64 = 1.34;

/// Silverman's rule of thumb
///
/// Uses the formula: h = 0.9 * min(σ, IQR / 1.34) * n^(-1/5)
/// where σ is the population standard deviation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silverman;

/// Scott's rule
///
/// Uses the formula: h = σ * n^(-1/5)
#[derive(Debug, Clone, Copy, Default)]
pub struct Scott;

fn check_samples(samples: &[f64]) -> Result<Vec<f64>> {
    if samples.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: samples.len(),
        });
    }
    sorted_finite(samples)
}

fn check_result(rule: &str, bw: f64) -> Result<f64> {
    if !bw.is_finite() || bw <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "{rule} bandwidth is {bw}; sample has zero scale"
        )));
    }
    Ok(bw)
}

impl BandwidthSelectorProperties for Silverman {
    fn name(&self) -> &'static str {
        "silverman"
    }
}

impl BandwidthSelector for Silverman {
    fn estimate(&self, samples: &[f64]) -> Result<f64> {
        let sorted = check_samples(samples)?;
        let n = sorted.len() as f64;
        let std = sorted.iter().population_std_dev();
        let iqr = iqr_sorted(&sorted).unwrap_or(0.0);

        let bw = 0.9 * std.min(iqr / IQR_NORMAL_SCALE) * n.powf(-0.2);
        check_result(self.name(), bw)
    }
}

impl BandwidthSelectorProperties for Scott {
    fn name(&self) -> &'static str {
        "scott"
    }
}

impl BandwidthSelector for Scott {
    fn estimate(&self, samples: &[f64]) -> Result<f64> {
        let sorted = check_samples(samples)?;
        let n = sorted.len() as f64;
        let std = sorted.iter().population_std_dev();

        check_result(self.name(), std * n.powf(-0.2))
    }
}

/// Bandwidth rule selectable from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandwidthRule {
    #[default]
    Silverman,
    Scott,
}

impl BandwidthRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Silverman => Silverman.name(),
            Self::Scott => Scott.name(),
        }
    }
}

impl BandwidthSelectorProperties for BandwidthRule {
    fn name(&self) -> &'static str {
        self.as_str()
    }
}

impl BandwidthSelector for BandwidthRule {
    fn estimate(&self, samples: &[f64]) -> Result<f64> {
        match self {
            Self::Silverman => Silverman.estimate(samples),
            Self::Scott => Scott.estimate(samples),
        }
    }
}

impl FromStr for BandwidthRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "silverman" | "nrd0" => Ok(Self::Silverman),
            "scott" => Ok(Self::Scott),
            _ => Err(Error::unsupported("bandwidth rule", s)),
        }
    }
}
