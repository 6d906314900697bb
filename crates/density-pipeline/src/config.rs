//! Pipeline configuration

use density_bandwidth::BandwidthRule;
use density_core::{AxisExpansion, Bandwidth, ExecutionStrategy, GridSpec, Result};
use density_kde::{Method, ReturnGeometry};
use serde::{Deserialize, Serialize};

/// Options for one density run.
///
/// Every field has a default, so a config can be deserialized from a partial
/// document:
///
/// ```rust
/// use density_pipeline::DensityConfig;
/// use density_kde::Method;
///
/// let config: DensityConfig = serde_json::from_str(r#"{"method": "bkde2D"}"#).unwrap();
/// assert_eq!(config.method, Method::Binned);
/// assert!(config.truncate);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DensityConfig {
    pub method: Method,
    pub return_geometry: ReturnGeometry,
    /// Estimated with `bandwidth_rule` when absent
    pub bandwidth: Option<Bandwidth>,
    pub bandwidth_rule: BandwidthRule,
    /// Method default when absent
    pub grid_resolution: Option<GridSpec>,
    pub x_expansion: Option<AxisExpansion>,
    pub y_expansion: Option<AxisExpansion>,
    /// Accepted by the binned method; has no effect on the result
    pub truncate: bool,
    pub execution: ExecutionStrategy,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            method: Method::default(),
            return_geometry: ReturnGeometry::default(),
            bandwidth: None,
            bandwidth_rule: BandwidthRule::default(),
            grid_resolution: None,
            x_expansion: None,
            y_expansion: None,
            truncate: true,
            execution: ExecutionStrategy::default(),
        }
    }
}

impl DensityConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the method from its name (`continuous`, `kde2d`, `binned`, `bkde2D`)
    pub fn with_method_name(self, name: &str) -> Result<Self> {
        Ok(self.with_method(name.parse()?))
    }

    pub fn with_return_geometry(mut self, geometry: ReturnGeometry) -> Self {
        self.return_geometry = geometry;
        self
    }

    /// Set the return geometry from its name
    pub fn with_return_geometry_name(self, name: &str) -> Result<Self> {
        Ok(self.with_return_geometry(name.parse()?))
    }

    pub fn with_bandwidth(mut self, bandwidth: Bandwidth) -> Self {
        self.bandwidth = Some(bandwidth);
        self
    }

    pub fn with_bandwidth_rule(mut self, rule: BandwidthRule) -> Self {
        self.bandwidth_rule = rule;
        self
    }

    pub fn with_grid_resolution(mut self, grid: GridSpec) -> Self {
        self.grid_resolution = Some(grid);
        self
    }

    pub fn with_x_expansion(mut self, expansion: AxisExpansion) -> Self {
        self.x_expansion = Some(expansion);
        self
    }

    pub fn with_y_expansion(mut self, expansion: AxisExpansion) -> Self {
        self.y_expansion = Some(expansion);
        self
    }

    pub fn with_truncate(mut self, truncate: bool) -> Self {
        self.truncate = truncate;
        self
    }

    pub fn with_execution(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution = strategy;
        self
    }

    /// Grid resolution after applying the method default
    pub fn resolved_grid(&self) -> GridSpec {
        self.grid_resolution
            .unwrap_or_else(|| self.method.default_grid())
    }

    /// Check the explicitly supplied values before any work is done
    pub fn validate(&self) -> Result<()> {
        if let Some(bandwidth) = &self.bandwidth {
            bandwidth.validate()?;
        }
        self.resolved_grid().validate()
    }
}
