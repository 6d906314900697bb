//! Core traits for bandwidth selection

use density_core::Result;

/// Intrinsic properties of a bandwidth rule
pub trait BandwidthSelectorProperties {
    /// Name used in log output
    fn name(&self) -> &'static str;

    /// Whether the rule only depends on closed-form sample statistics
    fn is_closed_form(&self) -> bool {
        true
    }
}

/// Selects a one-dimensional kernel bandwidth from a sample
pub trait BandwidthSelector: BandwidthSelectorProperties {
    /// Estimate a bandwidth from unsorted samples.
    ///
    /// Fails with an insufficient-data error for fewer than two samples and
    /// with an invalid-input error when the sample has zero scale.
    fn estimate(&self, samples: &[f64]) -> Result<f64>;
}
