//! Sample percentiles and the interquartile range

use density_core::{Error, Result};

/// Percentile of pre-sorted data by linear interpolation between order
/// statistics (Hyndman & Fan type 7).
///
/// `p` is a probability in `[0, 1]`. Returns `None` for empty input.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let h = (n - 1) as f64 * p.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let frac = h - lo as f64;
    Some(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}

/// Sort a copy of `data`, rejecting non-finite values
pub fn sorted_finite(data: &[f64]) -> Result<Vec<f64>> {
    if data.iter().any(|v| !v.is_finite()) {
        return Err(Error::non_finite("sample"));
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    Ok(sorted)
}

/// Interquartile range `Q(0.75) - Q(0.25)` of unsorted data
pub fn iqr(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::InsufficientData {
            expected: 1,
            actual: 0,
        });
    }
    let sorted = sorted_finite(data)?;
    iqr_sorted(&sorted).ok_or_else(|| Error::Computation("empty sample".to_string()))
}

/// Interquartile range of pre-sorted data
pub fn iqr_sorted(sorted: &[f64]) -> Option<f64> {
    Some(quantile_sorted(sorted, 0.75)? - quantile_sorted(sorted, 0.25)?)
}
