//! Evaluation domain for a point set
//!
//! The two methods size their domains differently:
//!
//! | method       | no expansion             | expansion given                           |
//! |--------------|--------------------------|-------------------------------------------|
//! | `continuous` | raw sample range         | range `r` widened by `abs(low)·r`, `abs(high)·r` |
//! | `binned`     | range ± 1.75 × bandwidth | literal `[low, high]` interval            |

use crate::method::Method;
use crate::reshape::ReturnGeometry;
use density_core::{AxisExpansion, Bandwidth, Domain, Error, PointSet, Result};
use tracing::debug;

/// Bandwidth multiples added on each side under the binned method
pub const BINNED_PADDING: f64 = 1.75;

/// Fraction of the sample range added on each side for continuous polygons
pub const POLYGON_EXPANSION: f64 = 0.15;

/// Expansion applied when the caller gives none
pub fn default_expansion(
    geometry: ReturnGeometry,
    method: Method,
) -> (Option<AxisExpansion>, Option<AxisExpansion>) {
    match (geometry, method) {
        (ReturnGeometry::Polygon, Method::Continuous) => (
            Some(AxisExpansion::Symmetric(POLYGON_EXPANSION)),
            Some(AxisExpansion::Symmetric(POLYGON_EXPANSION)),
        ),
        _ => (None, None),
    }
}

/// Compute the rectangle over which density is evaluated.
///
/// `bandwidth` is only consulted by the binned method on axes without an
/// explicit interval.
///
/// # Errors
///
/// - [`Error::InvalidInput`] when the continuous method sees a zero sample
///   range, or the points contain non-finite values
/// - [`Error::InvalidParameter`] for a scalar expansion under the binned
///   method, an inverted interval, or a missing bandwidth
pub fn compute_limits(
    points: &PointSet,
    x_expansion: Option<AxisExpansion>,
    y_expansion: Option<AxisExpansion>,
    method: Method,
    bandwidth: Option<&Bandwidth>,
) -> Result<Domain> {
    points.validate(1)?;
    let x_range = points.x_range().ok_or(Error::InsufficientData {
        expected: 1,
        actual: 0,
    })?;
    let y_range = points.y_range().ok_or(Error::InsufficientData {
        expected: 1,
        actual: 0,
    })?;

    let ((xmin, xmax), (ymin, ymax)) = match method {
        Method::Continuous => (
            continuous_axis('x', x_range, x_expansion)?,
            continuous_axis('y', y_range, y_expansion)?,
        ),
        Method::Binned => (
            binned_axis('x', x_range, x_expansion, bandwidth.map(Bandwidth::x))?,
            binned_axis('y', y_range, y_expansion, bandwidth.map(Bandwidth::y))?,
        ),
    };

    let domain = Domain::new(xmin, xmax, ymin, ymax)?;
    debug!(%method, %domain, "resolved density domain");
    Ok(domain)
}

fn continuous_axis(
    axis: char,
    (min, max): (f64, f64),
    expansion: Option<AxisExpansion>,
) -> Result<(f64, f64)> {
    let range = max - min;
    if range == 0.0 {
        return Err(Error::zero_range(axis));
    }
    let Some(expansion) = expansion else {
        return Ok((min, max));
    };

    let (low, high) = (expansion.low(), expansion.high());
    if !low.is_finite() || !high.is_finite() {
        return Err(Error::InvalidParameter(format!(
            "{axis} expansion must be finite, got [{low}, {high}]"
        )));
    }
    Ok((min - (low * range).abs(), max + (high * range).abs()))
}

fn binned_axis(
    axis: char,
    (min, max): (f64, f64),
    expansion: Option<AxisExpansion>,
    bandwidth: Option<f64>,
) -> Result<(f64, f64)> {
    match expansion {
        Some(AxisExpansion::Pair(low, high)) => {
            if !low.is_finite() || !high.is_finite() || low >= high {
                return Err(Error::InvalidParameter(format!(
                    "{axis} interval must be finite with low < high, got [{low}, {high}]"
                )));
            }
            Ok((low, high))
        }
        Some(AxisExpansion::Symmetric(value)) => Err(Error::InvalidParameter(format!(
            "binned method expects an explicit [low, high] interval for the {axis} axis, got scalar {value}"
        ))),
        None => {
            let h = bandwidth.ok_or_else(|| {
                Error::InvalidParameter(format!(
                    "binned method needs a bandwidth to pad the {axis} axis"
                ))
            })?;
            if !h.is_finite() || h <= 0.0 {
                return Err(Error::InvalidParameter(format!(
                    "bandwidth on the {axis} axis must be positive and finite, got {h}"
                )));
            }
            let pad = BINNED_PADDING * h;
            Ok((min - pad, max + pad))
        }
    }
}
