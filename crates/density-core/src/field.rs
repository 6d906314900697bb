//! Dense density fields sampled on a regular grid

use crate::{Domain, Error, GridSpec, Result};

/// `n` evenly spaced values from `start` to `end` inclusive.
///
/// The last value is exactly `end` so that grid nodes line up with the
/// domain boundary.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Density values on an `nx × ny` grid together with the axis vectors
/// that index it.
///
/// Values are stored row-major with `y` as the row index, so the value at
/// `(xs[ix], ys[iy])` lives at `iy * nx + ix`.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityField {
    xs: Vec<f64>,
    ys: Vec<f64>,
    values: Vec<f64>,
}

impl DensityField {
    /// Create a field, checking shape, finiteness and non-negativity
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        if xs.len() < 2 || ys.len() < 2 {
            return Err(Error::InvalidParameter(format!(
                "density field needs at least 2 nodes per axis, got {}x{}",
                xs.len(),
                ys.len()
            )));
        }
        if values.len() != xs.len() * ys.len() {
            return Err(Error::InvalidInput(format!(
                "density field shape mismatch: expected {} values, got {}",
                xs.len() * ys.len(),
                values.len()
            )));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::Computation(
                "density field contains NaN or infinite values".to_string(),
            ));
        }
        if values.iter().any(|&v| v < 0.0) {
            return Err(Error::Computation(
                "density field contains negative values".to_string(),
            ));
        }
        Ok(Self { xs, ys, values })
    }

    /// Grid coordinate vectors for `domain` at the given resolution
    pub fn axes(domain: &Domain, grid: &GridSpec) -> (Vec<f64>, Vec<f64>) {
        (
            linspace(domain.xmin, domain.xmax, grid.nx()),
            linspace(domain.ymin, domain.ymax, grid.ny()),
        )
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn nx(&self) -> usize {
        self.xs.len()
    }

    pub fn ny(&self) -> usize {
        self.ys.len()
    }

    /// Value at grid node `(ix, iy)`
    #[inline]
    pub fn value(&self, ix: usize, iy: usize) -> f64 {
        self.values[iy * self.xs.len() + ix]
    }

    /// Rectangle covered by the grid nodes
    pub fn bounds(&self) -> Domain {
        Domain {
            xmin: self.xs[0],
            xmax: self.xs[self.xs.len() - 1],
            ymin: self.ys[0],
            ymax: self.ys[self.ys.len() - 1],
        }
    }

    /// Largest value in the field
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// Trapezoidal approximation of the integral over the covered rectangle
    pub fn integral(&self) -> f64 {
        let weights = |axis: &[f64]| -> Vec<f64> {
            let n = axis.len();
            (0..n)
                .map(|i| {
                    let left = if i > 0 { axis[i] - axis[i - 1] } else { 0.0 };
                    let right = if i + 1 < n { axis[i + 1] - axis[i] } else { 0.0 };
                    (left + right) / 2.0
                })
                .collect()
        };
        let wx = weights(&self.xs);
        let wy = weights(&self.ys);

        wy.iter()
            .enumerate()
            .map(|(iy, wy)| {
                let row = &self.values[iy * self.nx()..(iy + 1) * self.nx()];
                wy * row.iter().zip(&wx).map(|(v, w)| v * w).sum::<f64>()
            })
            .sum()
    }
}
