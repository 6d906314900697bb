//! Mapping density fields back onto points or out to grid rows

use crate::table::DensityTable;
use density_core::{DensityField, Error, PointSet, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output geometry requested by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnGeometry {
    /// Density attached to the input points
    #[default]
    Point,
    Grid,
    Raster,
    Polygon,
    Contour,
    Isoband,
}

/// How a field is turned into rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReshapeMode {
    /// Interpolate at each input point
    Point,
    /// One row per grid node
    Grid,
}

impl ReturnGeometry {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Grid => "grid",
            Self::Raster => "raster",
            Self::Polygon => "polygon",
            Self::Contour => "contour",
            Self::Isoband => "isoband",
        }
    }

    /// Everything except `point` is served from expanded grid rows; turning
    /// those rows into polygons or contours is left to the caller.
    pub fn reshape_mode(&self) -> ReshapeMode {
        match self {
            Self::Point => ReshapeMode::Point,
            _ => ReshapeMode::Grid,
        }
    }
}

impl fmt::Display for ReturnGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReturnGeometry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "point" => Ok(Self::Point),
            "grid" => Ok(Self::Grid),
            "raster" => Ok(Self::Raster),
            "polygon" => Ok(Self::Polygon),
            "contour" => Ok(Self::Contour),
            "isoband" => Ok(Self::Isoband),
            _ => Err(Error::unsupported("return geometry", s)),
        }
    }
}

/// Locate `v` on a sorted axis: the lower node index and the fractional
/// offset towards the next node. `None` outside `[axis[0], axis[last]]`.
fn bracket(axis: &[f64], v: f64) -> Option<(usize, f64)> {
    let (&first, &last) = (axis.first()?, axis.last()?);
    if axis.len() < 2 || !(v >= first && v <= last) {
        return None;
    }
    let i = axis
        .partition_point(|&node| node <= v)
        .saturating_sub(1)
        .min(axis.len() - 2);
    let t = (v - axis[i]) / (axis[i + 1] - axis[i]);
    Some((i, t))
}

/// Bilinear interpolation of `field` at `(x, y)`; 0 outside the grid
pub fn interpolate_at(field: &DensityField, x: f64, y: f64) -> f64 {
    let (Some((ix, tx)), Some((iy, ty))) = (bracket(field.xs(), x), bracket(field.ys(), y)) else {
        return 0.0;
    };
    let v00 = field.value(ix, iy);
    let v10 = field.value(ix + 1, iy);
    let v01 = field.value(ix, iy + 1);
    let v11 = field.value(ix + 1, iy + 1);

    (1.0 - tx) * (1.0 - ty) * v00 + tx * (1.0 - ty) * v10 + (1.0 - tx) * ty * v01 + tx * ty * v11
}

/// Density at every point, in input order
pub fn interpolate_density(points: &PointSet, field: &DensityField) -> Vec<f64> {
    points
        .iter()
        .map(|p| interpolate_at(field, p.x, p.y))
        .collect()
}

/// `(x, y, density)` for every grid node, `x` varying fastest
pub fn expand_density(field: &DensityField) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
    field.ys().iter().enumerate().flat_map(move |(iy, &y)| {
        field
            .xs()
            .iter()
            .enumerate()
            .map(move |(ix, &x)| (x, y, field.value(ix, iy)))
    })
}

/// Turn a field into a normalized table
pub fn reshape(points: &PointSet, field: &DensityField, mode: ReshapeMode) -> DensityTable {
    match mode {
        ReshapeMode::Point => {
            let densities = interpolate_density(points, field);
            DensityTable::from_densities(
                points
                    .iter()
                    .zip(densities)
                    .map(|(p, density)| (p.x, p.y, density)),
            )
        }
        ReshapeMode::Grid => DensityTable::from_densities(expand_density(field)),
    }
}
