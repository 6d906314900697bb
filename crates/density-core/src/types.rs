//! Canonical value types shared by every stage of the density pipeline

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A planar coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// Ordered, immutable sequence of sample coordinates
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Wrap a vector of points without validation
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Build from parallel coordinate slices
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(Error::InvalidInput(format!(
                "coordinate length mismatch: {} x values, {} y values",
                xs.len(),
                ys.len()
            )));
        }
        Ok(Self {
            points: xs.iter().zip(ys).map(|(&x, &y)| Point::new(x, y)).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// X coordinates in input order
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Y coordinates in input order
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Check the set is usable as density input: at least `min_points`
    /// points, all of them finite.
    pub fn validate(&self, min_points: usize) -> Result<()> {
        if self.points.len() < min_points {
            return Err(Error::InsufficientData {
                expected: min_points,
                actual: self.points.len(),
            });
        }
        if let Some(idx) = self.points.iter().position(|p| !p.is_finite()) {
            return Err(Error::non_finite(&format!("point {idx}")));
        }
        Ok(())
    }

    /// `(min, max)` of the x coordinates, `None` when empty
    pub fn x_range(&self) -> Option<(f64, f64)> {
        min_max(self.points.iter().map(|p| p.x))
    }

    /// `(min, max)` of the y coordinates, `None` when empty
    pub fn y_range(&self) -> Option<(f64, f64)> {
        min_max(self.points.iter().map(|p| p.y))
    }

    /// Arithmetic mean of the points, `None` when empty
    pub fn centroid(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Some(Point::new(sx / n, sy / n))
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Kernel smoothing parameter, isotropic or per axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bandwidth {
    /// Same bandwidth on both axes
    Isotropic(f64),
    /// `(bw_x, bw_y)`
    PerAxis(f64, f64),
}

impl Bandwidth {
    pub fn x(&self) -> f64 {
        match *self {
            Self::Isotropic(h) => h,
            Self::PerAxis(hx, _) => hx,
        }
    }

    pub fn y(&self) -> f64 {
        match *self {
            Self::Isotropic(h) => h,
            Self::PerAxis(_, hy) => hy,
        }
    }

    /// Mean of the two axis bandwidths
    pub fn mean(&self) -> f64 {
        (self.x() + self.y()) / 2.0
    }

    /// Every axis must be strictly positive and finite
    pub fn validate(&self) -> Result<()> {
        for (axis, h) in [('x', self.x()), ('y', self.y())] {
            if !h.is_finite() || h <= 0.0 {
                return Err(Error::InvalidParameter(format!(
                    "bandwidth on the {axis} axis must be positive and finite, got {h}"
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Bandwidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.6}, {:.6}]", self.x(), self.y())
    }
}

/// Number of evaluation nodes along each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GridSpec {
    /// Same resolution on both axes
    Square(usize),
    /// `(nx, ny)`
    PerAxis(usize, usize),
}

impl GridSpec {
    pub fn nx(&self) -> usize {
        match *self {
            Self::Square(n) => n,
            Self::PerAxis(nx, _) => nx,
        }
    }

    pub fn ny(&self) -> usize {
        match *self {
            Self::Square(n) => n,
            Self::PerAxis(_, ny) => ny,
        }
    }

    /// Total number of grid nodes
    pub fn len(&self) -> usize {
        self.nx() * self.ny()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A grid needs at least two nodes per axis to span a domain
    pub fn validate(&self) -> Result<()> {
        if self.nx() < 2 || self.ny() < 2 {
            return Err(Error::InvalidParameter(format!(
                "grid resolution must be at least 2 on each axis, got {}x{}",
                self.nx(),
                self.ny()
            )));
        }
        Ok(())
    }
}

/// Per-axis expansion setting.
///
/// Under the continuous method these are multiples of the sample range;
/// under the binned method a pair is read as a literal `[low, high]` interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisExpansion {
    /// Same value below and above
    Symmetric(f64),
    /// `(low, high)`
    Pair(f64, f64),
}

impl AxisExpansion {
    pub fn low(&self) -> f64 {
        match *self {
            Self::Symmetric(v) => v,
            Self::Pair(lo, _) => lo,
        }
    }

    pub fn high(&self) -> f64 {
        match *self {
            Self::Symmetric(v) => v,
            Self::Pair(_, hi) => hi,
        }
    }
}

/// Rectangle over which density is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Domain {
    /// Create a domain, requiring finite bounds with `xmin < xmax` and `ymin < ymax`
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self> {
        let bounds = [xmin, xmax, ymin, ymax];
        if bounds.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("domain bounds"));
        }
        if xmin >= xmax {
            return Err(Error::InvalidInput(format!(
                "domain x interval is empty: [{xmin}, {xmax}]"
            )));
        }
        if ymin >= ymax {
            return Err(Error::InvalidInput(format!(
                "domain y interval is empty: [{ymin}, {ymax}]"
            )));
        }
        Ok(Self { xmin, xmax, ymin, ymax })
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Closed containment test
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.xmin && x <= self.xmax && y >= self.ymin && y <= self.ymax
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x=[{:.6}, {:.6}], y=[{:.6}, {:.6}]",
            self.xmin, self.xmax, self.ymin, self.ymax
        )
    }
}
