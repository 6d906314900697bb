//! Coordinate extraction and result assembly

use density_core::{Point, PointSet};
use density_kde::{DensityTable, ReturnGeometry};
use serde::{Deserialize, Serialize};

/// Anything that sits at a planar location.
///
/// Records are read through this trait once, at the pipeline boundary.
pub trait Located {
    fn location(&self) -> Point;
}

impl Located for Point {
    fn location(&self) -> Point {
        *self
    }
}

impl Located for (f64, f64) {
    fn location(&self) -> Point {
        Point::from(*self)
    }
}

impl Located for [f64; 2] {
    fn location(&self) -> Point {
        Point::from(*self)
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn location(&self) -> Point {
        (**self).location()
    }
}

/// Canonical point set for a slice of records, in record order
pub fn extract_points<R: Located>(records: &[R]) -> PointSet {
    records.iter().map(Located::location).collect()
}

/// Coordinate reference carried from input to output without interpretation
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrsTag(Option<String>);

impl CrsTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Some(tag.into()))
    }

    /// No reference attached
    pub fn none() -> Self {
        Self(None)
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl From<&str> for CrsTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

/// A caller record with its density attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotated<R> {
    pub record: R,
    pub density: f64,
    pub ndensity: f64,
}

/// Result of a pipeline run
#[derive(Debug, Clone, PartialEq)]
pub enum DensityOutput<R> {
    /// The input records in their original order
    Points {
        records: Vec<Annotated<R>>,
        crs: CrsTag,
        degenerate: bool,
    },
    /// One row per grid node; the caller builds cells, contours or bands
    Grid {
        table: DensityTable,
        geometry: ReturnGeometry,
        crs: CrsTag,
    },
}

impl<R> DensityOutput<R> {
    pub fn crs(&self) -> &CrsTag {
        match self {
            Self::Points { crs, .. } | Self::Grid { crs, .. } => crs,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Points { records, .. } => records.len(),
            Self::Grid { table, .. } => table.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when every density was zero and `ndensity` fell back to 0
    pub fn is_degenerate(&self) -> bool {
        match self {
            Self::Points { degenerate, .. } => *degenerate,
            Self::Grid { table, .. } => table.is_degenerate(),
        }
    }

    /// Density column in output order
    pub fn densities(&self) -> Vec<f64> {
        match self {
            Self::Points { records, .. } => records.iter().map(|r| r.density).collect(),
            Self::Grid { table, .. } => table.densities(),
        }
    }

    /// Normalized density column in output order
    pub fn ndensities(&self) -> Vec<f64> {
        match self {
            Self::Points { records, .. } => records.iter().map(|r| r.ndensity).collect(),
            Self::Grid { table, .. } => table.ndensities(),
        }
    }

    pub fn records(&self) -> Option<&[Annotated<R>]> {
        match self {
            Self::Points { records, .. } => Some(records),
            Self::Grid { .. } => None,
        }
    }

    pub fn table(&self) -> Option<&DensityTable> {
        match self {
            Self::Grid { table, .. } => Some(table),
            Self::Points { .. } => None,
        }
    }

    pub fn into_records(self) -> Option<Vec<Annotated<R>>> {
        match self {
            Self::Points { records, .. } => Some(records),
            Self::Grid { .. } => None,
        }
    }
}
