//! Long-format density tables with normalized density

use serde::{Deserialize, Serialize};
use tracing::warn;

/// One output row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityRow {
    pub x: f64,
    pub y: f64,
    pub density: f64,
    /// `density / max(density)` over the whole table
    pub ndensity: f64,
}

/// Rows of `{x, y, density, ndensity}` with normalization applied.
///
/// When every density is zero the table is flagged as degenerate and every
/// `ndensity` is 0 instead of NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityTable {
    rows: Vec<DensityRow>,
    max_density: f64,
    degenerate: bool,
}

impl DensityTable {
    /// Build a table from `(x, y, density)` triples, computing `ndensity`
    pub fn from_densities<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64, f64)>,
    {
        let entries: Vec<(f64, f64, f64)> = entries.into_iter().collect();
        let max_density = entries.iter().map(|e| e.2).fold(0.0, f64::max);
        let degenerate = max_density <= 0.0;
        if degenerate {
            warn!(
                rows = entries.len(),
                "all densities are zero; ndensity set to 0"
            );
        }

        let rows = entries
            .into_iter()
            .map(|(x, y, density)| DensityRow {
                x,
                y,
                density,
                ndensity: if degenerate { 0.0 } else { density / max_density },
            })
            .collect();

        Self {
            rows,
            max_density,
            degenerate,
        }
    }

    pub fn rows(&self) -> &[DensityRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<DensityRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DensityRow> {
        self.rows.iter()
    }

    /// Largest density in the table (0 when empty)
    pub fn max_density(&self) -> f64 {
        self.max_density
    }

    /// True when no row has positive density, so normalization was undefined
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    pub fn xs(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.y).collect()
    }

    pub fn densities(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.density).collect()
    }

    pub fn ndensities(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.ndensity).collect()
    }
}

impl<'a> IntoIterator for &'a DensityTable {
    type Item = &'a DensityRow;
    type IntoIter = std::slice::Iter<'a, DensityRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
