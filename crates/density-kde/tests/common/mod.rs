//! Shared fixtures for density-kde integration tests

#![allow(dead_code)]

use density_core::{Point, PointSet};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;

pub const EPSILON: f64 = 1e-10;

/// Corners of the unit square
pub fn unit_square() -> PointSet {
    PointSet::new(vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
    ])
}

/// Seeded bivariate normal cloud
pub fn normal_cloud(n: usize, center: (f64, f64), sigma: (f64, f64), seed: u64) -> PointSet {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let nx = Normal::new(center.0, sigma.0).unwrap();
    let ny = Normal::new(center.1, sigma.1).unwrap();
    (0..n)
        .map(|_| Point::new(nx.sample(&mut rng), ny.sample(&mut rng)))
        .collect()
}

/// Assert two slices are equal within tolerance
pub fn assert_slices_close(actual: &[f64], expected: &[f64], context: &str) {
    assert_eq!(actual.len(), expected.len(), "length mismatch for {context}");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= EPSILON * e.abs().max(1.0),
            "{context}: index {i} differs: {a} vs {e}"
        );
    }
}
