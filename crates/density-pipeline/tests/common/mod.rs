//! Shared fixtures for pipeline integration tests

#![allow(dead_code)]

use density_core::Point;
use density_pipeline::Located;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;

/// A caller record with attributes the pipeline never reads
#[derive(Debug, Clone, PartialEq)]
pub struct Sighting {
    pub id: u32,
    pub species: &'static str,
    pub x: f64,
    pub y: f64,
}

impl Located for Sighting {
    fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

pub fn unit_square() -> Vec<(f64, f64)> {
    vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]
}

/// Two seeded normal clusters of sightings
pub fn sightings(n_per_cluster: usize, seed: u64) -> Vec<Sighting> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let mut out = Vec::with_capacity(2 * n_per_cluster);
    for (cluster, (cx, cy, species)) in [(0.0, 0.0, "heron"), (6.0, 3.0, "egret")].into_iter().enumerate() {
        for i in 0..n_per_cluster {
            out.push(Sighting {
                id: (cluster * n_per_cluster + i) as u32,
                species,
                x: cx + normal.sample(&mut rng),
                y: cy + 0.5 * normal.sample(&mut rng),
            });
        }
    }
    out
}
