//! Estimates density for a small set of sightings and prints both output forms.
//!
//! Run with `RUST_LOG=debug` to see bandwidth and domain resolution.

use density_core::{GridSpec, Point};
use density_kde::{Method, ReturnGeometry};
use density_pipeline::{CrsTag, DensityConfig, DensityPipeline, Located};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct Sighting {
    label: &'static str,
    lon: f64,
    lat: f64,
}

impl Located for Sighting {
    fn location(&self) -> Point {
        Point::new(self.lon, self.lat)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let sightings = vec![
        Sighting { label: "harbour", lon: -3.19, lat: 55.95 },
        Sighting { label: "castle", lon: -3.20, lat: 55.94 },
        Sighting { label: "station", lon: -3.19, lat: 55.952 },
        Sighting { label: "park", lon: -3.17, lat: 55.94 },
        Sighting { label: "museum", lon: -3.189, lat: 55.947 },
        Sighting { label: "hill", lon: -3.16, lat: 55.955 },
    ];

    println!("=== Point density (continuous) ===");
    let config = DensityConfig::new().with_grid_resolution(GridSpec::Square(100));
    let output = DensityPipeline::new(config).run(sightings.clone(), CrsTag::new("EPSG:4326"))?;
    for annotated in output.records().unwrap_or_default() {
        println!(
            "{:>8}: density = {:>10.3}, ndensity = {:.3}",
            annotated.record.label, annotated.density, annotated.ndensity
        );
    }

    println!("\n=== Grid density (binned) ===");
    let config = DensityConfig::new()
        .with_method(Method::Binned)
        .with_return_geometry(ReturnGeometry::Grid)
        .with_grid_resolution(GridSpec::PerAxis(6, 4));
    let output = DensityPipeline::new(config).run(sightings, CrsTag::new("EPSG:4326"))?;
    if let Some(table) = output.table() {
        for row in table {
            println!(
                "({:>8.4}, {:>8.4}) density = {:>10.3}, ndensity = {:.3}",
                row.x, row.y, row.density, row.ndensity
            );
        }
        println!("max density: {:.3}", table.max_density());
    }

    Ok(())
}
