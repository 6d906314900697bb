//! End-to-end tests for the density pipeline

mod common;

use approx::assert_relative_eq;
use common::{sightings, unit_square, Sighting};
use density_core::{AxisExpansion, Bandwidth, Error, ExecutionStrategy, GridSpec};
use density_kde::{Method, ReturnGeometry};
use density_pipeline::{run_density, CrsTag, DensityConfig, DensityOutput, DensityPipeline};

fn square_config() -> DensityConfig {
    DensityConfig::new()
        .with_method(Method::Continuous)
        .with_return_geometry(ReturnGeometry::Point)
        .with_bandwidth(Bandwidth::PerAxis(0.5, 0.5))
        .with_grid_resolution(GridSpec::PerAxis(5, 5))
}

#[test]
fn test_unit_square_scenario() {
    let output = run_density(unit_square(), CrsTag::none(), &square_config()).unwrap();
    assert_eq!(output.len(), 4);
    assert!(!output.is_degenerate());

    let densities = output.densities();
    let ndensities = output.ndensities();
    let max = densities.iter().cloned().fold(f64::MIN, f64::max);
    for (d, nd) in densities.iter().zip(&ndensities) {
        assert!(d.is_finite() && *d >= 0.0);
        assert_relative_eq!(*nd, d / max);
        // Symmetric layout
        assert_relative_eq!(*d, max, max_relative = 1e-12);
    }

    let records = output.records().unwrap();
    let coords: Vec<_> = records.iter().map(|a| a.record).collect();
    assert_eq!(coords, unit_square());
}

#[test]
fn test_records_keep_order_and_attributes() {
    let input = sightings(40, 5);
    let config = DensityConfig::new().with_grid_resolution(GridSpec::Square(60));
    let output = DensityPipeline::new(config)
        .run(input.clone(), CrsTag::new("EPSG:27700"))
        .unwrap();

    assert_eq!(output.crs().as_str(), Some("EPSG:27700"));
    let annotated = output.into_records().unwrap();
    let returned: Vec<Sighting> = annotated.iter().map(|a| a.record.clone()).collect();
    assert_eq!(returned, input);
    assert!(annotated.iter().all(|a| (0.0..=1.0).contains(&a.ndensity)));
    assert!(annotated.iter().any(|a| a.ndensity == 1.0));
}

#[test]
fn test_runs_are_idempotent() {
    let input = sightings(25, 9);
    for method in [Method::Continuous, Method::Binned] {
        let config = DensityConfig::new()
            .with_method(method)
            .with_bandwidth(Bandwidth::PerAxis(0.6, 0.3))
            .with_grid_resolution(GridSpec::Square(30));
        let a = run_density(input.clone(), CrsTag::none(), &config).unwrap();
        let b = run_density(input.clone(), CrsTag::none(), &config).unwrap();
        assert_eq!(a, b);
    }

    // Estimated bandwidths are closed form, so this holds without pinning too
    let config = DensityConfig::new().with_grid_resolution(GridSpec::Square(30));
    let a = run_density(input.clone(), CrsTag::none(), &config).unwrap();
    let b = run_density(input, CrsTag::none(), &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_identical_points_are_invalid_input() {
    let twins = vec![(2.0, 3.0), (2.0, 3.0)];

    // Estimated bandwidth has zero scale
    for method in [Method::Continuous, Method::Binned] {
        let config = DensityConfig::new().with_method(method);
        let err = run_density(twins.clone(), CrsTag::none(), &config).unwrap_err();
        assert!(err.is_invalid_input(), "{method}: {err}");
    }

    // Pinned bandwidth still leaves a zero range for the continuous domain
    let config = DensityConfig::new().with_bandwidth(Bandwidth::Isotropic(1.0));
    let err = run_density(twins, CrsTag::none(), &config).unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().contains("range"));
}

#[test]
fn test_unsupported_options_name_the_value() {
    let err = DensityConfig::new().with_method_name("kde3d").unwrap_err();
    assert!(matches!(err, Error::UnsupportedOption { option: "method", .. }));
    assert!(err.to_string().contains("kde3d"));

    let err = DensityConfig::new().with_return_geometry_name("hexagon").unwrap_err();
    assert!(matches!(err, Error::UnsupportedOption { option: "return geometry", .. }));
    assert!(err.to_string().contains("hexagon"));

    let parsed: Result<DensityConfig, _> = serde_json::from_str(r#"{"method": "kde3d"}"#);
    assert!(parsed.is_err());
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "method": "binned",
        "return_geometry": "grid",
        "bandwidth": [0.3, 0.4],
        "grid_resolution": [10, 12],
        "x_expansion": [-1.0, 2.0],
        "y_expansion": [-1.0, 2.0],
        "truncate": false,
        "execution": "parallel"
    }"#;
    let config: DensityConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.bandwidth, Some(Bandwidth::PerAxis(0.3, 0.4)));
    assert_eq!(config.grid_resolution, Some(GridSpec::PerAxis(10, 12)));
    assert_eq!(config.execution, ExecutionStrategy::Parallel);
    assert!(!config.truncate);

    let output = run_density(unit_square(), CrsTag::none(), &config).unwrap();
    let table = output.table().unwrap();
    assert_eq!(table.len(), 120);
    let xs = table.xs();
    assert_eq!(xs[0], -1.0);
    assert_eq!(xs[9], 2.0);
    assert_eq!(table.ys()[119], 2.0);
}

#[test]
fn test_polygon_output_pads_continuous_domain() {
    let config = DensityConfig::new()
        .with_return_geometry(ReturnGeometry::Polygon)
        .with_bandwidth(Bandwidth::Isotropic(0.5))
        .with_grid_resolution(GridSpec::Square(11));
    let output = run_density(unit_square(), CrsTag::none(), &config).unwrap();
    let xs = output.table().unwrap().xs();
    assert_relative_eq!(xs[0], -0.15, epsilon = 1e-12);
    assert_relative_eq!(xs[10], 1.15, epsilon = 1e-12);

    // An explicit expansion wins over the default
    let config = config.with_x_expansion(AxisExpansion::Symmetric(0.0));
    let output = run_density(unit_square(), CrsTag::none(), &config).unwrap();
    assert_eq!(output.table().unwrap().xs()[0], 0.0);

    // Binned polygons pad by bandwidth instead
    let config = DensityConfig::new()
        .with_method(Method::Binned)
        .with_return_geometry(ReturnGeometry::Polygon)
        .with_bandwidth(Bandwidth::Isotropic(0.5))
        .with_grid_resolution(GridSpec::Square(11));
    let output = run_density(unit_square(), CrsTag::none(), &config).unwrap();
    assert_relative_eq!(output.table().unwrap().xs()[0], -0.875, epsilon = 1e-12);
}

#[test]
fn test_grid_geometries_share_one_table() {
    let base = DensityConfig::new()
        .with_bandwidth(Bandwidth::Isotropic(0.4))
        .with_grid_resolution(GridSpec::PerAxis(8, 6));
    let reference = run_density(
        unit_square(),
        CrsTag::none(),
        &base.clone().with_return_geometry(ReturnGeometry::Grid),
    )
    .unwrap();

    for geometry in [ReturnGeometry::Raster, ReturnGeometry::Contour, ReturnGeometry::Isoband] {
        let output = run_density(unit_square(), CrsTag::none(), &base.clone().with_return_geometry(geometry)).unwrap();
        match output {
            DensityOutput::Grid { table, geometry: g, .. } => {
                assert_eq!(g, geometry);
                assert_eq!(&table, reference.table().unwrap());
            }
            DensityOutput::Points { .. } => panic!("expected grid output for {geometry}"),
        }
    }
}

#[test]
fn test_points_outside_interval_are_degenerate() {
    let config = DensityConfig::new()
        .with_method(Method::Binned)
        .with_bandwidth(Bandwidth::Isotropic(0.1))
        .with_x_expansion(AxisExpansion::Pair(100.0, 101.0));
    let output = run_density(unit_square(), CrsTag::none(), &config).unwrap();
    assert!(output.is_degenerate());
    assert!(output.densities().iter().all(|&d| d == 0.0));
    assert!(output.ndensities().iter().all(|&d| d == 0.0));
}

#[test]
fn test_parallel_matches_sequential() {
    let input = sightings(50, 21);
    for method in [Method::Continuous, Method::Binned] {
        let config = DensityConfig::new()
            .with_method(method)
            .with_return_geometry(ReturnGeometry::Grid)
            .with_grid_resolution(GridSpec::Square(40));
        let seq = run_density(
            input.clone(),
            CrsTag::none(),
            &config.clone().with_execution(ExecutionStrategy::Sequential),
        )
        .unwrap();
        let par = run_density(
            input.clone(),
            CrsTag::none(),
            &config.with_execution(ExecutionStrategy::Parallel),
        )
        .unwrap();
        for (a, b) in seq.densities().iter().zip(par.densities()) {
            assert_relative_eq!(*a, b, max_relative = 1e-12);
        }
    }
}
