//! Property-based tests for pipeline outputs

use density_core::{Bandwidth, GridSpec};
use density_kde::{Method, ReturnGeometry};
use density_pipeline::{run_density, CrsTag, DensityConfig};
use proptest::prelude::*;

fn records() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 3..40).prop_filter(
        "needs spread on both axes",
        |coords| {
            let spread = |f: fn(&(f64, f64)) -> f64| {
                let lo = coords.iter().map(f).fold(f64::INFINITY, f64::min);
                let hi = coords.iter().map(f).fold(f64::NEG_INFINITY, f64::max);
                hi - lo
            };
            spread(|c| c.0) > 1e-2 && spread(|c| c.1) > 1e-2
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_point_output_is_normalized(
        coords in records(),
        method in prop_oneof![Just(Method::Continuous), Just(Method::Binned)],
        h in 0.5f64..5.0,
    ) {
        let config = DensityConfig::new()
            .with_method(method)
            .with_bandwidth(Bandwidth::Isotropic(h))
            .with_grid_resolution(GridSpec::Square(25));
        let output = run_density(coords.clone(), CrsTag::none(), &config).unwrap();

        prop_assert_eq!(output.len(), coords.len());
        prop_assert!(!output.is_degenerate());
        let nd = output.ndensities();
        prop_assert!(nd.iter().all(|&v| (0.0..=1.0).contains(&v)));
        prop_assert_eq!(nd.iter().cloned().fold(f64::MIN, f64::max), 1.0);
    }

    #[test]
    fn prop_grid_output_has_one_row_per_node(
        coords in records(),
        nx in 2usize..20,
        ny in 2usize..20,
    ) {
        let config = DensityConfig::new()
            .with_return_geometry(ReturnGeometry::Grid)
            .with_grid_resolution(GridSpec::PerAxis(nx, ny));
        let output = run_density(coords, CrsTag::new("local"), &config).unwrap();
        prop_assert_eq!(output.len(), nx * ny);
        prop_assert!(output.densities().iter().all(|d| d.is_finite() && *d >= 0.0));
    }
}
