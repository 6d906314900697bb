//! Property-based tests for density evaluation and reshaping

use density_core::{sequential, Bandwidth, GridSpec, Point, PointSet};
use density_kde::{
    compute_limits, interpolate_at, reshape, DensityEstimator, Method, ReshapeMode,
};
use proptest::prelude::*;

fn point_sets() -> impl Strategy<Value = PointSet> {
    prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), 2..30).prop_filter_map(
        "needs spread on both axes",
        |coords| {
            let points: PointSet = coords.into_iter().map(Point::from).collect();
            let (x0, x1) = points.x_range()?;
            let (y0, y1) = points.y_range()?;
            (x1 - x0 > 1e-3 && y1 - y0 > 1e-3).then_some(points)
        },
    )
}

fn methods() -> impl Strategy<Value = Method> {
    prop_oneof![Just(Method::Continuous), Just(Method::Binned)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_density_is_finite_and_non_negative(
        points in point_sets(),
        method in methods(),
        hx in 0.05f64..3.0,
        hy in 0.05f64..3.0,
        n in 2usize..25,
    ) {
        let bw = Bandwidth::PerAxis(hx, hy);
        let domain = compute_limits(&points, None, None, method, Some(&bw)).unwrap();
        let field = method
            .estimator(true)
            .evaluate(&sequential(), &points, &bw, &domain, &GridSpec::Square(n))
            .unwrap();
        prop_assert!(field.values().iter().all(|v| v.is_finite() && *v >= 0.0));
    }

    #[test]
    fn prop_ndensity_is_normalized(
        points in point_sets(),
        method in methods(),
        h in 0.2f64..3.0,
        mode in prop_oneof![Just(ReshapeMode::Point), Just(ReshapeMode::Grid)],
    ) {
        let bw = Bandwidth::Isotropic(h);
        let domain = compute_limits(&points, None, None, method, Some(&bw)).unwrap();
        let field = method
            .estimator(true)
            .evaluate(&sequential(), &points, &bw, &domain, &GridSpec::Square(15))
            .unwrap();
        let table = reshape(&points, &field, mode);

        prop_assert!(!table.is_degenerate());
        let nd = table.ndensities();
        prop_assert!(nd.iter().all(|&v| (0.0..=1.0).contains(&v)));
        prop_assert_eq!(nd.iter().cloned().fold(f64::MIN, f64::max), 1.0);
    }

    #[test]
    fn prop_interpolation_at_nodes_is_exact(
        points in point_sets(),
        nx in 2usize..20,
        ny in 2usize..20,
        ix_frac in 0.0f64..1.0,
        iy_frac in 0.0f64..1.0,
    ) {
        let bw = Bandwidth::Isotropic(1.0);
        let domain = compute_limits(&points, None, None, Method::Continuous, None).unwrap();
        let field = Method::Continuous
            .estimator(true)
            .evaluate(&sequential(), &points, &bw, &domain, &GridSpec::PerAxis(nx, ny))
            .unwrap();

        let ix = ((nx - 1) as f64 * ix_frac).round() as usize;
        let iy = ((ny - 1) as f64 * iy_frac).round() as usize;
        let (x, y) = (field.xs()[ix], field.ys()[iy]);
        prop_assert_eq!(interpolate_at(&field, x, y), field.value(ix, iy));
    }

    #[test]
    fn prop_outside_points_get_zero(
        points in point_sets(),
        dx in 0.001f64..100.0,
        dy in -5.0f64..5.0,
    ) {
        let bw = Bandwidth::Isotropic(1.0);
        let domain = compute_limits(&points, None, None, Method::Continuous, None).unwrap();
        let field = Method::Continuous
            .estimator(true)
            .evaluate(&sequential(), &points, &bw, &domain, &GridSpec::Square(10))
            .unwrap();

        let bounds = field.bounds();
        prop_assert_eq!(interpolate_at(&field, bounds.xmax + dx, bounds.ymin + dy), 0.0);
        prop_assert_eq!(interpolate_at(&field, bounds.xmin - dx, bounds.ymax - dy), 0.0);
    }

    #[test]
    fn prop_evaluation_is_deterministic(points in point_sets(), method in methods()) {
        let bw = Bandwidth::PerAxis(0.8, 1.3);
        let domain = compute_limits(&points, None, None, method, Some(&bw)).unwrap();
        let estimator = method.estimator(true);
        let a = estimator.evaluate(&sequential(), &points, &bw, &domain, &GridSpec::Square(12)).unwrap();
        let b = estimator.evaluate(&sequential(), &points, &bw, &domain, &GridSpec::Square(12)).unwrap();
        prop_assert_eq!(a, b);
    }
}
