use chart_layout::core::SplineInterpolator;
use proptest::prelude::*;

fn knots_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
    (
        -100.0f64..100.0,
        prop::collection::vec((0.1f64..10.0, -100.0f64..100.0), 2..10),
    )
        .prop_map(|(start, steps)| {
            let mut x = start;
            steps
                .into_iter()
                .map(|(dx, y)| {
                    x += dx;
                    (x, y)
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn spline_passes_through_every_knot(knots in knots_strategy()) {
        let spline = SplineInterpolator::from_knots(knots.clone()).expect("valid knots");

        prop_assert_eq!(spline.knot_count(), knots.len());
        for (x, y) in knots {
            let value = spline.evaluate(x);
            prop_assert!((value - y).abs() <= 1e-9 * (1.0 + y.abs()), "{} != {}", value, y);
        }
    }

    #[test]
    fn linear_knots_give_a_straight_line(
        slope in -10.0f64..10.0,
        intercept in -100.0f64..100.0,
        knots in knots_strategy(),
        fraction in 0.0f64..1.0
    ) {
        let knots: Vec<(f64, f64)> =
            knots.into_iter().map(|(x, _)| (x, slope * x + intercept)).collect();
        let spline = SplineInterpolator::from_knots(knots).expect("valid knots");
        let (min_x, max_x) = spline.x_span();
        let x = min_x + fraction * (max_x - min_x);

        let expected = slope * x + intercept;
        prop_assert!((spline.evaluate(x) - expected).abs() <= 1e-6 * (1.0 + expected.abs()));
        for knot_slope in spline.slopes() {
            prop_assert!((knot_slope - slope).abs() <= 1e-6 * (1.0 + slope.abs()));
        }
    }
}
