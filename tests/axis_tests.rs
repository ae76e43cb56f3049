use chart_layout::core::{
    Axis, AxisOrientation, MAX_TICK_COUNT, Point, SeriesPath, format_tick_label, nice_ticks,
};

fn series(points: &[(f64, f64)]) -> SeriesPath {
    SeriesPath::new(points.iter().copied().map(Point::from).collect(), "s")
}

#[test]
fn series_extents_set_domains_and_interval_ticks() {
    let data = series(&[(0.0, 0.0), (3.0, 10.0), (6.0, 18.0), (9.0, 16.0)]);
    let mut x_axis = Axis::x("", "").with_tick_interval(3.0);
    let mut y_axis = Axis::y("", "");

    x_axis.widen_with_series(&data);
    y_axis.widen_with_series(&data);

    assert_eq!(x_axis.domain(), (0.0, 9.0));
    assert_eq!(x_axis.ticks(), &[0.0, 3.0, 6.0, 9.0]);
    assert_eq!(y_axis.domain(), (0.0, 18.0));
    assert!(y_axis.ticks().is_empty());
}

#[test]
fn ticks_end_with_max_when_interval_does_not_divide_span() {
    let axis = Axis::x("", "").with_domain(0.0, 9.0).with_tick_interval(4.0);
    assert_eq!(axis.ticks(), &[0.0, 4.0, 8.0, 9.0]);
}

#[test]
fn ticks_start_at_negative_min() {
    let axis = Axis::y("", "").with_domain(-5.0, 5.0).with_tick_interval(5.0);
    assert_eq!(axis.ticks(), &[-5.0, 0.0, 5.0]);
}

#[test]
fn zero_or_invalid_interval_produces_no_ticks() {
    let axis = Axis::x("", "").with_domain(0.0, 10.0);
    assert!(axis.ticks().is_empty());

    let negative = Axis::x("", "").with_domain(0.0, 10.0).with_tick_interval(-1.0);
    assert!(negative.ticks().is_empty());

    let nan = Axis::x("", "").with_domain(0.0, 10.0).with_tick_interval(f64::NAN);
    assert!(nan.ticks().is_empty());
}

#[test]
fn display_ticks_fall_back_to_round_numbers() {
    let axis = Axis::y("", "").with_domain(0.0, 18.0);
    assert_eq!(
        axis.display_ticks(),
        vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0]
    );

    let explicit = Axis::y("", "").with_domain(0.0, 18.0).with_tick_interval(6.0);
    assert_eq!(explicit.display_ticks(), vec![0.0, 6.0, 12.0, 18.0]);
}

#[test]
fn tiny_interval_is_capped() {
    let axis = Axis::x("", "").with_domain(0.0, 1.0).with_tick_interval(1e-9);

    assert_eq!(axis.ticks().len(), MAX_TICK_COUNT + 1);
    assert_eq!(axis.ticks().last().copied(), Some(1.0));
}

#[test]
fn extra_space_pads_max_before_rounding() {
    let mut axis = Axis::y("", "").with_extra_space(10.0);
    axis.widen_with_series(&series(&[(0.0, 20.0), (1.0, 80.0)]));
    axis.widen_with_series(&series(&[(0.0, 35.0), (1.0, 60.0)]));

    assert_eq!(axis.domain(), (0.0, 90.0));
}

#[test]
fn widened_max_rounds_half_up() {
    let mut below = Axis::x("", "");
    below.widen_domain(0.0, 9.4);
    assert_eq!(below.domain(), (0.0, 9.0));

    let mut at_half = Axis::x("", "");
    at_half.widen_domain(0.0, 9.5);
    assert_eq!(at_half.domain(), (0.0, 10.0));
}

#[test]
fn widening_only_grows_and_ignores_non_finite_candidates() {
    let mut axis = Axis::x("", "").with_domain(-2.0, 50.0);

    axis.widen_domain(1.0, 20.0);
    assert_eq!(axis.domain(), (-2.0, 50.0));

    axis.widen_domain(f64::NAN, 100.0);
    axis.widen_domain(0.0, f64::INFINITY);
    assert_eq!(axis.domain(), (-2.0, 50.0));

    axis.widen_domain(-7.0, 60.0);
    assert_eq!(axis.domain(), (-7.0, 60.0));
}

#[test]
fn inverted_domain_input_is_swapped() {
    let mut axis = Axis::x("", "").with_domain(10.0, -10.0);
    assert_eq!(axis.domain(), (-10.0, 10.0));

    axis.set_domain(4.0, 2.0);
    assert_eq!(axis.domain(), (2.0, 4.0));

    axis.widen_domain(0.0, 9.0);
    axis.reset_domain();
    assert_eq!(axis.domain(), (2.0, 4.0));
}

#[test]
fn reset_restores_initial_domain() {
    let mut axis = Axis::y("", "").with_domain(0.0, 5.0).with_tick_interval(5.0);
    axis.widen_domain(0.0, 100.0);
    assert_eq!(axis.domain(), (0.0, 100.0));

    axis.reset_domain();
    assert_eq!(axis.domain(), (0.0, 5.0));
    assert_eq!(axis.ticks(), &[0.0, 5.0]);
}

#[test]
fn empty_series_leaves_domain_untouched() {
    let mut axis = Axis::x("", "").with_domain(1.0, 2.0);
    axis.widen_with_series(&SeriesPath::new(Vec::new(), "empty"));
    assert_eq!(axis.domain(), (1.0, 2.0));
}

#[test]
fn scale_maps_domain_onto_range() {
    let mut axis = Axis::y("", "").with_domain(0.0, 18.0);
    axis.set_range(300.0, 0.0);

    assert_eq!(axis.scale(0.0), 300.0);
    assert_eq!(axis.scale(18.0), 0.0);
    assert!(axis.linear_scale().is_ok());
}

#[test]
fn zero_span_domain_scales_to_nan_and_has_no_linear_scale() {
    let mut axis = Axis::x("", "");
    axis.set_range(0.0, 100.0);

    assert!(axis.scale(0.0).is_nan());
    assert!(axis.linear_scale().is_err());
}

#[test]
fn title_defaults_to_name_and_unit() {
    assert_eq!(Axis::x("time", "s").title(), "time (s)");
    assert_eq!(Axis::x("time", "").title(), "time");
    assert_eq!(Axis::y("", "USD").title(), "(USD)");
    assert_eq!(Axis::y("", "").title(), "");
    assert_eq!(Axis::y("price", "USD").with_title("Close").title(), "Close");
    assert_eq!(Axis::y("price", "USD").with_title("").title(), "price (USD)");
}

#[test]
fn orientation_helpers_build_matching_axes() {
    assert_eq!(Axis::x("", "").orientation(), AxisOrientation::X);
    assert_eq!(Axis::y("", "").orientation(), AxisOrientation::Y);
    assert_eq!(AxisOrientation::X.class(), "axis axis--x");
}

#[test]
fn round_number_ticks_and_labels() {
    assert_eq!(nice_ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(nice_ticks(-10.0, 10.0, 4), vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
    assert!(nice_ticks(f64::NAN, 1.0, 5).is_empty());

    assert_eq!(format_tick_label(0.4, 0.2), "0.4");
    assert_eq!(format_tick_label(1500.0, 500.0), "1500");
}
