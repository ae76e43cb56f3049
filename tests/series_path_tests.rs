use chart_layout::ChartError;
use chart_layout::core::{
    CurveMode, LinearScale, Point, PointShape, SeriesPath, format_path_data, parse_path_data,
};
use chart_layout::render::Color;

fn unit_scales() -> (LinearScale, LinearScale) {
    (
        LinearScale::new((0.0, 10.0), (0.0, 100.0)).expect("x scale"),
        LinearScale::new((0.0, 10.0), (100.0, 0.0)).expect("y scale"),
    )
}

fn points(pairs: &[(f64, f64)]) -> Vec<Point> {
    pairs.iter().copied().map(Point::from).collect()
}

#[test]
fn construction_sorts_points_by_x() {
    let series = SeriesPath::new(points(&[(3.0, 1.0), (1.0, 2.0), (2.0, 3.0)]), "s");
    let xs: Vec<f64> = series.points().iter().map(|point| point.x).collect();
    assert_eq!(xs, vec![1.0, 2.0, 3.0]);
}

#[test]
fn equal_x_keeps_insertion_order() {
    let series = SeriesPath::new(points(&[(1.0, 5.0), (0.0, 0.0), (1.0, 7.0)]), "s");
    let ys: Vec<f64> = series.points().iter().map(|point| point.y).collect();
    assert_eq!(ys, vec![0.0, 5.0, 7.0]);
}

#[test]
fn straight_geometry_maps_each_point() {
    let (x_scale, y_scale) = unit_scales();
    let series = SeriesPath::new(points(&[(10.0, 10.0), (0.0, 0.0), (5.0, 2.5)]), "s")
        .with_curve_mode(CurveMode::Straight)
        .with_markers(false);

    let geometry = series.build_geometry(x_scale, y_scale).expect("geometry");
    assert_eq!(geometry.coordinates, vec![(0.0, 100.0), (50.0, 75.0), (100.0, 0.0)]);
    assert_eq!(geometry.path_data(), "M0,100 50,75 100,0");
    assert!(geometry.markers.is_empty());
}

#[test]
fn curved_geometry_samples_every_two_pixels() {
    let x_scale = LinearScale::new((0.0, 9.0), (0.0, 90.0)).expect("x scale");
    let y_scale = LinearScale::new((0.0, 18.0), (180.0, 0.0)).expect("y scale");
    let series = SeriesPath::new(
        points(&[(0.0, 0.0), (3.0, 10.0), (6.0, 18.0), (9.0, 16.0)]),
        "s",
    );

    let geometry = series.build_geometry(x_scale, y_scale).expect("geometry");
    let coordinates = &geometry.coordinates;

    assert_eq!(coordinates[0], (0.0, 180.0));
    assert!(coordinates.len() == 45 || coordinates.len() == 46);
    for pair in coordinates.windows(2) {
        assert!((pair[1].0 - pair[0].0 - 2.0).abs() <= 1e-9);
    }
    let last = coordinates[coordinates.len() - 1];
    assert!(last.0 <= 90.0 + 1e-9);
    assert!(last.0 >= 88.0 - 1e-9);

    // The sample at x = 3 lands on the knot (3, 10) -> y pixel 80.
    let on_knot = coordinates[15];
    assert!((on_knot.0 - 30.0).abs() <= 1e-9);
    assert!((on_knot.1 - 80.0).abs() <= 1e-6);
}

#[test]
fn curved_sampling_step_follows_scale_slope_on_offset_domain() {
    // x = 1 maps to pixel 220 here, but the step stays two pixels wide.
    let x_scale = LinearScale::new((-10.0, 10.0), (0.0, 400.0)).expect("x scale");
    let y_scale = LinearScale::new((0.0, 10.0), (100.0, 0.0)).expect("y scale");
    let series = SeriesPath::new(points(&[(-10.0, 0.0), (0.0, 5.0), (10.0, 0.0)]), "s");

    let geometry = series.build_geometry(x_scale, y_scale).expect("geometry");
    let coordinates = &geometry.coordinates;

    assert_eq!(coordinates[0], (0.0, 100.0));
    assert!(coordinates.len() == 200 || coordinates.len() == 201);
    for pair in coordinates.windows(2) {
        assert!((pair[1].0 - pair[0].0 - 2.0).abs() <= 1e-9);
    }

    let on_knot = coordinates[100];
    assert!((on_knot.0 - 200.0).abs() <= 1e-9);
    assert!((on_knot.1 - 50.0).abs() <= 1e-6);
}

#[test]
fn curved_series_with_one_point_is_drawn_straight() {
    let (x_scale, y_scale) = unit_scales();
    let series = SeriesPath::new(points(&[(5.0, 5.0)]), "s");

    let geometry = series.build_geometry(x_scale, y_scale).expect("geometry");
    assert_eq!(geometry.coordinates, vec![(50.0, 50.0)]);
    assert_eq!(geometry.path_data(), "M50,50");
}

#[test]
fn curved_series_with_duplicate_x_is_an_error() {
    let (x_scale, y_scale) = unit_scales();
    let series = SeriesPath::new(points(&[(1.0, 1.0), (1.0, 2.0), (3.0, 4.0)]), "dup");

    let result = series.build_geometry(x_scale, y_scale);
    assert!(matches!(result, Err(ChartError::UnsortedKnots { index: 1 })));

    let straight = series.with_curve_mode(CurveMode::Straight);
    assert!(straight.build_geometry(x_scale, y_scale).is_ok());
}

#[test]
fn markers_prefer_point_overrides() {
    let (x_scale, y_scale) = unit_scales();
    let red = Color::from_rgb8(255, 0, 0);
    let blue = Color::from_rgb8(0, 0, 255);
    let series = SeriesPath::new(
        vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0).with_shape(PointShape::Triangle).with_color(red),
        ],
        "s",
    )
    .with_color(blue)
    .with_marker_shape(PointShape::Square)
    .with_curve_mode(CurveMode::Straight);

    let markers = series.build_geometry(x_scale, y_scale).expect("geometry").markers;
    assert_eq!(markers.len(), 2);

    assert_eq!(markers[0].shape, PointShape::Square);
    assert_eq!(markers[0].size, 5.0);
    assert_eq!(markers[0].color, blue);
    assert_eq!((markers[0].x, markers[0].y), (0.0, 100.0));

    assert_eq!(markers[1].shape, PointShape::Triangle);
    assert_eq!(markers[1].size, 8.0);
    assert_eq!(markers[1].color, red);
}

#[test]
fn extents_feed_axis_widening() {
    let series = SeriesPath::new(points(&[(4.0, -2.0), (1.0, 7.0), (9.0, 3.0)]), "s");
    assert_eq!(series.x_extent(), Some((1.0, 9.0)));
    assert_eq!(series.y_extent(), Some((-2.0, 7.0)));

    let empty = SeriesPath::new(Vec::new(), "empty");
    assert_eq!(empty.x_extent(), None);
    assert_eq!(empty.y_extent(), None);
}

#[test]
fn path_data_wire_format() {
    assert_eq!(format_path_data(&[]), "");
    assert_eq!(format_path_data(&[(-0.0, 1.5)]), "M0,1.5");
    assert_eq!(
        format_path_data(&[(0.0, 250.0), (10.0, 240.5), (20.25, -3.0)]),
        "M0,250 10,240.5 20.25,-3"
    );
    assert_eq!(
        parse_path_data("M0,250 10,240.5 20.25,-3"),
        vec![(0.0, 250.0), (10.0, 240.5), (20.25, -3.0)]
    );
}

#[test]
fn set_points_replaces_and_resorts() {
    let mut series = SeriesPath::new(points(&[(1.0, 1.0)]), "s");
    series.set_points(points(&[(8.0, 0.0), (2.0, 0.0)]));

    assert_eq!(series.x_extent(), Some((2.0, 8.0)));
    assert_eq!(series.path_style().stroke_width, 1.5);
}
