use chart_layout::api::{ChartComposer, ComposerConfig};
use chart_layout::core::{Axis, BoxSize, LinearScale, Point, SeriesPath, SplineInterpolator};
use chart_layout::render::NullSurface;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn wave(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let x = i as f64;
            Point::new(x, 50.0 + 40.0 * (x * 0.15).sin())
        })
        .collect()
}

fn bench_spline_solve_200_knots(c: &mut Criterion) {
    let knots: Vec<(f64, f64)> = wave(200).into_iter().map(|p| (p.x, p.y)).collect();

    c.bench_function("spline_solve_200_knots", |b| {
        b.iter(|| {
            let _ = SplineInterpolator::from_knots(black_box(knots.iter().copied()))
                .expect("valid knots");
        })
    });
}

fn bench_curved_geometry_1920px(c: &mut Criterion) {
    let series = SeriesPath::new(wave(120), "wave");
    let x_scale = LinearScale::new((0.0, 119.0), (0.0, 1920.0)).expect("x scale");
    let y_scale = LinearScale::new((0.0, 100.0), (1080.0, 0.0)).expect("y scale");

    c.bench_function("curved_geometry_1920px", |b| {
        b.iter(|| {
            let geometry = series
                .build_geometry(black_box(x_scale), black_box(y_scale))
                .expect("geometry should build");
            let _ = geometry.path_data();
        })
    });
}

fn bench_axis_widen_and_ticks(c: &mut Criterion) {
    let series = SeriesPath::new(wave(2_000), "wave");

    c.bench_function("axis_widen_and_ticks_2k", |b| {
        b.iter(|| {
            let mut axis = Axis::x("t", "s").with_tick_interval(5.0);
            axis.widen_with_series(black_box(&series));
            let _ = axis.display_ticks();
        })
    });
}

fn bench_composer_rebuild_8_series(c: &mut Criterion) {
    let config = ComposerConfig::new(BoxSize::new(1600.0, 900.0)).with_title("bench");
    let mut composer =
        ChartComposer::new(NullSurface::default(), config).expect("composer init");
    for index in 0..8 {
        let points: Vec<Point> = wave(200)
            .into_iter()
            .map(|p| Point::new(p.x, p.y + index as f64 * 5.0))
            .collect();
        composer.add_series(&format!("series {index}"), points);
    }
    composer.mount();

    c.bench_function("composer_rebuild_8_series", |b| {
        b.iter(|| {
            composer.rebuild();
        })
    });
}

criterion_group!(
    benches,
    bench_spline_solve_200_knots,
    bench_curved_geometry_1920px,
    bench_axis_widen_and_ticks,
    bench_composer_rebuild_8_series
);
criterion_main!(benches);
