use chart_layout::api::{
    AxisOptions, ChartComposer, ComposerConfig, LAYOUT_SNAPSHOT_JSON_SCHEMA_V1, LayoutSnapshot,
    LegendStyle,
};
use chart_layout::core::{AxisOrientation, BoxSize, CurveMode, Point, SeriesPath};
use chart_layout::render::{NullSurface, RecordingSurface};

fn composer_with_series() -> ChartComposer<RecordingSurface> {
    let config = ComposerConfig::new(BoxSize::new(400.0, 300.0))
        .with_has_title(false)
        .with_has_legend(false)
        .with_x_axis(AxisOptions::default().with_tick_interval(2.0));
    let mut composer =
        ChartComposer::new(RecordingSurface::new(), config).expect("valid composer config");
    composer.mount();
    composer.add_series(
        "ramp",
        SeriesPath::new(vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)], "ramp")
            .with_curve_mode(CurveMode::Straight),
    );
    composer
}

#[test]
fn snapshot_reflects_the_latest_pass() {
    let composer = composer_with_series();
    let snapshot = composer.snapshot().expect("snapshot");

    assert_eq!(snapshot.rebuild_count, 2);
    assert_eq!(snapshot.plot_size, BoxSize::new(355.0, 275.0));
    assert_eq!(snapshot.x_axis.orientation, AxisOrientation::X);
    assert_eq!(snapshot.x_axis.domain, (0.0, 10.0));
    assert_eq!(snapshot.x_axis.ticks, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    assert_eq!(snapshot.y_axis.range, (275.0, 0.0));
    assert_eq!(snapshot.y_axis.ticks.first(), Some(&0.0));
    assert_eq!(snapshot.y_axis.ticks.last(), Some(&10.0));
    assert!(snapshot.legend.is_none());
    assert_eq!(snapshot.series[0].path_data, "M0,275 355,0");
    assert_eq!(snapshot.series[0].marker_count, 2);
}

#[test]
fn contract_v1_round_trips() {
    let composer = composer_with_series();
    let snapshot = composer.snapshot().expect("snapshot");
    let json = composer
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract");

    assert!(json.contains(&format!("\"schema_version\": {LAYOUT_SNAPSHOT_JSON_SCHEMA_V1}")));
    let restored = LayoutSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(restored, snapshot);
}

#[test]
fn bare_snapshot_payload_is_accepted() {
    let snapshot = composer_with_series().snapshot().expect("snapshot");
    let json = serde_json::to_string(&snapshot).expect("serialize bare snapshot");

    let restored = LayoutSnapshot::from_json_compat_str(&json).expect("parse bare snapshot");
    assert_eq!(restored, snapshot);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let json = composer_with_series()
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract")
        .replace("\"schema_version\": 1", "\"schema_version\": 2");

    let err = LayoutSnapshot::from_json_compat_str(&json).expect_err("version 2 must fail");
    assert!(err.to_string().contains("unsupported snapshot schema version"));
    assert!(LayoutSnapshot::from_json_compat_str("not json").is_err());
}

#[test]
fn snapshot_requires_a_pass() {
    let config = ComposerConfig::new(BoxSize::new(400.0, 300.0));
    let composer = ChartComposer::new(NullSurface::default(), config).expect("valid config");
    assert!(composer.snapshot().is_err());
    assert!(composer.snapshot_json_contract_v1_pretty().is_err());
}

#[test]
fn snapshot_records_legend_anchor() {
    let config = ComposerConfig::new(BoxSize::new(400.0, 300.0))
        .with_has_title(false)
        .with_legend_style(LegendStyle::UpLeftInBlock);
    let mut composer =
        ChartComposer::new(RecordingSurface::new(), config).expect("valid composer config");
    composer.mount();
    composer.add_series("a", vec![[0.0, 1.0], [4.0, 2.0]]);

    let legend = composer
        .snapshot()
        .expect("snapshot")
        .legend
        .expect("legend drawn");
    assert_eq!(legend.anchor, (50.0, 30.0));
    assert!(legend.size.width > 0.0);
}

#[test]
fn config_json_round_trip_and_defaults() {
    let config = ComposerConfig::new(BoxSize::new(640.0, 480.0))
        .with_title("Throughput")
        .with_legend_style(LegendStyle::BottomCenterOutLine)
        .with_y_axis(AxisOptions::default().with_extra_space(5.0));
    let json = config.to_json_pretty().expect("serialize config");
    let restored = ComposerConfig::from_json_str(&json).expect("parse config");
    assert_eq!(restored, config);

    let minimal = ComposerConfig::from_json_str(r#"{"size": {"width": 200, "height": 100}}"#)
        .expect("minimal config");
    assert_eq!(minimal, ComposerConfig::new(BoxSize::new(200.0, 100.0)));
}

#[test]
fn config_json_rejects_invalid_size() {
    let result = ComposerConfig::from_json_str(r#"{"size": {"width": 0, "height": 100}}"#);
    assert!(result.is_err());
    assert!(ComposerConfig::from_json_str("{}").is_err());
}
