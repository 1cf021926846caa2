use bar3d_chart::api::{AnimationConfig, AnimationMode, BarChart3D, ChartConfig};
use bar3d_chart::core::{BarDatum, Viewport};
use bar3d_chart::render::NullRenderer;
use bar3d_chart::{ChartError, telemetry};

#[test]
fn defaults_match_the_documented_component_props() {
    let config = ChartConfig::default();
    assert_eq!(config.viewport, Viewport::new(800, 500));
    assert_eq!(config.style.title, "3D Bar Chart");
    assert_eq!(config.style.background_color, "#2a2a2a");
    assert_eq!(config.style.font_color, "white");
    assert_eq!(config.extrusion.depth_dx_px, 10.0);
    assert_eq!(config.extrusion.depth_dy_px, -10.0);
    assert_eq!(config.extrusion.shade_percent, 10.0);
    assert_eq!(config.geometry.chart_height_px, 400.0);
    assert!(config.validate().is_ok());
}

#[test]
fn json_round_trip_preserves_config() {
    let config = ChartConfig::new(Viewport::new(1024, 600))
        .with_title("Quarterly")
        .with_animation(AnimationConfig::fixed_step(8.0));
    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let parsed = ChartConfig::from_json_str(
        r##"{ "style": { "title": "Sparse", "font_color": "#eeeeee" } }"##,
    )
    .expect("parse partial");
    assert_eq!(parsed.style.title, "Sparse");
    assert_eq!(parsed.style.font_color, "#eeeeee");
    assert_eq!(parsed.style.background_color, "#2a2a2a");
    assert_eq!(parsed.viewport, Viewport::new(800, 500));
    assert!(matches!(parsed.animation.mode, AnimationMode::Timed { .. }));
}

#[test]
fn malformed_json_maps_to_invalid_data() {
    let err = ChartConfig::from_json_str("{ not json").expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn engine_rejects_invalid_config() {
    let zero = ChartConfig::new(Viewport::new(0, 500));
    assert!(matches!(
        BarChart3D::new(NullRenderer::default(), zero),
        Err(ChartError::InvalidViewport { .. })
    ));

    let bad_step = ChartConfig::default().with_animation(AnimationConfig::fixed_step(-1.0));
    assert!(BarChart3D::new(NullRenderer::default(), bad_step).is_err());

    let mut bad_shade = ChartConfig::default();
    bad_shade.extrusion.shade_percent = 150.0;
    assert!(BarChart3D::new(NullRenderer::default(), bad_shade).is_err());
}

#[test]
fn snapshot_json_reports_layout_and_phase() {
    let mut chart = BarChart3D::new(
        NullRenderer::default(),
        ChartConfig::default().with_animation(AnimationConfig::disabled()),
    )
    .expect("engine init");
    chart
        .set_data(vec![
            BarDatum::new("A", 50.0, "#ff0000"),
            BarDatum::new("B", 100.0, "#00ff00"),
        ])
        .expect("set data");
    chart.mount().expect("mount");
    chart.pointer_move(170.0, 300.0).expect("move");

    let snapshot = chart.snapshot().expect("snapshot");
    assert!(snapshot.mounted);
    assert_eq!(snapshot.max_value, 100.0);
    assert_eq!(snapshot.progress_px, 400.0);
    assert_eq!(snapshot.bars.len(), 2);
    assert_eq!(snapshot.hovered.map(|bar| bar.index), Some(0));

    let json = chart.snapshot_json_pretty().expect("snapshot json");
    assert!(json.contains("\"Settled\""));
    assert!(json.contains("\"y_axis_labels\""));
}

#[test]
fn telemetry_init_is_safe_without_feature() {
    // Either installs a subscriber or reports that none was installed.
    let _ = telemetry::init_default_tracing();
    let _ = telemetry::init_tracing_with_fallback("bar3d_chart=trace");
}
