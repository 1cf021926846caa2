use std::time::Duration;

use bar3d_chart::api::{AnimationConfig, BarChart3D, ChartConfig, FrameOutcome};
use bar3d_chart::core::{BarDatum, ChartGeometry, Viewport};
use bar3d_chart::interaction::hit_test_bars;
use bar3d_chart::render::NullRenderer;

fn settled_engine(data: Vec<BarDatum>) -> BarChart3D<NullRenderer> {
    let config = ChartConfig::new(Viewport::new(800, 500))
        .with_animation(AnimationConfig::fixed_step(5.0));
    let mut chart = BarChart3D::new(NullRenderer::default(), config).expect("engine init");
    chart.set_data(data).expect("set data");
    let mut ticket = chart.mount().expect("mount");
    while let Some(current) = ticket {
        ticket = match chart.on_frame(current, Duration::from_millis(16)).expect("frame") {
            FrameOutcome::Continue(next) => Some(next),
            FrameOutcome::Settled | FrameOutcome::Stale => None,
        };
    }
    assert!(chart.is_interactive());
    chart
}

fn series() -> Vec<BarDatum> {
    vec![
        BarDatum::new("A", 50.0, "#ff0000"),
        BarDatum::new("B", 100.0, "#00ff00"),
    ]
}

#[test]
fn pointer_inside_bar_sets_hover_to_its_index() {
    let mut chart = settled_engine(series());

    // Bar A spans x 150..190, y 250..450.
    assert!(chart.pointer_move(170.0, 300.0).expect("move"));
    let hovered = chart.hovered_bar().expect("hovering A");
    assert_eq!(hovered.index, 0);
    assert_eq!(hovered.x, 170.0);
    assert_eq!(hovered.y, 250.0);
    assert_eq!(hovered.value, 50.0);

    // Bar B spans x 425..465, y 50..450.
    assert!(chart.pointer_move(430.0, 60.0).expect("move"));
    assert_eq!(chart.hovered_bar().map(|bar| bar.index), Some(1));
}

#[test]
fn pointer_outside_all_bars_clears_hover() {
    let mut chart = settled_engine(series());
    chart.pointer_move(170.0, 300.0).expect("move");

    // Above bar A's top.
    assert!(chart.pointer_move(170.0, 200.0).expect("move"));
    assert_eq!(chart.hovered_bar(), None);

    // Below the baseline.
    chart.pointer_move(170.0, 300.0).expect("move");
    chart.pointer_move(170.0, 460.0).expect("move");
    assert_eq!(chart.hovered_bar(), None);
}

#[test]
fn same_bar_twice_reports_no_change() {
    let mut chart = settled_engine(series());
    assert!(chart.pointer_move(170.0, 300.0).expect("move"));
    let renders = chart.renderer().render_count;
    assert!(!chart.pointer_move(175.0, 310.0).expect("move"));
    assert_eq!(chart.renderer().render_count, renders);
}

#[test]
fn pointer_leave_clears_hover() {
    let mut chart = settled_engine(series());
    chart.pointer_move(170.0, 300.0).expect("move");
    assert!(chart.pointer_leave().expect("leave"));
    assert_eq!(chart.hovered_bar(), None);
    assert!(!chart.pointer_leave().expect("second leave"));
}

#[test]
fn hover_is_suppressed_while_animating() {
    let config = ChartConfig::new(Viewport::new(800, 500))
        .with_animation(AnimationConfig::fixed_step(5.0));
    let mut chart = BarChart3D::new(NullRenderer::default(), config).expect("engine init");
    chart.set_data(series()).expect("set data");
    chart.mount().expect("mount");

    assert!(!chart.is_interactive());
    assert!(!chart.pointer_move(170.0, 440.0).expect("move"));
    assert_eq!(chart.hovered_bar(), None);
}

#[test]
fn overlapping_bars_resolve_to_highest_series_index() {
    // 20 bars in 550px gives 27.5px slots, so 40px bars overlap their neighbour.
    let data: Vec<BarDatum> = (0..20)
        .map(|index| BarDatum::new(format!("b{index}"), 10.0, "#336699"))
        .collect();
    let mut chart = settled_engine(data);

    // x = 180 is inside bar 0 (150..190) and bar 1 (177.5..217.5).
    chart.pointer_move(180.0, 300.0).expect("move");
    assert_eq!(chart.hovered_bar().map(|bar| bar.index), Some(1));
}

#[test]
fn hit_test_on_layout_matches_engine() {
    let geometry = ChartGeometry::default();
    let chart = settled_engine(series());
    let bars = chart.bars().expect("bars");

    assert_eq!(
        hit_test_bars(&bars, geometry.baseline_y(), 465.0, 450.0).map(|bar| bar.index),
        Some(1)
    );
    assert_eq!(hit_test_bars(&bars, geometry.baseline_y(), 300.0, 300.0), None);
    assert_eq!(hit_test_bars(&bars, geometry.baseline_y(), f64::NAN, 300.0), None);
}

#[test]
fn unmounted_engine_ignores_pointer_events() {
    let mut chart = settled_engine(series());
    chart.pointer_move(170.0, 300.0).expect("move");
    chart.unmount();
    assert_eq!(chart.hovered_bar(), None);

    let renders = chart.renderer().render_count;
    assert!(!chart.pointer_move(170.0, 300.0).expect("move after unmount"));
    assert!(!chart.pointer_move(430.0, 60.0).expect("move after unmount"));
    assert!(!chart.pointer_leave().expect("leave after unmount"));
    assert_eq!(chart.hovered_bar(), None);
    assert_eq!(chart.renderer().render_count, renders);
}

#[test]
fn new_series_clears_hover() {
    let mut chart = settled_engine(series());
    chart.pointer_move(170.0, 300.0).expect("move");
    chart
        .set_data(vec![BarDatum::new("C", 1.0, "#0000ff")])
        .expect("set data");
    assert_eq!(chart.hovered_bar(), None);
}
