use std::time::Duration;

use bar3d_chart::api::{AnimationConfig, AnimationPhase, BarChart3D, ChartConfig, FrameOutcome};
use bar3d_chart::core::{BarDatum, Viewport};
use bar3d_chart::render::{NullRenderer, RenderFrame, Renderer};
use bar3d_chart::{ChartError, ChartResult};

/// Renderer whose surface is gone: every draw fails.
#[derive(Debug, Default)]
struct FailingRenderer {
    attempts: usize,
}

impl Renderer for FailingRenderer {
    fn render(&mut self, _frame: &RenderFrame) -> ChartResult<()> {
        self.attempts += 1;
        Err(ChartError::InvalidData("surface lost".to_owned()))
    }
}

fn config() -> ChartConfig {
    ChartConfig::new(Viewport::new(800, 500)).with_animation(AnimationConfig::fixed_step(5.0))
}

fn series() -> Vec<BarDatum> {
    vec![
        BarDatum::new("A", 50.0, "#ff0000"),
        BarDatum::new("B", 100.0, "#00ff00"),
    ]
}

fn run_to_settled<R: Renderer>(chart: &mut BarChart3D<R>) {
    while let Some(ticket) = chart.pending_frame() {
        match chart.on_frame(ticket, Duration::ZERO).expect("frame") {
            FrameOutcome::Continue(_) | FrameOutcome::Settled => {}
            FrameOutcome::Stale => panic!("pending ticket must be current"),
        }
    }
}

#[test]
fn host_drawing_advances_state_without_drawing() {
    let mut chart = BarChart3D::new(NullRenderer::default(), config()).expect("engine init");
    chart.set_host_drawing(true);
    assert!(chart.is_host_drawing());
    chart.set_data(series()).expect("set data");
    chart.mount().expect("mount");
    run_to_settled(&mut chart);

    assert_eq!(chart.animation_phase(), AnimationPhase::Settled);
    assert_eq!(chart.animation_progress_px(), 400.0);
    assert!(chart.pointer_move(170.0, 300.0).expect("move"));
    assert_eq!(chart.hovered_bar().map(|bar| bar.index), Some(0));
    assert_eq!(chart.renderer().render_count, 0);

    // two bar fronts plus the tooltip box
    let frame = chart.build_frame().expect("frame");
    assert_eq!(frame.rects().count(), 3);

    chart.render().expect("explicit render");
    assert_eq!(chart.renderer().render_count, 1);
}

#[test]
fn host_drawn_animation_ignores_owned_renderer_failures() {
    let mut chart = BarChart3D::new(FailingRenderer::default(), config()).expect("engine init");
    chart.set_host_drawing(true);
    chart.set_data(series()).expect("set data");
    chart.mount().expect("mount");
    run_to_settled(&mut chart);

    assert_eq!(chart.animation_phase(), AnimationPhase::Settled);
    assert!(chart.pointer_move(170.0, 300.0).expect("move"));
    assert!(chart.pointer_leave().expect("leave"));
    assert_eq!(chart.renderer().attempts, 0);
}

#[test]
fn accepted_series_stays_installed_when_first_draw_fails() {
    let mut chart = BarChart3D::new(FailingRenderer::default(), config()).expect("engine init");
    assert!(chart.mount().is_err());
    assert!(chart.is_mounted());

    let err = chart.set_data(series()).expect_err("draw fails");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert_eq!(chart.data(), series().as_slice());
    assert_eq!(chart.animation_phase(), AnimationPhase::Animating);
    assert!(chart.renderer().attempts >= 2);
}
