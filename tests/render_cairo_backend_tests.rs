#![cfg(feature = "cairo-backend")]

use bar3d_chart::ChartError;
use bar3d_chart::api::{AnimationConfig, BarChart3D, ChartConfig};
use bar3d_chart::core::{BarDatum, Viewport};
use bar3d_chart::render::CairoRenderer;
use cairo::{Context, Format, ImageSurface};

fn quarterly() -> Vec<BarDatum> {
    vec![
        BarDatum::new("Q1", 120.0, "#4e79a7"),
        BarDatum::new("Q2", 80.0, "#f28e2b"),
        BarDatum::new("Q3", 200.0, "#e15759"),
    ]
}

fn settled_chart(renderer: CairoRenderer) -> BarChart3D<CairoRenderer> {
    let config =
        ChartConfig::new(Viewport::new(800, 500)).with_animation(AnimationConfig::disabled());
    let mut chart = BarChart3D::new(renderer, config).expect("engine init");
    chart.set_data(quarterly()).expect("set data");
    chart
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_axes_and_extruded_bars() {
    let renderer = CairoRenderer::new(800, 500).expect("renderer");
    let mut chart = settled_chart(renderer);
    chart.mount().expect("mount");

    let stats = chart.into_renderer().last_stats();
    // six gridlines plus the x baseline
    assert_eq!(stats.lines_drawn, 7);
    assert_eq!(stats.rects_drawn, 3);
    assert_eq!(stats.polygons_drawn, 6);
    // title, six y labels, three x labels, three value labels
    assert_eq!(stats.texts_drawn, 13);
}

#[test]
fn cairo_renderer_paints_background_color() {
    let renderer = CairoRenderer::new(800, 500).expect("renderer");
    let mut chart = settled_chart(renderer);
    chart.mount().expect("mount");

    let mut surface = chart.into_renderer().surface().clone();
    surface.flush();
    let data = surface.data().expect("surface data");
    // ARGB32 is stored as little-endian BGRA; the top-left pixel is outside every primitive.
    assert_eq!(&data[0..4], &[0x2a, 0x2a, 0x2a, 0xff]);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(800, 500).expect("renderer");
    let mut chart = settled_chart(renderer);
    chart.mount().expect("mount");

    let surface = ImageSurface::create(Format::ARgb32, 800, 500).expect("surface");
    let context = Context::new(&surface).expect("context");
    chart
        .render_on_cairo_context(&context)
        .expect("render on context");
    assert_eq!(chart.renderer().last_stats().polygons_drawn, 6);
}

#[test]
fn cairo_renderer_writes_png() {
    let renderer = CairoRenderer::new(800, 500).expect("renderer");
    let mut chart = settled_chart(renderer);
    chart.mount().expect("mount");

    let mut png = Vec::new();
    chart.renderer().write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}
