use crate::core::{BarLayout, ChartGeometry, ValueScale, Viewport};
use crate::error::ChartResult;
use crate::interaction::HoveredBar;
use crate::render::{CanvasLayerKind, LayerStack, LayeredRenderFrame, RenderFrame};

use super::axis_scene_builder::{build_title, build_x_axis, build_y_axis, y_axis_ticks};
use super::extrusion_scene_builder::{ValueLabelStyle, build_extruded_bar};
use super::tooltip_scene_builder::build_tooltip;
use super::{ChartStyle, ExtrusionStyle, ResolvedPalette};

/// Everything a frame depends on besides the bars themselves.
pub(super) struct SceneInputs<'a> {
    pub viewport: Viewport,
    pub geometry: ChartGeometry,
    pub style: &'a ChartStyle,
    pub extrusion: ExtrusionStyle,
    pub palette: ResolvedPalette,
}

/// Builds the complete scene for one frame from scratch.
///
/// Bars are grown to `progress_px`; the tooltip is drawn only when `tooltip`
/// is set.
pub(super) fn build_render_frame(
    inputs: &SceneInputs<'_>,
    bars: &[BarLayout],
    max_value: f64,
    progress_px: f64,
    tooltip: Option<HoveredBar>,
) -> ChartResult<RenderFrame> {
    let SceneInputs {
        viewport,
        geometry,
        style,
        extrusion,
        palette,
    } = *inputs;

    let mut layered =
        LayeredRenderFrame::from_stack(viewport, palette.background, LayerStack::canonical());

    if let Some(title) = build_title(viewport, style, palette) {
        layered.push(CanvasLayerKind::Title, title);
    }

    let scale = ValueScale::new(max_value, geometry.chart_height_px)?;
    let ticks = y_axis_ticks(scale, geometry, style.y_axis_steps);
    layered.extend(
        CanvasLayerKind::Grid,
        build_y_axis(&ticks, viewport, geometry, style, palette),
    );
    layered.extend(
        CanvasLayerKind::Axis,
        build_x_axis(bars, viewport, geometry, style, palette),
    );

    let label = ValueLabelStyle {
        color: palette.font,
        font_size_px: style.value_label_font_size_px,
        gap_px: style.value_label_gap_px,
    };
    for bar in bars {
        layered.extend(
            CanvasLayerKind::Series,
            build_extruded_bar(bar, progress_px, extrusion, label),
        );
    }

    if let Some(hovered) = tooltip {
        layered.extend(
            CanvasLayerKind::Tooltip,
            build_tooltip(hovered, &style.tooltip, palette),
        );
    }

    Ok(layered.flatten())
}
