use crate::core::primitives::format_value;
use crate::core::{BarLayout, ChartGeometry, ValueScale, Viewport};
use crate::render::{DrawCommand, LinePrimitive, TextHAlign, TextPrimitive};

use super::{ChartStyle, ResolvedPalette};

/// Horizontal gridline plus its value label.
#[derive(Debug, Clone, PartialEq)]
pub struct YAxisTick {
    pub y: f64,
    pub value: f64,
    pub label: String,
}

/// Evenly spaced ticks from the baseline up to the plot top.
#[must_use]
pub fn y_axis_ticks(scale: ValueScale, geometry: ChartGeometry, steps: u32) -> Vec<YAxisTick> {
    let step_height = geometry.chart_height_px / f64::from(steps.max(1));
    scale
        .tick_values(steps)
        .into_iter()
        .enumerate()
        .map(|(step, value)| YAxisTick {
            y: geometry.baseline_y() - step_height * step as f64,
            value,
            label: format_value(value),
        })
        .collect()
}

pub(super) fn build_title(
    viewport: Viewport,
    style: &ChartStyle,
    palette: ResolvedPalette,
) -> Option<DrawCommand> {
    if style.title.is_empty() {
        return None;
    }
    Some(DrawCommand::Text(TextPrimitive::new(
        style.title.clone(),
        f64::from(viewport.width) / 2.0,
        style.title_y_px,
        style.title_font_size_px,
        palette.font,
        TextHAlign::Center,
    )))
}

pub(super) fn build_y_axis(
    ticks: &[YAxisTick],
    viewport: Viewport,
    geometry: ChartGeometry,
    style: &ChartStyle,
    palette: ResolvedPalette,
) -> Vec<DrawCommand> {
    let plot_right = geometry.plot_right(viewport);
    let mut commands = Vec::with_capacity(ticks.len() * 2);
    for tick in ticks {
        commands.push(DrawCommand::Text(TextPrimitive::new(
            tick.label.clone(),
            geometry.x_offset_px - style.y_label_gap_px,
            tick.y + style.y_label_baseline_shift_px,
            style.axis_label_font_size_px,
            palette.font,
            TextHAlign::Right,
        )));
        commands.push(DrawCommand::Line(LinePrimitive::new(
            geometry.x_offset_px,
            tick.y,
            plot_right,
            tick.y,
            style.grid_line_width_px,
            palette.grid_line,
        )));
    }
    commands
}

/// Category labels under each bar slot, then the solid baseline.
pub(super) fn build_x_axis(
    bars: &[BarLayout],
    viewport: Viewport,
    geometry: ChartGeometry,
    style: &ChartStyle,
    palette: ResolvedPalette,
) -> Vec<DrawCommand> {
    let baseline = geometry.baseline_y();
    let mut commands: Vec<DrawCommand> = bars
        .iter()
        .filter(|bar| !bar.label.is_empty())
        .map(|bar| {
            DrawCommand::Text(TextPrimitive::new(
                bar.label.clone(),
                bar.center_x(),
                baseline + style.x_label_gap_px,
                style.axis_label_font_size_px,
                palette.font,
                TextHAlign::Center,
            ))
        })
        .collect();

    commands.push(DrawCommand::Line(LinePrimitive::new(
        geometry.x_offset_px,
        baseline,
        geometry.plot_right(viewport),
        baseline,
        style.axis_line_width_px,
        palette.axis_line,
    )));
    commands
}
