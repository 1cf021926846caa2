use smallvec::{SmallVec, smallvec};
use tracing::warn;

use crate::core::primitives::format_value;
use crate::core::{BarLayout, CssColor, HexColor, parse_css_color};
use crate::render::{Color, DrawCommand, PolygonPrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use super::ExtrusionStyle;

const FALLBACK_BAR_COLOR: HexColor = HexColor::new(0x80, 0x80, 0x80);

/// Fill colors of the three visible faces of one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarFaceColors {
    pub front: Color,
    pub top: Color,
    pub side: Color,
}

/// Resolves a bar color string into face colors.
///
/// Unparseable colors fall back to neutral grey instead of failing the frame.
#[must_use]
pub fn resolve_face_colors(color: &str, shade_percent: f64) -> BarFaceColors {
    let base = parse_css_color(color).unwrap_or_else(|err| {
        warn!(color, error = %err, "bar color fallback");
        CssColor::opaque(FALLBACK_BAR_COLOR)
    });
    let shaded = |percent: f64| {
        Color::from_css_color(CssColor {
            rgb: base.rgb.shade(percent),
            alpha: base.alpha,
        })
    };

    BarFaceColors {
        front: Color::from_css_color(base),
        top: shaded(shade_percent),
        side: shaded(-shade_percent),
    }
}

/// Label styling shared by every bar of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ValueLabelStyle {
    pub color: Color,
    pub font_size_px: f64,
    pub gap_px: f64,
}

/// Front face, side face, top face and value label of one bar grown to
/// `progress_px`, in paint order.
pub(super) fn build_extruded_bar(
    bar: &BarLayout,
    progress_px: f64,
    extrusion: ExtrusionStyle,
    label: ValueLabelStyle,
) -> SmallVec<[DrawCommand; 4]> {
    let (y, height) = bar.clipped_to(progress_px);
    let (x, width) = (bar.x, bar.width);
    let (dx, dy) = (extrusion.depth_dx_px, extrusion.depth_dy_px);
    let colors = resolve_face_colors(&bar.color, extrusion.shade_percent);

    let front = RectPrimitive::new(x, y, width, height, colors.front);
    let side = PolygonPrimitive::new(
        [
            (x + width, y),
            (x + width + dx, y + dy),
            (x + width + dx, y + height + dy),
            (x + width, y + height),
        ],
        colors.side,
    );
    let top = PolygonPrimitive::new(
        [
            (x, y),
            (x + dx, y + dy),
            (x + width + dx, y + dy),
            (x + width, y),
        ],
        colors.top,
    );
    let value = TextPrimitive::new(
        format_value(bar.value),
        bar.center_x(),
        y - label.gap_px,
        label.font_size_px,
        label.color,
        TextHAlign::Center,
    );

    smallvec![
        DrawCommand::Rect(front),
        DrawCommand::Polygon(side),
        DrawCommand::Polygon(top),
        DrawCommand::Text(value),
    ]
}
