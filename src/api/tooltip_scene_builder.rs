use crate::core::primitives::format_value;
use crate::interaction::HoveredBar;
use crate::render::{DrawCommand, RectPrimitive, TextHAlign, TextPrimitive};

use super::{ResolvedPalette, TooltipStyle};

/// Opaque box centered over the hovered bar's top edge with the value inside.
pub(super) fn build_tooltip(
    hovered: HoveredBar,
    style: &TooltipStyle,
    palette: ResolvedPalette,
) -> [DrawCommand; 2] {
    let background = RectPrimitive::new(
        hovered.x - style.width_px / 2.0,
        hovered.y - style.box_offset_px,
        style.width_px,
        style.height_px,
        palette.tooltip_background,
    );
    let text = TextPrimitive::new(
        format_value(hovered.value),
        hovered.x,
        hovered.y - style.text_offset_px,
        style.font_size_px,
        palette.tooltip_text,
        TextHAlign::Center,
    );
    [DrawCommand::Rect(background), DrawCommand::Text(text)]
}
