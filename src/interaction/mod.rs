use serde::{Deserialize, Serialize};

use crate::core::BarLayout;

/// Bar currently under the pointer.
///
/// `x` is the horizontal center of the bar and `y` the top of its front face,
/// i.e. the tooltip anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoveredBar {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

/// Single hover slot, always overwritten as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HoverState {
    hovered: Option<HoveredBar>,
}

impl HoverState {
    #[must_use]
    pub fn hovered(self) -> Option<HoveredBar> {
        self.hovered
    }

    /// Replaces the slot and reports whether it changed.
    pub fn set(&mut self, hovered: Option<HoveredBar>) -> bool {
        let changed = self.hovered != hovered;
        self.hovered = hovered;
        changed
    }

    pub fn clear(&mut self) -> bool {
        self.set(None)
    }
}

/// Maps a canvas-local pointer position to the bar under it.
///
/// Bars are tested in series order and the last match is kept, so where slots
/// overlap the bar painted on top wins.
#[must_use]
pub fn hit_test_bars(
    bars: &[BarLayout],
    baseline_y: f64,
    pointer_x: f64,
    pointer_y: f64,
) -> Option<HoveredBar> {
    if !pointer_x.is_finite() || !pointer_y.is_finite() {
        return None;
    }

    let mut found = None;
    for bar in bars {
        let inside_x = pointer_x >= bar.x && pointer_x <= bar.x + bar.width;
        let inside_y = pointer_y >= bar.y && pointer_y <= baseline_y;
        if inside_x && inside_y {
            found = Some(HoveredBar {
                index: bar.index,
                x: bar.center_x(),
                y: bar.y,
                value: bar.value,
            });
        }
    }
    found
}
