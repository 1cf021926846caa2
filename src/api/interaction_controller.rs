use tracing::trace;

use crate::error::ChartResult;
use crate::interaction::{HoveredBar, hit_test_bars};
use crate::render::Renderer;

use super::BarChart3D;

impl<R: Renderer> BarChart3D<R> {
    #[must_use]
    pub fn hovered_bar(&self) -> Option<HoveredBar> {
        self.hover.hovered()
    }

    /// Hit-tests a canvas-local pointer position and redraws when the hovered
    /// bar changes, unless the host owns drawing.
    ///
    /// Ignored while unmounted or animating. Returns whether hover changed.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<bool> {
        if !self.is_interactive() {
            return Ok(false);
        }
        let bars = self.bars()?;
        let hovered = hit_test_bars(&bars, self.config.geometry.baseline_y(), x, y);
        if !self.hover.set(hovered) {
            return Ok(false);
        }
        trace!(index = ?hovered.map(|bar| bar.index), "hover changed");
        self.present()?;
        Ok(true)
    }

    /// Clears hover when the pointer leaves the canvas.
    pub fn pointer_leave(&mut self) -> ChartResult<bool> {
        if !self.mounted {
            return Ok(false);
        }
        if !self.hover.clear() {
            return Ok(false);
        }
        trace!("hover cleared on leave");
        self.present()?;
        Ok(true)
    }
}
