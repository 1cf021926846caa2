use serde::{Deserialize, Serialize};

use crate::core::{BarLayout, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::HoveredBar;
use crate::render::Renderer;

use super::{AnimationPhase, BarChart3D};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub mounted: bool,
    pub phase: AnimationPhase,
    pub progress_px: f64,
    pub max_value: f64,
    pub y_axis_labels: Vec<String>,
    pub bars: Vec<BarLayout>,
    pub hovered: Option<HoveredBar>,
}

impl<R: Renderer> BarChart3D<R> {
    pub fn snapshot(&self) -> ChartResult<ChartSnapshot> {
        Ok(ChartSnapshot {
            viewport: self.viewport(),
            mounted: self.mounted,
            phase: self.animation_phase(),
            progress_px: self.animation_progress_px(),
            max_value: self.max_value(),
            y_axis_labels: self.y_axis_labels()?,
            bars: self.bars()?,
            hovered: self.hovered_bar(),
        })
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot()?)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
