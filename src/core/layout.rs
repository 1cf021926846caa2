use serde::{Deserialize, Serialize};

use crate::core::primitives::finite_max;
use crate::core::{BarDatum, ValueScale, Viewport};
use crate::error::{ChartError, ChartResult};

/// Fixed plot geometry in canvas pixels.
///
/// `right_margin_px` reserves the space right of the last bar slot, while
/// `plot_right_inset_px` is where gridlines and the baseline stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartGeometry {
    pub chart_height_px: f64,
    pub bar_width_px: f64,
    pub x_offset_px: f64,
    pub y_offset_px: f64,
    pub right_margin_px: f64,
    pub plot_right_inset_px: f64,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            chart_height_px: 400.0,
            bar_width_px: 40.0,
            x_offset_px: 150.0,
            y_offset_px: 50.0,
            right_margin_px: 100.0,
            plot_right_inset_px: 50.0,
        }
    }
}

impl ChartGeometry {
    /// Y coordinate of the plot baseline (value zero).
    #[must_use]
    pub fn baseline_y(self) -> f64 {
        self.chart_height_px + self.y_offset_px
    }

    /// X coordinate where gridlines and the baseline axis end.
    #[must_use]
    pub fn plot_right(self, viewport: Viewport) -> f64 {
        f64::from(viewport.width) - self.plot_right_inset_px
    }

    pub fn validate(self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        for (name, value) in [
            ("chart height", self.chart_height_px),
            ("bar width", self.bar_width_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("x offset", self.x_offset_px),
            ("y offset", self.y_offset_px),
            ("right margin", self.right_margin_px),
            ("plot right inset", self.plot_right_inset_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if self.x_offset_px + self.right_margin_px >= f64::from(viewport.width) {
            return Err(ChartError::InvalidData(
                "horizontal offsets leave no room for bars".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Derived per-bar geometry for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub target_height: f64,
    pub value: f64,
    pub color: String,
    pub label: String,
}

impl BarLayout {
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Geometry of this bar grown to `progress_px`, still anchored at the baseline.
    #[must_use]
    pub fn clipped_to(&self, progress_px: f64) -> (f64, f64) {
        let height = progress_px.max(0.0).min(self.target_height);
        (self.y + self.target_height - height, height)
    }
}

/// Largest value in the series, `0.0` for an empty series.
#[must_use]
pub fn max_value(data: &[BarDatum]) -> f64 {
    finite_max(data.iter().map(|datum| datum.value)).unwrap_or(0.0)
}

/// Horizontal distance between bar slots, `None` for an empty series.
#[must_use]
pub fn bar_spacing(geometry: ChartGeometry, viewport: Viewport, count: usize) -> Option<f64> {
    if count == 0 {
        return None;
    }
    let available =
        f64::from(viewport.width) - geometry.x_offset_px - geometry.right_margin_px;
    Some(available / count as f64)
}

/// Lays out one bar per datum, in series order.
pub fn layout_bars(
    data: &[BarDatum],
    geometry: ChartGeometry,
    viewport: Viewport,
) -> ChartResult<Vec<BarLayout>> {
    let Some(spacing) = bar_spacing(geometry, viewport, data.len()) else {
        return Ok(Vec::new());
    };
    let scale = ValueScale::new(max_value(data), geometry.chart_height_px)?;
    let baseline = geometry.baseline_y();

    let bars = data
        .iter()
        .enumerate()
        .map(|(index, datum)| {
            let target_height = scale.value_to_height(datum.value);
            BarLayout {
                index,
                x: geometry.x_offset_px + index as f64 * spacing,
                y: baseline - target_height,
                width: geometry.bar_width_px,
                target_height,
                value: datum.value,
                color: datum.color.clone(),
                label: datum.label.clone(),
            }
        })
        .collect();
    Ok(bars)
}
