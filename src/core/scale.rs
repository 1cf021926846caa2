use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Linear `0..=domain_max` to `0..=range_px` mapping used for bar heights.
///
/// A zero domain is allowed: every value then maps to a zero height instead
/// of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    domain_max: f64,
    range_px: f64,
}

impl ValueScale {
    pub fn new(domain_max: f64, range_px: f64) -> ChartResult<Self> {
        if !domain_max.is_finite() || domain_max < 0.0 {
            return Err(ChartError::InvalidData(
                "scale domain max must be finite and >= 0".to_owned(),
            ));
        }
        if !range_px.is_finite() || range_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "scale pixel range must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            domain_max,
            range_px,
        })
    }

    #[must_use]
    pub fn domain_max(self) -> f64 {
        self.domain_max
    }

    #[must_use]
    pub fn range_px(self) -> f64 {
        self.range_px
    }

    /// Pixel height of `value`, or `0.0` when the domain is degenerate.
    #[must_use]
    pub fn value_to_height(self, value: f64) -> f64 {
        if self.domain_max <= 0.0 || !value.is_finite() {
            return 0.0;
        }
        (value / self.domain_max) * self.range_px
    }

    /// Values at `steps + 1` evenly spaced ticks from zero to the domain max,
    /// rounded to the nearest integer.
    #[must_use]
    pub fn tick_values(self, steps: u32) -> Vec<f64> {
        if steps == 0 {
            return vec![0.0];
        }
        let step_value = self.domain_max / f64::from(steps);
        (0..=steps)
            .map(|step| (step_value * f64::from(step)).round())
            .collect()
    }
}
