use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 500)
    }
}

/// One input record of the bar series.
///
/// Series order is significant: it decides the horizontal slot of the bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl BarDatum {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            color: color.into(),
        }
    }

    pub fn from_decimal(
        label: impl Into<String>,
        value: Decimal,
        color: impl Into<String>,
    ) -> ChartResult<Self> {
        Ok(Self::new(label, decimal_to_f64(value, "bar value")?, color))
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "bar `{}` value must be finite and >= 0",
                self.label
            )));
        }
        Ok(())
    }
}
