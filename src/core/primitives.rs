use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Largest finite value in `values`, or `None` for an empty input.
#[must_use]
pub fn finite_max(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values
        .into_iter()
        .filter(|value| value.is_finite())
        .map(OrderedFloat)
        .max()
        .map(|value| value.0)
}

/// Formats a number the way chart labels show it: integral values carry no
/// fractional part, everything else uses the shortest round-trip form.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        // Avoids printing "-0".
        return "0".to_owned();
    }
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::{finite_max, format_value};

    #[test]
    fn finite_max_ignores_non_finite_and_handles_empty() {
        assert_eq!(finite_max([]), None);
        assert_eq!(finite_max([3.0, f64::NAN, 7.5, 1.0]), Some(7.5));
        assert_eq!(finite_max([f64::INFINITY]), None);
    }

    #[test]
    fn format_value_drops_trailing_zero_fraction() {
        assert_eq!(format_value(50.0), "50");
        assert_eq!(format_value(12.5), "12.5");
        assert_eq!(format_value(-0.0), "0");
    }
}
