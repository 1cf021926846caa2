use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Tooltip box drawn over the hovered bar once the chart has settled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipStyle {
    pub background_color: String,
    pub text_color: String,
    pub font_size_px: f64,
    pub width_px: f64,
    pub height_px: f64,
    /// Distance from the bar top to the top edge of the box.
    pub box_offset_px: f64,
    /// Distance from the bar top to the text baseline.
    pub text_offset_px: f64,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            background_color: "rgba(0, 0, 0, 0.8)".to_owned(),
            text_color: "white".to_owned(),
            font_size_px: 12.0,
            width_px: 60.0,
            height_px: 30.0,
            box_offset_px: 40.0,
            text_offset_px: 20.0,
        }
    }
}

/// Decoration settings: title, colors, fonts and label placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub title: String,
    pub background_color: String,
    pub font_color: String,
    pub grid_line_color: String,
    pub grid_line_width_px: f64,
    pub axis_line_color: String,
    pub axis_line_width_px: f64,
    pub title_font_size_px: f64,
    pub title_y_px: f64,
    pub axis_label_font_size_px: f64,
    pub value_label_font_size_px: f64,
    pub y_axis_steps: u32,
    pub y_label_gap_px: f64,
    pub y_label_baseline_shift_px: f64,
    pub x_label_gap_px: f64,
    pub value_label_gap_px: f64,
    pub tooltip: TooltipStyle,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: "3D Bar Chart".to_owned(),
            background_color: "#2a2a2a".to_owned(),
            font_color: "white".to_owned(),
            grid_line_color: "#555".to_owned(),
            grid_line_width_px: 1.0,
            axis_line_color: "white".to_owned(),
            axis_line_width_px: 2.0,
            title_font_size_px: 20.0,
            title_y_px: 30.0,
            axis_label_font_size_px: 12.0,
            value_label_font_size_px: 16.0,
            y_axis_steps: 5,
            y_label_gap_px: 10.0,
            y_label_baseline_shift_px: 5.0,
            x_label_gap_px: 30.0,
            value_label_gap_px: 10.0,
            tooltip: TooltipStyle::default(),
        }
    }
}

impl ChartStyle {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    #[must_use]
    pub fn with_font_color(mut self, color: impl Into<String>) -> Self {
        self.font_color = color.into();
        self
    }

    /// Parses every color and checks sizes, producing the palette used by the
    /// scene builders.
    pub fn resolve(&self) -> ChartResult<ResolvedPalette> {
        for (name, value) in [
            ("grid line width", self.grid_line_width_px),
            ("axis line width", self.axis_line_width_px),
            ("title font size", self.title_font_size_px),
            ("axis label font size", self.axis_label_font_size_px),
            ("value label font size", self.value_label_font_size_px),
            ("tooltip font size", self.tooltip.font_size_px),
            ("tooltip width", self.tooltip.width_px),
            ("tooltip height", self.tooltip.height_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("title y", self.title_y_px),
            ("y label gap", self.y_label_gap_px),
            ("y label baseline shift", self.y_label_baseline_shift_px),
            ("x label gap", self.x_label_gap_px),
            ("value label gap", self.value_label_gap_px),
            ("tooltip box offset", self.tooltip.box_offset_px),
            ("tooltip text offset", self.tooltip.text_offset_px),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!("{name} must be finite")));
            }
        }
        if self.y_axis_steps == 0 {
            return Err(ChartError::InvalidData(
                "y-axis step count must be > 0".to_owned(),
            ));
        }

        Ok(ResolvedPalette {
            background: Color::parse(&self.background_color)?,
            font: Color::parse(&self.font_color)?,
            grid_line: Color::parse(&self.grid_line_color)?,
            axis_line: Color::parse(&self.axis_line_color)?,
            tooltip_background: Color::parse(&self.tooltip.background_color)?,
            tooltip_text: Color::parse(&self.tooltip.text_color)?,
        })
    }
}

/// Parsed decoration colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPalette {
    pub background: Color,
    pub font: Color,
    pub grid_line: Color,
    pub axis_line: Color,
    pub tooltip_background: Color,
    pub tooltip_text: Color,
}

/// Fixed-angle extrusion used to fake depth.
///
/// The top and side faces are offset from the front face by
/// `(depth_dx_px, depth_dy_px)`; the top face is lightened and the side face
/// darkened by `shade_percent`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtrusionStyle {
    pub depth_dx_px: f64,
    pub depth_dy_px: f64,
    pub shade_percent: f64,
}

impl Default for ExtrusionStyle {
    fn default() -> Self {
        Self {
            depth_dx_px: 10.0,
            depth_dy_px: -10.0,
            shade_percent: 10.0,
        }
    }
}

impl ExtrusionStyle {
    pub fn validate(self) -> ChartResult<()> {
        if !self.depth_dx_px.is_finite()
            || !self.depth_dy_px.is_finite()
            || !self.shade_percent.is_finite()
        {
            return Err(ChartError::InvalidData(
                "extrusion offsets and shade percent must be finite".to_owned(),
            ));
        }
        if !(0.0..=100.0).contains(&self.shade_percent) {
            return Err(ChartError::InvalidData(
                "extrusion shade percent must be in [0, 100]".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ChartStyle;
    use crate::render::Color;

    #[test]
    fn default_style_resolves() {
        let palette = ChartStyle::default().resolve().expect("defaults are valid");
        assert_eq!(palette.font, Color::rgb(1.0, 1.0, 1.0));
        assert!((palette.tooltip_background.alpha - 0.8).abs() <= 1e-12);
    }

    #[test]
    fn bad_background_is_rejected() {
        let style = ChartStyle::default().with_background_color("#12");
        assert!(style.resolve().is_err());
    }
}
