use serde::{Deserialize, Serialize};

use crate::core::{ChartGeometry, Viewport};
use crate::error::{ChartError, ChartResult};

use super::{AnimationConfig, ChartStyle, ExtrusionStyle, ResolvedPalette};

/// Public chart bootstrap configuration.
///
/// Every field falls back to its default when absent, so partial JSON
/// documents are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChartConfig {
    pub viewport: Viewport,
    pub geometry: ChartGeometry,
    pub style: ChartStyle,
    pub extrusion: ExtrusionStyle,
    pub animation: AnimationConfig,
}

impl ChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_geometry(mut self, geometry: ChartGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.style.title = title.into();
        self
    }

    #[must_use]
    pub fn with_extrusion(mut self, extrusion: ExtrusionStyle) -> Self {
        self.extrusion = extrusion;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Checks every section and returns the parsed decoration palette.
    pub fn validate(&self) -> ChartResult<ResolvedPalette> {
        self.geometry.validate(self.viewport)?;
        self.extrusion.validate()?;
        self.animation.validate()?;
        self.style.resolve()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}
