use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Grid,
    Axis,
    Title,
    Series,
    Tooltip,
}

/// Back-to-front paint order of the chart layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerStack {
    pub layers: Vec<CanvasLayerKind>,
}

impl LayerStack {
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            layers: vec![
                CanvasLayerKind::Title,
                CanvasLayerKind::Grid,
                CanvasLayerKind::Axis,
                CanvasLayerKind::Series,
                CanvasLayerKind::Tooltip,
            ],
        }
    }
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::canonical()
    }
}
