use crate::core::Viewport;

use super::{CanvasLayerKind, Color, DrawCommand, LayerStack, RenderFrame};

#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub commands: Vec<DrawCommand>,
}

/// Scene split by layer so builders can emit in any order while the backend
/// still paints back-to-front.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredRenderFrame {
    pub viewport: Viewport,
    pub clear_color: Color,
    pub layers: Vec<LayerPrimitives>,
}

impl LayeredRenderFrame {
    #[must_use]
    pub fn from_stack(viewport: Viewport, clear_color: Color, stack: LayerStack) -> Self {
        let layers = stack
            .layers
            .into_iter()
            .map(|kind| LayerPrimitives {
                kind,
                commands: Vec::new(),
            })
            .collect();
        Self {
            viewport,
            clear_color,
            layers,
        }
    }

    pub fn push(&mut self, kind: CanvasLayerKind, command: DrawCommand) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.commands.push(command);
        }
    }

    pub fn extend(
        &mut self,
        kind: CanvasLayerKind,
        commands: impl IntoIterator<Item = DrawCommand>,
    ) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.commands.extend(commands);
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    #[must_use]
    pub fn flatten(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport, self.clear_color);
        for layer in &self.layers {
            frame.commands.extend(layer.commands.iter().cloned());
        }
        frame
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::LayeredRenderFrame;
    use crate::core::Viewport;
    use crate::render::{
        CanvasLayerKind, Color, DrawCommand, LayerStack, RectPrimitive, TextHAlign, TextPrimitive,
    };

    #[test]
    fn flatten_follows_stack_order_not_push_order() {
        let black = Color::rgb(0.0, 0.0, 0.0);
        let mut layered =
            LayeredRenderFrame::from_stack(Viewport::new(100, 100), black, LayerStack::canonical());
        layered.push(
            CanvasLayerKind::Tooltip,
            DrawCommand::Rect(RectPrimitive::new(0.0, 0.0, 10.0, 10.0, black)),
        );
        layered.push(
            CanvasLayerKind::Title,
            DrawCommand::Text(TextPrimitive::new(
                "title",
                50.0,
                30.0,
                20.0,
                black,
                TextHAlign::Center,
            )),
        );

        assert_eq!(
            layered
                .layer(CanvasLayerKind::Tooltip)
                .map(|layer| layer.commands.len()),
            Some(1)
        );
        assert!(
            layered
                .layer(CanvasLayerKind::Grid)
                .is_some_and(|layer| layer.commands.is_empty())
        );

        let frame = layered.flatten();
        assert!(matches!(frame.commands[0], DrawCommand::Text(_)));
        assert!(matches!(frame.commands[1], DrawCommand::Rect(_)));
    }
}
