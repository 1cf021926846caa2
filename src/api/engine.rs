use tracing::debug;

use crate::core::{BarDatum, BarLayout, ValueScale, Viewport, layout_bars, max_value};
use crate::error::ChartResult;
use crate::interaction::HoverState;
use crate::render::{RenderFrame, Renderer};

use super::axis_scene_builder::y_axis_ticks;
use super::render_frame_builder::{SceneInputs, build_render_frame};
use super::{AnimationDriver, ChartConfig, ResolvedPalette};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Pseudo-3D bar chart component.
///
/// `BarChart3D` owns the input series, the entrance animation, the hover
/// slot and the renderer. Nothing is drawn and pointer input is ignored
/// until [`BarChart3D::mount`] is called.
pub struct BarChart3D<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartConfig,
    pub(super) palette: ResolvedPalette,
    pub(super) data: Vec<BarDatum>,
    pub(super) animation: AnimationDriver,
    pub(super) hover: HoverState,
    pub(super) mounted: bool,
    pub(super) host_drawing: bool,
}

impl<R: Renderer> BarChart3D<R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        let palette = config.validate()?;
        let animation = AnimationDriver::new(config.animation, config.geometry.chart_height_px)?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            "bar chart created"
        );
        Ok(Self {
            renderer,
            config,
            palette,
            data: Vec::new(),
            animation,
            hover: HoverState::default(),
            mounted: false,
            host_drawing: false,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Hands drawing over to the host.
    ///
    /// While enabled, animation frames, data/style changes and hover updates
    /// only advance state; the host paints from its own draw callback with
    /// [`BarChart3D::build_frame`] or `render_on_cairo_context`. An explicit
    /// [`BarChart3D::render`] still draws through the owned renderer.
    pub fn set_host_drawing(&mut self, enabled: bool) {
        self.host_drawing = enabled;
    }

    #[must_use]
    pub fn is_host_drawing(&self) -> bool {
        self.host_drawing
    }

    /// Bar geometry for the current series, recomputed on every call.
    pub fn bars(&self) -> ChartResult<Vec<BarLayout>> {
        layout_bars(&self.data, self.config.geometry, self.config.viewport)
    }

    #[must_use]
    pub fn max_value(&self) -> f64 {
        max_value(&self.data)
    }

    /// Y-axis labels from the baseline upwards.
    pub fn y_axis_labels(&self) -> ChartResult<Vec<String>> {
        let scale = ValueScale::new(self.max_value(), self.config.geometry.chart_height_px)?;
        Ok(
            y_axis_ticks(scale, self.config.geometry, self.config.style.y_axis_steps)
                .into_iter()
                .map(|tick| tick.label)
                .collect(),
        )
    }

    /// Builds the frame for the current animation progress and hover state.
    pub fn build_frame(&self) -> ChartResult<RenderFrame> {
        let inputs = SceneInputs {
            viewport: self.config.viewport,
            geometry: self.config.geometry,
            style: &self.config.style,
            extrusion: self.config.extrusion,
            palette: self.palette,
        };
        let tooltip = if self.animation.is_settled() {
            self.hover.hovered()
        } else {
            None
        };
        build_render_frame(
            &inputs,
            &self.bars()?,
            self.max_value(),
            self.animation.progress_px(),
            tooltip,
        )
    }

    /// Redraws the full scene. A no-op while unmounted.
    pub fn render(&mut self) -> ChartResult<()> {
        if !self.mounted {
            return Ok(());
        }
        let frame = self.build_frame()?;
        self.renderer.render(&frame)
    }

    /// Draws after a state change unless the host owns drawing.
    pub(super) fn present(&mut self) -> ChartResult<()> {
        if self.host_drawing {
            return Ok(());
        }
        self.render()
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        if !self.mounted {
            return Ok(());
        }
        let frame = self.build_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
