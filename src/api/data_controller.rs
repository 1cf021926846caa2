use tracing::{debug, warn};

use crate::core::BarDatum;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{BarChart3D, ChartStyle, FrameTicket};

impl<R: Renderer> BarChart3D<R> {
    #[must_use]
    pub fn data(&self) -> &[BarDatum] {
        &self.data
    }

    /// Replaces the series and restarts the entrance animation.
    ///
    /// Values are checked before anything changes: the whole series is
    /// rejected, and the previous one kept, when any value is negative or
    /// non-finite. An accepted series stays installed even when drawing its
    /// first frame fails; that error is returned and the next frame or
    /// [`BarChart3D::render`] draws again.
    pub fn set_data(&mut self, data: Vec<BarDatum>) -> ChartResult<Option<FrameTicket>> {
        if let Err(err) = data.iter().try_for_each(BarDatum::validate) {
            warn!(error = %err, count = data.len(), "rejected bar series");
            return Err(err);
        }
        debug!(count = data.len(), "set bar series");
        self.data = data;
        self.restart_animation()
    }

    #[must_use]
    pub fn style(&self) -> &ChartStyle {
        &self.config.style
    }

    /// Replaces decoration settings and restarts the entrance animation.
    ///
    /// Unparseable colors reject the style before anything changes. As with
    /// [`BarChart3D::set_data`], a failed first draw leaves the new style in
    /// place.
    pub fn set_style(&mut self, style: ChartStyle) -> ChartResult<Option<FrameTicket>> {
        let palette = match style.resolve() {
            Ok(palette) => palette,
            Err(err) => {
                warn!(error = %err, "rejected chart style");
                return Err(err);
            }
        };
        debug!(title = %style.title, "set chart style");
        self.config.style = style;
        self.palette = palette;
        self.restart_animation()
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> ChartResult<Option<FrameTicket>> {
        let style = self.config.style.clone().with_title(title);
        self.set_style(style)
    }
}
