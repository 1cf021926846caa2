use std::time::Duration;

use tracing::{debug, trace};

use crate::error::ChartResult;
use crate::render::Renderer;

use super::{AnimationPhase, BarChart3D, FrameOutcome, FrameTicket};

impl<R: Renderer> BarChart3D<R> {
    /// Attaches pointer handling and starts a fresh animation cycle.
    ///
    /// Returns the ticket of the next frame to schedule, if any.
    pub fn mount(&mut self) -> ChartResult<Option<FrameTicket>> {
        if self.mounted {
            return Ok(self.animation.pending());
        }
        self.mounted = true;
        debug!(bars = self.data.len(), "bar chart mounted");
        self.restart_animation()
    }

    /// Detaches pointer handling, drops the pending frame and clears hover.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.animation.cancel();
        self.hover.clear();
        debug!("bar chart unmounted");
    }

    #[must_use]
    pub fn animation_phase(&self) -> AnimationPhase {
        self.animation.phase()
    }

    #[must_use]
    pub fn animation_progress_px(&self) -> f64 {
        self.animation.progress_px()
    }

    /// The single frame the host should have scheduled, if any.
    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameTicket> {
        if self.mounted {
            self.animation.pending()
        } else {
            None
        }
    }

    /// Hover handling is live only once mounted and settled.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.mounted && self.animation.is_settled()
    }

    /// Runs one scheduled frame: advances the animation and redraws, unless
    /// the host owns drawing.
    ///
    /// Stale tickets (superseded, cancelled or already consumed) draw nothing.
    pub fn on_frame(&mut self, ticket: FrameTicket, delta: Duration) -> ChartResult<FrameOutcome> {
        if !self.mounted {
            trace!(?ticket, "frame after unmount ignored");
            return Ok(FrameOutcome::Stale);
        }
        let outcome = self.animation.advance(ticket, delta);
        if outcome == FrameOutcome::Stale {
            trace!(?ticket, "stale frame ignored");
            return Ok(outcome);
        }
        self.present()?;
        Ok(outcome)
    }

    /// Restarts the cycle and draws its first frame immediately.
    pub(super) fn restart_animation(&mut self) -> ChartResult<Option<FrameTicket>> {
        self.hover.clear();
        if !self.mounted {
            return Ok(None);
        }
        if !self.config.animation.enabled {
            self.animation.settle();
            self.present()?;
            return Ok(None);
        }

        let ticket = self.animation.restart();
        match self.on_frame(ticket, Duration::ZERO)? {
            FrameOutcome::Continue(next) => Ok(Some(next)),
            FrameOutcome::Settled | FrameOutcome::Stale => Ok(None),
        }
    }
}
