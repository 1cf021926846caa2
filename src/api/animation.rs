use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ChartError, ChartResult};

/// How bar heights grow during the entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnimationMode {
    /// Progress follows elapsed wall time: `elapsed / duration * target`.
    Timed { duration_ms: u64 },
    /// Progress grows by a constant number of pixels per frame, so the run
    /// time depends on the host refresh rate.
    FixedStep { step_px: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub enabled: bool,
    pub mode: AnimationMode,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            // 400px at 5px per frame is 80 frames, ~1333ms at 60Hz.
            mode: AnimationMode::Timed { duration_ms: 1_333 },
        }
    }
}

impl AnimationConfig {
    #[must_use]
    pub fn timed(duration: Duration) -> Self {
        Self {
            enabled: true,
            mode: AnimationMode::Timed {
                duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            },
        }
    }

    #[must_use]
    pub fn fixed_step(step_px: f64) -> Self {
        Self {
            enabled: true,
            mode: AnimationMode::FixedStep { step_px },
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if let AnimationMode::FixedStep { step_px } = self.mode {
            if !step_px.is_finite() || step_px <= 0.0 {
                return Err(ChartError::InvalidData(
                    "animation step must be finite and > 0".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationPhase {
    Animating,
    Settled,
}

/// Handle for the one frame the host is allowed to have scheduled.
///
/// A ticket becomes stale as soon as the driver restarts, is cancelled or
/// consumes it, so a late callback from an earlier cycle cannot draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameTicket {
    pub generation: u64,
    pub sequence: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Frame drawn; schedule the returned ticket next.
    Continue(FrameTicket),
    /// Frame drawn and the animation reached its target; stop scheduling.
    Settled,
    /// Ticket no longer current; nothing was drawn.
    Stale,
}

/// Two-state entrance animation with generation-checked frame tickets.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDriver {
    config: AnimationConfig,
    target_px: f64,
    phase: AnimationPhase,
    progress_px: f64,
    elapsed: Duration,
    generation: u64,
    sequence: u64,
    pending: Option<FrameTicket>,
}

impl AnimationDriver {
    pub fn new(config: AnimationConfig, target_px: f64) -> ChartResult<Self> {
        config.validate()?;
        if !target_px.is_finite() || target_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "animation target must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self {
            config,
            target_px,
            phase: AnimationPhase::Animating,
            progress_px: 0.0,
            elapsed: Duration::ZERO,
            generation: 0,
            sequence: 0,
            pending: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> AnimationConfig {
        self.config
    }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    #[must_use]
    pub fn progress_px(&self) -> f64 {
        self.progress_px
    }

    #[must_use]
    pub fn target_px(&self) -> f64 {
        self.target_px
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn pending(&self) -> Option<FrameTicket> {
        self.pending
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.phase == AnimationPhase::Settled
    }

    /// Starts a fresh cycle from zero and returns the ticket for its first frame.
    ///
    /// Every earlier ticket is superseded.
    pub fn restart(&mut self) -> FrameTicket {
        self.generation += 1;
        self.sequence = 0;
        self.phase = AnimationPhase::Animating;
        self.progress_px = 0.0;
        self.elapsed = Duration::ZERO;
        let ticket = self.issue_ticket();
        debug!(generation = self.generation, "animation restarted");
        ticket
    }

    /// Drops the outstanding ticket without touching progress.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            debug!(generation = self.generation, "animation frame cancelled");
        }
        self.generation += 1;
    }

    /// Jumps to the final state without intermediate frames.
    pub fn settle(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.progress_px = self.target_px;
        self.phase = AnimationPhase::Settled;
    }

    /// Consumes `ticket` and advances progress by one frame.
    ///
    /// `delta` is the time since the previous frame; fixed-step mode ignores it.
    pub fn advance(&mut self, ticket: FrameTicket, delta: Duration) -> FrameOutcome {
        if self.pending != Some(ticket) {
            return FrameOutcome::Stale;
        }
        self.pending = None;

        let next = match self.config.mode {
            AnimationMode::Timed { duration_ms } => {
                self.elapsed = self.elapsed.saturating_add(delta);
                if duration_ms == 0 {
                    self.target_px
                } else {
                    let ratio = self.elapsed.as_secs_f64() / (duration_ms as f64 / 1_000.0);
                    ratio.min(1.0) * self.target_px
                }
            }
            AnimationMode::FixedStep { step_px } => self.progress_px + step_px,
        };
        self.progress_px = next.max(self.progress_px).min(self.target_px);

        if self.progress_px >= self.target_px {
            self.phase = AnimationPhase::Settled;
            debug!(generation = self.generation, "animation settled");
            return FrameOutcome::Settled;
        }

        let next_ticket = self.issue_ticket();
        trace!(
            generation = self.generation,
            sequence = next_ticket.sequence,
            progress_px = self.progress_px,
            "animation frame"
        );
        FrameOutcome::Continue(next_ticket)
    }

    fn issue_ticket(&mut self) -> FrameTicket {
        self.sequence += 1;
        let ticket = FrameTicket {
            generation: self.generation,
            sequence: self.sequence,
        };
        self.pending = Some(ticket);
        ticket
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{AnimationConfig, AnimationDriver, AnimationPhase, FrameOutcome};

    #[test]
    fn restart_supersedes_previous_ticket() {
        let mut driver =
            AnimationDriver::new(AnimationConfig::fixed_step(5.0), 400.0).expect("driver");
        let first = driver.restart();
        let second = driver.restart();
        assert_ne!(first, second);
        assert_eq!(driver.generation(), second.generation);
        assert_eq!(second.generation, first.generation + 1);
        assert_eq!(driver.advance(first, Duration::ZERO), FrameOutcome::Stale);
        assert!(matches!(
            driver.advance(second, Duration::ZERO),
            FrameOutcome::Continue(_)
        ));
    }

    #[test]
    fn consumed_ticket_cannot_be_replayed() {
        let mut driver =
            AnimationDriver::new(AnimationConfig::fixed_step(5.0), 400.0).expect("driver");
        let ticket = driver.restart();
        let _ = driver.advance(ticket, Duration::ZERO);
        assert_eq!(driver.advance(ticket, Duration::ZERO), FrameOutcome::Stale);
        assert_eq!(driver.progress_px(), 5.0);
    }

    #[test]
    fn fixed_step_settles_after_target_over_step_frames() {
        let mut driver =
            AnimationDriver::new(AnimationConfig::fixed_step(5.0), 400.0).expect("driver");
        let mut ticket = driver.restart();
        let mut frames = 0;
        loop {
            frames += 1;
            match driver.advance(ticket, Duration::ZERO) {
                FrameOutcome::Continue(next) => ticket = next,
                FrameOutcome::Settled => break,
                FrameOutcome::Stale => panic!("ticket must stay current"),
            }
        }
        assert_eq!(frames, 80);
        assert_eq!(driver.phase(), AnimationPhase::Settled);
        assert_eq!(driver.pending(), None);
    }

    #[test]
    fn timed_mode_interpolates_elapsed_time() {
        let config = AnimationConfig::timed(Duration::from_millis(1_000));
        let mut driver = AnimationDriver::new(config, 400.0).expect("driver");
        assert_eq!(driver.config(), config);
        assert_eq!(driver.target_px(), 400.0);
        let ticket = driver.restart();
        let FrameOutcome::Continue(next) = driver.advance(ticket, Duration::from_millis(250)) else {
            panic!("quarter of the duration must continue");
        };
        assert!((driver.progress_px() - 100.0).abs() <= 1e-9);
        assert_eq!(
            driver.advance(next, Duration::from_millis(2_000)),
            FrameOutcome::Settled
        );
        assert_eq!(driver.progress_px(), 400.0);
    }

    #[test]
    fn cancel_invalidates_pending_ticket() {
        let mut driver = AnimationDriver::new(AnimationConfig::default(), 400.0).expect("driver");
        let ticket = driver.restart();
        driver.cancel();
        assert_eq!(driver.pending(), None);
        assert_eq!(driver.advance(ticket, Duration::from_millis(16)), FrameOutcome::Stale);
        assert_eq!(driver.progress_px(), 0.0);
    }

    #[test]
    fn rejects_non_positive_step() {
        assert!(AnimationDriver::new(AnimationConfig::fixed_step(0.0), 400.0).is_err());
    }
}
