//! In-memory playback position used by the command-line host.
//!
//! Stands in for a real player engine: it only tracks where playback is and how long
//! the item is, which is everything the scrubber needs.

use crate::scrub::{FeedbackTrigger, PlaybackHost};

/// A playback position over an item of fixed length.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    current_time: f64,
    duration: f64,
}

impl Timeline {
    /// Creates a timeline positioned at `current_time`, clamped into `[0, duration]`.
    ///
    /// # Errors
    /// - If `duration` is negative or not finite
    /// - If `current_time` is not finite
    pub fn new(current_time: f64, duration: f64) -> anyhow::Result<Self> {
        if !(duration.is_finite() && duration >= 0.0) {
            return Err(anyhow::anyhow!(
                "Duration must be a non-negative number of seconds, got {duration}"
            ));
        }
        if !current_time.is_finite() {
            return Err(anyhow::anyhow!(
                "Current time must be a finite number of seconds, got {current_time}"
            ));
        }

        Ok(Self {
            current_time: current_time.clamp(0.0, duration),
            duration,
        })
    }
}

impl PlaybackHost for Timeline {
    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn seek(&mut self, target: f64) {
        tracing::trace!("Seek {:.3}s -> {:.3}s", self.current_time, target);
        self.current_time = target;
    }
}

/// Feedback sink that remembers whether a tick fired since it was last drained.
#[derive(Debug, Default)]
pub struct TickLatch {
    fired: Option<u32>,
}

impl TickLatch {
    /// Returns the tick index fired since the previous call, if any.
    pub fn take(&mut self) -> Option<u32> {
        self.fired.take()
    }
}

impl FeedbackTrigger for TickLatch {
    fn tick(&mut self, index: u32) {
        tracing::debug!("Feedback tick {}", index);
        self.fired = Some(index);
    }
}
