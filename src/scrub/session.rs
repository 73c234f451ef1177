//! Gesture bookkeeping for one wheel scrubber.
//!
//! A [`ScrubSession`] sits between a gesture source and a playback host. It latches the
//! playback time when a rotation starts, turns every angle update into a clamped seek
//! target, and decides when a quarter-turn feedback tick should fire. The host keeps
//! ownership of the real playback position; the session only tells it where to go.

use thiserror::Error;

use super::math::{
    angle_to_delta_seconds_considering_dead_zone, clamp_time, tick_index, DEAD_ZONE_RADIANS,
    DEFAULT_SECONDS_PER_TURN,
};

/// Seconds moved by one accessibility increment or decrement.
pub const DEFAULT_ADJUST_STEP_SECONDS: f64 = 1.0;

/// Invalid scrubber settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScrubError {
    #[error("seconds per turn must be a positive finite number, got {0}")]
    InvalidSecondsPerTurn(f64),

    #[error("dead zone must be a non-negative finite number of radians, got {0}")]
    InvalidDeadZone(f64),

    #[error("adjust step must be a positive finite number of seconds, got {0}")]
    InvalidAdjustStep(f64),
}

/// Owner of the playback position that the scrubber drives.
pub trait PlaybackHost {
    /// Current playback time in seconds.
    fn current_time(&self) -> f64;

    /// Length of the current item in seconds.
    fn duration(&self) -> f64;

    /// Moves playback to `target` seconds.
    fn seek(&mut self, target: f64);
}

/// Fires a physical tick (haptic, click, ...) when the wheel crosses a quarter turn.
pub trait FeedbackTrigger {
    fn tick(&mut self, index: u32);
}

/// Feedback sink that ignores every tick.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFeedback;

impl FeedbackTrigger for NoFeedback {
    fn tick(&mut self, _index: u32) {}
}

/// Direction of an accessibility adjustable action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustDirection {
    Increment,
    Decrement,
    /// Any other action the platform reports; it carries no movement.
    Other,
}

/// State of one scrubber across a sequence of gesture updates.
#[derive(Debug, Clone)]
pub struct ScrubSession {
    seconds_per_turn: f64,
    dead_zone: f64,
    adjust_step: f64,
    /// Playback time latched on the first update of the running gesture
    gesture_start_time: Option<f64>,
    /// Highest quarter-turn index already reported to feedback
    last_tick_index: u32,
    /// Latest accumulated angle, for positioning the knob
    current_angle: f64,
}

impl Default for ScrubSession {
    fn default() -> Self {
        Self {
            seconds_per_turn: DEFAULT_SECONDS_PER_TURN,
            dead_zone: DEAD_ZONE_RADIANS,
            adjust_step: DEFAULT_ADJUST_STEP_SECONDS,
            gesture_start_time: None,
            last_tick_index: 0,
            current_angle: 0.0,
        }
    }
}

impl ScrubSession {
    /// Creates a session with the default dead zone and adjust step.
    ///
    /// # Errors
    /// - If `seconds_per_turn` is not a positive finite number
    pub fn new(seconds_per_turn: f64) -> Result<Self, ScrubError> {
        Self::with_settings(
            seconds_per_turn,
            DEAD_ZONE_RADIANS,
            DEFAULT_ADJUST_STEP_SECONDS,
        )
    }

    /// Creates a session with explicit settings.
    ///
    /// # Errors
    /// - If `seconds_per_turn` is not a positive finite number
    /// - If `dead_zone` is negative or not finite
    /// - If `adjust_step` is not a positive finite number
    pub fn with_settings(
        seconds_per_turn: f64,
        dead_zone: f64,
        adjust_step: f64,
    ) -> Result<Self, ScrubError> {
        if !(seconds_per_turn.is_finite() && seconds_per_turn > 0.0) {
            return Err(ScrubError::InvalidSecondsPerTurn(seconds_per_turn));
        }
        if !(dead_zone.is_finite() && dead_zone >= 0.0) {
            return Err(ScrubError::InvalidDeadZone(dead_zone));
        }
        if !(adjust_step.is_finite() && adjust_step > 0.0) {
            return Err(ScrubError::InvalidAdjustStep(adjust_step));
        }

        Ok(Self {
            seconds_per_turn,
            dead_zone,
            adjust_step,
            ..Self::default()
        })
    }

    pub fn seconds_per_turn(&self) -> f64 {
        self.seconds_per_turn
    }

    pub fn dead_zone(&self) -> f64 {
        self.dead_zone
    }

    pub fn adjust_step(&self) -> f64 {
        self.adjust_step
    }

    /// Whether a rotation gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.gesture_start_time.is_some()
    }

    pub fn current_angle(&self) -> f64 {
        self.current_angle
    }

    pub fn last_tick_index(&self) -> u32 {
        self.last_tick_index
    }

    /// Handles an angle update while the gesture is running.
    ///
    /// The first update latches the host's current time as the gesture origin. Every
    /// update seeks the host to the clamped target and returns it.
    pub fn on_changed<H, F>(&mut self, angle: f64, host: &mut H, feedback: &mut F) -> f64
    where
        H: PlaybackHost + ?Sized,
        F: FeedbackTrigger + ?Sized,
    {
        if self.gesture_start_time.is_none() {
            let start = host.current_time();
            tracing::debug!("Scrub gesture started at {:.3}s", start);
            self.gesture_start_time = Some(start);
            self.last_tick_index = 0;
        }

        self.current_angle = angle;

        let ticks = tick_index(angle);
        if ticks > self.last_tick_index {
            feedback.tick(ticks);
            self.last_tick_index = ticks;
        }

        let target = self.target_for(angle, host);
        tracing::trace!("Scrub update: angle={:.4} target={:.3}s", angle, target);
        host.seek(target);
        target
    }

    /// Handles the final angle when the gesture is released.
    ///
    /// Seeks to the final target and resets the gesture state so the next update starts
    /// a new gesture from the host's position at that time.
    pub fn on_ended<H>(&mut self, angle: f64, host: &mut H) -> f64
    where
        H: PlaybackHost + ?Sized,
    {
        let target = self.target_for(angle, host);
        host.seek(target);
        tracing::debug!("Scrub gesture ended: angle={:.4} target={:.3}s", angle, target);

        self.gesture_start_time = None;
        self.current_angle = 0.0;
        self.last_tick_index = 0;
        target
    }

    /// Moves playback by one adjust step, as an assistive adjustable control would.
    ///
    /// Returns the new time, or `None` if the direction carries no movement.
    pub fn adjust<H>(&self, direction: AdjustDirection, host: &mut H) -> Option<f64>
    where
        H: PlaybackHost + ?Sized,
    {
        let delta = match direction {
            AdjustDirection::Increment => self.adjust_step,
            AdjustDirection::Decrement => -self.adjust_step,
            AdjustDirection::Other => return None,
        };

        let target = clamp_time(host.current_time(), delta, host.duration());
        host.seek(target);
        Some(target)
    }

    fn target_for<H>(&self, angle: f64, host: &H) -> f64
    where
        H: PlaybackHost + ?Sized,
    {
        let delta = angle_to_delta_seconds_considering_dead_zone(
            angle,
            self.seconds_per_turn,
            self.dead_zone,
        );
        let start = self
            .gesture_start_time
            .unwrap_or_else(|| host.current_time());
        clamp_time(start, delta, host.duration())
    }
}
