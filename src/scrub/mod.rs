//! Rotary wheel scrubbing.
//!
//! `math` holds the pure angle-to-time mapping, `session` sequences a gesture against a
//! playback host, and `display` derives the values the wheel is drawn with.

pub mod display;
pub mod math;
pub mod session;

pub use display::{format_list_time, format_time, knob_position, progress_fraction};
pub use math::{
    angle_to_delta_seconds, angle_to_delta_seconds_considering_dead_zone,
    angle_to_delta_seconds_outside_default_dead_zone, clamp_time, tick_index,
    DEAD_ZONE_RADIANS, DEFAULT_SECONDS_PER_TURN, QUARTER_TURN_RADIANS,
};
pub use session::{
    AdjustDirection, FeedbackTrigger, NoFeedback, PlaybackHost, ScrubError, ScrubSession,
    DEFAULT_ADJUST_STEP_SECONDS,
};
