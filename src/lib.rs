//! hofetch: recording playback driven by a rotary wheel scrubber.
//!
//! The [`scrub`] module is usable on its own: it maps wheel rotation to playback
//! offsets and sequences gestures against any [`scrub::PlaybackHost`]. The remaining
//! modules make up the `hofetch` command-line host.

pub mod app;
pub mod commands;
pub mod config;
pub mod logging;
pub mod playback;
pub mod scrub;
pub mod setup;
