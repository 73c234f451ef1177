//! Application command handlers for hofetch.
//!
//! # Commands
//! - `scrub`: Simulate a wheel gesture against a playback timeline
//! - `seek`: Step playback forward or back by the adjust step
//! - `convert`: Convert one wheel angle into a playback offset
//! - `config`: Open configuration file in user's preferred editor
//! - `logs`: Display recent log entries

pub mod config;
pub mod convert;
pub mod logs;
pub mod scrub;
pub mod seek;

pub use config::handle_config;
pub use convert::handle_convert;
pub use logs::handle_logs;
pub use scrub::{handle_scrub, ScrubOverrides};
pub use seek::handle_seek;
