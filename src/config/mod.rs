//! Configuration management for hofetch.
//!
//! Loads and saves the scrubber settings from a TOML file in the user's config
//! directory.

pub mod file;

pub use file::{get_config_path, HofetchConfig, ScrubberConfig};
