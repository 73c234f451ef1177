//! Configuration file management for hofetch.
//!
//! This module handles loading and saving application configuration from TOML files.
//! Configuration is stored in the user's config directory.

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::setup::version;

use crate::scrub::{
    ScrubError, ScrubSession, DEAD_ZONE_RADIANS, DEFAULT_ADJUST_STEP_SECONDS,
    DEFAULT_SECONDS_PER_TURN,
};

/// Wheel scrubber configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrubberConfig {
    /// Playback seconds covered by one full turn of the wheel
    #[serde(default = "default_seconds_per_turn")]
    pub seconds_per_turn: f64,
    /// Rotation (radians) below which the wheel does not move playback
    #[serde(default = "default_dead_zone_radians")]
    pub dead_zone_radians: f64,
    /// Seconds moved by one accessibility increment/decrement
    #[serde(default = "default_adjust_step_seconds")]
    pub adjust_step_seconds: f64,
}

fn default_seconds_per_turn() -> f64 {
    DEFAULT_SECONDS_PER_TURN
}

fn default_dead_zone_radians() -> f64 {
    DEAD_ZONE_RADIANS
}

fn default_adjust_step_seconds() -> f64 {
    DEFAULT_ADJUST_STEP_SECONDS
}

impl Default for ScrubberConfig {
    fn default() -> Self {
        Self {
            seconds_per_turn: default_seconds_per_turn(),
            dead_zone_radians: default_dead_zone_radians(),
            adjust_step_seconds: default_adjust_step_seconds(),
        }
    }
}

impl ScrubberConfig {
    /// Builds a scrub session from these settings.
    ///
    /// # Errors
    /// - If any setting is out of range
    pub fn session(&self) -> Result<ScrubSession, ScrubError> {
        ScrubSession::with_settings(
            self.seconds_per_turn,
            self.dead_zone_radians,
            self.adjust_step_seconds,
        )
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HofetchConfig {
    #[serde(default)]
    pub scrubber: ScrubberConfig,
}

impl HofetchConfig {
    /// Loads configuration from the user's config directory.
    ///
    /// # Errors
    /// - If the config directory cannot be determined
    /// - If the config file cannot be read
    /// - If the TOML is malformed or holds out-of-range values
    pub fn load() -> anyhow::Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// - If the file cannot be read
    /// - If the TOML is malformed or holds out-of-range values
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let config_content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {e}", path.display()))?;
        let config: HofetchConfig = toml::from_str(&config_content)
            .map_err(|e| anyhow!("Invalid config file {}: {e}", path.display()))?;
        config.validate()?;
        tracing::debug!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Saves configuration to the user's config directory.
    ///
    /// # Errors
    /// - If the config directory cannot be determined or created
    /// - If the file cannot be written
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = get_config_path()?;
        self.save_to(&config_path)
    }

    /// Saves configuration to an explicit path.
    ///
    /// The current `config_version` line is written first so setup does not treat the
    /// saved file as a legacy config.
    ///
    /// # Errors
    /// - If the file cannot be written
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        let body = toml::to_string_pretty(self)?;
        let config_content = format!("{}\n{}", version::version_line(), body);
        fs::write(path, config_content)?;
        tracing::info!("Configuration saved");
        Ok(())
    }

    /// Checks that the scrubber settings can build a session.
    ///
    /// # Errors
    /// - If seconds per turn or the adjust step is not positive, or the dead zone is negative
    pub fn validate(&self) -> anyhow::Result<()> {
        self.scrubber
            .session()
            .map(|_| ())
            .map_err(|e| anyhow!("Invalid [scrubber] settings: {e}"))
    }
}

/// Retrieves the path to the config file, creating its directory if needed.
///
/// # Errors
/// - If the home directory cannot be determined
/// - If the config directory cannot be created
pub fn get_config_path() -> anyhow::Result<PathBuf> {
    let config_dir = dirs::home_dir()
        .ok_or_else(|| anyhow!("Could not determine home directory"))?
        .join(".config")
        .join("hofetch");

    fs::create_dir_all(&config_dir)
        .map_err(|e| anyhow!("Failed to create config directory: {e}"))?;

    Ok(config_dir.join("hofetch.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_defaults_match_scrubber_constants() {
        let config = HofetchConfig::default();
        assert_eq!(config.scrubber.seconds_per_turn, 12.0);
        assert_eq!(config.scrubber.dead_zone_radians, PI / 30.0);
        assert_eq!(config.scrubber.adjust_step_seconds, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: HofetchConfig =
            toml::from_str("config_version = \"0.1.0\"\n[scrubber]\nseconds_per_turn = 30.0\n")
                .unwrap();
        assert_eq!(config.scrubber.seconds_per_turn, 30.0);
        assert_eq!(config.scrubber.dead_zone_radians, PI / 30.0);

        let empty: HofetchConfig = toml::from_str("").unwrap();
        assert_eq!(empty, HofetchConfig::default());
    }

    #[test]
    fn test_save_and_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hofetch.toml");

        let mut config = HofetchConfig::default();
        config.scrubber.seconds_per_turn = 20.0;
        config.save_to(&path).unwrap();

        let loaded = HofetchConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hofetch.toml");
        fs::write(&path, "[scrubber]\nseconds_per_turn = 0.0\n").unwrap();

        let err = HofetchConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("seconds per turn"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(HofetchConfig::load_from(&dir.path().join("missing.toml")).is_err());
    }
}
