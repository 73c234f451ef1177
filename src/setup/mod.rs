//! First-run setup for hofetch.
//!
//! Writes the default configuration file and keeps its `config_version` line in step
//! with the running binary.

pub mod version;

use anyhow::anyhow;
use std::path::Path;

/// Embedded default configuration template.
const DEFAULT_CONFIG: &str = include_str!("../../environments/hofetch.toml");

/// Runs setup when the config file is missing or was written by an older version.
///
/// # Errors
/// - If the config path cannot be determined
/// - If the config file cannot be written or updated
pub fn check_and_run_setup() -> anyhow::Result<()> {
    let config_path = crate::config::get_config_path()?;

    match version::check_setup_needed(&config_path)? {
        Some(old_version) => {
            tracing::info!(
                "Setup needed - migrating config from version {} to {}",
                old_version,
                version::CURRENT_VERSION
            );
            version::update_config_version(&config_path).map_err(|e| {
                tracing::error!("Failed to update config version: {e}");
                anyhow!("Failed to update config version: {e}")
            })?;
        }
        None if !config_path.exists() => {
            tracing::info!("No config found, writing defaults to {}", config_path.display());
            write_default_config(&config_path)?;
        }
        None => {
            tracing::debug!("Config version up to date ({})", version::CURRENT_VERSION);
        }
    }

    Ok(())
}

/// Writes the default config, prefixed with the current version line.
///
/// # Errors
/// - If the parent directory cannot be created
/// - If the file cannot be written
pub fn write_default_config(config_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let full_config = format!("{}\n{}", version::version_line(), DEFAULT_CONFIG);
    std::fs::write(config_path, full_config)?;
    Ok(())
}
