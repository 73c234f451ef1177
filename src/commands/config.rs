//! Configuration file editor command.
//!
//! Opens the hofetch configuration file in the user's preferred editor, or resets it to
//! the default scrubber settings.

use std::process::Command;

use crate::config::{get_config_path, HofetchConfig};

/// Opens the hofetch configuration file in the user's preferred editor.
///
/// Tries $EDITOR, then nano, then vi. The file is validated after the editor exits so
/// mistakes are reported straight away instead of on the next scrub.
///
/// # Errors
/// - If no editor can be found or executed
/// - If the edited file no longer parses or holds out-of-range values
pub fn handle_config(reset: bool) -> anyhow::Result<()> {
    if reset {
        return reset_config();
    }

    let config_path = get_config_path()?;

    tracing::info!("Opening config file: {}", config_path.display());

    let editor = find_editor()?;
    tracing::debug!("Using editor: {}", editor);

    let status = Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to open editor '{editor}': {e}. Make sure the editor is installed and accessible."
            )
        })?;

    if !status.success() {
        return Err(anyhow::anyhow!(
            "Editor exited with error code: {}",
            status.code().unwrap_or(-1)
        ));
    }

    HofetchConfig::load_from(&config_path)?;
    tracing::info!("Config file edited successfully");
    Ok(())
}

/// Overwrites the config file with the default scrubber settings.
///
/// # Errors
/// - If the config file cannot be written
fn reset_config() -> anyhow::Result<()> {
    HofetchConfig::default().save()?;
    tracing::info!("Config reset to defaults");
    println!("Config reset to defaults: {}", get_config_path()?.display());
    Ok(())
}

/// Picks the editor: a non-empty `editor_var`, else the first available fallback.
fn choose_editor(editor_var: Option<String>, available: impl Fn(&str) -> bool) -> Option<String> {
    if let Some(editor) = editor_var.filter(|e| !e.trim().is_empty()) {
        return Some(editor);
    }

    ["nano", "vi"]
        .into_iter()
        .find(|editor| available(*editor))
        .map(str::to_string)
}

fn find_editor() -> anyhow::Result<String> {
    choose_editor(std::env::var("EDITOR").ok(), is_editor_available).ok_or_else(|| {
        anyhow::anyhow!("No editor found. Please set the $EDITOR environment variable.")
    })
}

/// Checks if an editor is available in the system PATH.
fn is_editor_available(editor: &str) -> bool {
    Command::new("which")
        .arg(editor)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_editor_prefers_env() {
        assert_eq!(
            choose_editor(Some("hx".to_string()), |_| true),
            Some("hx".to_string())
        );
    }

    #[test]
    fn test_choose_editor_fallbacks() {
        assert_eq!(choose_editor(Some("  ".to_string()), |_| true), Some("nano".to_string()));
        assert_eq!(choose_editor(None, |e| e == "vi"), Some("vi".to_string()));
        assert_eq!(choose_editor(None, |_| false), None);
    }
}
