//! Config version tracking.
//!
//! The first line of the config file records which hofetch version wrote it. Setup
//! compares that against the running binary to decide whether a migration is due.

use anyhow::anyhow;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::path::Path;

/// Current application version from Cargo.toml
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A `major.minor.patch` version.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd)]
struct SemanticVersion {
    major: u32,
    minor: u32,
    patch: u32,
}

impl SemanticVersion {
    fn parse(version_str: &str) -> anyhow::Result<Self> {
        let parts: Vec<&str> = version_str.trim().split('.').collect();
        let [major, minor, patch] = parts.as_slice() else {
            return Err(anyhow!(
                "Invalid version format: '{}'. Expected 'major.minor.patch'",
                version_str
            ));
        };

        let component = |name: &str, value: &str| {
            value
                .parse::<u32>()
                .map_err(|_| anyhow!("Invalid {name} version: '{value}'"))
        };

        Ok(SemanticVersion {
            major: component("major", *major)?,
            minor: component("minor", *minor)?,
            patch: component("patch", *patch)?,
        })
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// The `config_version = "X.Y.Z"` line for the running binary.
pub fn version_line() -> String {
    format!(r#"config_version = "{}""#, CURRENT_VERSION)
}

/// Reads the version from the first line of the config file.
///
/// Only an uncommented `config_version = "X.Y.Z"` first line counts.
fn read_config_version(config_path: &Path) -> anyhow::Result<Option<String>> {
    let content = std::fs::read_to_string(config_path)?;
    let Some(first_line) = content.lines().next() else {
        return Ok(None);
    };

    let regex = Regex::new(r#"^\s*config_version\s*=\s*"([^"]+)""#)?;
    Ok(regex
        .captures(first_line)
        .map(|caps| caps[1].to_string()))
}

/// Decides whether the config file at `config_path` needs migrating.
///
/// Returns the version the file was written by when it is older than the binary, or
/// `"unknown (legacy config)"` when it carries no version line. Returns `None` when the
/// file is missing or already current.
pub fn check_setup_needed(config_path: &Path) -> anyhow::Result<Option<String>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let Some(config_version) = read_config_version(config_path)? else {
        return Ok(Some("unknown (legacy config)".to_string()));
    };

    let config_parsed = SemanticVersion::parse(&config_version)?;
    let current_parsed = SemanticVersion::parse(CURRENT_VERSION)?;

    match config_parsed.cmp(&current_parsed) {
        Ordering::Less => Ok(Some(config_parsed.to_string())),
        Ordering::Equal => Ok(None),
        Ordering::Greater => {
            tracing::warn!(
                "Config version {} is newer than app version {}",
                config_parsed,
                CURRENT_VERSION
            );
            Ok(None)
        }
    }
}

/// Rewrites the config file with the current version as its first line.
///
/// Any existing `config_version` line is dropped; all other content is kept.
pub fn update_config_version(config_path: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(config_path)?;

    let lines: Vec<&str> = content
        .lines()
        .filter(|line| !line.trim().starts_with("config_version"))
        .collect();

    let new_content = if lines.is_empty() {
        version_line()
    } else {
        format!("{}\n{}", version_line(), lines.join("\n"))
    };

    std::fs::write(config_path, new_content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semantic_version_parse() {
        let v = SemanticVersion::parse("0.1.5").unwrap();
        assert_eq!(v.major, 0);
        assert_eq!(v.minor, 1);
        assert_eq!(v.patch, 5);
        assert_eq!(v.to_string(), "0.1.5");
    }

    #[test]
    fn test_semantic_version_comparison() {
        let v1 = SemanticVersion::parse("0.0.4").unwrap();
        let v2 = SemanticVersion::parse("0.0.5").unwrap();
        let v3 = SemanticVersion::parse("0.1.0").unwrap();

        assert!(v1 < v2);
        assert!(v2 < v3);
    }

    #[test]
    fn test_invalid_version_format() {
        assert!(SemanticVersion::parse("0.0").is_err());
        assert!(SemanticVersion::parse("0.0.5.1").is_err());
        assert!(SemanticVersion::parse("a.b.c").is_err());
    }

    #[test]
    fn test_setup_needed_for_old_and_legacy_configs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hofetch.toml");

        assert_eq!(check_setup_needed(&path).unwrap(), None);

        std::fs::write(&path, "config_version = \"0.0.1\"\n[scrubber]\n").unwrap();
        assert_eq!(check_setup_needed(&path).unwrap(), Some("0.0.1".to_string()));

        std::fs::write(&path, "[scrubber]\nseconds_per_turn = 8.0\n").unwrap();
        assert_eq!(
            check_setup_needed(&path).unwrap(),
            Some("unknown (legacy config)".to_string())
        );
    }

    #[test]
    fn test_update_config_version_keeps_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hofetch.toml");
        std::fs::write(
            &path,
            "config_version = \"0.0.1\"\n[scrubber]\nseconds_per_turn = 8.0\n",
        )
        .unwrap();

        update_config_version(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some(version_line().as_str()));
        assert_eq!(lines.next(), Some("[scrubber]"));
        assert_eq!(lines.next(), Some("seconds_per_turn = 8.0"));
        assert_eq!(check_setup_needed(&path).unwrap(), None);
    }
}
