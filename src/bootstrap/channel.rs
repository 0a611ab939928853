//! Release-channel detection.
//!
//! The npm distribution ships a `package.json` next to the binary; a
//! version containing "beta" selects the beta branch of the source
//! repository. Any read or parse failure silently falls back to main —
//! a broken manifest must never block installation.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Source branch the companion package is installed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Main,
    Beta,
}

impl Channel {
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Main => "main",
            Channel::Beta => "beta",
        }
    }

    /// Classify a version string: "beta" anywhere (case-insensitive)
    /// selects the beta channel.
    fn from_version(version: &str) -> Self {
        if version.to_ascii_lowercase().contains("beta") {
            Channel::Beta
        } else {
            Channel::Main
        }
    }
}

#[derive(Debug, Deserialize)]
struct Manifest {
    version: Option<String>,
}

fn read_manifest_version(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let manifest: Manifest =
        serde_json::from_str(&content).with_context(|| "Failed to parse package.json")?;
    manifest
        .version
        .with_context(|| "package.json has no version field")
}

/// Detect the release channel from a manifest file.
///
/// Defaults to [`Channel::Main`] on any failure; the fallback is logged
/// at debug level only and never surfaced to the user.
pub fn detect_channel(manifest_path: &Path) -> Channel {
    match read_manifest_version(manifest_path) {
        Ok(version) => Channel::from_version(&version),
        Err(e) => {
            debug!(path = %manifest_path.display(), error = %e, "manifest unreadable, defaulting to main");
            Channel::Main
        }
    }
}

/// Where the distribution's manifest lives: next to the running executable.
pub fn default_manifest_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("package.json")))
        .unwrap_or_else(|| PathBuf::from("package.json"))
}
