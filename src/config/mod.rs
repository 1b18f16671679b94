//! Configuration module for wikisearch-rs
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Environment variable pointing at a settings file
pub const SETTINGS_PATH_ENV: &str = "WIKISEARCH_SETTINGS_PATH";

/// Load settings from an explicit file, the usual locations, or defaults.
///
/// Environment overrides are merged in every case. The second element is the
/// file that was read, if any; loading happens before logging is set up, so
/// callers report it themselves.
pub fn load(explicit: Option<&Path>) -> Result<(Settings, Option<PathBuf>)> {
    let source = locate(explicit);
    let mut settings = match source {
        Some(ref path) => Settings::from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    settings.merge_env();
    Ok((settings, source))
}

fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(SETTINGS_PATH_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    let mut candidates = vec![
        PathBuf::from("wikisearch.yml"),
        PathBuf::from("config/wikisearch.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("wikisearch-rs/settings.yml"));
    }

    candidates.into_iter().find(|p| p.exists())
}
