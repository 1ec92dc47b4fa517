//! Settings persistence
//!
//! Saves and loads [`SessionSettings`] to/from a JSON file so display
//! preferences survive between sessions.
//!
//! # File Location
//!
//! Settings are stored as `settings.json` in the platform configuration
//! directory, or in the working directory when none can be resolved. The
//! `--settings` flag overrides the location.
//!
//! # Error Handling
//!
//! - [`load_settings`] never fails: a missing or unreadable file falls back
//!   to defaults with a logged warning
//! - [`read_settings`] and [`save_settings`] report errors to the caller

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{info, warn};

use crate::core::error::CoreResult;
use crate::core::settings::SessionSettings;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Resolve the default settings file path
///
/// E.g. `~/.config/chess-session/settings.json` on Linux.
pub fn default_settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "chess-session") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read settings from `path`
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_settings(path: &Path) -> CoreResult<Option<SessionSettings>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&contents)?;
    Ok(Some(settings))
}

/// Load settings from `path`, falling back to defaults
pub fn load_settings(path: &Path) -> SessionSettings {
    match read_settings(path) {
        Ok(Some(settings)) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Ok(None) => {
            info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
            SessionSettings::default()
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            SessionSettings::default()
        }
    }
}

/// Write settings to `path`, creating its directory if needed
pub fn save_settings(path: &Path, settings: &SessionSettings) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
