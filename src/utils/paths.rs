//! Path utilities.

use std::path::PathBuf;

use anyhow::Result;

/// Name of the per-user application directory.
const APP_DIR: &str = "VoiceSop";

/// Get the base application directory (`VoiceSop`).
#[inline]
pub fn get_app_dir() -> Result<PathBuf> {
    let base_dir = match std::env::consts::OS {
        "windows" => std::env::var("APPDATA")
            .ok()
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("Could not determine AppData directory"))?,
        "macos" => std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Application Support"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
        _ => std::env::var("XDG_DATA_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".local").join("share"))
            })
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
    };
    Ok(base_dir.join(APP_DIR))
}

/// Location of `settings.json`.
pub fn get_settings_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("settings.json"))
}

/// Location of the created-assistants history.
pub fn get_history_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("assistants.json"))
}
