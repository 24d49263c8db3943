//! Runtime settings.

use crate::utils::paths::get_settings_path;
use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.vapi.ai";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings persisted in `settings.json`. The API key is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(skip)]
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
    /// Webhook used by `create` when no server URL is given.
    pub default_server_url: Option<String>,
    pub default_voice_id: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_server_url: None,
            default_voice_id: None,
        }
    }
}

impl Settings {
    /// Settings file from the app directory, then environment overrides.
    pub fn load() -> Result<Self> {
        let settings = match get_settings_path() {
            Ok(path) => Self::load_file(&path)?,
            Err(e) => {
                warn!("No settings directory available, using defaults: {e}");
                Self::default()
            }
        };
        Ok(settings.with_env(|key| std::env::var(key).ok()))
    }

    /// Like [`Settings::load`], but an unreadable file yields defaults.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Failed to load settings, using defaults: {e:#}");
            Self::default().with_env(|key| std::env::var(key).ok())
        })
    }

    /// Read `path`, warning and starting over from defaults if it is unusable.
    pub fn load_file_or_default(path: &Path) -> Self {
        Self::load_file(path).unwrap_or_else(|e| {
            warn!("Ignoring unusable settings: {e:#}");
            Self::default()
        })
    }

    /// Read a settings file. A missing file yields defaults.
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("Settings file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid settings file {}", path.display()))
    }

    /// Write the non-secret settings to `path`.
    pub fn save_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Apply `VAPI_*` overrides looked up through `var`.
    pub fn with_env(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| var(key).filter(|v| !v.is_empty());

        if let Some(key) = var("VAPI_API_KEY") {
            self.api_key = Some(key);
        }
        if let Some(url) = var("VAPI_BASE_URL") {
            self.base_url = url;
        }
        if let Some(secs) = var("VAPI_TIMEOUT_SECS") {
            match secs.parse() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => warn!("Ignoring VAPI_TIMEOUT_SECS={secs}: not a number"),
            }
        }
        if let Some(url) = var("VAPI_SERVER_URL") {
            self.default_server_url = Some(url);
        }
        if let Some(voice) = var("VAPI_VOICE_ID") {
            self.default_voice_id = Some(voice);
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
