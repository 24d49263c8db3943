use crate::backend::assistant::Assistant;
use crate::utils::paths::get_history_path;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantRecord {
    pub id: String,
    pub name: Option<String>,
    pub server_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HistoryData {
    pub assistants: Vec<AssistantRecord>,
}

/// Assistants created from this machine, kept in `assistants.json`.
#[derive(Clone)]
pub struct AssistantHistory {
    data: Arc<Mutex<HistoryData>>,
    /// `None` keeps records in memory only.
    path: Option<PathBuf>,
}

impl AssistantHistory {
    /// History at the default location.
    pub fn open() -> Result<Self> {
        Ok(Self::load(get_history_path()?))
    }

    /// History stored at `path`. A missing or unreadable file starts empty.
    pub fn load(path: PathBuf) -> Self {
        let data = Self::load_data(&path);
        Self {
            data: Arc::new(Mutex::new(data)),
            path: Some(path),
        }
    }

    /// History that is never written to disk.
    pub fn in_memory() -> Self {
        Self {
            data: Arc::new(Mutex::new(HistoryData::default())),
            path: None,
        }
    }

    fn load_data(path: &Path) -> HistoryData {
        if path.exists() {
            match fs::read_to_string(path).map(|c| serde_json::from_str::<HistoryData>(&c)) {
                Ok(Ok(data)) => return data,
                Ok(Err(e)) => warn!("Ignoring corrupt history {}: {e}", path.display()),
                Err(e) => warn!("Could not read history {}: {e}", path.display()),
            }
        }
        HistoryData::default()
    }

    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = {
            let data = self
                .data
                .lock()
                .map_err(|_| anyhow::anyhow!("history lock poisoned"))?;
            serde_json::to_string_pretty(&*data)?
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Remember a freshly created assistant. Re-recording an id replaces it.
    pub fn record(&self, assistant: &Assistant) -> Result<AssistantRecord> {
        let record = AssistantRecord {
            id: assistant.id.clone(),
            name: assistant.name.clone(),
            server_url: assistant.server_url.clone(),
            created_at: Utc::now(),
        };

        if let Ok(mut data) = self.data.lock() {
            data.assistants.retain(|r| r.id != record.id);
            data.assistants.push(record.clone());
        }
        self.save()?;
        Ok(record)
    }

    /// Forget an assistant. Returns whether it was known.
    pub fn remove(&self, id: &str) -> Result<bool> {
        let removed = match self.data.lock() {
            Ok(mut data) => {
                let before = data.assistants.len();
                data.assistants.retain(|r| r.id != id);
                data.assistants.len() != before
            }
            Err(_) => false,
        };

        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    /// Newest first.
    pub fn sorted(&self) -> Vec<AssistantRecord> {
        if let Ok(data) = self.data.lock() {
            let mut records = data.assistants.clone();
            records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            records
        } else {
            Vec::new()
        }
    }
}
