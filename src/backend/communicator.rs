//! Frontend-backend communication.

use crate::backend::assistant::{
    Assistant, AssistantConfig, AssistantForm, AssistantUpdate, Call, generate_config,
};
use crate::backend::services::{AssistantHistory, AssistantRecord};
use crate::backend::settings::Settings;
use crate::backend::vapi::VapiClient;
use anyhow::{Context, Result};
use log::{info, warn};

/// Main interface shared by the desktop form and the CLI.
#[derive(Clone)]
pub struct Communicator {
    client: VapiClient,
    history: AssistantHistory,
}

impl Communicator {
    pub fn new(client: VapiClient, history: AssistantHistory) -> Self {
        Self { client, history }
    }

    /// Client from `settings`, history at its default location.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let client = VapiClient::new(settings)?;
        Ok(Self::with_history(client, AssistantHistory::open()))
    }

    /// Falls back to an in-memory history when no data directory is available.
    fn with_history(client: VapiClient, history: Result<AssistantHistory>) -> Self {
        let history = history.unwrap_or_else(|e| {
            warn!("Assistant history unavailable, keeping it in memory: {e:#}");
            AssistantHistory::in_memory()
        });
        Self::new(client, history)
    }

    // Assistant creation

    /// Turn form values into a config and create the assistant.
    pub async fn create_from_form(&self, form: &AssistantForm) -> Result<Assistant> {
        self.create(&generate_config(form)).await
    }

    /// Create an assistant and remember it locally.
    pub async fn create(&self, config: &AssistantConfig) -> Result<Assistant> {
        let assistant = self
            .client
            .create_assistant(config)
            .await
            .context("VAPI API Error")?;

        // History write failures never fail a create that succeeded remotely
        if let Err(e) = self.history.record(&assistant) {
            warn!("Created assistant {} but could not record it: {e}", assistant.id);
        }
        Ok(assistant)
    }

    // Assistant management

    pub async fn get(&self, id: &str) -> Result<Assistant> {
        Ok(self.client.get_assistant(id).await?)
    }

    pub async fn list(&self) -> Result<Vec<Assistant>> {
        Ok(self.client.list_assistants().await?)
    }

    pub async fn update(&self, id: &str, update: &AssistantUpdate) -> Result<Assistant> {
        if update.is_empty() {
            anyhow::bail!("Nothing to update for assistant {id}");
        }
        Ok(self.client.update_assistant(id, update).await?)
    }

    /// Delete remotely, then drop the local record.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete_assistant(id).await?;
        if self.history.remove(id)? {
            info!("Removed {id} from local history");
        }
        Ok(())
    }

    pub async fn call(&self, id: &str) -> Result<Call> {
        Ok(self.client.get_call(id).await?)
    }

    pub fn history(&self) -> Vec<AssistantRecord> {
        self.history.sorted()
    }
}
