//! Command line arguments.

use crate::backend::assistant::models::{DEFAULT_MODEL, VOICE_PROVIDER};
use crate::backend::assistant::{AssistantRequest, AssistantUpdate, ModelConfig, VoiceConfig};
use crate::backend::settings::Settings;
use clap::{Args, Parser, Subcommand};

/// Create and manage Vapi assistants. Without a subcommand the desktop form opens.
#[derive(Parser, Debug)]
#[command(name = "voice-sop", version, about)]
pub struct Cli {
    /// Vapi private API key.
    #[arg(long, env = "VAPI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Override the API base URL.
    #[arg(long, env = "VAPI_BASE_URL", global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the assistant JSON without sending it.
    Render(AssistantArgs),
    /// Create an assistant.
    Create(AssistantArgs),
    /// Show one assistant.
    Get { id: String },
    /// List assistants on the account.
    List,
    /// Change fields of an existing assistant.
    Update(UpdateArgs),
    /// Delete an assistant.
    Delete { id: String },
    /// Show details of a call.
    Call { id: String },
    /// Assistants created from this machine.
    History,
    /// Show or change saved settings.
    #[command(subcommand)]
    Settings(SettingsCommand),
}

/// Form fields. Omitted ones fall back to the SOP interview defaults.
#[derive(Args, Debug, Default, Clone)]
pub struct AssistantArgs {
    #[arg(long)]
    pub name: Option<String>,
    /// System prompt.
    #[arg(long)]
    pub prompt: Option<String>,
    /// 11labs voice id.
    #[arg(long)]
    pub voice: Option<String>,
    #[arg(long)]
    pub first_message: Option<String>,
    /// Server URL Vapi sends call events to.
    #[arg(long)]
    pub webhook: Option<String>,
    /// OpenAI model name.
    #[arg(long)]
    pub model: Option<String>,
}

impl AssistantArgs {
    pub fn into_request(self, settings: &Settings) -> AssistantRequest {
        AssistantRequest {
            name: self.name,
            model: self.model,
            system_prompt: self.prompt,
            voice_provider: None,
            voice_id: self.voice.or_else(|| settings.default_voice_id.clone()),
            first_message: self.first_message,
            webhook_url: self
                .webhook
                .or_else(|| settings.default_server_url.clone()),
        }
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct UpdateArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    /// Replace the system prompt. The whole model block is replaced.
    #[arg(long)]
    pub prompt: Option<String>,
    #[arg(long, requires = "prompt")]
    pub model: Option<String>,
    #[arg(long)]
    pub voice: Option<String>,
    #[arg(long)]
    pub first_message: Option<String>,
    #[arg(long)]
    pub server_url: Option<String>,
}

impl UpdateArgs {
    pub fn to_update(&self) -> AssistantUpdate {
        AssistantUpdate {
            name: self.name.clone(),
            model: self.prompt.as_ref().map(|prompt| {
                ModelConfig::with_system_prompt(
                    self.model.as_deref().unwrap_or(DEFAULT_MODEL),
                    prompt.as_str(),
                )
            }),
            voice: self.voice.as_ref().map(|voice| VoiceConfig {
                provider: VOICE_PROVIDER.to_string(),
                voice_id: Some(voice.clone()),
            }),
            first_message: self.first_message.clone(),
            server_url: self.server_url.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Print the effective settings.
    Show,
    /// Save defaults to settings.json.
    Set(SettingsArgs),
}

/// Values `settings set` writes. Omitted ones keep their saved value.
#[derive(Args, Debug, Default, Clone)]
pub struct SettingsArgs {
    #[arg(long)]
    pub base_url: Option<String>,
    #[arg(long)]
    pub timeout_secs: Option<u64>,
    #[arg(long)]
    pub server_url: Option<String>,
    #[arg(long)]
    pub voice: Option<String>,
}

impl SettingsArgs {
    pub fn apply_to(self, mut saved: Settings) -> Settings {
        if let Some(url) = self.base_url {
            saved.base_url = url;
        }
        if let Some(secs) = self.timeout_secs {
            saved.timeout_secs = secs;
        }
        if self.server_url.is_some() {
            saved.default_server_url = self.server_url;
        }
        if self.voice.is_some() {
            saved.default_voice_id = self.voice;
        }
        saved
    }
}

impl Cli {
    /// Flags win over the settings file and environment.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(key) = &self.api_key {
            settings.api_key = Some(key.clone());
        }
        if let Some(url) = &self.base_url {
            settings.base_url = url.clone();
        }
        settings
    }
}
