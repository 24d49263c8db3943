//! Request and response shapes of the Vapi assistant API.

use super::prompts::{DEFAULT_ASSISTANT_NAME, DEFAULT_FIRST_MESSAGE, DEFAULT_SYSTEM_PROMPT};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// LLM provider every generated assistant talks to.
pub const MODEL_PROVIDER: &str = "openai";
/// Model used unless a request overrides it.
pub const DEFAULT_MODEL: &str = "gpt-4";
/// Voice provider every generated assistant speaks with.
pub const VOICE_PROVIDER: &str = "11labs";

/// Raw values of the assistant form, copied as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantForm {
    pub name: String,
    pub prompt: String,
    pub voice: String,
    pub first_message: String,
    pub webhook: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub provider: String,
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ModelConfig {
    /// An OpenAI model driven by a single system prompt.
    pub fn with_system_prompt(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            provider: MODEL_PROVIDER.to_string(),
            model: model.into(),
            messages: vec![ChatMessage::system(prompt)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    pub provider: String,
    pub voice_id: Option<String>,
}

/// Body of `POST /assistant`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantConfig {
    pub name: String,
    pub model: ModelConfig,
    pub voice: VoiceConfig,
    pub first_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
}

/// Build the assistant configuration from form values.
///
/// Values are copied verbatim: nothing is trimmed, defaulted or validated.
pub fn generate_config(form: &AssistantForm) -> AssistantConfig {
    AssistantConfig {
        name: form.name.clone(),
        model: ModelConfig::with_system_prompt(DEFAULT_MODEL, form.prompt.clone()),
        voice: VoiceConfig {
            provider: VOICE_PROVIDER.to_string(),
            voice_id: Some(form.voice.clone()),
        },
        first_message: form.first_message.clone(),
        server_url: Some(form.webhook.clone()),
    }
}

impl From<&AssistantForm> for AssistantConfig {
    fn from(form: &AssistantForm) -> Self {
        generate_config(form)
    }
}

/// Loosely specified create request; unset fields fall back to SOP defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantRequest {
    pub name: Option<String>,
    pub model: Option<String>,
    pub system_prompt: Option<String>,
    pub voice_provider: Option<String>,
    pub voice_id: Option<String>,
    pub first_message: Option<String>,
    pub webhook_url: Option<String>,
}

impl AssistantRequest {
    pub fn into_config(self) -> AssistantConfig {
        AssistantConfig {
            name: self
                .name
                .unwrap_or_else(|| DEFAULT_ASSISTANT_NAME.to_string()),
            model: ModelConfig::with_system_prompt(
                self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                self.system_prompt
                    .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
            ),
            voice: VoiceConfig {
                provider: self
                    .voice_provider
                    .unwrap_or_else(|| VOICE_PROVIDER.to_string()),
                voice_id: self.voice_id,
            },
            first_message: self
                .first_message
                .unwrap_or_else(|| DEFAULT_FIRST_MESSAGE.to_string()),
            server_url: self.webhook_url,
        }
    }
}

/// Body of `PATCH /assistant/{id}`. Unset fields are left untouched remotely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<VoiceConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
}

impl AssistantUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Assistant as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assistant {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub server_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Assistant {
    /// First system prompt of the attached model, if any.
    pub fn system_prompt(&self) -> Option<&str> {
        self.extra
            .get("model")?
            .get("messages")?
            .as_array()?
            .iter()
            .find(|m| m.get("role").and_then(Value::as_str) == Some("system"))?
            .get("content")?
            .as_str()
    }
}

/// Call as returned by `GET /call/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub assistant_id: Option<String>,
    #[serde(default)]
    pub ended_reason: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form() -> AssistantForm {
        AssistantForm {
            name: "Onboarding".to_string(),
            prompt: "Interview the caller".to_string(),
            voice: "rachel".to_string(),
            first_message: "Hi there".to_string(),
            webhook: "https://example.com/webhook/vapi".to_string(),
        }
    }

    #[test]
    fn form_values_land_at_fixed_paths() {
        let body = serde_json::to_value(generate_config(&form())).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "Onboarding",
                "model": {
                    "provider": "openai",
                    "model": "gpt-4",
                    "messages": [{ "role": "system", "content": "Interview the caller" }]
                },
                "voice": { "provider": "11labs", "voiceId": "rachel" },
                "firstMessage": "Hi there",
                "serverUrl": "https://example.com/webhook/vapi"
            })
        );
    }

    #[test]
    fn empty_and_padded_fields_are_copied_as_is() {
        let form = AssistantForm {
            name: "  spaced  ".to_string(),
            ..AssistantForm::default()
        };
        let body = serde_json::to_value(AssistantConfig::from(&form)).unwrap();
        assert_eq!(body["name"], "  spaced  ");
        assert_eq!(body["firstMessage"], "");
        assert_eq!(body["serverUrl"], "");
        assert_eq!(body["voice"]["voiceId"], "");
        assert_eq!(body["model"]["messages"][0]["content"], "");
    }

    #[test]
    fn request_defaults_fill_missing_fields() {
        let config = AssistantRequest::default().into_config();
        assert_eq!(config.name, DEFAULT_ASSISTANT_NAME);
        assert_eq!(config.model.model, DEFAULT_MODEL);
        assert_eq!(config.model.messages[0].content, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(config.first_message, DEFAULT_FIRST_MESSAGE);

        let body = serde_json::to_value(&config).unwrap();
        assert_eq!(body["voice"], json!({ "provider": "11labs", "voiceId": null }));
        assert!(body.get("serverUrl").is_none());
    }

    #[test]
    fn request_overrides_win() {
        let config = AssistantRequest {
            model: Some("gpt-4o".to_string()),
            voice_provider: Some("playht".to_string()),
            webhook_url: Some("https://hooks.test/vapi".to_string()),
            ..AssistantRequest::default()
        }
        .into_config();
        assert_eq!(config.model.model, "gpt-4o");
        assert_eq!(config.model.provider, MODEL_PROVIDER);
        assert_eq!(config.voice.provider, "playht");
        assert_eq!(config.server_url.as_deref(), Some("https://hooks.test/vapi"));
    }

    #[test]
    fn update_only_serializes_set_fields() {
        let update = AssistantUpdate {
            server_url: Some("https://hooks.test/vapi".to_string()),
            ..AssistantUpdate::default()
        };
        assert!(!update.is_empty());
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "serverUrl": "https://hooks.test/vapi" })
        );
        assert!(AssistantUpdate::default().is_empty());
    }

    #[test]
    fn assistant_keeps_unknown_fields() {
        let assistant: Assistant = serde_json::from_value(json!({
            "id": "asst_1",
            "name": "Onboarding",
            "orgId": "org_9",
            "model": {
                "provider": "openai",
                "messages": [{ "role": "system", "content": "Be brief" }]
            }
        }))
        .unwrap();
        assert_eq!(assistant.id, "asst_1");
        assert_eq!(assistant.server_url, None);
        assert_eq!(assistant.extra["orgId"], "org_9");
        assert_eq!(assistant.system_prompt(), Some("Be brief"));
    }

    #[test]
    fn assistant_without_id_is_rejected() {
        let parsed = serde_json::from_value::<Assistant>(json!({ "name": "x" }));
        assert!(parsed.is_err());
    }
}
