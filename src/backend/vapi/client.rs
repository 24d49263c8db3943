//! Thin async client over the assistant and call endpoints.

use super::error::{Result, VapiError};
use crate::backend::assistant::{Assistant, AssistantConfig, AssistantUpdate, Call};
use crate::backend::settings::Settings;
use log::{debug, error, info};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

/// One request per call, no retries.
#[derive(Clone)]
pub struct VapiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl VapiClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let api_key = settings
            .api_key
            .clone()
            .ok_or(VapiError::MissingApiKey)?;

        let http = Client::builder()
            .timeout(settings.timeout())
            .user_agent(concat!("voice-sop/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");
        self.http
            .request(method, url)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
    }

    /// Send and return the body of a 2xx response.
    async fn send_raw(&self, builder: RequestBuilder) -> Result<String> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(VapiError::Status { status, body });
        }
        Ok(body)
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let body = self.send_raw(builder).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `POST /assistant`.
    pub async fn create_assistant(&self, config: &AssistantConfig) -> Result<Assistant> {
        info!("Creating VAPI assistant: {}", config.name);

        let assistant: Assistant = self
            .send(self.request(Method::POST, "/assistant").json(config))
            .await
            .inspect_err(|e| error!("Failed to create VAPI assistant: {e}"))?;

        info!("Created assistant with ID: {}", assistant.id);
        Ok(assistant)
    }

    /// `GET /assistant/{id}`.
    pub async fn get_assistant(&self, id: &str) -> Result<Assistant> {
        self.send(self.request(Method::GET, &format!("/assistant/{id}")))
            .await
            .inspect_err(|e| error!("Failed to get assistant {id}: {e}"))
    }

    /// `PATCH /assistant/{id}` with only the fields set in `update`.
    pub async fn update_assistant(&self, id: &str, update: &AssistantUpdate) -> Result<Assistant> {
        let assistant: Assistant = self
            .send(
                self.request(Method::PATCH, &format!("/assistant/{id}"))
                    .json(update),
            )
            .await
            .inspect_err(|e| error!("Failed to update assistant {id}: {e}"))?;

        info!("Updated assistant {id}");
        Ok(assistant)
    }

    /// `DELETE /assistant/{id}`. The response body is ignored.
    pub async fn delete_assistant(&self, id: &str) -> Result<()> {
        self.send_raw(self.request(Method::DELETE, &format!("/assistant/{id}")))
            .await
            .inspect_err(|e| error!("Failed to delete assistant {id}: {e}"))?;

        info!("Deleted assistant {id}");
        Ok(())
    }

    /// `GET /assistant`.
    pub async fn list_assistants(&self) -> Result<Vec<Assistant>> {
        self.send(self.request(Method::GET, "/assistant"))
            .await
            .inspect_err(|e| error!("Failed to list assistants: {e}"))
    }

    /// `GET /call/{id}`.
    pub async fn get_call(&self, id: &str) -> Result<Call> {
        self.send(self.request(Method::GET, &format!("/call/{id}")))
            .await
            .inspect_err(|e| error!("Failed to get call details for {id}: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::assistant::{AssistantForm, generate_config};
    use crate::backend::vapi::stub::serve_once;
    use reqwest::StatusCode;
    use serde_json::json;

    fn client_for(base_url: &str) -> VapiClient {
        let settings = Settings {
            api_key: Some("sk_test".to_string()),
            base_url: base_url.to_string(),
            ..Settings::default()
        };
        VapiClient::new(&settings).unwrap()
    }

    #[test]
    fn missing_key_is_reported_before_any_request() {
        let err = VapiClient::new(&Settings::default()).err().unwrap();
        assert!(matches!(err, VapiError::MissingApiKey));
    }

    #[test]
    fn trailing_slash_is_dropped_from_base_url() {
        assert_eq!(
            client_for("https://api.vapi.ai/").base_url(),
            "https://api.vapi.ai"
        );
    }

    #[tokio::test]
    async fn create_posts_config_with_bearer_key() {
        let server = serve_once(201, r#"{"id":"asst_123","name":"Onboarding"}"#).await;
        let form = AssistantForm {
            name: "Onboarding".to_string(),
            prompt: "Ask about onboarding".to_string(),
            voice: "rachel".to_string(),
            first_message: "Hello".to_string(),
            webhook: "https://hooks.test/vapi".to_string(),
        };
        let config = generate_config(&form);

        let assistant = client_for(&server.base_url)
            .create_assistant(&config)
            .await
            .unwrap();
        assert_eq!(assistant.id, "asst_123");

        let request = server.request().await;
        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/assistant");
        assert_eq!(request.header("authorization"), Some("Bearer sk_test"));
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.json(), serde_json::to_value(&config).unwrap());
    }

    #[tokio::test]
    async fn error_status_keeps_response_body() {
        let server = serve_once(401, r#"{"message":"Invalid Key"}"#).await;
        let err = client_for(&server.base_url)
            .get_assistant("asst_1")
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
        match err {
            VapiError::Status { body, .. } => assert!(body.contains("Invalid Key")),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(server.request().await.path, "/assistant/asst_1");
    }

    #[tokio::test]
    async fn response_without_id_is_a_decode_error() {
        let server = serve_once(201, r#"{"name":"nameless"}"#).await;
        let config = generate_config(&AssistantForm::default());
        let err = client_for(&server.base_url)
            .create_assistant(&config)
            .await
            .unwrap_err();
        assert!(matches!(err, VapiError::Decode(_)));
    }

    #[tokio::test]
    async fn update_sends_patch_with_partial_body() {
        let server = serve_once(
            200,
            r#"{"id":"asst_1","serverUrl":"https://hooks.test/vapi"}"#,
        )
        .await;
        let update = AssistantUpdate {
            server_url: Some("https://hooks.test/vapi".to_string()),
            ..AssistantUpdate::default()
        };

        let assistant = client_for(&server.base_url)
            .update_assistant("asst_1", &update)
            .await
            .unwrap();
        assert_eq!(assistant.server_url.as_deref(), Some("https://hooks.test/vapi"));

        let request = server.request().await;
        assert_eq!(request.method, "PATCH");
        assert_eq!(request.path, "/assistant/asst_1");
        assert_eq!(request.json(), json!({ "serverUrl": "https://hooks.test/vapi" }));
    }

    #[tokio::test]
    async fn delete_accepts_empty_body() {
        let server = serve_once(200, "").await;
        client_for(&server.base_url)
            .delete_assistant("asst_9")
            .await
            .unwrap();

        let request = server.request().await;
        assert_eq!(request.method, "DELETE");
        assert_eq!(request.path, "/assistant/asst_9");
    }

    #[tokio::test]
    async fn list_and_call_lookups_hit_their_paths() {
        let server = serve_once(200, r#"[{"id":"a"},{"id":"b","name":"Second"}]"#).await;
        let assistants = client_for(&server.base_url)
            .list_assistants()
            .await
            .unwrap();
        assert_eq!(assistants.len(), 2);
        assert_eq!(assistants[1].name.as_deref(), Some("Second"));
        assert_eq!(server.request().await.path, "/assistant");

        let server = serve_once(
            200,
            r#"{"id":"call_1","status":"ended","assistantId":"a","endedReason":"hangup"}"#,
        )
        .await;
        let call = client_for(&server.base_url).get_call("call_1").await.unwrap();
        assert_eq!(call.status.as_deref(), Some("ended"));
        assert_eq!(call.assistant_id.as_deref(), Some("a"));
        assert_eq!(server.request().await.path, "/call/call_1");
    }
}
