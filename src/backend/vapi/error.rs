//! Vapi API errors.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VapiError {
    #[error("VAPI_API_KEY is not set")]
    MissingApiKey,

    #[error("VAPI request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("VAPI API error {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Unexpected VAPI response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl VapiError {
    /// HTTP status of an error response, if the server answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, VapiError>;
