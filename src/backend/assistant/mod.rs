//! Assistant configuration: form values in, Vapi JSON out.

pub mod models;
pub mod prompts;

pub use models::{
    Assistant, AssistantConfig, AssistantForm, AssistantRequest, AssistantUpdate, Call,
    ModelConfig, VoiceConfig, generate_config,
};
