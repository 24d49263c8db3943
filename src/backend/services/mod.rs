//! Core services.

pub mod history;

pub use history::{AssistantHistory, AssistantRecord};
