//! Assistant creation form.

use crate::backend::Communicator;
use crate::backend::assistant::prompts::{
    DEFAULT_ASSISTANT_NAME, DEFAULT_FIRST_MESSAGE, DEFAULT_SYSTEM_PROMPT,
};
use crate::backend::assistant::{Assistant, AssistantForm};
use crate::backend::cli::created_message;
use crate::frontend::app::settings;
use dioxus::prelude::*;
use log::error;

#[derive(Clone, PartialEq, Debug)]
enum SubmitStatus {
    Idle,
    Created(String),
    Failed(String),
}

#[component]
pub fn AssistantFormView(on_created: EventHandler<Assistant>) -> Element {
    let defaults = use_hook(settings);

    let mut name = use_signal(|| DEFAULT_ASSISTANT_NAME.to_string());
    let mut prompt = use_signal(|| DEFAULT_SYSTEM_PROMPT.to_string());
    let mut voice = use_signal(|| defaults.default_voice_id.clone().unwrap_or_default());
    let mut first_msg = use_signal(|| DEFAULT_FIRST_MESSAGE.to_string());
    let mut webhook = use_signal(|| defaults.default_server_url.clone().unwrap_or_default());
    let mut status = use_signal(|| SubmitStatus::Idle);
    let mut submitting = use_signal(|| false);

    let handle_create = move |_: Event<MouseData>| {
        if submitting() {
            return;
        }

        let form = AssistantForm {
            name: name(),
            prompt: prompt(),
            voice: voice(),
            first_message: first_msg(),
            webhook: webhook(),
        };
        submitting.set(true);
        status.set(SubmitStatus::Idle);

        spawn(async move {
            let result = match Communicator::from_settings(&settings()) {
                Ok(communicator) => communicator.create_from_form(&form).await,
                Err(e) => Err(e),
            };

            match result {
                Ok(assistant) => {
                    status.set(SubmitStatus::Created(created_message(&assistant)));
                    on_created.call(assistant);
                }
                Err(e) => {
                    error!("Failed to create assistant: {e:#}");
                    status.set(SubmitStatus::Failed(format!("{e:#}")));
                }
            }
            submitting.set(false);
        });
    };

    let (status_class, status_text) = match status() {
        SubmitStatus::Idle => ("status", String::new()),
        SubmitStatus::Created(message) => ("status status-ok", message),
        SubmitStatus::Failed(message) => ("status status-error", message),
    };

    rsx! {
        div {
            class: "assistant-form",

            div {
                class: "field",
                label { r#for: "name", "Name" }
                input {
                    id: "name",
                    r#type: "text",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
            }

            div {
                class: "field",
                label { r#for: "prompt", "System prompt" }
                textarea {
                    id: "prompt",
                    rows: "10",
                    value: "{prompt}",
                    oninput: move |e| prompt.set(e.value()),
                }
            }

            div {
                class: "field",
                label { r#for: "voice", "Voice ID (11labs)" }
                input {
                    id: "voice",
                    r#type: "text",
                    value: "{voice}",
                    oninput: move |e| voice.set(e.value()),
                }
            }

            div {
                class: "field",
                label { r#for: "firstMsg", "First message" }
                input {
                    id: "firstMsg",
                    r#type: "text",
                    value: "{first_msg}",
                    oninput: move |e| first_msg.set(e.value()),
                }
            }

            div {
                class: "field",
                label { r#for: "webhook", "Server URL" }
                input {
                    id: "webhook",
                    r#type: "url",
                    value: "{webhook}",
                    oninput: move |e| webhook.set(e.value()),
                }
            }

            button {
                class: "create-button",
                r#type: "button",
                disabled: submitting(),
                onclick: handle_create,
                if submitting() { "Creating..." } else { "Create assistant" }
            }

            p { class: "{status_class}", "{status_text}" }
        }
    }
}
