//! Root component.

use crate::backend::services::{AssistantHistory, AssistantRecord};
use crate::backend::settings::Settings;
use crate::frontend::components::{AssistantFormView, RecentAssistants};
use crate::frontend::styles::STYLES;
use dioxus::prelude::*;
use log::warn;
use std::sync::OnceLock;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Fix the settings the window works with. Later calls are ignored.
pub fn init_settings(settings: Settings) {
    let _ = SETTINGS.set(settings);
}

/// Settings given to [`init_settings`], or freshly loaded ones.
pub fn settings() -> Settings {
    SETTINGS
        .get_or_init(|| {
            Settings::load().unwrap_or_else(|e| {
                warn!("Failed to load settings, using defaults: {e:#}");
                Settings::default()
            })
        })
        .clone()
}

fn load_recent() -> Vec<AssistantRecord> {
    match AssistantHistory::open() {
        Ok(history) => history.sorted(),
        Err(e) => {
            warn!("History unavailable: {e:#}");
            Vec::new()
        }
    }
}

#[component]
pub fn App() -> Element {
    let mut recent = use_signal(load_recent);

    rsx! {
        style { "{STYLES}" }
        main {
            class: "page",
            h1 { "Create a voice assistant" }
            p {
                class: "muted",
                "Builds the Vapi assistant JSON from this form and sends it in one request."
            }
            AssistantFormView {
                on_created: move |_| recent.set(load_recent()),
            }
            h2 { "Recent assistants" }
            RecentAssistants { records: recent() }
        }
    }
}
