//! Recently created assistants.

use crate::backend::services::AssistantRecord;
use dioxus::prelude::*;

#[component]
pub fn RecentAssistants(records: Vec<AssistantRecord>) -> Element {
    if records.is_empty() {
        return rsx! {
            p { class: "muted", "No assistants created yet" }
        };
    }

    let rows: Vec<(String, String, String)> = records
        .iter()
        .map(|record| {
            (
                record.id.clone(),
                record.name.clone().unwrap_or_else(|| "(unnamed)".to_string()),
                record.created_at.format("%Y-%m-%d %H:%M").to_string(),
            )
        })
        .collect();

    rsx! {
        ul {
            class: "recent",
            for (id, name, created) in rows {
                li {
                    key: "{id}",
                    span { class: "recent-name", "{name}" }
                    code { class: "recent-id", "{id}" }
                    span { class: "muted", "{created}" }
                }
            }
        }
    }
}
