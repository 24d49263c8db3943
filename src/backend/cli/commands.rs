use super::args::{Cli, Command, SettingsArgs, SettingsCommand};
use crate::backend::Communicator;
use crate::backend::assistant::Assistant;
use crate::backend::services::AssistantHistory;
use crate::backend::settings::Settings;
use crate::utils::paths::get_settings_path;
use anyhow::{Context, Result};
use std::path::Path;

/// Run one headless subcommand.
pub async fn run(cli: Cli, settings: Settings) -> Result<()> {
    let settings = cli.apply(settings);
    let Some(command) = cli.command else {
        anyhow::bail!("No subcommand given");
    };

    match command {
        Command::Render(args) => {
            let config = args.into_request(&settings).into_config();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Command::Create(args) => {
            let config = args.into_request(&settings).into_config();
            let assistant = Communicator::from_settings(&settings)?
                .create(&config)
                .await?;
            println!("{}", created_message(&assistant));
        }
        Command::Get { id } => {
            let assistant = Communicator::from_settings(&settings)?.get(&id).await?;
            println!("{}", serde_json::to_string_pretty(&assistant)?);
        }
        Command::List => {
            let assistants = Communicator::from_settings(&settings)?.list().await?;
            if assistants.is_empty() {
                println!("No assistants found");
            }
            for assistant in &assistants {
                println!("{}", list_line(assistant));
            }
        }
        Command::Update(args) => {
            let update = args.to_update();
            let assistant = Communicator::from_settings(&settings)?
                .update(&args.id, &update)
                .await?;
            println!("Assistant {} updated", assistant.id);
            if let Some(url) = &assistant.server_url {
                println!("Server URL: {url}");
            }
            if update.model.is_some()
                && let Some(prompt) = assistant.system_prompt()
            {
                println!("System prompt: {}", preview(prompt, 100));
            }
        }
        Command::Delete { id } => {
            Communicator::from_settings(&settings)?.delete(&id).await?;
            println!("Assistant {id} deleted");
        }
        Command::Call { id } => {
            let call = Communicator::from_settings(&settings)?.call(&id).await?;
            println!("{}", serde_json::to_string_pretty(&call)?);
        }
        Command::History => {
            let records = AssistantHistory::open()?.sorted();
            if records.is_empty() {
                println!("No assistants created yet");
            }
            for record in records {
                println!(
                    "{}  {}  {}",
                    record.created_at.format("%Y-%m-%d %H:%M"),
                    record.id,
                    record.name.as_deref().unwrap_or("-")
                );
            }
        }
        Command::Settings(SettingsCommand::Show) => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
            let key = if settings.api_key.is_some() { "set" } else { "not set" };
            println!("API key: {key}");
        }
        Command::Settings(SettingsCommand::Set(changes)) => {
            let path = get_settings_path()?;
            save_settings(&path, changes)?;
            println!("Settings saved to {}", path.display());
        }
    }

    Ok(())
}

/// Merge `changes` into the file at `path`. An unusable file is replaced.
fn save_settings(path: &Path, changes: SettingsArgs) -> Result<Settings> {
    let saved = changes.apply_to(Settings::load_file_or_default(path));
    saved.save_file(path).context("Could not save settings")?;
    Ok(saved)
}

pub fn created_message(assistant: &Assistant) -> String {
    format!("Assistant created! ID: {}", assistant.id)
}

/// First `max` characters of `text`, with an ellipsis when cut.
fn preview(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{cut}...")
}

fn list_line(assistant: &Assistant) -> String {
    format!(
        "{}  {}",
        assistant.id,
        assistant.name.as_deref().unwrap_or("(unnamed)")
    )
}
