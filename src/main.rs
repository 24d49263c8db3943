mod backend;
mod frontend;
mod utils;

use crate::backend::cli::{self, Cli};
use crate::backend::settings::Settings;
use crate::backend::vapi::VapiError;
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use log::error;

fn main() {
    utils::logging::init_from_env();

    let cli = Cli::parse();

    // CLI mode
    if cli.command.is_some() {
        std::process::exit(run_cli(cli));
    }

    // UI mode
    let settings = cli.apply(Settings::load_or_default());
    frontend::app::init_settings(settings);

    let config = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("Voice SOP")
                .with_inner_size(LogicalSize::new(720.0, 900.0))
                .with_min_inner_size(LogicalSize::new(560.0, 640.0)),
        )
        .with_menu(None);

    LaunchBuilder::new()
        .with_cfg(config)
        .launch(frontend::app::App);
}

/// Run a subcommand on its own runtime and return the process exit code.
fn run_cli(cli: Cli) -> i32 {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create runtime: {e}");
            return 1;
        }
    };

    let result = runtime.block_on(cli::run(cli, Settings::load_or_default()));

    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let status = e.downcast_ref::<VapiError>().and_then(VapiError::status);
            if status == Some(reqwest::StatusCode::UNAUTHORIZED) {
                eprintln!("Check that VAPI_API_KEY holds your private API key");
            }
            1
        }
    }
}
