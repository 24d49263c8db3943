//! Headless command line mode.

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::{created_message, run};
