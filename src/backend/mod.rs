//! Backend of the application.

pub mod assistant;
pub mod cli;
pub mod communicator;
pub mod services;
pub mod settings;
pub mod vapi;

pub use communicator::Communicator;
