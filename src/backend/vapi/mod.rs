//! Client for the Vapi REST API.

pub mod client;
pub mod error;
#[cfg(test)]
pub mod stub;

pub use client::VapiClient;
pub use error::VapiError;
