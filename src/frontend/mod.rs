//! Desktop form for creating assistants.

pub mod app;
pub mod components;
pub mod styles;
