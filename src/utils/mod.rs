//! Custom utilities.

pub mod logging;
pub mod paths;
