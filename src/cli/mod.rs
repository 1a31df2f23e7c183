//! CLI command handling module
//!
//! Handles subcommand dispatch, output formatting, and logging setup.

mod commands;
mod logging;

pub use commands::{OutputFormat, handle_generate, handle_route};
pub use logging::init_logging;
