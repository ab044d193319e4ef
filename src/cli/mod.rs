//! CLI command handling module
//!
//! Handles all CLI subcommands; argument parsing lives in the binary.

mod commands;
mod logging;
mod version;

pub use commands::{Command, ConfigSubcommand, execute, handle_config_command};
pub use logging::init_logging;
pub use version::display_version;
