//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the warble binary.

mod check;
mod commands;
mod history;
mod run;

pub use check::handle_check;
pub use commands::{Cli, Commands, PlatformArg};
pub use history::handle_history;
pub use run::handle_run;
