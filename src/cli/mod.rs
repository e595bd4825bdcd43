//! Command-line interface module
//!
//! Provides argument parsing and command execution.

pub mod args;
pub mod commands;

pub use args::{Args, exit_with_usage, parse_args};
pub use commands::execute;
