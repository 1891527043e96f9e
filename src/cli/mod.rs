//! CLI module for the plan summary tool.
//!
//! This module provides the command-line interface and output selection.

mod commands;
mod output;

pub use commands::{Cli, OutputFormat};
pub use output::OutputFormatter;
