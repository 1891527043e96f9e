//! CLI argument definitions.
//!
//! This module defines the command-line arguments using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{
    SummaryConfig, DEFAULT_ACCOUNTS_DIR, DEFAULT_PLAN_FILE, DEFAULT_SUMMARY_FILE,
};
use crate::plan::PLAN_ENTRY_NAME;

/// Summarize binary Terraform plan files per account.
#[derive(Parser, Debug)]
#[command(name = "tfplan-summary")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Plan file name to look for in each account directory.
    #[arg(env = "TFPLAN_SUMMARY_PLAN_FILE", default_value = DEFAULT_PLAN_FILE)]
    pub plan_file: String,

    /// Directory holding `<business-unit>/<account>` directories.
    #[arg(long, env = "TFPLAN_SUMMARY_ACCOUNTS_DIR", default_value = DEFAULT_ACCOUNTS_DIR)]
    pub accounts_dir: PathBuf,

    /// Where to write the markdown summary.
    #[arg(long, env = "TFPLAN_SUMMARY_FILE", default_value = DEFAULT_SUMMARY_FILE)]
    pub summary_file: PathBuf,

    /// Archive entry holding the plan message.
    #[arg(long, default_value = PLAN_ENTRY_NAME)]
    pub entry: String,

    /// Output format (text, json).
    #[arg(long, default_value = "text")]
    pub output: OutputFormat,

    /// List every changed resource per account.
    #[arg(short, long)]
    pub detailed: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

impl Cli {
    /// Builds the run settings from the parsed arguments.
    #[must_use]
    pub fn to_config(&self) -> SummaryConfig {
        SummaryConfig::default()
            .with_plan_file(self.plan_file.clone())
            .with_accounts_dir(self.accounts_dir.clone())
            .with_entry_name(self.entry.clone())
            .with_summary_file(self.summary_file.clone())
    }
}
