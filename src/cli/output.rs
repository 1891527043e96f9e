//! Output formatting for the CLI.
//!
//! Chooses between the text table and JSON for stdout, and appends the
//! per-resource listing when asked.

use colored::Colorize;
use serde::Serialize;
use std::fmt::Write;
use tabled::{Table, Tabled};

use crate::error::Result;
use crate::report::{sort_tallies, ReportFormatter, SummaryReport};
use crate::summarizer::AccountSummary;
use crate::summary::{AccountTally, Action, DriftWarning};

use super::commands::OutputFormat;

/// Output formatter for CLI.
#[derive(Debug)]
pub struct OutputFormatter {
    /// Output format.
    format: OutputFormat,
    /// Whether to list every changed resource.
    detailed: bool,
}

/// Changed resource row for table display.
#[derive(Tabled)]
struct ChangeRow {
    #[tabled(rename = "Account")]
    account: String,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Resource")]
    resource: String,
}

impl OutputFormatter {
    /// Creates a new output formatter.
    #[must_use]
    pub const fn new(format: OutputFormat, detailed: bool) -> Self {
        Self { format, detailed }
    }

    /// Renders the markdown and text tables for the summaries.
    #[must_use]
    pub fn render(summaries: &[AccountSummary]) -> SummaryReport {
        let tallies: Vec<AccountTally> = summaries.iter().map(|s| s.tally.clone()).collect();
        ReportFormatter::new().render(&tallies)
    }

    /// Formats what goes to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn format_stdout(&self, summaries: &[AccountSummary], report: &SummaryReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&SummaryJson::from(summaries))?),
            OutputFormat::Text => {
                let mut output = report.text.clone();
                if self.detailed {
                    output.push_str(&Self::format_changes(summaries));
                }
                Ok(output)
            }
        }
    }

    /// Formats every changed resource as a table.
    fn format_changes(summaries: &[AccountSummary]) -> String {
        let rows: Vec<ChangeRow> = summaries
            .iter()
            .flat_map(|s| {
                s.changes.iter().map(|(address, action)| ChangeRow {
                    account: s.tally.account.clone(),
                    action: Self::format_action(*action),
                    resource: address.clone(),
                })
            })
            .collect();

        if rows.is_empty() {
            return String::from("\nNo resource changes.\n");
        }

        let mut output = String::new();
        let _ = write!(output, "\n{}\n", Table::new(rows));
        output
    }

    /// Formats an action with color.
    fn format_action(action: Action) -> String {
        match action {
            Action::Create => "+create".green().to_string(),
            Action::Update => "~update".yellow().to_string(),
            Action::Delete => "-delete".red().to_string(),
            Action::DeleteThenCreate => "-/+replace".red().to_string(),
            Action::CreateThenDelete => "+/-replace".red().to_string(),
            Action::NoOp => "noop".dimmed().to_string(),
        }
    }
}

// JSON serialization helpers

#[derive(Serialize)]
struct SummaryJson {
    accounts: Vec<AccountJson>,
}

#[derive(Serialize)]
struct AccountJson {
    #[serde(flatten)]
    tally: AccountTally,
    drift_warnings: Vec<DriftWarning>,
}

impl From<&[AccountSummary]> for SummaryJson {
    fn from(summaries: &[AccountSummary]) -> Self {
        let mut tallies: Vec<AccountTally> = summaries.iter().map(|s| s.tally.clone()).collect();
        sort_tallies(&mut tallies);

        let accounts = tallies
            .into_iter()
            .map(|tally| {
                let drift_warnings = summaries
                    .iter()
                    .find(|s| s.tally.account == tally.account)
                    .map(|s| s.drift_warnings.clone())
                    .unwrap_or_default();
                AccountJson {
                    tally,
                    drift_warnings,
                }
            })
            .collect();

        Self { accounts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(account: &str, create: usize, update: usize, delete: usize) -> AccountSummary {
        AccountSummary {
            tally: AccountTally::with_counts(account, create, update, delete),
            drift_warnings: vec![],
            changes: vec![(format!("aws_instance.{}", account.replace('/', "_")), Action::Create)],
        }
    }

    #[test]
    fn test_json_output_is_sorted() {
        let summaries = vec![summary("bu/small", 1, 0, 0), summary("bu/big", 0, 0, 3)];
        let formatter = OutputFormatter::new(OutputFormat::Json, false);
        let report = OutputFormatter::render(&summaries);

        let json = formatter.format_stdout(&summaries, &report).expect("format failed");
        let value: serde_json::Value = serde_json::from_str(&json).expect("invalid json");

        assert_eq!(value["accounts"][0]["account"], "bu/big");
        assert_eq!(value["accounts"][0]["delete"], 3);
        assert_eq!(value["accounts"][1]["create"], 1);
        assert!(value["accounts"][1]["drift_warnings"].as_array().is_some_and(Vec::is_empty));
    }

    #[test]
    fn test_text_output_with_details() {
        let summaries = vec![summary("bu/a", 1, 0, 0)];
        let report = OutputFormatter::render(&summaries);

        let plain = OutputFormatter::new(OutputFormat::Text, false)
            .format_stdout(&summaries, &report)
            .expect("format failed");
        assert_eq!(plain, report.text);

        let detailed = OutputFormatter::new(OutputFormat::Text, true)
            .format_stdout(&summaries, &report)
            .expect("format failed");
        assert!(detailed.starts_with(&report.text));
        assert!(detailed.contains("aws_instance.bu_a"));
        assert!(detailed.contains("Resource"));
    }

    #[test]
    fn test_details_without_changes() {
        let mut quiet = summary("bu/a", 0, 0, 0);
        quiet.changes.clear();
        let summaries = vec![quiet];
        let report = OutputFormatter::render(&summaries);

        let detailed = OutputFormatter::new(OutputFormat::Text, true)
            .format_stdout(&summaries, &report)
            .expect("format failed");
        assert!(detailed.contains("No resource changes."));
    }
}
