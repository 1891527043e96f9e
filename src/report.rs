//! Summary table rendering.
//!
//! Renders sorted account tallies as a markdown table and as a colorized
//! fixed-width text table. No I/O happens here.

use std::cmp::Ordering;
use std::fmt::Write;

use colored::{Color, Colorize};

use crate::summary::AccountTally;

/// Width of the account column.
const ACCOUNT_WIDTH: usize = 50;

/// Width of each counter column.
const COUNT_WIDTH: usize = 10;

/// Width of the rule under the text header.
const RULE_WIDTH: usize = 80;

/// Rendered summary in both output forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryReport {
    /// Markdown table, suitable for a pull request comment.
    pub markdown: String,
    /// Fixed-width text table with ANSI highlighting.
    pub text: String,
}

/// Formatter for account summaries.
#[derive(Debug, Default)]
pub struct ReportFormatter;

/// Orders tallies: most deletes first, then updates, then creates, then by name.
#[must_use]
pub fn compare_tallies(a: &AccountTally, b: &AccountTally) -> Ordering {
    b.delete
        .cmp(&a.delete)
        .then_with(|| b.update.cmp(&a.update))
        .then_with(|| b.create.cmp(&a.create))
        .then_with(|| a.account.cmp(&b.account))
}

/// Sorts tallies in report order.
pub fn sort_tallies(tallies: &mut [AccountTally]) {
    tallies.sort_by(compare_tallies);
}

impl ReportFormatter {
    /// Creates a new report formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Sorts the tallies and renders both tables.
    #[must_use]
    pub fn render(&self, tallies: &[AccountTally]) -> SummaryReport {
        let mut sorted = tallies.to_vec();
        sort_tallies(&mut sorted);

        SummaryReport {
            markdown: Self::format_markdown(&sorted),
            text: Self::format_text(&sorted),
        }
    }

    /// Renders tallies as a markdown table, in the given order.
    fn format_markdown(tallies: &[AccountTally]) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            "|{:<ACCOUNT_WIDTH$}|{:<COUNT_WIDTH$}|{:<COUNT_WIDTH$}|{:<COUNT_WIDTH$}|",
            "Account", "Add", "Change", "Destroy"
        );
        let rule = "-".repeat(5);
        let _ = writeln!(output, "|{rule}|{rule}|{rule}|{rule}|");

        for tally in tallies {
            let _ = writeln!(
                output,
                "|{:<ACCOUNT_WIDTH$}|{:<COUNT_WIDTH$}|{:<COUNT_WIDTH$}|{:<COUNT_WIDTH$}|",
                tally.account, tally.create, tally.update, tally.delete
            );
        }

        output
    }

    /// Renders tallies as colorized text, in the given order.
    fn format_text(tallies: &[AccountTally]) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            "{:<ACCOUNT_WIDTH$} {:<COUNT_WIDTH$} {:<COUNT_WIDTH$} {:<COUNT_WIDTH$}",
            "Account", "Add", "Change", "Destroy"
        );
        let _ = writeln!(output, "{}", "-".repeat(RULE_WIDTH).blue());

        for tally in tallies {
            let _ = writeln!(
                output,
                "{:<ACCOUNT_WIDTH$} {} {} {}",
                tally.account,
                Self::highlight_nonzero(tally.create, Color::Green),
                Self::highlight_nonzero(tally.update, Color::Yellow),
                Self::highlight_nonzero(tally.delete, Color::Red),
            );
        }

        output
    }

    /// Pads a counter and colors it when nonzero.
    fn highlight_nonzero(value: usize, color: Color) -> String {
        if value > 0 {
            format!("{:<COUNT_WIDTH$}", value.to_string().color(color))
        } else {
            format!("{value:<COUNT_WIDTH$}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn accounts(tallies: &[AccountTally]) -> Vec<&str> {
        tallies.iter().map(|t| t.account.as_str()).collect()
    }

    #[test]
    fn test_sort_delete_then_account() {
        let mut tallies = vec![
            AccountTally::with_counts("b", 0, 0, 2),
            AccountTally::with_counts("a", 0, 0, 2),
            AccountTally::with_counts("c", 0, 0, 1),
        ];
        sort_tallies(&mut tallies);
        assert_eq!(accounts(&tallies), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_keys_in_priority_order() {
        let mut tallies = vec![
            AccountTally::with_counts("create-heavy", 9, 0, 0),
            AccountTally::with_counts("update-heavy", 0, 5, 0),
            AccountTally::with_counts("one-delete", 0, 0, 1),
            AccountTally::with_counts("one-delete-more-updates", 0, 3, 1),
            AccountTally::with_counts("quiet", 0, 0, 0),
        ];
        sort_tallies(&mut tallies);
        assert_eq!(
            accounts(&tallies),
            vec!["one-delete-more-updates", "one-delete", "update-heavy", "create-heavy", "quiet"]
        );
    }

    #[test]
    fn test_markdown_layout() {
        let report = ReportFormatter::new().render(&[AccountTally::with_counts("bu1/acct1", 3, 1, 0)]);
        let lines: Vec<&str> = report.markdown.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            format!("|{:<50}|{:<10}|{:<10}|{:<10}|", "Account", "Add", "Change", "Destroy")
        );
        assert_eq!(lines[1], "|-----|-----|-----|-----|");
        assert_eq!(lines[2], format!("|{:<50}|{:<10}|{:<10}|{:<10}|", "bu1/acct1", 3, 1, 0));
        assert!(lines[2].starts_with("|bu1/acct1 "));
    }

    #[test]
    fn test_markdown_rows_are_sorted() {
        let report = ReportFormatter::new().render(&[
            AccountTally::with_counts("bu/quiet", 1, 0, 0),
            AccountTally::with_counts("bu/loud", 0, 0, 4),
        ]);
        let rows: Vec<&str> = report.markdown.lines().skip(2).collect();
        assert!(rows[0].starts_with("|bu/loud "));
        assert!(rows[1].starts_with("|bu/quiet "));
    }

    #[test]
    fn test_empty_report_has_headers_only() {
        let report = ReportFormatter::new().render(&[]);
        assert_eq!(report.markdown.lines().count(), 2);
        assert_eq!(report.text.lines().count(), 2);
    }

    #[test]
    fn test_text_highlights_nonzero_only() {
        colored::control::set_override(true);

        let report = ReportFormatter::new().render(&[AccountTally::with_counts("bu/a", 2, 0, 7)]);
        let row = report.text.lines().nth(2).expect("missing row");

        assert!(row.starts_with(&format!("{:<50} ", "bu/a")));
        assert!(row.contains(&format!("{:<10}", "2".green())));
        assert!(row.contains(&format!("{:<10}", "7".red())));
        assert!(row.contains(&format!(" {:<10} ", 0)));
        assert!(!row.contains("\u{1b}[33m"));
    }

    proptest! {
        /// Property: the ordering is total, so sorting is deterministic.
        #[test]
        fn prop_sort_independent_of_input_order(
            counts in proptest::collection::vec((0usize..3, 0usize..3, 0usize..3), 1..12),
        ) {
            let tallies: Vec<AccountTally> = counts
                .iter()
                .enumerate()
                .map(|(i, (c, u, d))| AccountTally::with_counts(format!("bu/acct{i}"), *c, *u, *d))
                .collect();
            let mut forward = tallies.clone();
            let mut backward: Vec<AccountTally> = tallies.into_iter().rev().collect();

            sort_tallies(&mut forward);
            sort_tallies(&mut backward);

            prop_assert_eq!(&forward, &backward);
            for pair in forward.windows(2) {
                prop_assert_eq!(compare_tallies(&pair[0], &pair[1]), Ordering::Less);
            }
        }
    }
}
