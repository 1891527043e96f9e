//! tfplan-summary CLI entrypoint.
//!
//! Finds plan files, summarizes them per account, prints the text table, and
//! writes the markdown table.

use std::io::Write;
use std::process::ExitCode;

use tfplan_summary::cli::{Cli, OutputFormatter};
use tfplan_summary::discovery::discover;
use tfplan_summary::error::Result;
use tfplan_summary::plan::PlanDecoder;
use tfplan_summary::reporter::{Reporter, TracingReporter};
use tfplan_summary::summarizer::Summarizer;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Main entrypoint.
fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let reporter = TracingReporter;
    match run(&cli, &reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.error(&e.to_string());
            ExitCode::from(e.exit_code())
        }
    }
}

/// Initializes the logging system.
///
/// Logs go to stderr so stdout only carries the report.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs one summary over the accounts directory.
fn run(cli: &Cli, reporter: &dyn Reporter) -> Result<()> {
    let config = cli.to_config();
    reporter.info(&format!(
        "Looking for plan files named {} in {}",
        config.plan_file,
        config.accounts_dir.display()
    ));
    debug!("Settings: {config:?}");

    let artifacts = discover(&config.accounts_dir, &config.plan_file)?;

    let summaries = Summarizer::new(reporter)
        .with_decoder(PlanDecoder::new().with_entry_name(config.entry_name.clone()))
        .summarize(&artifacts)?;

    let formatter = OutputFormatter::new(cli.output, cli.detailed);
    let report = OutputFormatter::render(&summaries);

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", formatter.format_stdout(&summaries, &report)?)?;

    if summaries.is_empty() {
        reporter.info("No accounts planned");
    } else {
        std::fs::write(&config.summary_file, &report.markdown)?;
        reporter.info(&format!("Wrote summary to {}", config.summary_file.display()));
    }

    Ok(())
}
