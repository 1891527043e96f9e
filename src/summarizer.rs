//! Per-artifact summary pipeline.
//!
//! Decodes each plan file, folds its proposed changes into the account tally,
//! and scans its drift for stale-plan warnings. One bad artifact fails the
//! whole run.

use std::path::Path;

use tracing::debug;

use crate::discovery::PlanArtifact;
use crate::error::Result;
use crate::plan::PlanDecoder;
use crate::reporter::Reporter;
use crate::summary::{record_change, AccountTally, Action, DriftDetector, DriftWarning};

/// Summary of one account's plan.
#[derive(Debug, Clone)]
pub struct AccountSummary {
    /// Counters for the proposed changes.
    pub tally: AccountTally,
    /// Drift observations that would alter the counts.
    pub drift_warnings: Vec<DriftWarning>,
    /// Resource address and action of every proposed change that is not a no-op.
    pub changes: Vec<(String, Action)>,
}

/// Runs the summary pipeline over plan files.
pub struct Summarizer<'a> {
    /// Plan file decoder.
    decoder: PlanDecoder,
    /// Drift detector.
    drift_detector: DriftDetector,
    /// Where warnings and errors go.
    reporter: &'a dyn Reporter,
}

impl<'a> Summarizer<'a> {
    /// Creates a summarizer reporting through `reporter`.
    #[must_use]
    pub fn new(reporter: &'a dyn Reporter) -> Self {
        Self {
            decoder: PlanDecoder::new(),
            drift_detector: DriftDetector::new(),
            reporter,
        }
    }

    /// Sets the plan file decoder.
    #[must_use]
    pub fn with_decoder(mut self, decoder: PlanDecoder) -> Self {
        self.decoder = decoder;
        self
    }

    /// Summarizes every artifact, in order.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error; no partial results are returned.
    pub fn summarize(&self, artifacts: &[PlanArtifact]) -> Result<Vec<AccountSummary>> {
        let mut summaries = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            summaries.push(self.summarize_artifact(&artifact.path, &artifact.account)?);
        }
        self.reporter
            .info(&format!("Summarized {} accounts", summaries.len()));
        Ok(summaries)
    }

    /// Summarizes a single plan file for an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the plan cannot be decoded or holds an unknown action.
    pub fn summarize_artifact(&self, path: &Path, account: &str) -> Result<AccountSummary> {
        debug!("Summarizing {account} from {}", path.display());

        let plan = self.decoder.decode_file(path)?;

        let mut tally = AccountTally::new(account);
        let mut changes = Vec::new();
        for change in &plan.resource_changes {
            let action = record_change(&mut tally, change, self.reporter)?;
            if action != Action::NoOp {
                changes.push((change.addr.clone(), action));
            }
        }

        let drift_warnings = self
            .drift_detector
            .detect(account, &plan.resource_drift, self.reporter)?;

        Ok(AccountSummary {
            tally,
            drift_warnings,
            changes,
        })
    }
}
