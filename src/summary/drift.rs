//! Drift detection.
//!
//! Drift is what changed outside of the tool between the last run and the
//! refresh. A drift observation that classifies as a create, update, or delete
//! means the plan may be stale even when it claims no changes. Warnings are a
//! side channel; drift never feeds into the published tally.

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::plan::ResourceInstanceChange;
use crate::reporter::Reporter;

use super::tally::{record_change, AccountTally};

/// A drift observation that would alter the counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriftWarning {
    /// Account label.
    pub account: String,
    /// Position of the observation in the drift list.
    pub index: usize,
    /// Resource address of the observation.
    pub address: String,
}

/// Scans drift observations for an account.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriftDetector;

impl DriftDetector {
    /// Creates a new drift detector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Scans an account's drift and reports every observation with an effect.
    ///
    /// The working tally is reset after each warning, so each drifting
    /// observation is reported on its own rather than batched per account.
    ///
    /// # Errors
    ///
    /// Returns an error if an observation's action is not recognized.
    pub fn detect(
        &self,
        account: &str,
        drift: &[ResourceInstanceChange],
        reporter: &dyn Reporter,
    ) -> Result<Vec<DriftWarning>> {
        let mut working = AccountTally::new(account);
        let mut warnings = Vec::new();

        for (index, observation) in drift.iter().enumerate() {
            record_change(&mut working, observation, reporter)?;

            if working.has_changes() {
                debug!("Drift on {} ({:?})", observation.addr, working);
                reporter.warn(&format!("{account} had drift, might not result in change"));
                warnings.push(DriftWarning {
                    account: account.to_string(),
                    index,
                    address: observation.addr.clone(),
                });
                working.reset();
            }
        }

        Ok(warnings)
    }
}
