//! Per-account tallies and the aggregation pass.

use serde::Serialize;

use crate::error::Result;
use crate::plan::ResourceInstanceChange;
use crate::reporter::Reporter;

use super::classifier::{classify_raw, Action, Effect};

/// Create/update/delete counters for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountTally {
    /// Account label, `<business-unit>/<account>`.
    pub account: String,
    /// Resources to create.
    pub create: usize,
    /// Resources to update in place.
    pub update: usize,
    /// Resources to destroy.
    pub delete: usize,
}

impl AccountTally {
    /// Creates a zeroed tally for an account.
    #[must_use]
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            create: 0,
            update: 0,
            delete: 0,
        }
    }

    /// Creates a tally with the given counts.
    #[must_use]
    pub fn with_counts(account: impl Into<String>, create: usize, update: usize, delete: usize) -> Self {
        Self {
            account: account.into(),
            create,
            update,
            delete,
        }
    }

    /// Applies one classified effect.
    pub const fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Create => self.create += 1,
            Effect::Update => self.update += 1,
            Effect::Delete => self.delete += 1,
        }
    }

    /// Returns true if any counter is nonzero.
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.create > 0 || self.update > 0 || self.delete > 0
    }

    /// Returns the sum of all counters.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.create + self.update + self.delete
    }

    /// Zeroes all counters, keeping the account label.
    pub const fn reset(&mut self) {
        self.create = 0;
        self.update = 0;
        self.delete = 0;
    }
}

/// Classifies one change, reports partial representations, and returns the action.
///
/// # Errors
///
/// Returns an error if the change's action is not recognized.
pub fn record_change(
    tally: &mut AccountTally,
    change: &ResourceInstanceChange,
    reporter: &dyn Reporter,
) -> Result<Action> {
    let (action, effect) = classify_raw(change.raw_action())?;

    if action.is_partially_represented() {
        reporter.warn(&format!(
            "{action} action encountered for {}, this is not supported in the summary",
            change.addr
        ));
    }

    tally.apply(effect);
    Ok(action)
}

/// Folds a sequence of changes into a tally.
///
/// Every change is visited exactly once. The first unrecognized action aborts
/// the pass.
///
/// # Errors
///
/// Returns an error if any change's action is not recognized.
pub fn record_changes(
    tally: &mut AccountTally,
    changes: &[ResourceInstanceChange],
    reporter: &dyn Reporter,
) -> Result<()> {
    for change in changes {
        record_change(tally, change, reporter)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ClassifyError, SummaryError};
    use crate::reporter::RecordingReporter;
    use proptest::prelude::*;

    fn changes(actions: &[i32]) -> Vec<ResourceInstanceChange> {
        actions
            .iter()
            .enumerate()
            .map(|(i, a)| ResourceInstanceChange::new(format!("null_resource.r{i}"), *a))
            .collect()
    }

    #[test]
    fn test_record_changes_counts_each_kind() {
        let reporter = RecordingReporter::new();
        let mut tally = AccountTally::new("bu1/acct1");

        record_changes(&mut tally, &changes(&[1, 1, 1, 3, 0]), &reporter).expect("record failed");

        assert_eq!(tally, AccountTally::with_counts("bu1/acct1", 3, 1, 0));
        assert!(reporter.warnings().is_empty());
    }

    #[test]
    fn test_delete_and_replace_count_as_one_delete() {
        let reporter = RecordingReporter::new();

        for action in [5, 6] {
            let mut tally = AccountTally::new("bu/a");
            record_changes(&mut tally, &changes(&[action]), &reporter).expect("record failed");
            assert_eq!(tally, AccountTally::with_counts("bu/a", 0, 0, 1));
        }
    }

    #[test]
    fn test_create_then_delete_warns_and_counts_delete() {
        let reporter = RecordingReporter::new();
        let mut tally = AccountTally::new("bu/a");

        record_changes(&mut tally, &changes(&[7]), &reporter).expect("record failed");

        assert_eq!(tally.delete, 1);
        assert_eq!(tally.create, 0);
        let warnings = reporter.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("CREATE_THEN_DELETE"));
    }

    #[test]
    fn test_unrecognized_action_aborts() {
        let reporter = RecordingReporter::new();
        let mut tally = AccountTally::new("bu/a");

        let result = record_changes(&mut tally, &changes(&[1, 42, 1]), &reporter);

        assert!(matches!(
            result,
            Err(SummaryError::Classify(ClassifyError::UnrecognizedAction { value: 42 }))
        ));
        // Fatal errors are reported once, by whoever ends the run.
        assert!(reporter.messages(tracing::Level::ERROR).is_empty());
    }

    #[test]
    fn test_missing_change_reads_as_noop() {
        let reporter = RecordingReporter::new();
        let mut tally = AccountTally::new("bu/a");
        let change = ResourceInstanceChange {
            provider: String::new(),
            change: None,
            addr: String::from("aws_vpc.main"),
        };

        let action = record_change(&mut tally, &change, &reporter).expect("record failed");
        assert_eq!(action, Action::NoOp);
        assert!(!tally.has_changes());
    }

    #[test]
    fn test_reset_keeps_account() {
        let mut tally = AccountTally::with_counts("bu/a", 1, 2, 3);
        assert_eq!(tally.total(), 6);
        tally.reset();
        assert_eq!(tally, AccountTally::new("bu/a"));
    }

    proptest! {
        /// Property: the counters add up to the number of non-NOOP changes.
        #[test]
        fn prop_total_matches_non_noop_changes(
            actions in proptest::collection::vec(prop::sample::select(vec![0, 1, 3, 5, 6, 7]), 0..64),
        ) {
            let reporter = RecordingReporter::new();
            let mut tally = AccountTally::new("bu/a");

            record_changes(&mut tally, &changes(&actions), &reporter).expect("record failed");

            let expected = actions.iter().filter(|a| **a != 0).count();
            prop_assert_eq!(tally.total(), expected);
        }

        /// Property: order of application does not change the tally.
        #[test]
        fn prop_order_independent(
            actions in proptest::collection::vec(prop::sample::select(vec![0, 1, 3, 5, 6, 7]), 0..32),
        ) {
            let reporter = RecordingReporter::new();
            let mut forward = AccountTally::new("bu/a");
            let mut backward = AccountTally::new("bu/a");
            let reversed: Vec<i32> = actions.iter().rev().copied().collect();

            record_changes(&mut forward, &changes(&actions), &reporter).expect("record failed");
            record_changes(&mut backward, &changes(&reversed), &reporter).expect("record failed");

            prop_assert_eq!(forward, backward);
        }
    }
}
