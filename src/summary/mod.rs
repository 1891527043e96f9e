//! Change summaries.
//!
//! This module classifies plan actions, folds them into per-account tallies,
//! and flags drift that would change those tallies.

mod classifier;
mod drift;
mod tally;

pub use classifier::{classify, classify_raw, Action, Effect};
pub use drift::{DriftDetector, DriftWarning};
pub use tally::{record_change, record_changes, AccountTally};
