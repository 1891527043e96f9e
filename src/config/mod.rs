//! Configuration for summary runs.
//!
//! Holds the settings a run needs: where to look for plan files, which
//! archive entry to read, and where to write the markdown summary.

mod settings;

pub use settings::{
    SummaryConfig, DEFAULT_ACCOUNTS_DIR, DEFAULT_PLAN_FILE, DEFAULT_SUMMARY_FILE,
};
