//! Run settings.

use std::path::PathBuf;

use crate::plan::PLAN_ENTRY_NAME;

/// Default directory holding business units and accounts.
pub const DEFAULT_ACCOUNTS_DIR: &str = "accounts";

/// Default plan file name searched for in each account.
pub const DEFAULT_PLAN_FILE: &str = "tfplan.out";

/// Default path of the markdown summary.
pub const DEFAULT_SUMMARY_FILE: &str = "summary.md";

/// Settings for one summary run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryConfig {
    /// Directory holding `<business-unit>/<account>` directories.
    pub accounts_dir: PathBuf,
    /// Plan file name to look for.
    pub plan_file: String,
    /// Archive entry holding the plan message.
    pub entry_name: String,
    /// Where the markdown summary is written.
    pub summary_file: PathBuf,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            accounts_dir: PathBuf::from(DEFAULT_ACCOUNTS_DIR),
            plan_file: DEFAULT_PLAN_FILE.to_string(),
            entry_name: PLAN_ENTRY_NAME.to_string(),
            summary_file: PathBuf::from(DEFAULT_SUMMARY_FILE),
        }
    }
}

impl SummaryConfig {
    /// Sets the plan file name.
    #[must_use]
    pub fn with_plan_file(mut self, plan_file: impl Into<String>) -> Self {
        self.plan_file = plan_file.into();
        self
    }

    /// Sets the accounts directory.
    #[must_use]
    pub fn with_accounts_dir(mut self, accounts_dir: impl Into<PathBuf>) -> Self {
        self.accounts_dir = accounts_dir.into();
        self
    }

    /// Sets the archive entry name.
    #[must_use]
    pub fn with_entry_name(mut self, entry_name: impl Into<String>) -> Self {
        self.entry_name = entry_name.into();
        self
    }

    /// Sets the markdown summary path.
    #[must_use]
    pub fn with_summary_file(mut self, summary_file: impl Into<PathBuf>) -> Self {
        self.summary_file = summary_file.into();
        self
    }
}
