//! Error types for the plan summary tool.
//!
//! Every fatal condition is an explicit value here. Nothing in the library
//! terminates the process; the binary maps [`SummaryError`] to an exit code.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the plan summary tool.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Plan file decoding errors.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Action classification errors.
    #[error("Classification error: {0}")]
    Classify(#[from] ClassifyError),

    /// Plan file discovery errors.
    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    /// IO errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while unwrapping and validating a plan file.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file is not a readable zip archive.
    #[error("{path} is not a valid ZIP file: {message}")]
    MalformedContainer {
        /// Path to the offending file.
        path: PathBuf,
        /// Description of the archive error.
        message: String,
    },

    /// The archive has no entry holding the plan message.
    #[error("{path} has no '{entry}' entry")]
    MissingPlanEntry {
        /// Path to the archive.
        path: PathBuf,
        /// Name of the expected entry.
        entry: String,
    },

    /// The entry bytes are not a valid plan message.
    #[error("Failed to decode plan message: {message}")]
    InvalidMessage {
        /// Description of the protobuf error.
        message: String,
    },

    /// The plan was written with an unsupported format version.
    #[error("Unsupported plan version {found}. Expected version {expected}")]
    UnsupportedVersion {
        /// Version found in the plan.
        found: u64,
        /// The only supported version.
        expected: u64,
    },

    /// The plan contains deferred changes.
    #[error("{count} deferred changes found in the plan. Don't know what to do")]
    UnsupportedFeature {
        /// Number of deferred changes.
        count: usize,
    },
}

/// Errors raised while classifying actions.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The action value is outside the known enumeration.
    #[error("Unknown action: {value}")]
    UnrecognizedAction {
        /// Raw wire value of the action.
        value: i32,
    },
}

/// Errors raised while looking for plan files.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The accounts directory does not exist.
    #[error("Directory {path} does not exist, not in base of repository")]
    RootNotFound {
        /// The missing directory.
        path: PathBuf,
    },

    /// More than one plan file was found for one account.
    #[error("More plan files than one in account {account}: {count} found")]
    MultiplePlanFiles {
        /// Account label.
        account: String,
        /// Number of matching files.
        count: usize,
    },

    /// Directory traversal failed.
    #[error("Failed to walk {path}: {message}")]
    Walk {
        /// Directory being walked.
        path: PathBuf,
        /// Description of the traversal error.
        message: String,
    },
}

/// Result type alias for plan summary operations.
pub type Result<T> = std::result::Result<T, SummaryError>;

impl SummaryError {
    /// Returns the process exit code for this error.
    ///
    /// Each fatal condition gets its own status so callers can tell them apart.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Io(_) | Self::Serialization(_) => 1,
            Self::Discovery(DiscoveryError::RootNotFound { .. } | DiscoveryError::Walk { .. }) => 2,
            Self::Discovery(DiscoveryError::MultiplePlanFiles { .. }) => 3,
            Self::Decode(
                DecodeError::MalformedContainer { .. }
                | DecodeError::MissingPlanEntry { .. }
                | DecodeError::InvalidMessage { .. },
            ) => 4,
            Self::Decode(DecodeError::UnsupportedVersion { .. }) => 5,
            Self::Decode(DecodeError::UnsupportedFeature { .. }) => 6,
            Self::Classify(ClassifyError::UnrecognizedAction { .. }) => 7,
        }
    }
}

impl DecodeError {
    /// Creates a malformed container error.
    #[must_use]
    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::MalformedContainer {
            path: path.into(),
            message: message.into(),
        }
    }
}
