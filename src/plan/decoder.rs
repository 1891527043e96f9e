//! Plan file decoder.
//!
//! A plan file is a zip archive. The plan message lives in a single entry,
//! next to state snapshots and configuration that are not read here.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use prost::Message;
use tracing::debug;
use zip::result::ZipError;

use crate::error::{DecodeError, Result};

use super::proto::Plan;

/// Name of the archive entry holding the plan message.
pub const PLAN_ENTRY_NAME: &str = "tfplan";

/// The only plan format version this tool understands.
pub const SUPPORTED_PLAN_VERSION: u64 = 3;

/// Decoder for plan files.
#[derive(Debug, Clone)]
pub struct PlanDecoder {
    /// Archive entry to read.
    entry_name: String,
}

impl Default for PlanDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanDecoder {
    /// Creates a decoder reading the standard plan entry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entry_name: PLAN_ENTRY_NAME.to_string(),
        }
    }

    /// Sets the archive entry to read.
    #[must_use]
    pub fn with_entry_name(mut self, entry_name: impl Into<String>) -> Self {
        self.entry_name = entry_name.into();
        self
    }

    /// Returns the archive entry this decoder reads.
    #[must_use]
    pub fn entry_name(&self) -> &str {
        &self.entry_name
    }

    /// Decodes and validates the plan stored in a plan file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is not a zip archive, has no plan entry,
    /// holds an invalid message, or fails validation.
    pub fn decode_file(&self, path: impl AsRef<Path>) -> Result<Plan> {
        let path = path.as_ref();
        debug!("Reading plan file: {}", path.display());

        let bytes = self.read_entry(path)?;
        Self::decode_bytes(&bytes)
    }

    /// Decodes and validates a raw plan message.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a plan message, the version is
    /// not supported, or the plan has deferred changes.
    pub fn decode_bytes(bytes: &[u8]) -> Result<Plan> {
        let plan = Plan::decode(bytes).map_err(|e| DecodeError::InvalidMessage {
            message: e.to_string(),
        })?;

        Self::validate(&plan)?;

        debug!(
            "Decoded plan (terraform {}, errored: {}): {} changes, {} drift",
            plan.terraform_version,
            plan.errored,
            plan.resource_changes.len(),
            plan.resource_drift.len()
        );
        Ok(plan)
    }

    /// Reads the plan entry out of the archive.
    fn read_entry(&self, path: &Path) -> Result<Vec<u8>> {
        let file = File::open(path).map_err(|e| DecodeError::malformed(path, e.to_string()))?;
        let mut archive =
            zip::ZipArchive::new(file).map_err(|e| DecodeError::malformed(path, e.to_string()))?;

        let mut entry = archive.by_name(&self.entry_name).map_err(|e| match e {
            ZipError::FileNotFound => DecodeError::MissingPlanEntry {
                path: path.to_path_buf(),
                entry: self.entry_name.clone(),
            },
            other => DecodeError::malformed(path, other.to_string()),
        })?;

        let mut bytes = Vec::new();
        entry
            .read_to_end(&mut bytes)
            .map_err(|e| DecodeError::malformed(path, e.to_string()))?;
        Ok(bytes)
    }

    /// Checks the version and the absence of deferred changes.
    fn validate(plan: &Plan) -> std::result::Result<(), DecodeError> {
        if plan.version != SUPPORTED_PLAN_VERSION {
            return Err(DecodeError::UnsupportedVersion {
                found: plan.version,
                expected: SUPPORTED_PLAN_VERSION,
            });
        }

        if !plan.deferred_changes.is_empty() {
            return Err(DecodeError::UnsupportedFeature {
                count: plan.deferred_changes.len(),
            });
        }

        Ok(())
    }
}
