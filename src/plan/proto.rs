//! Protobuf messages for the plan file schema.
//!
//! Only the subset of `planfile.proto` needed for summaries is declared here;
//! prost skips every other field on decode. Field numbers match the upstream
//! schema, version 3.

use prost::Message;

/// Root message of a plan file.
#[derive(Clone, PartialEq, Message)]
pub struct Plan {
    /// Plan format version.
    #[prost(uint64, tag = "1")]
    pub version: u64,
    /// Proposed changes to managed resources.
    #[prost(message, repeated, tag = "3")]
    pub resource_changes: Vec<ResourceInstanceChange>,
    /// Version of the tool that wrote the plan.
    #[prost(string, tag = "14")]
    pub terraform_version: String,
    /// Changes detected between the prior and refreshed state.
    #[prost(message, repeated, tag = "18")]
    pub resource_drift: Vec<ResourceInstanceChange>,
    /// Whether planning stopped on an error.
    #[prost(bool, tag = "20")]
    pub errored: bool,
    /// Changes deferred to a later plan.
    #[prost(message, repeated, tag = "27")]
    pub deferred_changes: Vec<DeferredResourceInstanceChange>,
}

/// A change to a single resource instance.
#[derive(Clone, PartialEq, Message)]
pub struct ResourceInstanceChange {
    /// Provider configuration address.
    #[prost(string, tag = "8")]
    pub provider: String,
    /// The change itself.
    #[prost(message, optional, tag = "9")]
    pub change: Option<Change>,
    /// Absolute resource instance address.
    #[prost(string, tag = "13")]
    pub addr: String,
}

/// The action and values of a change.
#[derive(Clone, PartialEq, Message)]
pub struct Change {
    /// Raw action enumeration value.
    #[prost(int32, tag = "1")]
    pub action: i32,
}

/// A resource change that was deferred.
#[derive(Clone, PartialEq, Message)]
pub struct DeferredResourceInstanceChange {
    /// Why the change was deferred.
    #[prost(message, optional, tag = "1")]
    pub deferred: Option<Deferred>,
    /// The deferred change.
    #[prost(message, optional, tag = "2")]
    pub change: Option<ResourceInstanceChange>,
}

/// Deferral reason.
#[derive(Clone, PartialEq, Message)]
pub struct Deferred {
    /// Raw reason enumeration value.
    #[prost(int32, tag = "1")]
    pub reason: i32,
}

impl ResourceInstanceChange {
    /// Creates a change with the given address and raw action value.
    #[must_use]
    pub fn new(addr: impl Into<String>, action: i32) -> Self {
        Self {
            provider: String::new(),
            change: Some(Change { action }),
            addr: addr.into(),
        }
    }

    /// Returns the raw action value.
    ///
    /// An absent `change` reads as the protobuf default, `0`.
    #[must_use]
    pub fn raw_action(&self) -> i32 {
        self.change.as_ref().map_or(0, |c| c.action)
    }
}
