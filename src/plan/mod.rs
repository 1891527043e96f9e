//! Plan file decoding.
//!
//! This module unwraps plan files and exposes the decoded plan message.

mod decoder;
mod proto;

#[cfg(test)]
pub(crate) mod fixtures;

pub use decoder::{PlanDecoder, PLAN_ENTRY_NAME, SUPPORTED_PLAN_VERSION};
pub use proto::{Change, Deferred, DeferredResourceInstanceChange, Plan, ResourceInstanceChange};
